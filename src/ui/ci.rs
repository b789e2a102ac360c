/// GitHub Actions workflow command, so failures show up on the run page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    fn command(&self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

pub fn is_github_actions(get_env: impl Fn(&str) -> Option<String>) -> bool {
    get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true")
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let props: Vec<String> = [("file", file), ("title", title)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", escape_property(v))))
        .collect();

    let props = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", level.command(), props, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
