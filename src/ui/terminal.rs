use std::io;

use is_terminal::IsTerminal;

/// What the attached terminal can show, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    /// Confirmation gates can only be answered from a terminal.
    pub stdin_is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TEAMCITY_VERSION",
];

const LOCALE_KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

pub fn detect_capabilities() -> TerminalCapabilities {
    probe(
        |key| std::env::var(key).ok(),
        io::stdout().is_terminal(),
        io::stdin().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

pub(crate) fn probe(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    stdin_is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let (width, height) = size.unwrap_or((80, 24));

    TerminalCapabilities {
        is_tty,
        stdin_is_tty,
        supports_color: is_tty && !dumb && get_env("NO_COLOR").is_none(),
        supports_unicode: !dumb && utf8_locale(&get_env),
        is_ci: CI_MARKERS.iter().any(|k| get_env(k).is_some()),
        width,
        height,
    }
}

/// The first locale variable that is set decides; none set counts as UTF-8.
fn utf8_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_KEYS
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .map(|v| {
            let v = v.to_ascii_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool, size: Option<(u16, u16)>) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        probe(|k| map.get(k).cloned(), is_tty, is_tty, size)
    }

    #[test]
    fn no_color_wins_over_a_capable_term() {
        let c = caps(
            &[("NO_COLOR", "1"), ("TERM", "xterm-256color")],
            true,
            Some((120, 40)),
        );
        assert!(!c.supports_color);
        assert_eq!((c.width, c.height), (120, 40));
    }

    #[test]
    fn ci_is_detected_from_markers() {
        assert!(caps(&[("GITLAB_CI", "true")], true, None).is_ci);
        assert!(!caps(&[("TERM", "xterm")], true, None).is_ci);
    }

    #[test]
    fn dumb_terminal_is_plain_ascii() {
        let c = caps(&[("TERM", "dumb")], true, None);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn piped_stdout_disables_color() {
        let c = caps(&[("TERM", "xterm-256color")], false, None);
        assert!(!c.supports_color);
        assert!(!c.stdin_is_tty);
        assert_eq!((c.width, c.height), (80, 24));
    }

    #[test]
    fn non_utf8_locale_falls_back_to_ascii() {
        assert!(!caps(&[("LANG", "C")], true, None).supports_unicode);
        assert!(caps(&[("LC_ALL", "en_US.UTF-8"), ("LANG", "C")], true, None).supports_unicode);
        assert!(caps(&[], true, None).supports_unicode);
    }
}
