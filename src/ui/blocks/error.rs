use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Remote output beyond this many lines is elided from the top.
const MAX_OUTPUT_LINES: usize = 12;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    location: Option<String>,
    output: Option<String>,
    fix: Option<String>,
    width: Option<u16>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            location: None,
            output: None,
            fix: None,
            width: None,
        }
    }

    /// File, host or path the error is about.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Captured output of the failed command.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        if !output.trim().is_empty() {
            self.output = Some(output);
        }
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_width(mut self, columns: u16) -> Self {
        self.width = Some(columns);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);
        if let Some(width) = self.width {
            b = b.fit_width(width);
        }

        if let Some(location) = &self.location {
            b.add_line(ColoredText::dim(location.as_str()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(output) = &self.output {
            b.add_empty();
            let lines: Vec<&str> = output.trim_end().lines().collect();
            let skip = lines.len().saturating_sub(MAX_OUTPUT_LINES);
            if skip > 0 {
                b.add_line(
                    ColoredText::dim(format!("... {} earlier lines", skip)).render(supports_color),
                );
            }
            for line in &lines[skip..] {
                b.add_line(format!(
                    "{} {}",
                    ColoredText::dim("|").render(supports_color),
                    line
                ));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
