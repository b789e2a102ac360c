use crossterm::style::Stylize;

use crate::ui::primitives::text::SemanticColor;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Deploy,
    Check,
    Remote,
}

impl Icon {
    /// (unicode, ascii) glyphs.
    fn glyphs(&self) -> (&'static str, &'static str) {
        use crate::ui::theme::{icons, icons_ascii};

        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Pending => (icons::PENDING, icons_ascii::PENDING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Deploy => (icons::DEPLOY, icons_ascii::DEPLOY),
            Icon::Check => (icons::CHECK, icons_ascii::CHECK),
            Icon::Remote => (icons::REMOTE, icons_ascii::REMOTE),
        }
    }

    fn semantic_color(&self) -> SemanticColor {
        match self {
            Icon::Success => SemanticColor::Success,
            Icon::Error => SemanticColor::Error,
            Icon::Warning | Icon::Progress => SemanticColor::Warning,
            Icon::Pending | Icon::Arrow => SemanticColor::Dim,
            Icon::Deploy | Icon::Check | Icon::Remote => SemanticColor::Info,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.semantic_color().color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
