//! # Template Module
//!
//! Placeholder discovery and substitution for free-text templates.
//!
//! A placeholder is any `[NAME]` token with at least one character between the brackets.
//! Rendering looks `NAME` up in a [`Row`] by exact name and rewrites every
//! case-insensitive occurrence of `[NAME]`; unknown names are left in the text as-is.
pub(crate) mod placeholder;
pub(crate) mod renderer;

pub use placeholder::find_placeholders;
pub use renderer::render;

use crate::table::Row;

/// Template text together with its placeholder names, recomputed whenever the text changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    text: String,
    placeholders: Vec<String>,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let placeholders = find_placeholders(&text);
        Self { text, placeholders }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unique placeholder names in first-occurrence order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Returns true if `column` appears verbatim as a placeholder name.
    pub fn uses_column(&self, column: &str) -> bool {
        self.placeholders.iter().any(|name| name == column)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn render(&self, row: &Row) -> String {
        render(&self.text, row)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Template::new(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_tracks_placeholders() {
        let template = Template::new("Dear [NAME] at [COMPANY], [NAME]");

        assert_eq!(template.placeholders(), ["NAME", "COMPANY"]);
        assert!(template.uses_column("COMPANY"));
        assert!(!template.uses_column("company"));
        assert!(!template.uses_column("CITY"));
    }

    #[test]
    fn template_render_matches_free_function() {
        let row: Row = [("NAME", "Ann")].into_iter().collect();
        let template = Template::from("Hello [NAME] from [CITY]");

        assert_eq!(template.render(&row), render(template.text(), &row));
        assert_eq!(template.render(&row), "Hello Ann from [CITY]");
    }

    #[test]
    fn template_empty() {
        let template = Template::default();

        assert!(template.is_empty());
        assert!(template.placeholders().is_empty());
    }
}
