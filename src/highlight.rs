//! Syntax highlighting for fenced code blocks with syntect.

use anyhow::{Context, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when none is configured (Tomorrow Night Eighties palette).
pub const DEFAULT_THEME: &str = "base16-eighties.dark";

/// Class naming shared by highlighted markup and the generated theme CSS.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Highlights code to HTML spans styled by a theme stylesheet.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    theme_name: String,
}

impl Highlighter {
    /// Creates highlighter using one of syntect's bundled themes.
    ///
    /// # Errors
    ///
    /// Returns error if the theme name is unknown. The message lists the
    /// available themes.
    pub fn with_theme(name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let available = themes
            .themes
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        let theme = themes.themes.remove(name).with_context(|| {
            format!(
                "Unknown syntax highlighting theme: {} (available: {})",
                name, available
            )
        })?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: name.to_string(),
        })
    }

    /// Names of the bundled themes.
    pub fn available_themes() -> Vec<String> {
        ThemeSet::load_defaults().themes.into_keys().collect()
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Generates the stylesheet for the configured theme.
    ///
    /// # Errors
    ///
    /// Returns error if syntect cannot serialize the theme.
    pub fn theme_css(&self) -> Result<String> {
        css_for_theme_with_class_style(&self.theme, CLASS_STYLE)
            .with_context(|| format!("Failed to generate CSS for theme: {}", self.theme_name))
    }

    /// Highlights `code` written in `language`.
    ///
    /// Returns `None` when no syntax definition matches the language, so the
    /// caller can fall back to escaped plain text.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails while parsing a line.
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let Some(syntax) = self.find_syntax(language) else {
            return Ok(None);
        };

        if code.is_empty() {
            return Ok(Some(String::new()));
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(Some(generator.finalize()))
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }

        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(DEFAULT_THEME).unwrap_or_default();

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: DEFAULT_THEME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_bundled() {
        // Arrange & Act
        let themes = Highlighter::available_themes();

        // Assert
        assert!(
            themes.iter().any(|t| t == DEFAULT_THEME),
            "Default theme should ship with syntect: {:?}",
            themes
        );
    }

    #[test]
    fn test_with_theme_unknown() {
        // Arrange & Act
        let result = Highlighter::with_theme("No-Such-Theme");

        // Assert
        let err = result.err().expect("Unknown theme should fail");
        let message = format!("{:#}", err);
        assert!(message.contains("No-Such-Theme"), "{}", message);
        assert!(message.contains(DEFAULT_THEME), "Should list themes: {}", message);
    }

    #[test]
    fn test_with_theme_known() {
        // Arrange & Act
        let highlighter = Highlighter::with_theme("InspiredGitHub").expect("Theme should load");

        // Assert
        assert_eq!(highlighter.theme_name(), "InspiredGitHub");
    }

    #[test]
    fn test_highlight_rust_produces_spans() {
        // Arrange
        let highlighter = Highlighter::default();
        let code = "fn main() {\n    let x = 42;\n}\n";

        // Act
        let html = highlighter
            .highlight(code, "rust")
            .expect("Highlighting should succeed")
            .expect("Rust syntax should be found");

        // Assert
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain highlight spans: {}",
            html
        );
        assert!(html.contains("main"));
        assert!(html.contains("42"));
    }

    #[test]
    fn test_highlight_by_extension() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter
            .highlight("def bar():\n    pass\n", "py")
            .expect("Highlighting should succeed");

        // Assert
        assert!(html.is_some(), "Extension token should resolve syntax");
    }

    #[test]
    fn test_highlight_unknown_language() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter
            .highlight("some code", "unknownlang")
            .expect("Should not error");

        // Assert
        assert!(html.is_none());
    }

    #[test]
    fn test_highlight_escapes_html() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter
            .highlight("const x = \"<b>\";\n", "js")
            .expect("Highlighting should succeed")
            .expect("JavaScript syntax should be found");

        // Assert
        assert!(html.contains("&lt;b&gt;"), "Should escape markup: {}", html);
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter.highlight("", "rust").expect("Should succeed");

        // Assert
        assert_eq!(html.as_deref(), Some(""));
    }

    #[test]
    fn test_theme_css_uses_prefixed_classes() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let css = highlighter.theme_css().expect("CSS should generate");

        // Assert
        assert!(css.contains(".hljs-"), "Should use hljs- prefix: {}", css);
        assert!(css.contains("color"), "Should define colors");
    }
}
