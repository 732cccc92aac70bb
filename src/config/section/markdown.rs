//! `markdown` configuration: rendering options for code blocks.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct MarkdownFields {
    pub line_numbers: FieldPath,
    pub theme_light: FieldPath,
    pub theme_dark: FieldPath,
}

/// Markdown rendering options passed through to the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownConfig {
    /// Show line numbers in code blocks.
    pub line_numbers: bool,

    /// Syntax highlighting theme pair (light/dark mode).
    pub theme: CodeTheme,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            theme: CodeTheme::default(),
        }
    }
}

impl MarkdownConfig {
    pub const FIELDS: MarkdownFields = MarkdownFields {
        line_numbers: FieldPath::new("markdown.lineNumbers"),
        theme_light: FieldPath::new("markdown.theme.light"),
        theme_dark: FieldPath::new("markdown.theme.dark"),
    };

    /// Validate markdown options.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.theme.light.is_empty() {
            diag.error(Self::FIELDS.theme_light, "theme identifier is empty");
        }
        if self.theme.dark.is_empty() {
            diag.error(Self::FIELDS.theme_dark, "theme identifier is empty");
        }
    }
}

/// Highlighting theme identifiers for light and dark mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodeTheme {
    pub light: String,
    pub dark: String,
}

impl Default for CodeTheme {
    fn default() -> Self {
        Self {
            light: "github-light".into(),
            dark: "github-dark".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarkdownConfig::default();
        assert!(!config.line_numbers);
        assert_eq!(config.theme.light, "github-light");
        assert_eq!(config.theme.dark, "github-dark");
    }

    #[test]
    fn test_camel_case_field_names() {
        let config: MarkdownConfig = toml::from_str(
            "lineNumbers = true\ntheme = { light = \"min-light\", dark = \"min-dark\" }",
        )
        .unwrap();
        assert!(config.line_numbers);
        assert_eq!(config.theme.dark, "min-dark");
    }

    #[test]
    fn test_empty_theme_rejected() {
        let config = MarkdownConfig {
            theme: CodeTheme {
                light: String::new(),
                dark: "github-dark".into(),
            },
            ..MarkdownConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
