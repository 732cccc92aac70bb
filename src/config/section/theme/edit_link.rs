//! Edit-on-host link configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct EditLinkFields {
    pub pattern: FieldPath,
    pub text: FieldPath,
}

/// "Edit this page" link shown below page content.
///
/// `pattern` is a URL template; `:path` is replaced with the page's source
/// path relative to the docs root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditLinkConfig {
    /// URL template, e.g.
    /// `https://github.com/user/repo/edit/main/docs/:path`.
    pub pattern: String,

    /// Link label.
    pub text: String,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            text: "Edit this page".into(),
        }
    }
}

impl EditLinkConfig {
    pub const FIELDS: EditLinkFields = EditLinkFields {
        pattern: FieldPath::new("themeConfig.editLink.pattern"),
        text: FieldPath::new("themeConfig.editLink.text"),
    };

    /// Placeholder substituted with the page's relative source path.
    pub const PATH_PLACEHOLDER: &'static str = ":path";

    /// Build the edit URL for a page source path.
    ///
    /// `relative_path` is relative to the docs root; a leading slash is
    /// tolerated and stripped.
    pub fn url_for(&self, relative_path: &str) -> String {
        self.pattern
            .replace(Self::PATH_PLACEHOLDER, relative_path.trim_start_matches('/'))
    }

    /// Validate the pattern: absolute http(s) URL containing `:path`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.pattern) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                diag.error_with_hint(
                    Self::FIELDS.pattern,
                    format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    "use format like https://github.com/user/repo/edit/main/docs/:path",
                );
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.pattern,
                    format!("invalid URL: {e}"),
                    "use format like https://github.com/user/repo/edit/main/docs/:path",
                );
            }
        }

        if !self.pattern.contains(Self::PATH_PLACEHOLDER) {
            diag.error_with_hint(
                Self::FIELDS.pattern,
                "pattern has no ':path' placeholder, every page would link to the same URL",
                "append ':path' where the page source path belongs",
            );
        }

        if self.text.is_empty() {
            diag.error(Self::FIELDS.text, "link label is empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homelab_edit_link() -> EditLinkConfig {
        EditLinkConfig {
            pattern: "https://github.com/piyush97/homelab-docs/edit/main/docs/:path".into(),
            text: "Edit this page on GitHub".into(),
        }
    }

    #[test]
    fn test_url_for_substitutes_path() {
        let edit = homelab_edit_link();
        assert_eq!(
            edit.url_for("getting-started/index.md"),
            "https://github.com/piyush97/homelab-docs/edit/main/docs/getting-started/index.md"
        );
        // Leading slash tolerated
        assert_eq!(
            edit.url_for("/gitops/terraform.md"),
            "https://github.com/piyush97/homelab-docs/edit/main/docs/gitops/terraform.md"
        );
    }

    #[test]
    fn test_valid_pattern_passes() {
        let mut diag = ConfigDiagnostics::new();
        homelab_edit_link().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let edit = EditLinkConfig {
            pattern: "https://github.com/piyush97/homelab-docs/edit/main/docs/".into(),
            ..EditLinkConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        edit.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains(":path"));
    }

    #[test]
    fn test_non_url_pattern_rejected() {
        let edit = EditLinkConfig {
            pattern: "docs/:path".into(),
            ..EditLinkConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        edit.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_default_label() {
        let edit: EditLinkConfig =
            toml::from_str("pattern = \"https://github.com/u/r/edit/main/:path\"").unwrap();
        assert_eq!(edit.text, "Edit this page");
    }
}
