//! Navigation bar entries.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct NavItemFields {
    pub text: FieldPath,
    pub link: FieldPath,
}

/// A single navigation link (nav bar or sidebar item).
///
/// `link` is a site-absolute route; the external generator resolves it
/// under the configured base path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Site-absolute link target (starts with `/`).
    pub link: String,
}

impl NavItem {
    pub const FIELDS: NavItemFields = NavItemFields {
        text: FieldPath::new("themeConfig.nav.text"),
        link: FieldPath::new("themeConfig.nav.link"),
    };

    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate a single item under the given field paths.
    ///
    /// `context` names the item's position (e.g. `nav[2]`) in messages.
    pub fn validate_with(
        &self,
        fields: &NavItemFields,
        context: &str,
        diag: &mut ConfigDiagnostics,
    ) {
        if self.text.is_empty() {
            diag.error(fields.text, format!("{context}: label is empty"));
        }

        if self.link.is_empty() {
            diag.error(fields.link, format!("{context}: link is empty"));
        } else if !self.link.starts_with('/') {
            diag.error_with_hint(
                fields.link,
                format!("{context}: link '{}' is not site-absolute", self.link),
                "links must start with '/', e.g. \"/getting-started/\"",
            );
        }
    }
}

/// Validate nav bar entries.
pub fn validate(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    for (index, item) in nav.iter().enumerate() {
        item.validate_with(&NavItem::FIELDS, &format!("nav[{index}]"), diag);
    }
}
