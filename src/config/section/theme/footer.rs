//! Footer text configuration.

use serde::{Deserialize, Serialize};

/// Footer shown on every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    /// Message line above the copyright.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_footer() {
        let footer: FooterConfig = toml::from_str("copyright = \"© 2025\"").unwrap();
        assert_eq!(footer.copyright.as_deref(), Some("© 2025"));
        assert!(footer.message.is_none());

        // Absent fields stay absent in the exported schema
        let value = serde_json::to_value(&footer).unwrap();
        assert!(value.get("message").is_none());
    }
}
