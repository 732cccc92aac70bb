//! Last-updated timestamp display configuration.

use serde::{Deserialize, Serialize};

/// "Last updated" label and timestamp formatting.
///
/// Formatting is performed client-side by the generator's runtime; this
/// only carries the display options through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LastUpdatedConfig {
    /// Label prefix, e.g. "Updated at".
    pub text: String,

    /// Timestamp format options.
    pub format_options: FormatOptions,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self {
            text: "Last updated".into(),
            format_options: FormatOptions::default(),
        }
    }
}

/// Date/time style pair, mirroring `Intl.DateTimeFormat` options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_style: Option<TimeStyle>,
}

/// Date verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Time verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    Full,
    Long,
    Medium,
    Short,
}
