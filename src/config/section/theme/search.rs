//! Search provider selection.
//!
//! The site delegates search to an embedded provider; this only selects
//! which one the generator wires up.

use serde::{Deserialize, Serialize};

/// Supported search providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at generation time.
    #[default]
    Local,

    /// Hosted Algolia DocSearch.
    Algolia,
}

/// Search configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}
