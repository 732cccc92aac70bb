//! `themeConfig` section: navigation, sidebar, and presentation metadata.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! logo = "/logo.svg"
//! nav = [
//!     { text = "Home", link = "/" },
//!     { text = "Services", link = "/services/" },
//! ]
//!
//! [[themeConfig.sidebar."/services/"]]
//! text = "Services"
//! items = [{ text = "Overview", link = "/services/" }]
//!
//! [themeConfig.footer]
//! message = "Enterprise-Grade Homelab Infrastructure"
//!
//! [themeConfig.search]
//! provider = "local"
//!
//! [themeConfig.editLink]
//! pattern = "https://github.com/user/repo/edit/main/docs/:path"
//! ```

pub mod edit_link;
mod footer;
mod last_updated;
pub mod nav;
mod search;
pub mod sidebar;
pub mod social;

pub use edit_link::EditLinkConfig;
pub use footer::FooterConfig;
pub use last_updated::{DateStyle, FormatOptions, LastUpdatedConfig, TimeStyle};
pub use nav::NavItem;
pub use search::{SearchConfig, SearchProvider};
pub use sidebar::{SidebarSection, SidebarTree};
pub use social::{SocialIcon, SocialLink};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct ThemeFields {
    pub logo: FieldPath,
}

/// Theme configuration: everything the default theme renders around the
/// page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Site logo (site-absolute asset path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Nav bar entries, shown on every page in declaration order.
    pub nav: Vec<NavItem>,

    /// Per-section sidebar trees keyed by path prefix.
    pub sidebar: SidebarTree,

    /// Social icon links.
    pub social_links: Vec<SocialLink>,

    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    /// Search provider selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    /// "Edit this page" link template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,

    /// "Last updated" display settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdatedConfig>,
}

impl ThemeConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        logo: FieldPath::new("themeConfig.logo"),
    };

    /// Validate the whole theme section.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && !logo.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("logo path '{logo}' is not site-absolute"),
                "use a path under the site root, e.g. \"/logo.svg\"",
            );
        }

        nav::validate(&self.nav, diag);
        self.sidebar.validate(&self.nav, diag);
        social::validate(&self.social_links, diag);

        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(diag);
        }
    }
}
