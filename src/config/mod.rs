//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head (SEO/meta tags)
//! │   ├── markdown   # markdown rendering options
//! │   └── theme/     # themeConfig (nav, sidebar, footer, ...)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | top level       | Identity and URL topology (title, base, ...)   |
//! | `[themeConfig]` | Nav bar, sidebar trees, footer, social, search |
//! | `[markdown]`    | Markdown rendering options                     |
//! | `head`          | HTML `<head>` tags injected into every page    |
//!
//! The schema mirrors the external generator's configuration object; field
//! names are the literal contract surface and must match exactly, which is
//! why the serialized form is camelCase.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    CodeTheme, DateStyle, EditLinkConfig, FooterConfig, FormatOptions, HeadAttrs, HeadTag,
    LastUpdatedConfig, MarkdownConfig, NavItem, SearchConfig, SearchProvider, SidebarSection,
    SidebarTree, SocialIcon, SocialLink, ThemeConfig, TimeStyle,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::core::RoutePath;
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "docsite.toml";

pub struct SiteFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub base: FieldPath,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `docsite.toml`.
///
/// Constructed once at build-configuration load time, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site title (nav bar and default page titles).
    pub title: String,

    /// Site description (meta description fallback).
    pub description: String,

    /// URL path prefix the site is served under (e.g. `/homelab-docs/`).
    /// Must start and end with `/`.
    pub base: String,

    /// Omit `.html` extensions from generated links.
    pub clean_urls: bool,

    /// Theme settings (nav, sidebar, footer, social, search, edit link).
    pub theme_config: ThemeConfig,

    /// Markdown rendering options.
    pub markdown: MarkdownConfig,

    /// HTML tags injected into `<head>` on every page, in order.
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            clean_urls: false,
            theme_config: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            head: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("title"),
        description: FieldPath::new("description"),
        base: FieldPath::new("base"),
    };

    // ========================================================================
    // loading
    // ========================================================================

    /// Load and validate configuration from a file path.
    ///
    /// Unknown fields are reported as warnings; validation errors are
    /// collected and returned all at once.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Locate the config file by searching upward from cwd, then load it.
    pub fn discover(config_name: &Path) -> Result<Self> {
        match find_config_file(config_name) {
            Some(path) => Self::load_from(&path),
            None => bail!(ConfigError::Validation(format!(
                "config file '{}' not found in the current directory or any parent",
                config_name.display()
            ))),
        }
    }

    /// Parse configuration from a TOML string (no validation).
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // generator schema export / import
    // ========================================================================

    /// Export the exact configuration object the generator consumes.
    ///
    /// Field names, nesting, and ordering match the generator schema;
    /// absent optional sections are omitted rather than emitted as null.
    pub fn to_generator_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("Failed to serialize generator schema")
    }

    /// Export the generator schema as a JSON string.
    pub fn to_generator_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize generator schema")
    }

    /// Parse a configuration back from the generator schema (no validation).
    pub fn from_generator_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value).map_err(ConfigError::Schema)?;
        Ok(config)
    }

    /// Parse a configuration back from generator schema JSON (no validation).
    pub fn from_generator_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(ConfigError::Schema)?;
        Ok(config)
    }

    // ========================================================================
    // resolution
    // ========================================================================

    /// Resolve a site-absolute link to its effective URL under `base`.
    ///
    /// Non-absolute links (external URLs, anchors) pass through unchanged.
    /// When `cleanUrls` is off, extension-less page links get `.html`;
    /// directory links (trailing `/`) and asset links are untouched.
    ///
    /// With `base = "/homelab-docs/"`, link `/` resolves to
    /// `/homelab-docs/`.
    pub fn resolve_route(&self, link: &str) -> String {
        if !link.starts_with('/') {
            return link.to_string();
        }

        // Keep query/fragment out of the extension handling
        let split_at = link.find(['?', '#']).unwrap_or(link.len());
        let (path, suffix) = link.split_at(split_at);

        let joined = format!("{}{}", self.base.trim_end_matches('/'), path);

        let resolved = if self.clean_urls || joined.ends_with('/') {
            joined
        } else {
            let last_segment = joined.rsplit('/').next().unwrap_or("");
            if last_segment.contains('.') {
                joined
            } else {
                format!("{joined}.html")
            }
        };

        format!("{resolved}{suffix}")
    }

    /// Select the sidebar sections for a page route (longest-prefix match).
    pub fn sidebar_for(&self, route: &str) -> Option<&[SidebarSection]> {
        self.theme_config
            .sidebar
            .sidebar_for(&RoutePath::from_page(route))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, collecting all errors before failing.
    ///
    /// Warnings are printed in a grouped block; errors come back all at
    /// once as [`ConfigError::Diagnostics`].
    pub fn validate(&self) -> Result<()> {
        let diag = self.check();
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run all validation checks and return the collected diagnostics.
    pub fn check(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{}' must start with '/'", self.base),
                "e.g. \"/homelab-docs/\"",
            );
        }
        if !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{}' must end with '/'", self.base),
                "e.g. \"/homelab-docs/\"",
            );
        }

        self.theme_config.validate(&mut diag);
        self.markdown.validate(&mut diag);
        section::head::validate(&self.head, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
