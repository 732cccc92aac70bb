//! docsite-config - typed configuration for static documentation sites.
//!
//! Models the build-time configuration a documentation-site generator
//! consumes: navigation menus, per-section sidebar trees, theme metadata,
//! markdown rendering options, and SEO head tags. The configuration is
//! loaded once from `docsite.toml`, validated, and read-only thereafter.
//! [`SiteConfig::to_generator_value`] exports the exact schema (field
//! names, nesting) the external generator expects.

pub mod config;
pub mod core;
pub mod logger;

pub use config::{
    CodeTheme, ConfigDiagnostic, ConfigDiagnostics, ConfigError, DateStyle, EditLinkConfig,
    FieldPath, FooterConfig, FormatOptions, HeadAttrs, HeadTag, LastUpdatedConfig, MarkdownConfig,
    NavItem, SearchConfig, SearchProvider, SidebarSection, SidebarTree, SiteConfig, SocialIcon,
    SocialLink, ThemeConfig, TimeStyle, cfg, init_config, reload_config,
};
pub use crate::core::RoutePath;
