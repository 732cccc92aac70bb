//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each config struct exposes a hand-written `FIELDS` const so validation
/// code refers to schema paths by name instead of repeating string literals.
///
/// # Example
///
/// ```ignore
/// impl NavItem {
///     pub const FIELDS: NavItemFields = NavItemFields {
///         text: FieldPath::new("themeConfig.nav.text"),
///         link: FieldPath::new("themeConfig.nav.link"),
///     };
/// }
///
/// // Usage:
/// diag.error(NavItem::FIELDS.link, "must start with '/'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
