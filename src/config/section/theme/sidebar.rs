//! Per-section sidebar trees.
//!
//! The sidebar is a mapping from a URL path prefix to the link sections
//! shown when browsing under that prefix. Key order is preserved for
//! serialization fidelity; selection uses longest-prefix match, so key
//! order never affects which tree wins.

use super::nav::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::RoutePath;
use rustc_hash::FxHashSet;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub struct SidebarFields {
    pub prefix: FieldPath,
    pub section_text: FieldPath,
}

// ============================================================================
// SidebarSection
// ============================================================================

/// A titled group of sidebar links, rendered top-to-bottom in item order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarSection {
    /// Group heading.
    pub text: String,
    /// Links in render order.
    pub items: Vec<NavItem>,
}

impl SidebarSection {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

// ============================================================================
// SidebarTree
// ============================================================================

/// Ordered mapping from URL path prefix to sidebar sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarTree(Vec<(String, Vec<SidebarSection>)>);

impl SidebarTree {
    pub const FIELDS: SidebarFields = SidebarFields {
        prefix: FieldPath::new("themeConfig.sidebar"),
        section_text: FieldPath::new("themeConfig.sidebar.text"),
    };

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.0
            .iter()
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// Exact prefix lookup.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.0
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, sections)| sections.as_slice())
    }

    /// Select the sidebar for a page route.
    ///
    /// Matching rule: longest-prefix match over the tree keys. The route is
    /// normalized to page form first, so `/services/media-stack` and
    /// `/services/media-stack/` select the same tree. No match returns
    /// `None`; the generator's default/empty sidebar fallback is its own
    /// behavior.
    pub fn sidebar_for(&self, route: &RoutePath) -> Option<&[SidebarSection]> {
        self.0
            .iter()
            .filter(|(prefix, _)| route.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, sections)| sections.as_slice())
    }

    /// Validate the tree against the nav bar.
    ///
    /// - duplicate prefixes are errors
    /// - prefixes must be site-absolute
    /// - a prefix contained in a longer prefix is ambiguous: warning
    ///   (longest-prefix match resolves it)
    /// - a prefix no nav entry links under is unreachable from the nav bar:
    ///   warning
    pub fn validate(&self, nav: &[NavItem], diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for (prefix, sections) in &self.0 {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.prefix,
                    format!("prefix '{prefix}' is not site-absolute"),
                    "sidebar keys must start with '/', e.g. \"/services/\"",
                );
            }

            if !seen.insert(prefix.as_str()) {
                diag.error(
                    Self::FIELDS.prefix,
                    format!("duplicate prefix '{prefix}'"),
                );
                continue;
            }

            if !nav.is_empty() && !nav.iter().any(|item| item.link.starts_with(prefix.as_str())) {
                diag.warn(
                    Self::FIELDS.prefix,
                    format!("prefix '{prefix}' is not reachable from any nav entry"),
                );
            }

            for (section_index, section) in sections.iter().enumerate() {
                if section.text.is_empty() {
                    diag.error(
                        Self::FIELDS.section_text,
                        format!("'{prefix}'[{section_index}]: section heading is empty"),
                    );
                }
                for (item_index, item) in section.items.iter().enumerate() {
                    let context = format!("'{prefix}'[{section_index}].items[{item_index}]");
                    item.validate_with(&SIDEBAR_ITEM_FIELDS, &context, diag);
                }
            }
        }

        // Overlapping prefixes: flag the shorter one as shadowed
        for (prefix, _) in &self.0 {
            let shadowed = self
                .0
                .iter()
                .any(|(other, _)| other != prefix && other.starts_with(prefix.as_str()));
            if shadowed {
                diag.warn(
                    Self::FIELDS.prefix,
                    format!("prefix '{prefix}' overlaps a longer prefix (longest match wins)"),
                );
            }
        }
    }
}

/// Field paths for sidebar items (distinct from nav bar items).
const SIDEBAR_ITEM_FIELDS: super::nav::NavItemFields = super::nav::NavItemFields {
    text: FieldPath::new("themeConfig.sidebar.items.text"),
    link: FieldPath::new("themeConfig.sidebar.items.link"),
};

impl<K: Into<String>, const N: usize> From<[(K, Vec<SidebarSection>); N]> for SidebarTree {
    fn from(entries: [(K, Vec<SidebarSection>); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(prefix, sections)| (prefix.into(), sections))
                .collect(),
        )
    }
}

// ============================================================================
// serde (ordered map form)
// ============================================================================

impl Serialize for SidebarTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (prefix, sections) in &self.0 {
            map.serialize_entry(prefix, sections)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TreeVisitor;

        impl<'de> Visitor<'de> for TreeVisitor {
            type Value = SidebarTree;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of path prefixes to sidebar sections")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((prefix, sections)) =
                    access.next_entry::<String, Vec<SidebarSection>>()?
                {
                    entries.push((prefix, sections));
                }
                Ok(SidebarTree(entries))
            }
        }

        deserializer.deserialize_map(TreeVisitor)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SidebarTree {
        SidebarTree::from([
            (
                "/services/",
                vec![SidebarSection::new(
                    "Services",
                    vec![
                        NavItem::new("Overview", "/services/"),
                        NavItem::new("Media Stack", "/services/media-stack"),
                    ],
                )],
            ),
            (
                "/monitoring/",
                vec![SidebarSection::new(
                    "Monitoring & Observability",
                    vec![NavItem::new("Prometheus", "/monitoring/prometheus")],
                )],
            ),
        ])
    }

    fn nav() -> Vec<NavItem> {
        vec![
            NavItem::new("Services", "/services/"),
            NavItem::new("Monitoring", "/monitoring/"),
        ]
    }

    #[test]
    fn test_sidebar_for_prefix_match() {
        let tree = tree();
        let sections = tree
            .sidebar_for(&RoutePath::from_page("/services/media-stack"))
            .unwrap();
        assert_eq!(sections[0].text, "Services");

        assert!(tree.sidebar_for(&RoutePath::from_page("/gitops/")).is_none());
    }

    #[test]
    fn test_sidebar_for_longest_prefix_wins() {
        let tree = SidebarTree::from([
            ("/guide/", vec![SidebarSection::new("Guide", vec![])]),
            (
                "/guide/advanced/",
                vec![SidebarSection::new("Advanced", vec![])],
            ),
        ]);

        let sections = tree
            .sidebar_for(&RoutePath::from_page("/guide/advanced/tuning"))
            .unwrap();
        assert_eq!(sections[0].text, "Advanced");

        let sections = tree
            .sidebar_for(&RoutePath::from_page("/guide/intro"))
            .unwrap();
        assert_eq!(sections[0].text, "Guide");
    }

    #[test]
    fn test_sidebar_for_root_route() {
        // Root-only match: a "/" prefix catches everything without a better match
        let tree = SidebarTree::from([("/", vec![SidebarSection::new("Root", vec![])])]);
        assert!(tree.sidebar_for(&RoutePath::from_page("/anything/")).is_some());
    }

    #[test]
    fn test_serde_preserves_key_order() {
        let tree = tree();
        let value = serde_json::to_value(&tree).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["/services/", "/monitoring/"]);

        let parsed: SidebarTree = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_validate_clean_tree() {
        let mut diag = ConfigDiagnostics::new();
        tree().validate(&nav(), &mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_duplicate_prefix() {
        let tree = SidebarTree::from([
            ("/services/", vec![]),
            ("/services/", vec![]),
        ]);
        let mut diag = ConfigDiagnostics::new();
        tree.validate(&nav(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_validate_orphan_prefix_warns() {
        let tree = SidebarTree::from([("/secret/", vec![])]);
        let mut diag = ConfigDiagnostics::new();
        tree.validate(&nav(), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].1.contains("/secret/"));
    }

    #[test]
    fn test_validate_overlapping_prefix_warns() {
        let tree = SidebarTree::from([
            ("/guide/", vec![]),
            ("/guide/advanced/", vec![]),
        ]);
        let nav = vec![
            NavItem::new("Guide", "/guide/"),
            NavItem::new("Advanced", "/guide/advanced/"),
        ];
        let mut diag = ConfigDiagnostics::new();
        tree.validate(&nav, &mut diag);
        assert!(!diag.has_errors());
        assert!(
            diag.warnings()
                .iter()
                .any(|(_, message)| message.contains("longest match"))
        );
    }

    #[test]
    fn test_validate_bad_item_link() {
        let tree = SidebarTree::from([(
            "/services/",
            vec![SidebarSection::new(
                "Services",
                vec![NavItem::new("Broken", "media-stack")],
            )],
        )]);
        let mut diag = ConfigDiagnostics::new();
        tree.validate(&nav(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("'/services/'[0].items[0]"));
    }
}
