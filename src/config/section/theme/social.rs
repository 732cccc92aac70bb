//! Social link entries (footer/nav icons).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct SocialLinkFields {
    pub icon: FieldPath,
    pub link: FieldPath,
}

/// Icon identifiers the generator ships built-in SVGs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    /// Icon identifier as it appears in the schema.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

/// An external profile link with a built-in icon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    /// Absolute http(s) URL.
    pub link: String,
}

impl SocialLink {
    pub const FIELDS: SocialLinkFields = SocialLinkFields {
        icon: FieldPath::new("themeConfig.socialLinks.icon"),
        link: FieldPath::new("themeConfig.socialLinks.link"),
    };

    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }
}

/// Validate social links: each must be an absolute http(s) URL with a host.
pub fn validate(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    for (index, social) in links.iter().enumerate() {
        match url::Url::parse(&social.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        SocialLink::FIELDS.link,
                        format!(
                            "socialLinks[{index}]: scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/user/repo",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        SocialLink::FIELDS.link,
                        format!("socialLinks[{index}]: URL must have a valid host"),
                        "use format like https://github.com/user/repo",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    SocialLink::FIELDS.link,
                    format!("socialLinks[{index}]: invalid URL: {e}"),
                    "use format like https://github.com/user/repo",
                );
            }
        }
    }
}
