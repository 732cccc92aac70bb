//! Configuration section definitions.
//!
//! Each module corresponds to a top-level section of the generator schema:
//!
//! | Module     | Schema key      | Purpose                              |
//! |------------|-----------------|--------------------------------------|
//! | `head`     | `head`          | HTML `<head>` tags (SEO, favicon)    |
//! | `markdown` | `markdown`      | Markdown rendering options           |
//! | `theme`    | `themeConfig`   | Nav, sidebar, footer, social, search |

pub mod head;
pub mod markdown;
pub mod theme;

pub use head::{HeadAttrs, HeadTag};
pub use markdown::{CodeTheme, MarkdownConfig};
pub use theme::{
    DateStyle, EditLinkConfig, FooterConfig, FormatOptions, LastUpdatedConfig, NavItem,
    SearchConfig, SearchProvider, SidebarSection, SidebarTree, SocialIcon, SocialLink,
    ThemeConfig, TimeStyle,
};
