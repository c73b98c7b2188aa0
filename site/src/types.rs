//! Data types shared by the page components.
//!
//! These are plain values: link targets, actions and showcase entries.
//! Showcase entries deserialize from `site.toml`, the rest is constant.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Where a link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Route inside the site, followed as a routed transition
    Internal(Cow<'static, str>),
    /// Off-site URL, opened in a new browsing context
    External(Cow<'static, str>),
}

impl LinkTarget {
    /// Routed link to a constant path.
    pub const fn internal(path: &'static str) -> Self {
        LinkTarget::Internal(Cow::Borrowed(path))
    }

    /// Off-site link to a constant URL.
    pub const fn external(url: &'static str) -> Self {
        LinkTarget::External(Cow::Borrowed(url))
    }

    /// The `href` value.
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(href) | LinkTarget::External(href) => &**href,
        }
    }

    /// Whether following the link leaves the current page in place.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Icons the page knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    /// Document page
    File,
    /// GitHub mark
    Github,
}

/// A call-to-action: icon, label and destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    /// Visible text after the icon
    pub label: &'static str,
    /// Leading icon
    pub icon: IconKind,
    /// Destination
    pub target: LinkTarget,
}

/// Button variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled, brand colored
    #[default]
    Primary,
    /// Outlined
    Default,
}

/// Button size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Regular height
    #[default]
    Middle,
    /// Tall, larger type
    Large,
}

/// A site shown in the "who's using it" section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseEntry {
    /// Display name
    pub name: String,
    /// Public URL of the site
    pub url: String,
    /// Optional logo image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl ShowcaseEntry {
    /// Entry without a logo.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo: None,
        }
    }
}

/// Built-in showcase used when the config does not list any sites.
pub fn default_showcase() -> Vec<ShowcaseEntry> {
    vec![
        ShowcaseEntry::new("Gatsby", "https://www.gatsbyjs.com"),
        ShowcaseEntry::new("The Denver Post", "https://www.denverpost.com"),
        ShowcaseEntry::new("WPGraphQL", "https://www.wpgraphql.com"),
    ]
}
