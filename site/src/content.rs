//! Static page content.
//!
//! Everything the landing page says is fixed at build time. The constants
//! below are the single source of truth for the hero copy and both
//! call-to-action targets.

use crate::types::{Action, IconKind, LinkTarget};

/// Hero title
pub const TITLE: &str = "GraphQL API for WordPress";

/// Hero subtitle
pub const SUBTITLE: &str = "WPGraphQL is a free, open-source WordPress plugin that provides an extendable GraphQL schema and API for any WordPress site.";

/// Internal route of the "getting started" docs page
pub const DOCS_PATH: &str = "/docs/getting-started/about";

/// Source repository
pub const GITHUB_URL: &str = "https://github.com/wp-graphql/wp-graphql";

/// Document `<title>` for the index route
pub const PAGE_TITLE: &str = "WPGraphQL";

/// Hero content: title, subtitle and the two actions shown side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroContent {
    /// Banner heading
    pub title: &'static str,
    /// Line below the heading
    pub subtitle: &'static str,
    /// Left action (docs)
    pub primary: Action,
    /// Right action (repository)
    pub secondary: Action,
}

impl HeroContent {
    /// The WPGraphQL hero.
    pub const fn wpgraphql() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            primary: Action {
                label: "Docs",
                icon: IconKind::File,
                target: LinkTarget::internal(DOCS_PATH),
            },
            secondary: Action {
                label: "View on Github",
                icon: IconKind::Github,
                target: LinkTarget::external(GITHUB_URL),
            },
        }
    }

    /// Both actions in display order.
    pub fn actions(&self) -> [&Action; 2] {
        [&self.primary, &self.secondary]
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self::wpgraphql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_action_is_internal_docs_route() {
        let hero = HeroContent::wpgraphql();
        assert_eq!(hero.primary.target, LinkTarget::internal(DOCS_PATH));
        assert!(!hero.primary.target.opens_new_context());
    }

    #[test]
    fn secondary_action_opens_repository_in_new_context() {
        let hero = HeroContent::wpgraphql();
        assert_eq!(hero.secondary.target.href(), GITHUB_URL);
        assert!(hero.secondary.target.opens_new_context());
    }

    #[test]
    fn actions_keep_display_order() {
        let hero = HeroContent::default();
        let [first, second] = hero.actions();
        assert_eq!(first.label, "Docs");
        assert_eq!(second.label, "View on Github");
    }
}
