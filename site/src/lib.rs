//! # wpgraphql-site
//!
//! Leptos SSR renderer for the WPGraphQL landing page.
//!
//! The page is a hero banner (title, subtitle, "Docs" and "View on Github"
//! actions) followed by a "who's using it" section. It is rendered once,
//! on the server, into a static HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use wpgraphql_site::{render_index, types::default_showcase};
//!
//! let html = render_index(&default_showcase());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("GraphQL API for WordPress"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the page copy and link targets
//! - [`primitives`] - the [`UiKit`](primitives::UiKit) interface the page is built from
//! - [`components`] - Leptos components
//! - [`styles`] - scoped CSS rule sets and the base stylesheet
//! - [`routes`] / [`generate`] - route table and static output
//! - [`config`] - optional `site.toml`
//!
//! ## Swapping the UI layer
//!
//! [`render_page`] takes the kit and the section below the banner as
//! arguments, so both can be replaced:
//!
//! ```rust
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use wpgraphql_site::{render_page, primitives::DefaultKit};
//!
//! let html = render_page(
//!     DefaultKit::shared(),
//!     Arc::new(|| view! { <aside id="custom">"Thanks!"</aside> }.into_any()),
//! );
//! assert!(html.contains("id=\"custom\""));
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod generate;
pub mod primitives;
pub mod routes;
pub mod styles;
pub mod types;

use components::{IndexPage, PageDocument, showcase_section};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use primitives::{DefaultKit, SectionRenderer, SharedKit};
use types::ShowcaseEntry;

pub use error::{Result, SiteError};

/// Render the complete landing page document.
///
/// # Arguments
///
/// * `kit` - rendering primitives for buttons, icons, links and scoped styles
/// * `whos_using_it` - section placed directly below the hero banner
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// The same arguments always produce the same string.
pub fn render_page(kit: SharedKit, whos_using_it: SectionRenderer) -> String {
    let css = kit.stylesheet(styles::PAGE_STYLES);
    let doc = view! {
        <PageDocument title={content::PAGE_TITLE} description={content::SUBTITLE} css=css>
            <IndexPage kit=kit whos_using_it=whos_using_it />
        </PageDocument>
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page with the default kit and showcase section.
pub fn render_index(showcase: &[ShowcaseEntry]) -> String {
    let kit = DefaultKit::shared();
    let section = showcase_section(kit.clone(), showcase.to_vec());
    render_page(kit, section)
}
