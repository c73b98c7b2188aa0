//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server; nothing here is hydrated.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── IndexPage
//!     ├── section.hero
//!     │   └── title, subtitle, actions (via UiKit: Button > link > Icon)
//!     └── injected section (default: WhosUsingIt)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use wpgraphql_site::components::{IndexPage, showcase_section};
//! use wpgraphql_site::primitives::DefaultKit;
//!
//! let kit = DefaultKit::shared();
//! view! {
//!     <IndexPage kit=kit.clone() whos_using_it=showcase_section(kit, vec![]) />
//! }
//! ```

mod button;
mod document;
mod hero;
mod icons;
mod link;
mod whos_using_it;

pub use button::{Button, button_class};
pub use document::PageDocument;
pub use hero::IndexPage;
pub use icons::*;
pub use link::{ExternalLink, RouteLink};
pub use whos_using_it::{WhosUsingIt, showcase_section};
