//! Navigation links
//!
//! Internal links carry a `data-route` marker so a client router can take
//! over the transition; without one they degrade to plain navigation.
//! External links always open in a new browsing context.

use leptos::prelude::*;

/// Link to a route of this site.
#[component]
pub fn RouteLink(#[prop(into)] to: String, children: Children) -> impl IntoView {
    view! {
        <a href=to data-route="internal">
            {children()}
        </a>
    }
}

/// Link to another site, opened in a new tab.
#[component]
pub fn ExternalLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}
