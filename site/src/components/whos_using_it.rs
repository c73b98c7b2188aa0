//! "Who's using it" showcase section

use crate::primitives::{SectionRenderer, SharedKit};
use crate::styles;
use crate::types::{LinkTarget, ShowcaseEntry};
use leptos::prelude::*;
use std::borrow::Cow;
use std::sync::Arc;

/// Grid of sites built on WPGraphQL. Always renders its heading, even when
/// `entries` is empty.
#[component]
pub fn WhosUsingIt(kit: SharedKit, entries: Vec<ShowcaseEntry>) -> impl IntoView {
    let section_class = format!("whos-using-it {}", kit.scoped_class(&styles::SHOWCASE));
    let list_class = format!("showcase-list {}", kit.scoped_class(&styles::SHOWCASE_LIST));

    let items = entries
        .into_iter()
        .map(|entry| {
            let target = LinkTarget::External(Cow::Owned(entry.url.clone()));
            let face = match entry.logo {
                Some(logo) => view! { <img src=logo alt=entry.name.clone() height="48" /> }.into_any(),
                None => view! { <span>{entry.name.clone()}</span> }.into_any(),
            };
            view! {
                <li class="showcase-item">{kit.link(&target, face)}</li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class=section_class>
            <h2 class="showcase-title">"Who's using WPGraphQL?"</h2>
            <ul class=list_class>{items}</ul>
        </section>
    }
}

/// Renderer for the default showcase, ready to inject into
/// [`IndexPage`](super::IndexPage).
pub fn showcase_section(kit: SharedKit, entries: Vec<ShowcaseEntry>) -> SectionRenderer {
    Arc::new(move || {
        view! { <WhosUsingIt kit=kit.clone() entries=entries.clone() /> }.into_any()
    })
}
