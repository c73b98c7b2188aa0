//! Rendering primitives the page is composed from.
//!
//! [`IndexPage`](crate::components::IndexPage) never names a concrete
//! button, icon or link component. It asks a [`UiKit`] for them, so the
//! whole look can be swapped by injecting a different kit.

use crate::components::{Button, ExternalLink, Icon, RouteLink};
use crate::styles::{self, ScopedStyle};
use crate::types::{ButtonSize, ButtonStyle, IconKind, LinkTarget};
use leptos::prelude::*;
use std::sync::Arc;

/// Shared handle to a kit, cheap to clone into child components.
pub type SharedKit = Arc<dyn UiKit>;

/// Renders a self-contained page section (e.g. "who's using it").
pub type SectionRenderer = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// The capabilities a page needs from a UI layer.
pub trait UiKit: Send + Sync {
    /// Wrap `children` in a button of the given variant and size.
    fn button(&self, variant: ButtonStyle, size: ButtonSize, children: AnyView) -> AnyView;

    /// Draw an icon.
    fn icon(&self, kind: IconKind) -> AnyView;

    /// Wrap `children` in a link to `target`.
    fn link(&self, target: &LinkTarget, children: AnyView) -> AnyView;

    /// Class name that applies `style` to an element.
    fn scoped_class(&self, style: &ScopedStyle) -> String;

    /// Stylesheet defining every class returned by [`UiKit::scoped_class`]
    /// for `used`.
    fn stylesheet(&self, used: &[ScopedStyle]) -> String {
        styles::stylesheet(used)
    }
}

/// Kit backed by this crate's Leptos components and [`styles`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKit;

impl DefaultKit {
    /// Boxed for injection.
    pub fn shared() -> SharedKit {
        Arc::new(DefaultKit)
    }
}

impl UiKit for DefaultKit {
    fn button(&self, variant: ButtonStyle, size: ButtonSize, children: AnyView) -> AnyView {
        view! { <Button variant=variant size=size>{children}</Button> }.into_any()
    }

    fn icon(&self, kind: IconKind) -> AnyView {
        view! {
            <span class="anticon" data-icon=kind.name()>
                <Icon path=kind.path() />
            </span>
        }
        .into_any()
    }

    fn link(&self, target: &LinkTarget, children: AnyView) -> AnyView {
        match target {
            LinkTarget::Internal(path) => {
                view! { <RouteLink to=path.to_string()>{children}</RouteLink> }.into_any()
            }
            LinkTarget::External(url) => {
                view! { <ExternalLink href=url.to_string()>{children}</ExternalLink> }.into_any()
            }
        }
    }

    fn scoped_class(&self, style: &ScopedStyle) -> String {
        style.class_name()
    }
}
