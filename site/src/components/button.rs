//! Button wrapper with primary/large variants

use crate::types::{ButtonSize, ButtonStyle};
use leptos::prelude::*;

/// CSS classes for a button variant, e.g. `btn btn-primary btn-lg`.
pub fn button_class(style: ButtonStyle, size: ButtonSize) -> String {
    let mut class = String::from("btn");
    if style == ButtonStyle::Primary {
        class.push_str(" btn-primary");
    }
    if size == ButtonSize::Large {
        class.push_str(" btn-lg");
    }
    class
}

/// A styled container for an action. The click target is the child link,
/// so the wrapper is a `span` rather than a form button.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonStyle,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=button_class(variant, size)>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_large_classes() {
        assert_eq!(
            button_class(ButtonStyle::Primary, ButtonSize::Large),
            "btn btn-primary btn-lg"
        );
        assert_eq!(button_class(ButtonStyle::Default, ButtonSize::Middle), "btn");
    }
}
