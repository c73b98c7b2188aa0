//! Index page - hero banner followed by the "who's using it" section
//!
//! All copy comes from [`HeroContent::wpgraphql`]; all markup primitives come
//! from the injected kit.

use crate::content::HeroContent;
use crate::primitives::{SectionRenderer, SharedKit, UiKit};
use crate::styles;
use crate::types::{Action, ButtonSize, ButtonStyle};
use leptos::prelude::*;

/// The landing page body.
#[component]
pub fn IndexPage(
    /// Buttons, icons, links and scoped classes
    kit: SharedKit,
    /// Section rendered directly below the banner
    whos_using_it: SectionRenderer,
) -> impl IntoView {
    let hero = HeroContent::wpgraphql();
    let scoped =
        |base: &str, style: &styles::ScopedStyle| format!("{} {}", base, kit.scoped_class(style));

    let actions = hero
        .actions()
        .into_iter()
        .map(|action| action_button(kit.as_ref(), action))
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <section class=scoped("hero", &styles::HERO)>
                <div class=scoped("hero-content", &styles::CONTENT)>
                    <h2 class=scoped("hero-title", &styles::TITLE)>{hero.title}</h2>
                    <h3 class=scoped("hero-subtitle", &styles::SUBTITLE)>{hero.subtitle}</h3>
                    <div class=scoped("hero-actions", &styles::ACTIONS)>{actions}</div>
                </div>
            </section>
            {whos_using_it()}
        </div>
    }
}

/// Large primary button holding `icon label` inside the action's link.
fn action_button(kit: &dyn UiKit, action: &Action) -> AnyView {
    let label = view! {
        {kit.icon(action.icon)}
        <span>{action.label}</span>
    }
    .into_any();
    let link = kit.link(&action.target, label);
    kit.button(ButtonStyle::Primary, ButtonSize::Large, link)
}
