//! CSS for the landing page.
//!
//! Two layers end up in the single `<style>` tag of the document:
//!
//! - [`BASE_CSS`] - document reset, typography and the button/icon classes
//!   used by [`crate::primitives::DefaultKit`]
//! - scoped rule sets ([`ScopedStyle`]) - each one gets a generated class
//!   name derived from its rules, so identical rules always map to the same
//!   class and different rules never collide
//!
//! Keep `<`, `>` and `&` out of the rules: the stylesheet is emitted as a
//! text node.

use sha2::{Digest, Sha256};

/// A named block of CSS declarations scoped to one generated class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopedStyle {
    /// Readable prefix of the generated class
    pub name: &'static str,
    /// Declarations, without the surrounding selector
    pub rules: &'static str,
}

impl ScopedStyle {
    /// Define a scoped style.
    pub const fn new(name: &'static str, rules: &'static str) -> Self {
        Self { name, rules }
    }

    /// Generated class name, e.g. `hero-1a2b3c4d`.
    pub fn class_name(&self) -> String {
        let digest = Sha256::digest(self.rules.as_bytes());
        let suffix: String = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();
        format!("{}-{}", self.name, suffix)
    }

    /// The rule set as a CSS block for its generated class.
    pub fn to_css(&self) -> String {
        format!(".{} {{{}}}", self.class_name(), self.rules)
    }
}

/// Build the full stylesheet: base CSS followed by each scoped style once.
pub fn stylesheet(scoped: &[ScopedStyle]) -> String {
    let mut css = String::from(BASE_CSS);
    let mut seen: Vec<String> = Vec::with_capacity(scoped.len());
    for style in scoped {
        let class = style.class_name();
        if seen.contains(&class) {
            continue;
        }
        css.push('\n');
        css.push_str(&style.to_css());
        seen.push(class);
    }
    css
}

// =============================================================================
// Hero
// =============================================================================

/// Full-width banner, content centered on both axes.
pub const HERO: ScopedStyle = ScopedStyle::new(
    "hero",
    r#"
    position: relative;
    box-sizing: border-box;
    width: 100%;
    min-height: 500px;
    padding: 150px 0;
    background-color: #001529;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
"#,
);

/// Bounded content column inside the banner.
pub const CONTENT: ScopedStyle = ScopedStyle::new(
    "content",
    r#"
    max-width: 900px;
    min-width: 300px;
    width: 100%;
"#,
);

/// Banner heading.
pub const TITLE: ScopedStyle = ScopedStyle::new(
    "title",
    r#"
    font-size: 70px;
    color: white;
"#,
);

/// Banner subheading.
pub const SUBTITLE: ScopedStyle = ScopedStyle::new(
    "subtitle",
    r#"
    font-size: 30px;
    color: white;
    margin-bottom: 50px;
"#,
);

/// Row holding the two actions.
pub const ACTIONS: ScopedStyle = ScopedStyle::new(
    "actions",
    r#"
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 8px;
"#,
);

// =============================================================================
// Who's using it
// =============================================================================

/// Showcase section below the banner.
pub const SHOWCASE: ScopedStyle = ScopedStyle::new(
    "showcase",
    r#"
    box-sizing: border-box;
    width: 100%;
    padding: 80px 24px;
    background-color: #f0f2f5;
    text-align: center;
"#,
);

/// Grid of showcase entries.
pub const SHOWCASE_LIST: ScopedStyle = ScopedStyle::new(
    "showcase-list",
    r#"
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 24px;
    margin: 32px auto 0;
    padding: 0;
    max-width: 900px;
    list-style: none;
"#,
);

/// Every scoped style the index page may use.
pub const PAGE_STYLES: &[ScopedStyle] = &[
    HERO,
    CONTENT,
    TITLE,
    SUBTITLE,
    ACTIONS,
    SHOWCASE,
    SHOWCASE_LIST,
];

/// Reset, typography, buttons and icons.
pub const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 14px;
    line-height: 1.5;
    color: rgba(0, 0, 0, 0.65);
    background: #fff;
}

h2, h3 {
    margin-top: 0;
    font-weight: 500;
    line-height: 1.2;
}

a {
    color: #1890ff;
    text-decoration: none;
}

.btn {
    display: inline-flex;
    align-items: center;
    height: 32px;
    padding: 0 15px;
    font-size: 14px;
    border: 1px solid #d9d9d9;
    border-radius: 4px;
    background: #fff;
    color: rgba(0, 0, 0, 0.65);
    cursor: pointer;
}

.btn a {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    color: inherit;
}

.btn-primary {
    color: #fff;
    background-color: #1890ff;
    border-color: #1890ff;
}

.btn-primary:hover {
    background-color: #40a9ff;
    border-color: #40a9ff;
}

.btn-lg {
    height: 40px;
    padding: 0 15px;
    font-size: 16px;
}

.icon {
    display: inline-block;
    vertical-align: -0.125em;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_name_is_stable() {
        assert_eq!(HERO.class_name(), HERO.class_name());
        assert!(HERO.class_name().starts_with("hero-"));
        assert_eq!(HERO.class_name().len(), "hero-".len() + 8);
    }

    #[test]
    fn different_rules_get_different_classes() {
        let a = ScopedStyle::new("x", "color: red;");
        let b = ScopedStyle::new("x", "color: blue;");
        assert_ne!(a.class_name(), b.class_name());
    }

    #[test]
    fn stylesheet_emits_each_scoped_style_once() {
        let css = stylesheet(&[TITLE, TITLE, SUBTITLE]);
        let selector = format!(".{} {{", TITLE.class_name());
        assert_eq!(css.matches(&selector).count(), 1);
        assert!(css.starts_with(BASE_CSS));
        assert!(css.contains(&SUBTITLE.class_name()));
    }

    #[test]
    fn page_styles_carry_layout_bounds() {
        assert!(HERO.rules.contains("min-height: 500px"));
        assert!(CONTENT.rules.contains("max-width: 900px"));
        assert!(CONTENT.rules.contains("min-width: 300px"));
    }
}
