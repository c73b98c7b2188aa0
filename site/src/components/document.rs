//! Root document component - the complete HTML page

use leptos::prelude::*;

/// HTML shell around a page body: meta tags, title and one inline
/// stylesheet.
#[component]
pub fn PageDocument(
    title: &'static str,
    description: &'static str,
    /// Full stylesheet text
    css: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{css}</style>
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}
