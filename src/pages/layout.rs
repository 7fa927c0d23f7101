//! Root layout — document shell and site-wide metadata.
//!
//! DESIGN
//! ======
//! Pages are plain Leptos components rendered to a string on the server.
//! Nothing hydrates on the client, so the shell carries no scripts: just
//! metadata, the stylesheet link, and the wrapped page in `<body>`.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::assets::STYLESHEET_PATH;

/// Document-level metadata emitted into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "AI Agent Framework",
    description: "Hierarchical Multi-Agent Development Framework",
};

pub const DOCTYPE: &str = "<!DOCTYPE html>";

#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{SITE_METADATA.title}</title>
                <meta name="description" content={SITE_METADATA.description}/>
                <link rel="stylesheet" href=STYLESHEET_PATH/>
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Render `page` inside the root layout as a complete HTML document.
pub fn render_document<F, V>(page: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let owner = Owner::new();
    let html = owner.with(|| view! { <RootLayout>{page()}</RootLayout> }.to_html());
    format!("{DOCTYPE}{html}")
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
