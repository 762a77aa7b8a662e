//! Badge preview page.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::order::OrderStatus;
use crate::ui::components::{BadgeSize, StatusBadge};

/// Status shown in the preview to exercise the fallback display.
pub const PREVIEW_UNRECOGNIZED_STATUS: &str = "unknown-status";

/// Full HTML document listing every status badge in both sizes.
#[component]
pub fn BadgePreview() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Order Status Badges"</title>
            </head>

            <body class="min-h-screen antialiased">
                <main id="app" class="container mx-auto px-4 py-6 max-w-3xl space-y-6">
                    <h1 class="text-2xl font-bold">"Order Status Badges"</h1>
                    <PreviewSection size=BadgeSize::Small/>
                    <PreviewSection size=BadgeSize::Medium/>
                </main>
            </body>
        </html>
    }
}

/// One row of badges at a single size.
#[component]
fn PreviewSection(size: BadgeSize) -> impl IntoView {
    let badges = OrderStatus::ALL
        .into_iter()
        .map(|status| view! { <li><StatusBadge status=status size=size/></li> })
        .collect_view();

    view! {
        <section class="space-y-2" data-size=size.as_str()>
            <h2 class="text-lg font-semibold">{size.as_str()}</h2>
            <ul class="flex flex-wrap items-center gap-2">
                {badges}
                <li><StatusBadge status=PREVIEW_UNRECOGNIZED_STATUS size=size/></li>
            </ul>
        </section>
    }
}

/// Render the preview page as a complete HTML document.
pub fn render_preview_page() -> String {
    format!("<!DOCTYPE html>{}", view! { <BadgePreview/> }.to_html())
}
