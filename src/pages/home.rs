//! Home page — framework status panel served at `/`.

use leptos::prelude::*;

use super::layout::render_document;

pub const HEADING: &str = "AI Agent Development Framework";
pub const SUBHEADING: &str = "Hierarchical Multi-Agent System for Autonomous Development";
pub const PANEL_TITLE: &str = "🚀 Framework Active";
pub const PANEL_BODY: &str = "Your AI Agent Framework is successfully deployed and running.";
pub const CHECKMARK: &str = "✅";

/// One row of the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub component: &'static str,
    pub state: &'static str,
}

impl StatusLine {
    /// Display text, e.g. `✅ Planning Agent: Ready`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{CHECKMARK} {}: {}", self.component, self.state)
    }
}

/// Status rows in display order.
pub const STATUS_LINES: [StatusLine; 4] = [
    StatusLine { component: "Planning Agent", state: "Ready" },
    StatusLine { component: "Specialized Agents", state: "Ready" },
    StatusLine { component: "Supabase Integration", state: "Connected" },
    StatusLine { component: "GitHub Actions", state: "Active" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-24">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{HEADING}</h1>
                <p class="text-xl text-gray-600 mb-8">{SUBHEADING}</p>
                <div class="bg-blue-50 border border-blue-200 rounded-lg p-6 max-w-2xl">
                    <h2 class="text-2xl font-semibold mb-4">{PANEL_TITLE}</h2>
                    <p class="mb-4">{PANEL_BODY}</p>
                    <div class="text-left space-y-2">
                        {STATUS_LINES.iter().map(|line| view! { <p>{line.label()}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </main>
    }
}

/// Full home document: `HomePage` wrapped in the root layout.
#[must_use]
pub fn render_home() -> String {
    render_document(|| view! { <HomePage/> })
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
