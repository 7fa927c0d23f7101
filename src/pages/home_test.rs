use super::*;

fn status_paragraphs(html: &str) -> Vec<&str> {
    html.match_indices("<p>")
        .filter_map(|(start, _)| {
            let text = &html[start + 3..];
            let end = text.find("</p>")?;
            Some(&text[..end])
        })
        .filter(|text| text.starts_with(CHECKMARK))
        .collect()
}

#[test]
fn home_contains_heading_and_subheading() {
    let html = render_home();
    assert!(html.contains("<h1 class=\"text-4xl font-bold mb-4\">AI Agent Development Framework</h1>"));
    assert!(html.contains("Hierarchical Multi-Agent System for Autonomous Development"));
}

#[test]
fn home_contains_panel_title_and_body() {
    let html = render_home();
    assert!(html.contains("🚀 Framework Active"));
    assert!(html.contains("Your AI Agent Framework is successfully deployed and running."));
}

#[test]
fn home_lists_four_status_lines_in_order() {
    let html = render_home();
    assert_eq!(
        status_paragraphs(&html),
        vec![
            "✅ Planning Agent: Ready",
            "✅ Specialized Agents: Ready",
            "✅ Supabase Integration: Connected",
            "✅ GitHub Actions: Active",
        ]
    );
    assert_eq!(html.matches(CHECKMARK).count(), 4);
}

#[test]
fn home_is_wrapped_in_root_layout() {
    let html = render_home();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>AI Agent Framework</title>"));
    assert!(html.contains(
        "<meta name=\"description\" content=\"Hierarchical Multi-Agent Development Framework\""
    ));
    let body_start = html.find("<body>").unwrap();
    let body_end = html.find("</body>").unwrap();
    assert!(html[body_start..body_end].contains("<main class=\"flex min-h-screen flex-col"));
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_home(), render_home());
}

#[test]
fn status_line_label_prefixes_checkmark() {
    let line = StatusLine { component: "Planning Agent", state: "Ready" };
    assert_eq!(line.label(), "✅ Planning Agent: Ready");
}
