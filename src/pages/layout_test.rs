use super::*;

fn render_stub() -> String {
    render_document(|| view! { <p class="stub">"page body"</p> })
}

#[test]
fn document_starts_with_doctype_and_html_lang() {
    let html = render_stub();
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"), "{html}");
    assert!(html.ends_with("</html>"));
}

#[test]
fn head_carries_title_and_description() {
    let html = render_stub();
    assert!(html.contains("<title>AI Agent Framework</title>"));
    assert!(html.contains(
        "<meta name=\"description\" content=\"Hierarchical Multi-Agent Development Framework\""
    ));
}

#[test]
fn head_links_global_stylesheet() {
    let html = render_stub();
    assert!(html.contains("<link rel=\"stylesheet\" href=\"/globals.css\""));
}

#[test]
fn page_is_embedded_in_body() {
    let html = render_stub();
    let body_start = html.find("<body>").unwrap();
    let body_end = html.find("</body>").unwrap();
    assert!(html[body_start..body_end].contains("<p class=\"stub\">page body</p>"));
}

#[test]
fn metadata_constants_match_document_contract() {
    assert_eq!(SITE_METADATA.title, "AI Agent Framework");
    assert_eq!(SITE_METADATA.description, "Hierarchical Multi-Agent Development Framework");
}
