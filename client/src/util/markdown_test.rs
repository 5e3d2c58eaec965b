use super::*;

#[test]
fn renders_headings_with_anchor_ids() {
    let out = render_html("## Setup {#setup}\n\nBody text.");
    assert!(out.contains(r#"<h2 id="setup">Setup</h2>"#), "{out}");
    assert!(out.contains("<p>Body text.</p>"));
}

#[test]
fn drops_raw_html() {
    let out = render_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"), "{out}");
    assert!(out.contains("before"));
}

#[test]
fn keeps_fenced_code_whitespace() {
    let out = render_html("```\nfn main() {\n    run();\n}\n```");
    assert!(out.contains("    run();"), "{out}");
}
