use webpage_fetcher::{dom, extract_document, extract_main_content, extract_text, Error, ExtractResult, Options};

#[test]
fn full_output_is_content_then_metadata_block() {
    let html = r#"
        <html>
          <head>
            <title>Guide</title>
            <meta name="description" content="How%20to">
            <meta property="og:type" content="article">
          </head>
          <body>
            <nav>NAV_TEXT</nav>
            <main>
              <h1>Guide</h1>
              <p>Read <a href="https://x.test/a%20b">this</a> first.</p>
              <ul><li>one</li><li>two</li></ul>
            </main>
          </body>
        </html>
    "#;

    let result = extract_text(html, &Options::default());

    assert_eq!(
        result.content,
        "# Guide\n\n\
         Read[this](https://x.test/a b)first.\n\n\
         - one\n- two\n\n\
         ## Metadata\n\n\
         ### Title\nGuide\n\n\
         ### Description\nHow to\n\n\
         ### Open Graph Tags\n- type: article"
    );
    assert!(!result.content.contains("NAV_TEXT"));
    assert_eq!(result.metadata.title, "Guide");
}

#[test]
fn main_wins_over_article() {
    let html = r#"
        <html>
          <body>
            <article><p>ARTICLE_TEXT</p></article>
            <main><p>MAIN_TEXT</p></main>
          </body>
        </html>
    "#;

    let result = extract_text(html, &Options::default());
    assert!(result.content.starts_with("MAIN_TEXT"));
    assert!(!result.content.contains("ARTICLE_TEXT"));
}

#[test]
fn id_hook_used_when_no_semantic_container() {
    let html = r#"
        <html>
          <body>
            <div id="sidebar"><p>SIDEBAR_TEXT</p></div>
            <div id="main-content"><p>CONTENT_TEXT</p></div>
          </body>
        </html>
    "#;

    let result = extract_text(html, &Options::default());
    assert!(result.content.starts_with("CONTENT_TEXT"));
    assert!(!result.content.contains("SIDEBAR_TEXT"));
}

#[test]
fn body_fallback_drops_unknown_root_without_keep_unknown() {
    let html = "<html><head><title>T</title></head><body><p>Loose text</p></body></html>";

    let result = extract_text(html, &Options::default());
    assert_eq!(result.content, "## Metadata\n\n### Title\nT");

    let result = extract_text(html, &Options::default().keep_unknown(true));
    assert!(result.content.starts_with("Loose text\n\n## Metadata"));
}

#[test]
fn keep_unknown_renders_custom_elements() {
    let html = "<main><div><custom-tag>HIDDEN</custom-tag></div><p>Shown</p></main>";

    let result = extract_text(html, &Options::default());
    assert_eq!(result.content, "Shown\n\n## Metadata");

    let result = extract_text(html, &Options::default().keep_unknown(true));
    assert_eq!(result.content, "HIDDEN\n\nShown\n\n## Metadata");
}

#[test]
fn ignored_subtrees_are_dropped() {
    let html = r#"
        <main>
          <p>Keep</p>
          <form><p>FORM_TEXT</p><button>Go</button></form>
          <script>var SCRIPT_TEXT = 1;</script>
          <svg><text>SVG_TEXT</text></svg>
        </main>
    "#;

    let result = extract_text(html, &Options::default());
    assert_eq!(result.content, "Keep\n\n## Metadata");
}

#[test]
fn comments_never_reach_the_output() {
    let html = "<main><p>Visible<!-- SECRET_COMMENT --></p></main>";
    let doc = dom::parse(html);

    let result = extract_document(&doc, &Options::default());

    assert!(!result.content.contains("SECRET_COMMENT"));
    assert!(!doc.select("main").html().contains("<!--"));
}

#[test]
fn tables_render_as_pipe_rows() {
    let html = r#"
        <main>
          <table>
            <thead><tr><th>A</th><th>B</th></tr></thead>
            <tbody><tr><td>1</td><td>2</td></tr></tbody>
          </table>
        </main>
    "#;

    let result = extract_text(html, &Options::default());
    assert_eq!(result.content, "| A | B |\n|---|---|\n| 1 | 2 |\n\n## Metadata");
}

#[test]
fn code_blocks_are_fenced() {
    let html = "<main><pre>let x = 1;</pre></main>";
    let result = extract_text(html, &Options::default());
    assert_eq!(result.content, "```\nlet x = 1;\n```\n\n## Metadata");
}

#[test]
fn missing_body_yields_empty_result() {
    let doc = dom::parse("<p>orphan</p>");
    doc.select("body").remove();

    match extract_main_content(&doc, &Options::default()) {
        Err(Error::NoContentRoot) => {}
        other => panic!("expected Err(NoContentRoot), got {other:?}"),
    }

    let doc = dom::parse("<p>orphan</p>");
    doc.select("body").remove();
    let result = extract_document(&doc, &Options::default());
    assert_eq!(result, ExtractResult::default());
    assert!(result.is_empty());
}

#[test]
fn depth_limit_cuts_deep_subtrees() {
    let mut html = String::from("<main>");
    for _ in 0..50 {
        html.push_str("<div>");
    }
    html.push_str("DEEP_TEXT");
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("<p>Shallow</p></main>");

    let result = extract_text(&html, &Options::default().with_max_depth(10));
    assert!(!result.content.contains("DEEP_TEXT"));
    assert!(result.content.starts_with("Shallow"));

    let result = extract_text(&html, &Options::default());
    assert!(result.content.starts_with("DEEP_TEXT"));
}

#[test]
fn target_element_is_extracted_alone() {
    let html = r#"
        <html><head><title>Page</title></head><body>
          <div id="a"><main><p>FIRST</p></main></div>
          <div id="b"><main><p>SECOND</p></main></div>
        </body></html>
    "#;

    let result = extract_text(html, &Options::default().with_target_element("#b"));
    assert_eq!(result.content, "SECOND\n\n## Metadata");
    assert!(result.metadata.is_empty());
}

#[test]
fn target_without_content_container_yields_empty_result() {
    let html = r#"<html><body><div class="post"><p>POST_TEXT</p></div></body></html>"#;

    let result = extract_text(html, &Options::default().with_target_element(".post"));
    assert_eq!(result, ExtractResult::default());
}

#[test]
fn target_that_is_itself_a_container_is_rendered() {
    let html = r#"<html><body><main><p>PAGE</p></main><article class="post"><p>POST_TEXT</p></article></body></html>"#;

    let result = extract_text(html, &Options::default().with_target_element(".post"));
    assert_eq!(result.content, "POST_TEXT\n\n## Metadata");
}

#[test]
fn missing_or_invalid_target_yields_empty_result() {
    let html = "<main><p>x</p></main>";
    for selector in ["#missing", "[[["] {
        let result = extract_text(html, &Options::default().with_target_element(selector));
        assert!(result.is_empty(), "{selector}: {}", result.content);
    }
}
