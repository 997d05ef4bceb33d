// Parse module tests.

use super::*;
use scraper::Html;

#[test]
fn test_extract_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "Test Page");
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = r#"<html><head><title>
        Test Page
    </title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "Test Page");
}

#[test]
fn test_extract_title_decodes_entities() {
    let html = r#"<html><head><title>Fish &amp; Chips</title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "Fish & Chips");
}

#[test]
fn test_extract_title_missing() {
    let html = r#"<html><head></head><body></body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "");
}

#[test]
fn test_extract_title_multiple_tags() {
    let html = r#"<html><head><title>First</title><title>Second</title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "First");
}

#[test]
fn test_extract_meta_description() {
    let html = r#"<html><head><meta name="description" content="  A page about tests.  "></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_meta_description(&document),
        Some("A page about tests.".to_string())
    );
}

#[test]
fn test_extract_meta_description_missing() {
    let html = r#"<html><head><meta name="keywords" content="a,b"></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_meta_description(&document), None);
}

#[test]
fn test_extract_canonical() {
    let html = r#"<html><head><link rel="canonical" href="https://example.com/page"></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_canonical(&document),
        Some("https://example.com/page".to_string())
    );

    let document = Html::parse_document("<html><head></head></html>");
    assert_eq!(extract_canonical(&document), None);
}

#[test]
fn test_extract_meta_map_first_wins_and_lowercases_keys() {
    let html = r#"<html><head>
        <meta name="Viewport" content="width=device-width">
        <meta property="og:title" content="First">
        <meta property="og:title" content="Second">
        <meta name="twitter:card" content="summary">
        <meta charset="utf-8">
    </head></html>"#;
    let document = Html::parse_document(html);
    let meta = extract_meta_map(&document);
    assert_eq!(meta.get("name:viewport").map(String::as_str), Some("width=device-width"));
    assert_eq!(meta.get("property:og:title").map(String::as_str), Some("First"));
    assert_eq!(meta.get("name:twitter:card").map(String::as_str), Some("summary"));
    assert_eq!(meta.len(), 3);
}

#[test]
fn test_extract_headings_document_order() {
    let html = r#"<html><body>
        <h2>Second level</h2>
        <h1> Main </h1>
        <h3>Third</h3>
        <h6>Sixth</h6>
    </body></html>"#;
    let document = Html::parse_document(html);
    let headings = extract_headings(&document);
    let levels: Vec<u8> = headings.iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec![2, 1, 3, 6]);
    assert_eq!(headings[1].1, " Main ");
}

#[test]
fn test_extract_images_keeps_absent_attributes_as_none() {
    let html = r#"<html><body>
        <img src="a.png" alt="A">
        <img src="b.png">
        <img alt="">
    </body></html>"#;
    let document = Html::parse_document(html);
    let images = extract_images(&document);
    assert_eq!(images.len(), 3);
    assert_eq!(images[0].alt.as_deref(), Some("A"));
    assert_eq!(images[1].alt, None);
    assert_eq!(images[2].src, None);
    assert_eq!(images[2].alt.as_deref(), Some(""));
}

#[test]
fn test_extract_anchors_includes_hrefless() {
    let html = r#"<html><body><a href="/a">A</a><a name="top">Top</a></body></html>"#;
    let document = Html::parse_document(html);
    let anchors = extract_anchors(&document);
    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors[0].href.as_deref(), Some("/a"));
    assert_eq!(anchors[1].href, None);
}

#[test]
fn test_extract_json_ld_blocks_case_insensitive_type() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type": "WebPage"}</script>
        <script TYPE="APPLICATION/LD+JSON">{"@type": "Article"}</script>
        <script type="text/javascript">var x = 1;</script>
        <script>console.log("no type")</script>
    </head></html>"#;
    let document = Html::parse_document(html);
    let blocks = extract_json_ld_blocks(&document);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("WebPage"));
    assert!(blocks[1].contains("Article"));
}

#[test]
fn test_extract_body_text_skips_scripts_and_styles() {
    let html = r#"<html><head><title>Ignored</title></head><body>
        <p>Hello</p><p>World</p>
        <script>var hidden = "nope";</script>
        <style>.x { color: red; }</style>
    </body></html>"#;
    let document = Html::parse_document(html);
    let text = extract_body_text(&document);
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(words, vec!["Hello", "World"]);
}

#[test]
fn test_extract_body_text_keeps_inline_markup_inside_words() {
    let html = r#"<html><body>
        <p>Le r<strong>é</strong>férencement naturel. See <a href="/guide">our guide</a>.</p>
    </body></html>"#;
    let document = Html::parse_document(html);
    let text = extract_body_text(&document);
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(
        words,
        vec!["Le", "référencement", "naturel.", "See", "our", "guide."]
    );
}

#[test]
fn test_extract_body_text_separates_blocks_and_line_breaks() {
    let html = r#"<html><body><ul><li>one</li><li>two</li></ul><div>three<br>four</div></body></html>"#;
    let document = Html::parse_document(html);
    let text = extract_body_text(&document);
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(words, vec!["one", "two", "three", "four"]);
}

#[test]
fn test_extract_page_facts_end_to_end() {
    let html = r#"<html><head>
        <title>Facts</title>
        <meta name="robots" content="index,follow">
        <meta property="og:image" content="https://example.com/og.png">
    </head><body><h1>Heading</h1><img src="x.png"><a href="/">Home</a></body></html>"#;
    let facts = extract_page_facts(html);
    assert_eq!(facts.title, "Facts");
    assert_eq!(facts.meta_name("robots"), Some("index,follow"));
    assert_eq!(facts.meta_name("ROBOTS"), Some("index,follow"));
    assert_eq!(facts.meta_property("og:image"), Some("https://example.com/og.png"));
    assert_eq!(facts.headings.len(), 1);
    assert_eq!(facts.images.len(), 1);
    assert_eq!(facts.anchors.len(), 1);
    assert!(facts.json_ld_blocks.is_empty());
    assert!(facts.body_text.contains("Heading"));
}

#[test]
fn test_extract_page_facts_empty_document() {
    let facts = extract_page_facts("");
    assert_eq!(facts.title, "");
    assert!(facts.meta.is_empty());
    assert!(facts.headings.is_empty());
    assert_eq!(facts.body_text.trim(), "");
}
