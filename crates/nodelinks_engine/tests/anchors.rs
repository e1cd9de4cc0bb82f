use nodelinks_engine::AnchorScanner;
use pretty_assertions::assert_eq;
use url::Url;

fn scan(html: &str, document_url: Option<&str>) -> Vec<String> {
    let document_url = document_url.map(|u| Url::parse(u).unwrap());
    AnchorScanner::with_document_url(document_url).scan(html)
}

#[test]
fn anchors_are_reported_in_document_order() {
    let html = r#"
    <html><body>
        <div><a href="https://a.example/1">one</a>
            <p><a href="https://a.example/2">two</a></p>
        </div>
        <a href="https://a.example/3">three</a>
    </body></html>
    "#;
    assert_eq!(
        scan(html, None),
        vec![
            "https://a.example/1".to_string(),
            "https://a.example/2".to_string(),
            "https://a.example/3".to_string(),
        ]
    );
}

#[test]
fn duplicates_are_left_for_the_caller() {
    let html = r#"<a href="https://www.commonsense.org/node/999">x</a><a href="https://www.commonsense.org/node/999">y</a>"#;
    assert_eq!(scan(html, None).len(), 2);
}

#[test]
fn relative_hrefs_resolve_against_the_document_url() {
    let html = r#"<a href="/url?q=https://www.commonsense.org/node/1234&amp;sa=U">r</a>"#;
    assert_eq!(
        scan(html, Some("https://www.google.com/search?q=site%3Acommonsense.org")),
        vec!["https://www.google.com/url?q=https://www.commonsense.org/node/1234&sa=U".to_string()]
    );
}

#[test]
fn base_element_overrides_the_document_url() {
    let html = r#"<html><head><base href="https://www.commonsense.org/"></head>
        <body><a href="node/77#reviews">r</a></body></html>"#;
    assert_eq!(
        scan(html, Some("file:///tmp/saved.html")),
        vec!["https://www.commonsense.org/node/77#reviews".to_string()]
    );
}

#[test]
fn relative_base_element_resolves_against_the_document_url() {
    let html = r#"<base href="/education/"><a href="reviews">r</a>"#;
    assert_eq!(
        scan(html, Some("https://www.commonsense.org/node/5")),
        vec!["https://www.commonsense.org/education/reviews".to_string()]
    );
}

#[test]
fn unresolvable_hrefs_read_as_raw_attribute() {
    let html = r#"<a href="/url?q=https://www.commonsense.org/node/8&amp;sa=D">r</a>"#;
    assert_eq!(
        scan(html, None),
        vec!["/url?q=https://www.commonsense.org/node/8&sa=D".to_string()]
    );
}

#[test]
fn anchors_without_href_read_as_empty() {
    let html = r#"<a name="top">anchor</a><a href="https://a.example/">link</a>"#;
    assert_eq!(
        scan(html, None),
        vec![String::new(), "https://a.example/".to_string()]
    );
}

#[test]
fn template_contents_are_skipped() {
    let html = r#"<template><a href="https://hidden.example/">h</a></template>
        <a href="https://shown.example/">s</a>"#;
    assert_eq!(scan(html, None), vec!["https://shown.example/".to_string()]);
}

#[test]
fn absolute_hrefs_are_serialized_like_a_browser() {
    let html = r#"<a href="  HTTPS://WWW.CommonSense.org/node/12  ">r</a>"#;
    assert_eq!(
        scan(html, None),
        vec!["https://www.commonsense.org/node/12".to_string()]
    );
}

#[test]
fn scan_each_counts_every_anchor() {
    let html = r#"<a>a</a><a href="x">b</a><p>no link</p>"#;
    let mut seen = Vec::new();
    let count = AnchorScanner::new().scan_each(html, |href| seen.push(href));
    assert_eq!(count, 2);
    assert_eq!(seen.len(), 2);
}

#[test]
fn document_without_anchors_yields_nothing() {
    assert!(scan("<html><body><p>plain</p></body></html>", None).is_empty());
    assert!(scan("", None).is_empty());
}
