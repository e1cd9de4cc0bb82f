use ego_tree::NodeRef;
use engine_logging::engine_debug;
use scraper::node::Node;
use scraper::{Html, Selector};
use url::Url;

/// Walks a parsed document in tree order and reports each `<a>` element's
/// resolved href, the way a browser's `anchor.href` reads.
#[derive(Debug, Clone, Default)]
pub struct AnchorScanner {
    document_url: Option<Url>,
}

impl AnchorScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `document_url` is the address the page was loaded from; `<base href>`
    /// resolves against it and relative hrefs resolve against the result.
    pub fn with_document_url(document_url: Option<Url>) -> Self {
        Self { document_url }
    }

    /// Every anchor's href in document order, duplicates included.
    pub fn scan(&self, html: &str) -> Vec<String> {
        let mut hrefs = Vec::new();
        self.scan_each(html, |href| hrefs.push(href));
        hrefs
    }

    /// Streams every anchor's href, in document order, into `on_anchor`.
    pub fn scan_each<F: FnMut(String)>(&self, html: &str, mut on_anchor: F) -> usize {
        let document = Html::parse_document(html);
        let base = document_base(&document, self.document_url.as_ref());
        engine_debug!(
            "Scanning anchors with base {}",
            base.as_ref().map_or("<none>", Url::as_str)
        );

        let mut count = 0;
        // Explicit stack keeps deeply nested markup off the call stack.
        let mut stack: Vec<NodeRef<'_, Node>> = vec![document.tree.root()];
        while let Some(node) = stack.pop() {
            if let Node::Element(element) = node.value() {
                match element.name() {
                    "a" => {
                        count += 1;
                        on_anchor(resolve_href(element.attr("href"), base.as_ref()));
                    }
                    // Template contents are inert and not part of the document.
                    "template" => continue,
                    _ => {}
                }
            }
            stack.extend(node.children().rev());
        }
        count
    }
}

/// Document base URL: the first `<base href>` resolved against the document
/// URL, falling back to the document URL itself.
fn document_base(document: &Html, document_url: Option<&Url>) -> Option<Url> {
    let declared = Selector::parse("base[href]").ok().and_then(|base_sel| {
        document
            .select(&base_sel)
            .next()
            .and_then(|base| base.value().attr("href"))
            .and_then(|href| parse_with_base(href, document_url))
    });
    declared.or_else(|| document_url.cloned())
}

/// `anchor.href` semantics: missing attribute reads as `""`; an href that
/// cannot be resolved reads as its raw attribute value.
fn resolve_href(raw: Option<&str>, base: Option<&Url>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match parse_with_base(raw, base) {
        Some(url) => url.into(),
        None => raw.to_string(),
    }
}

fn parse_with_base(reference: &str, base: Option<&Url>) -> Option<Url> {
    match base {
        Some(base) => base.join(reference).ok(),
        None => Url::parse(reference).ok(),
    }
}
