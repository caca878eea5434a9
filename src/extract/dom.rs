use scraper::{Html, Selector};

/// Read-only query view over a parsed HTML page.
///
/// Callers select elements with a CSS selector and read either a named
/// attribute or text content; the parsing library never leaks past this
/// module.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document.
    ///
    /// Parsing never fails: malformed input is error-corrected by the HTML5
    /// parser, and an empty input yields a document with an empty body.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Collects the named attribute of every element matching `selector`,
    /// verbatim and in document order. Elements lacking the attribute are
    /// skipped entirely.
    pub fn attr_values(&self, selector: &str, attr: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        self.html
            .select(&selector)
            .filter_map(|e| e.value().attr(attr))
            .map(|s| s.to_string())
            .collect()
    }

    /// Collects the direct child text nodes of every element matching
    /// `selector`, verbatim and in document order. Text nested in child
    /// elements is not collected, and elements with no text node contribute
    /// no entry.
    pub fn text_children(&self, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        self.html
            .select(&selector)
            .flat_map(|e| e.children())
            .filter_map(|node| node.value().as_text())
            .map(|t| t.text.to_string())
            .collect()
    }

    /// Collects every text node under the document body, verbatim and in
    /// document order. Nothing is filtered: whitespace-only nodes and
    /// script/style text are included.
    pub fn body_text_nodes(&self) -> Vec<String> {
        let selector = Selector::parse("body").unwrap();
        self.html
            .select(&selector)
            .flat_map(|body| body.text())
            .map(|s| s.to_string())
            .collect()
    }
}
