use crate::extract::{Document, extract};
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    fn source_url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_basic_extraction() {
        let document = Document::parse(r#"<body><a href="/x">Go</a><img src="/i.png"></body>"#);
        let page = extract(&document, &source_url());

        assert_eq!(page.source_url, "https://example.com/");
        assert_eq!(page.links, vec!["/x"]);
        assert_eq!(page.link_texts, vec!["Go"]);
        assert_eq!(page.texts, vec!["Go"]);
        assert_eq!(page.images, vec!["/i.png"]);
    }

    #[test]
    fn test_no_anchors_and_no_images_yield_empty_fields() {
        let document = Document::parse("<body><p>Just a paragraph.</p></body>");
        let page = extract(&document, &source_url());

        assert!(page.links.is_empty());
        assert!(page.link_texts.is_empty());
        assert!(page.images.is_empty());
        assert_eq!(page.texts, vec!["Just a paragraph."]);
    }

    #[test]
    fn test_empty_document_yields_empty_fields() {
        let document = Document::parse("");
        let page = extract(&document, &source_url());

        assert!(page.links.is_empty());
        assert!(page.link_texts.is_empty());
        assert!(page.texts.is_empty());
        assert!(page.images.is_empty());
        assert_eq!(page.source_url, "https://example.com/");
    }

    #[test]
    fn test_anchor_without_href_is_omitted_from_links() {
        let document = Document::parse(r#"<body><a>no target</a><a href="/x">Go</a></body>"#);
        let page = extract(&document, &source_url());

        // No placeholder entry for the attribute-less anchor.
        assert_eq!(page.links, vec!["/x"]);
        // Both anchors still contribute their text.
        assert_eq!(page.link_texts, vec!["no target", "Go"]);
    }

    #[test]
    fn test_image_without_src_is_omitted() {
        let document =
            Document::parse(r#"<body><img alt="decorative"><img src="/i.png"></body>"#);
        let page = extract(&document, &source_url());
        assert_eq!(page.images, vec!["/i.png"]);
    }

    #[test]
    fn test_image_only_anchor_makes_counts_diverge() {
        let document = Document::parse(
            r#"<body><a href="/x"><img src="/i.png"></a><a href="/y">Next</a></body>"#,
        );
        let page = extract(&document, &source_url());

        // The image-wrapping anchor contributes an href but no text node.
        assert_eq!(page.links, vec!["/x", "/y"]);
        assert_eq!(page.link_texts, vec!["Next"]);
        assert_eq!(page.images, vec!["/i.png"]);
    }

    #[test]
    fn test_links_are_kept_verbatim() {
        let document = Document::parse(
            r##"<body><a href="relative/page">R</a><a href="#section">F</a><a href="">E</a></body>"##,
        );
        let page = extract(&document, &source_url());

        // Relative, fragment-only and empty values are not resolved against
        // the source URL or dropped.
        assert_eq!(page.links, vec!["relative/page", "#section", ""]);
    }

    #[test]
    fn test_texts_follow_document_order() {
        let document = Document::parse("<body><p>A</p><p>B</p></body>");
        let page = extract(&document, &source_url());
        assert_eq!(page.texts, vec!["A", "B"]);

        let reordered = Document::parse("<body><p>B</p><p>A</p></body>");
        let page = extract(&reordered, &source_url());
        assert_eq!(page.texts, vec!["B", "A"]);
    }

    #[test]
    fn test_whitespace_text_nodes_are_kept() {
        let document = Document::parse("<body><a href=\"/x\">Go</a> <img src=\"/i.png\"></body>");
        let page = extract(&document, &source_url());
        assert_eq!(page.texts, vec!["Go", " "]);
    }

    #[test]
    fn test_script_text_is_part_of_the_walk() {
        let document = Document::parse("<body><p>Visible</p><script>var x = 1;</script></body>");
        let page = extract(&document, &source_url());
        assert_eq!(page.texts, vec!["Visible", "var x = 1;"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let document = Document::parse(
            r#"<body><a href="/x">Go</a><p>Text</p><img src="/i.png"></body>"#,
        );
        let first = extract(&document, &source_url());
        let second = extract(&document, &source_url());
        assert_eq!(first, second);
    }
}
