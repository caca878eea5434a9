use crate::extract::dom::Document;
use crate::results::ExtractedPage;
use url::Url;

/// Extracts the four field collections from a fetched page.
///
/// Pure function of `document`: no network access, no mutation, and
/// deterministic document ordering. Nothing is filtered, trimmed, resolved
/// against `source_url`, or deduplicated; a document with no matching
/// elements yields empty sequences for every field.
///
/// `links` and `link_texts` are collected independently and can differ in
/// length (an anchor wrapping only an image has an `href` but no text node).
pub fn extract(document: &Document, source_url: &Url) -> ExtractedPage {
    let links = document.attr_values("a", "href");
    let link_texts = document.text_children("a");
    let texts = document.body_text_nodes();
    let images = document.attr_values("img", "src");

    ::log::debug!(
        "Extracted {} links, {} text nodes, {} images from {}",
        links.len(),
        texts.len(),
        images.len(),
        source_url
    );

    ExtractedPage {
        source_url: source_url.to_string(),
        links,
        link_texts,
        texts,
        images,
    }
}
