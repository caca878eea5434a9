use serde::{Deserialize, Serialize};

/// Record produced for each fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Absolute URL the page was fetched from
    pub source_url: String,

    /// Raw `href` attribute of every anchor, in document order.
    /// Anchors without the attribute contribute no entry.
    pub links: Vec<String>,

    /// Anchor text, one entry per direct child text node of each anchor,
    /// in document order. Anchors with no text node contribute no entry,
    /// so this sequence and `links` can differ in length.
    pub link_texts: Vec<String>,

    /// Every text node under the document body, in document order,
    /// unfiltered (whitespace-only nodes included)
    pub texts: Vec<String>,

    /// Raw `src` attribute of every image, in document order.
    /// Images without the attribute contribute no entry.
    pub images: Vec<String>,
}
