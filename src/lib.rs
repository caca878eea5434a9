//! Single-page scraping spiders driven by a WebDriver session.
//!
//! Two unrelated spiders live here:
//!
//! - the **surface spider** fetches one page and extracts links, link texts,
//!   text nodes and image URLs into an [`ExtractedPage`] record;
//! - the **browser smoke spider** loads one page, issues a single follow-up
//!   request and closes the session, with no extraction.
//!
//! The extraction core ([`extract::extract`]) is a pure function over a
//! parsed [`Document`]; all fetching happens in the spider runners.

pub mod config;
pub mod extract;
pub mod results;
pub mod spiders;

// Re-export commonly used types for convenience
pub use extract::{Document, extract};
pub use results::ExtractedPage;
