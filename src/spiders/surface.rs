use crate::config::SpiderConfig;
use crate::extract::{self, Document};
use crate::results::ExtractedPage;
use crate::spiders::connect_to_webdriver;
use fantoccini::Client;
use tokio::sync::mpsc;
use tokio::time::timeout;
use url::Url;

/// Start URL used when none is configured
pub const START_URL: &str = "https://www.selenium.dev";

/// Starts the surface spider and returns a receiver that yields the
/// extracted record.
///
/// The spider fetches exactly one page: it navigates the WebDriver session
/// to the start URL, reads the page source, runs extraction over it and
/// sends the resulting [`ExtractedPage`] on the channel. Link-following is
/// out of scope, so the channel closes after at most one record; on any
/// WebDriver failure it closes empty.
pub async fn start(config: &SpiderConfig) -> mpsc::Receiver<ExtractedPage> {
    ::log::info!("Starting surface spider for: {}", config.start_url);

    let start_url = Url::parse(&config.start_url).expect("Invalid start URL");
    let webdriver_url = config.webdriver_url.clone();
    let load_timeout = tokio::time::Duration::from_secs(config.page_load_timeout_secs);

    let (result_tx, result_rx) = mpsc::channel::<ExtractedPage>(16);

    tokio::spawn(async move {
        let Some(client) = connect_to_webdriver(&webdriver_url).await else {
            return;
        };

        let fetch_start = std::time::Instant::now();
        let scraped = match timeout(load_timeout, fetch_and_extract(&client, &start_url)).await {
            Ok(result) => result,
            Err(_) => {
                ::log::error!("Timeout scraping: {}", start_url);
                None
            }
        };

        if let Some(page) = scraped {
            let elapsed = fetch_start.elapsed().as_secs_f64();
            ::log::debug!("Processed {} in {:.2} seconds", start_url, elapsed);

            if let Err(e) = result_tx.send(page).await {
                ::log::error!("Failed to send result: {}", e);
            }
        } else {
            ::log::error!("Failed to scrape: {}", start_url);
        }

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver client: {}", e);
        }
    });

    result_rx
}

/// Navigates to the URL and runs extraction over the fetched page source
async fn fetch_and_extract(client: &Client, url: &Url) -> Option<ExtractedPage> {
    if let Err(e) = client.goto(url.as_str()).await {
        return handle_navigation_error(e, "accessing", url);
    }

    let html = match client.source().await {
        Ok(source) => source,
        Err(e) => return handle_navigation_error(e, "getting source for", url),
    };

    let document = Document::parse(&html);
    Some(extract::extract(&document, url))
}

/// Handles errors that occur during navigation or page source retrieval
fn handle_navigation_error(
    error: fantoccini::error::CmdError,
    context: &str,
    url: &Url,
) -> Option<ExtractedPage> {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed to {} {}: {}", context, url, error);
    }
    None
}
