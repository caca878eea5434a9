use crate::config::SpiderConfig;
use crate::spiders::connect_to_webdriver;
use fantoccini::Client;
use fantoccini::error::CmdError;
use std::error::Error;
use tokio::time::timeout;

/// Start URL used when none is configured
pub const START_URL: &str = "https://dazzling-wisp-5199b3.netlify.app";

/// Runs the browser smoke session.
///
/// Opens a WebDriver session, loads the start URL, issues exactly one
/// follow-up request for the same URL (the response is discarded) and
/// closes the session. No extraction is performed and no record is
/// produced; this spider only verifies that a browser-driven page load
/// works end to end.
///
/// The session is closed on every path once it has been opened.
pub async fn run(config: &SpiderConfig) -> Result<(), Box<dyn Error>> {
    ::log::info!("Starting browser smoke session for: {}", config.start_url);

    let client = connect_to_webdriver(&config.webdriver_url)
        .await
        .ok_or("no WebDriver server reachable")?;

    let load_timeout = tokio::time::Duration::from_secs(config.page_load_timeout_secs);
    let result = match timeout(load_timeout, smoke_session(&client, &config.start_url)).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(format!("timeout loading {}", config.start_url).into()),
    };

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver client: {}", e);
    }

    result
}

/// Performs the initial page load and the single follow-up request
async fn smoke_session(client: &Client, start_url: &str) -> Result<(), CmdError> {
    client.goto(start_url).await?;
    ::log::debug!("Loaded start page: {}", start_url);

    // One follow-up request for the same URL; the response is discarded.
    client.goto(start_url).await?;
    ::log::debug!("Completed follow-up request: {}", start_url);

    Ok(())
}
