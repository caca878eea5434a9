use clap::Parser;
use surface_crawler::config::SpiderConfig;
use surface_crawler::results::ExtractedPage;
use surface_crawler::spiders::{browser, surface};

mod args;
use args::{Args, SpiderArg};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return;
        }
    };

    println!("Note: spiders require a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    match args.spider {
        SpiderArg::Surface => run_surface(&config).await,
        SpiderArg::Browser => run_browser(&config).await,
    }
}

/// Runs the surface spider and writes its records to stdout
async fn run_surface(config: &SpiderConfig) {
    let mut rx = surface::start(config).await;

    let mut records = 0;
    let start_time = std::time::Instant::now();

    while let Some(page) = rx.recv().await {
        records += 1;
        emit_record(&page, records);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Scrape complete - emitted {} records in {:.2} seconds",
        records,
        duration.as_secs_f64()
    );
}

/// Writes one extracted record to stdout as a JSON line
fn emit_record(page: &ExtractedPage, count: usize) {
    ::log::info!("Extracted page {}: {}", count, page.source_url);
    ::log::debug!(
        "Page has {} links and {} images",
        page.links.len(),
        page.images.len()
    );

    match serde_json::to_string(page) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to serialize record for {}: {}", page.source_url, e),
    }
}

/// Runs the browser smoke spider
async fn run_browser(config: &SpiderConfig) {
    match browser::run(config).await {
        Ok(()) => ::log::info!("Browser smoke session completed"),
        Err(e) => ::log::error!("Browser smoke session failed: {}", e),
    }
}
