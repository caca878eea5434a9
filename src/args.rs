use clap::{Parser, ValueEnum};
use std::error::Error;
use surface_crawler::config::SpiderConfig;
use surface_crawler::spiders::{browser, surface};

#[derive(Parser, Debug)]
#[command(name = "surface-crawler")]
#[command(about = "Single-page scraping spiders driven by a WebDriver session")]
#[command(version)]
pub struct Args {
    /// Spider to run
    #[arg(short, long, value_enum, default_value_t = SpiderArg::Surface)]
    pub spider: SpiderArg,

    /// Override the spider's start URL
    #[arg(long)]
    pub start_url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the WebDriver server URL
    #[arg(long)]
    pub webdriver_url: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpiderArg {
    /// Fetch one page and extract links, link texts, text nodes and images
    Surface,
    /// Load one page in a browser session and issue a single follow-up request
    Browser,
}

/// Builds the effective spider configuration from CLI arguments.
///
/// Precedence for the WebDriver URL: config file, then the command-line
/// flag, then the WEBDRIVER_URL environment variable.
pub fn resolve_config(args: &Args) -> Result<SpiderConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SpiderConfig::from_file(path)?,
        None => SpiderConfig::new(match args.spider {
            SpiderArg::Surface => surface::START_URL,
            SpiderArg::Browser => browser::START_URL,
        }),
    };

    if let Some(url) = &args.start_url {
        config.start_url = url.clone();
    }
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    if let Ok(url) = std::env::var("WEBDRIVER_URL") {
        if !url.is_empty() {
            config.webdriver_url = url;
        }
    }

    // Spiders require an absolute start URL
    config.parsed_start_url()?;

    Ok(config)
}
