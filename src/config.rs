use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Configuration for a spider run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiderConfig {
    /// URL the spider starts from
    pub start_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Upper bound in seconds for a single page load (and extraction, where
    /// the spider performs one)
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,
}

impl SpiderConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            webdriver_url: default_webdriver_url(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Parse the start URL. Spiders require an absolute URL.
    pub fn parsed_start_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.start_url)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for page_load_timeout_secs
fn default_page_load_timeout_secs() -> u64 {
    45
}
