use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use thiserror::Error;

use crate::config::Config;

pub use self::xml::Element;

pub mod xml;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("failed to parse XML: {0}")]
    Parse(#[from] xml::ParseError),
}

/// Where shelf feeds come from. `None` means "skip this feed".
pub trait FeedSource {
    fn fetch(&self, url: &str) -> Option<Element>;
}

pub struct HttpFeed {
    client: Client,
    user_agent: String,
}

impl HttpFeed {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(HttpFeed {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn get(&self, url: &str) -> Result<Element, FetchError> {
        let res = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = res.bytes()?;
        Ok(xml::parse(&body)?)
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&self, url: &str) -> Option<Element> {
        info!("Fetching: {}", url);

        match self.get(url) {
            Ok(root) => Some(root),
            Err(err) => {
                warn!("Failed to fetch feed from {}: {}", url, err);
                None
            }
        }
    }
}
