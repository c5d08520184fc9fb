use std::io::Read;
use std::time::Duration;

use crate::error::{FetchErrorKind, Result, TldError};

use super::LineSource;

/// IANA's authoritative TLD list
pub const DEFAULT_SOURCE_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Default timeout for the whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the list over HTTP(S) with a single blocking request
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub url: String,
    pub timeout: Duration,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom list URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn fetch(&self) -> Result<String> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build()
            .into();

        let response = agent.get(&self.url).call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => TldError::FetchError {
                kind: FetchErrorKind::Status,
                message: format!("{} returned HTTP {}", self.url, code),
            },
            other => TldError::FetchError {
                kind: FetchErrorKind::Transport,
                message: format!("Request to {} failed: {}", self.url, other),
            },
        })?;

        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| TldError::FetchError {
                kind: FetchErrorKind::Body,
                message: format!("Failed to read response from {}: {}", self.url, e),
            })?;

        Ok(text)
    }
}

impl LineSource for HttpSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        log::info!("Downloading TLD list from {}", self.url);
        let text = self.fetch()?;
        let lines: Vec<String> = text.lines().map(String::from).collect();
        log::info!("Downloaded {} lines", lines.len());
        Ok(lines)
    }
}
