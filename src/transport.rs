use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Performs one blocking GET for an endpoint path and hands back the raw body.
pub trait Transport {
    fn fetch(&self, path: &str) -> Result<String, TransportError>;
}

/// `reqwest`-backed transport rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::from_config(&ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, path: &str) -> Result<String, TransportError> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Report the status line, e.g. "HTTP/1.1 404 Not Found"
            let line = format!("{:?} {}", response.version(), status);
            debug!("GET {} failed: {}", url, line);
            return Err(TransportError::new(line));
        }

        response.text().map_err(|e| TransportError::new(e.to_string()))
    }
}
