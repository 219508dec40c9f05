//! Static HTTP file host source.

use std::time::Duration;

use async_trait::async_trait;

use super::ContentSource;
use crate::error::{Result, VersoError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Serves a collection from a static file host over HTTP(S). Documents are
/// plain GETs against `<base>/<name>`; asset presence is probed with HEAD.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{}", self.base, name)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.base.clone()
    }

    async fn fetch(&self, name: &str) -> Result<String> {
        let url = self.url(name);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(VersoError::Source(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }
        Ok(response.text().await?)
    }

    async fn exists(&self, name: &str) -> bool {
        match self.client.head(self.url(name)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
