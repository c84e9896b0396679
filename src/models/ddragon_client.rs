use log::{error, info};
use reqwest::Client;

use crate::config::Config;
use crate::Result;

/// Blocking-in-spirit GET access to upstream: callers await every request
/// before issuing the next one.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get_text(&self, url: &str) -> Result<String>;

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let res = self.get_text(url).await?;

        Ok(serde_json::from_str(&res)?)
    }
}

impl<T: Fetch + ?Sized> Fetch for &T {
    async fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url).await
    }
}

#[derive(Debug)]
pub struct DDragonClient {
    client: Client,
}

impl DDragonClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(DDragonClient { client })
    }

    async fn send(&self, url: &str) -> reqwest::Result<String> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl Fetch for DDragonClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        match self.send(url).await {
            Ok(res) => {
                info!("Connected to: {}", url);
                Ok(res)
            }
            Err(e) if e.is_timeout() => {
                error!("Request timed out: {}", url);
                Err(e.into())
            }
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
pub mod stub {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::Fetch;
    use crate::models::errors::{ErrorKind, ExtractorError};
    use crate::Result;

    /// Canned upstream: url -> body, remembering every url requested.
    #[derive(Debug, Default)]
    pub struct StubFetch {
        bodies: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl StubFetch {
        pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.bodies.insert(url.into(), body.into());
            self
        }

        pub fn with_json(self, url: impl Into<String>, value: serde_json::Value) -> Self {
            self.with(url, value.to_string())
        }

        pub fn calls(&self) -> usize {
            self.requested.borrow().len()
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl Fetch for StubFetch {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_owned());

            self.bodies.get(url).cloned().ok_or_else(|| {
                ExtractorError::new(ErrorKind::Transport, format!("404 Not Found: {}", url))
            })
        }
    }
}
