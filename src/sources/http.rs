// HTTP fetcher for remote plugin lists

use crate::error::{Error, Result};
use crate::sources::fetcher::ListFetcher;
use crate::ui;
use log::debug;
use reqwest::{Client, Response};
use std::sync::OnceLock;

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("customize-build/", env!("CARGO_PKG_VERSION"));

/// Fetches plugin lists over HTTP(S) with a shared client.
///
/// The client is built on the first fetch, so runs that only read local
/// files never construct one.
#[derive(Default)]
pub struct HttpFetcher {
    client: OnceLock<Client>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, url: &str) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| unreachable_source(url, e))?;
        Ok(self.client.get_or_init(|| client))
    }

    async fn get(&self, url: &str) -> Result<Response> {
        self.client(url)?
            .get(url)
            .send()
            .await
            .map_err(|e| unreachable_source(url, e))
    }
}

fn unreachable_source(url: &str, err: reqwest::Error) -> Error {
    Error::SourceUnreachable {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait::async_trait]
impl ListFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let pb = ui::spinner(&format!("Fetching {}", url));

        let result = async {
            let response = self.get(url).await?;

            if !response.status().is_success() {
                return Err(Error::SourceUnreachable {
                    url: url.to_string(),
                    reason: format!("HTTP {}", response.status()),
                });
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| unreachable_source(url, e))?;
            Ok::<Vec<u8>, Error>(bytes.to_vec())
        }
        .await;

        match &result {
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), url);
                ui::clear_bar(&pb);
            }
            Err(e) => ui::finish_spinner_error(&pb, &e.to_string()),
        }

        result
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
