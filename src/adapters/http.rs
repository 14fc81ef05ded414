use crate::domain::ports::Transport;
use crate::utils::error::{FxError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// `Transport` over reqwest with the client's default timeouts and no retries.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// The URL without its query string, so the API key stays out of logs and errors.
fn redacted(url: &Url) -> String {
    let mut bare = url.clone();
    bare.set_query(None);
    bare.to_string()
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_text(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = response.status();
        tracing::debug!("Service response status: {}", status);

        if !status.is_success() {
            return Err(FxError::HttpStatus {
                status: status.as_u16(),
                endpoint: redacted(url),
            });
        }

        let body = response.text().await.map_err(|e| e.without_url())?;
        Ok(body)
    }
}
