use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Fetches a URL and hands back the body as text. Non-success statuses are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &Url) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
}
