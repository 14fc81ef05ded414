use crate::domain::model::{Amount, CurrencyCode};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{FxError, Result};
use url::Url;

/// Builds conversion queries and sends them through a [`Transport`].
pub struct ServiceClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> ServiceClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint with `src`, `dst`, `amt` and `key` appended as query parameters.
    pub fn build_url(&self, src: &CurrencyCode, dst: &CurrencyCode, amount: Amount) -> Result<Url> {
        let mut url =
            Url::parse(self.config.endpoint()).map_err(|e| FxError::InvalidConfigValue {
                field: "endpoint".to_string(),
                value: self.config.endpoint().to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        url.query_pairs_mut()
            .append_pair("src", src.as_str())
            .append_pair("dst", dst.as_str())
            .append_pair("amt", &amount.to_string())
            .append_pair("key", self.config.api_key());

        Ok(url)
    }

    /// One request, raw reply text back. Transport failures are returned as-is.
    pub async fn query_service(
        &self,
        src: &CurrencyCode,
        dst: &CurrencyCode,
        amount: Amount,
    ) -> Result<String> {
        let url = self.build_url(src, dst, amount)?;
        tracing::debug!(
            "Querying {} for {} {} -> {}",
            self.config.endpoint(),
            amount,
            src,
            dst
        );

        let body = self.transport.get_text(&url).await?;
        tracing::debug!("Service replied with {} bytes", body.len());
        Ok(body)
    }
}
