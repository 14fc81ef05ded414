use crate::core::client::ServiceClient;
use crate::core::parser::leading_amount;
use crate::core::validator::is_valid_currency;
use crate::domain::model::{Amount, CurrencyCode, ExchangeOutcome, ExchangeReport, ServiceResponse};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{FxError, Result};

pub struct ExchangeEngine<T: Transport, C: ConfigProvider> {
    client: ServiceClient<T, C>,
}

impl<T: Transport, C: ConfigProvider> ExchangeEngine<T, C> {
    pub fn new(client: ServiceClient<T, C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ServiceClient<T, C> {
        &self.client
    }

    pub async fn is_valid_currency(&self, code: &CurrencyCode) -> Result<bool> {
        is_valid_currency(&self.client, code).await
    }

    async fn require_valid(&self, code: &CurrencyCode) -> Result<()> {
        if self.is_valid_currency(code).await? {
            Ok(())
        } else {
            Err(FxError::UnsupportedCurrency {
                code: code.to_string(),
            })
        }
    }

    /// Converts `amount` of `src` into `dst`.
    ///
    /// Both codes are checked with the service first, so a conversion costs three
    /// requests. A code the service does not know is an `UnsupportedCurrency` error;
    /// an error message on the conversion itself comes back as
    /// [`ExchangeOutcome::Rejected`].
    pub async fn exchange(
        &self,
        src: &CurrencyCode,
        dst: &CurrencyCode,
        amount: Amount,
    ) -> Result<ExchangeOutcome> {
        self.require_valid(src).await?;
        self.require_valid(dst).await?;

        let reply = self.client.query_service(src, dst, amount).await?;
        let response = ServiceResponse::parse(&reply)?;

        if response.has_error() {
            tracing::warn!("Service refused {} {} -> {}: {}", amount, src, dst, response.error);
            return Ok(ExchangeOutcome::Rejected {
                message: response.error,
            });
        }

        let value = leading_amount(&response.dst)?;
        tracing::info!("{} {} -> {} {}", amount, src, value, dst);
        Ok(ExchangeOutcome::Converted {
            value,
            description: response.dst,
        })
    }

    /// [`exchange`](Self::exchange) wrapped together with its inputs for display.
    pub async fn report(
        &self,
        src: CurrencyCode,
        dst: CurrencyCode,
        amount: Amount,
    ) -> Result<ExchangeReport> {
        let outcome = self.exchange(&src, &dst, amount).await?;
        Ok(ExchangeReport {
            src,
            dst,
            amount,
            outcome,
        })
    }
}
