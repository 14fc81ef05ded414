use crate::core::client::ServiceClient;
use crate::core::parser::has_error;
use crate::domain::model::{Amount, CurrencyCode};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;

/// Asks the service to convert one unit of `code` into itself; the code is valid
/// when the reply carries no error. Costs one request per call.
pub async fn is_valid_currency<T: Transport, C: ConfigProvider>(
    client: &ServiceClient<T, C>,
    code: &CurrencyCode,
) -> Result<bool> {
    let one = Amount::new(1.0)?;
    let reply = client.query_service(code, code, one).await?;
    let valid = !has_error(&reply)?;
    tracing::debug!("Currency {} valid: {}", code, valid);
    Ok(valid)
}
