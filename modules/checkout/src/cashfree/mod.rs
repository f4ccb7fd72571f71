pub mod error;
pub mod types;

use error::CashfreeError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::CashfreeConfig;
use types::{CashfreeOrder, CreateOrderRequest};

/// Main Cashfree PG API client
#[derive(Clone)]
pub struct CashfreeClient {
    config: Arc<CashfreeConfig>,
    http_client: Client,
}

impl CashfreeClient {
    /// Create a new Cashfree client with the given configuration
    pub fn new(config: CashfreeConfig) -> Result<Self, CashfreeError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CashfreeError::HttpError(e.to_string()))?;

        Ok(CashfreeClient {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Create an order and obtain its payment session
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CashfreeOrder, CashfreeError> {
        tracing::debug!(
            order_id = %request.order_id,
            amount = request.order_amount,
            "Creating Cashfree order"
        );

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header("x-client-id", &self.config.app_id)
            .header("x-client-secret", &self.config.secret_key)
            .header("x-api-version", &self.config.api_version)
            .json(request)
            .send()
            .await
            .map_err(|e| CashfreeError::HttpError(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle HTTP response and convert to appropriate type or error
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CashfreeError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| CashfreeError::ParseError(e.to_string()))
        } else {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            Err(CashfreeError::ApiError {
                status_code: status.as_u16(),
                content_type,
                body,
            })
        }
    }

    /// Get the config for return-url construction
    pub fn config(&self) -> &CashfreeConfig {
        &self.config
    }
}
