use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::types::{PayUOrderResponse, PaymentOrderRequest};

pub const CREATE_ORDER_PATH: &str = "/api/create-payment-order";
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create PayU order";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Creates signed PayU orders on behalf of the payment form
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn create_payu_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> Result<PayUOrderResponse, ClientError>;
}

/// HTTP client for the checkout service
#[derive(Clone)]
pub struct CheckoutApiClient {
    base_url: String,
    http_client: Client,
}

impl CheckoutApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl OrderApi for CheckoutApiClient {
    async fn create_payu_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> Result<PayUOrderResponse, ClientError> {
        let url = format!("{}{}", self.base_url, CREATE_ORDER_PATH);
        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the service's own message; fall back when the body is not JSON
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

            tracing::warn!(status = status.as_u16(), %message, "create-order call rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PayUOrderResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
