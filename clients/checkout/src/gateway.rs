use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PayUOrderResponse;

/// Outcome reported by the hosted checkout's response handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    pub status: String,
    #[serde(default)]
    pub txnid: Option<String>,
    #[serde(rename = "error_Message", default)]
    pub error_message: Option<String>,
}

impl CheckoutResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// The hosted checkout threw while launching
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Checkout exception: {0}")]
pub struct GatewayException(pub String);

/// Hosted checkout SDK (PayU Bolt in the browser)
///
/// `Ok` corresponds to Bolt's `responseHandler`, `Err` to `catchException`.
/// The SDK moves the money; its answer is the authoritative outcome.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn launch(&self, payload: &PayUOrderResponse)
        -> Result<CheckoutResponse, GatewayException>;
}
