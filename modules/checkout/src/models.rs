use serde::{Deserialize, Serialize};

// ============================================================================
// PAYU
// ============================================================================

/// Validated PayU order request
///
/// `amount` keeps the exact text the caller sent; it is signed and echoed
/// back verbatim so PayU recomputes the same digest.
#[derive(Debug, Clone, PartialEq)]
pub struct PayUOrderRequest {
    pub amount: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub productinfo: String,
}

/// Signed Bolt launch payload returned to the browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedPaymentPayload {
    pub key: String,
    pub txnid: String,
    pub amount: String,
    pub productinfo: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub surl: String,
    pub furl: String,
    pub hash: String,
}

// ============================================================================
// CASHFREE
// ============================================================================

/// Validated Cashfree order request
#[derive(Debug, Clone, PartialEq)]
pub struct CashfreeOrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
}

/// Session handed back to the browser after Cashfree accepts an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSession {
    pub payment_session_id: String,
    pub order_id: String,
}

// ============================================================================
// ERRORS
// ============================================================================

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
