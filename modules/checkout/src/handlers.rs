use axum::http::{Method, StatusCode};
use chrono::Utc;
use serde_json::Value;

use crate::cashfree::error::CashfreeError;
use crate::cashfree::types::CreateOrderRequest;
use crate::cashfree::CashfreeClient;
use crate::config::PayUConfig;
use crate::error::CheckoutError;
use crate::models::{OrderSession, PayUOrderRequest, SignedPaymentPayload};
use crate::signing::{sign_payu_request, PayUHashFields};
use crate::validation::{validate_cashfree_request, validate_payu_request};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const ORDER_FAILED_MESSAGE: &str = "Failed to create order";

/// Handle a PayU create-order request
///
/// This handler:
/// 1. Rejects anything but POST
/// 2. Requires PAYU_KEY/PAYU_SALT before looking at the body
/// 3. Validates the body and signs a Bolt launch payload
///
/// No call is made to PayU; the browser hands the payload to Bolt.
pub fn create_payu_order(
    method: &Method,
    config: Option<&PayUConfig>,
    body: &[u8],
) -> Result<SignedPaymentPayload, CheckoutError> {
    tracing::info!("PayU create-order request received");

    if *method != Method::POST {
        return Err(CheckoutError::MethodNotAllowed);
    }

    let config = config.ok_or_else(|| {
        tracing::error!("PayU credentials are not configured");
        CheckoutError::ServerMisconfigured("PAYU_KEY or PAYU_SALT is missing.".to_string())
    })?;

    let request = parse_body(body)
        .and_then(|value| validate_payu_request(&value).map_err(Into::into))
        .map_err(|e| {
            tracing::warn!(reason = %e, "Rejected PayU create-order request");
            match e {
                BodyError::Validation(v) if !v.is_missing_fields() => {
                    CheckoutError::InvalidRequest(v.to_string())
                }
                _ => CheckoutError::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string()),
            }
        })?;

    let txnid = generate_txn_id();
    let payload = build_signed_payload(config, &request, txnid);

    tracing::info!(
        txn_id = %payload.txnid,
        amount = %payload.amount,
        "PayU payload signed"
    );

    Ok(payload)
}

/// Sign a validated request under the given transaction id
pub fn build_signed_payload(
    config: &PayUConfig,
    request: &PayUOrderRequest,
    txnid: String,
) -> SignedPaymentPayload {
    let fields = PayUHashFields {
        key: &config.key,
        txnid: &txnid,
        amount: &request.amount,
        productinfo: &request.productinfo,
        firstname: &request.firstname,
        email: &request.email,
        ..Default::default()
    };
    let hash = sign_payu_request(&fields, &config.salt);

    SignedPaymentPayload {
        key: config.key.clone(),
        txnid,
        amount: request.amount.clone(),
        productinfo: request.productinfo.clone(),
        firstname: request.firstname.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        surl: config.success_url.clone(),
        furl: config.failure_url.clone(),
        hash,
    }
}

/// Handle a Cashfree create-order request
///
/// Provider rejections are forwarded verbatim; transport failures become a
/// generic server error carrying the underlying error text.
pub async fn create_cashfree_order(
    method: &Method,
    client: Option<&CashfreeClient>,
    body: &[u8],
) -> Result<OrderSession, CheckoutError> {
    tracing::info!("Cashfree create-order request received");

    if *method != Method::POST {
        return Err(CheckoutError::MethodNotAllowed);
    }

    let client = client.ok_or_else(|| {
        tracing::error!("Cashfree credentials are not configured");
        CheckoutError::ServerMisconfigured(
            "CASHFREE_APP_ID or CASHFREE_SECRET_KEY is missing.".to_string(),
        )
    })?;

    let request = parse_body(body)
        .and_then(|value| validate_cashfree_request(&value).map_err(Into::into))
        .map_err(|e| {
            tracing::warn!(reason = %e, "Rejected Cashfree create-order request");
            CheckoutError::InvalidRequest(INVALID_INPUT_MESSAGE.to_string())
        })?;

    let order_id = generate_order_id();
    let return_url = client.config().return_url(&order_id);
    let order = CreateOrderRequest::for_patient(order_id, &request, return_url);

    match client.create_order(&order).await {
        Ok(created) => {
            let payment_session_id = created.payment_session_id.ok_or_else(|| {
                tracing::error!(order_id = %order.order_id, "Cashfree response lacks payment_session_id");
                CheckoutError::ServerError {
                    message: ORDER_FAILED_MESSAGE.to_string(),
                    detail: "missing payment_session_id in provider response".to_string(),
                }
            })?;

            tracing::info!(order_id = %order.order_id, "Cashfree order created");

            Ok(OrderSession {
                payment_session_id,
                order_id: created.order_id.unwrap_or(order.order_id),
            })
        }
        Err(CashfreeError::ApiError {
            status_code,
            content_type,
            body,
        }) => {
            tracing::warn!(
                order_id = %order.order_id,
                status = status_code,
                "Cashfree rejected order"
            );
            let status =
                StatusCode::from_u16(status_code).unwrap_or(StatusCode::BAD_GATEWAY);
            Err(CheckoutError::Provider {
                status,
                content_type,
                body,
            })
        }
        Err(e) => {
            tracing::error!(order_id = %order.order_id, error = %e, "Cashfree order call failed");
            Err(CheckoutError::ServerError {
                message: ORDER_FAILED_MESSAGE.to_string(),
                detail: e.to_string(),
            })
        }
    }
}

/// Timestamp-based PayU transaction id
pub fn generate_txn_id() -> String {
    format!("TXN{}", Utc::now().timestamp_millis())
}

/// Timestamp-based Cashfree order id
pub fn generate_order_id() -> String {
    format!("order_{}", Utc::now().timestamp_millis())
}

#[derive(Debug, thiserror::Error)]
enum BodyError {
    #[error("Body is not valid JSON: {0}")]
    Malformed(String),

    #[error(transparent)]
    Validation(#[from] crate::validation::ValidationError),
}

fn parse_body(body: &[u8]) -> Result<Value, BodyError> {
    serde_json::from_slice(body).map_err(|e| BodyError::Malformed(e.to_string()))
}
