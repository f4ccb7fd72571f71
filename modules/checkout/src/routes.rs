use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cashfree::error::CashfreeError;
use crate::cashfree::CashfreeClient;
use crate::config::{Config, Gateway, PayUConfig};
use crate::error::CheckoutError;
use crate::handlers::{create_cashfree_order, create_payu_order};
use crate::middleware::tracing::trace_id_middleware;
use crate::models::{OrderSession, SignedPaymentPayload};

/// Shared, immutable per-process state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub payu: Option<PayUConfig>,
    pub cashfree: Option<CashfreeClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, CashfreeError> {
        let cashfree = config
            .cashfree
            .clone()
            .map(CashfreeClient::new)
            .transpose()?;

        Ok(AppState {
            gateway: config.gateway,
            payu: config.payu.clone(),
            cashfree,
        })
    }
}

pub fn checkout_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // Answered by whichever gateway PAYMENT_GATEWAY selects
        .route("/api/create-payment-order", any(create_payment_order))
        .route("/api/payu/create-payment-order", any(payu_create_order))
        .route("/api/cashfree/create-payment-order", any(cashfree_create_order))
        .with_state(state)
        .layer(middleware::from_fn(trace_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// GET /api/health
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "checkout-rs",
        "version": env!("CARGO_PKG_VERSION"),
        "gateway": state.gateway.as_str(),
    }))
}

/// ANY /api/create-payment-order
async fn create_payment_order(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    match state.gateway {
        Gateway::PayU => payu_create_order(State(state), method, body)
            .await
            .into_response(),
        Gateway::Cashfree => cashfree_create_order(State(state), method, body)
            .await
            .into_response(),
    }
}

/// ANY /api/payu/create-payment-order
async fn payu_create_order(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<SignedPaymentPayload>, CheckoutError> {
    create_payu_order(&method, state.payu.as_ref(), &body).map(Json)
}

/// ANY /api/cashfree/create-payment-order
async fn cashfree_create_order(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<OrderSession>, CheckoutError> {
    create_cashfree_order(&method, state.cashfree.as_ref(), &body)
        .await
        .map(Json)
}
