#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use checkout_rs::cashfree::CashfreeClient;
use checkout_rs::config::{CashfreeConfig, Gateway, PayUConfig};
use checkout_rs::{checkout_router, AppState};
use http_body_util::BodyExt;
use std::sync::Arc;

pub const PAYU_KEY: &str = "gtKFFx";
pub const PAYU_SALT: &str = "eCwWELxi";

pub fn payu_config() -> PayUConfig {
    PayUConfig {
        key: PAYU_KEY.to_string(),
        salt: PAYU_SALT.to_string(),
        success_url: "https://clinic.example/payment-success".to_string(),
        failure_url: "https://clinic.example/payment-failure".to_string(),
    }
}

pub fn cashfree_config(api_url: &str) -> CashfreeConfig {
    CashfreeConfig {
        app_id: "app_123".to_string(),
        secret_key: "secret_456".to_string(),
        api_url: api_url.to_string(),
        api_version: "2023-08-01".to_string(),
        return_url_template: "https://clinic.example/payment-status?order_id={order_id}"
            .to_string(),
    }
}

/// Build the router with explicit gateway state.
pub fn app(
    gateway: Gateway,
    payu: Option<PayUConfig>,
    cashfree: Option<CashfreeConfig>,
) -> Router {
    let cashfree = cashfree.map(|cfg| CashfreeClient::new(cfg).expect("client builds"));
    checkout_router(Arc::new(AppState {
        gateway,
        payu,
        cashfree,
    }))
}

/// JSON request against the given path.
pub fn json_request(method: Method, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Raw-body request against the given path.
pub fn raw_request(method: Method, path: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::from(body))
        .unwrap()
}

/// Read response body as bytes.
pub async fn body_bytes(response: axum::http::Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Read response body as JSON.
pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
