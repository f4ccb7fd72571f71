//! Client side of the clinic checkout
//!
//! `CheckoutApiClient` talks to the checkout service; `PaymentOrchestrator`
//! drives the payment modal against an injected hosted-checkout gateway.

pub mod catalog;
pub mod gateway;
pub mod orchestrator;
pub mod service;
pub mod status;
pub mod types;

pub use catalog::{find_service, format_inr, Service, DENTAL_SERVICES};
pub use gateway::{CheckoutGateway, CheckoutResponse, GatewayException};
pub use orchestrator::{DetailField, ModalSnapshot, PaymentOrchestrator, SubmitOutcome};
pub use service::{CheckoutApiClient, ClientError, OrderApi};
pub use status::{present, PaymentStatus, PaymentStatusState, StatusView, Tone};
pub use types::{PatientDetails, PayUOrderResponse, PaymentOrderRequest};
