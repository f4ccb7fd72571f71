pub mod cashfree;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod signing;
pub mod validation;

pub use config::{Config, Gateway};
pub use error::CheckoutError;
pub use handlers::{create_cashfree_order, create_payu_order};
pub use models::{OrderSession, SignedPaymentPayload};
pub use routes::{checkout_router, AppState};
pub use signing::{sign_payu_request, PayUHashFields};
