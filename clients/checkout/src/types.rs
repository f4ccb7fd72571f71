use serde::{Deserialize, Serialize};

/// Body POSTed to /api/create-payment-order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOrderRequest {
    pub amount: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub productinfo: String,
}

/// Signed Bolt launch payload returned by the checkout service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayUOrderResponse {
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

/// Contact details collected by the payment form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PatientDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}
