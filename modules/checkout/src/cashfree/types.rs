use serde::{Deserialize, Serialize};

use crate::models::CashfreeOrderRequest;

/// Cashfree only settles clinic orders in rupees
pub const ORDER_CURRENCY: &str = "INR";

/// Body for POST /pg/orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub order_amount: f64,
    pub order_currency: String,
    pub customer_details: CustomerDetails,
    pub order_meta: OrderMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerDetails {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderMeta {
    pub return_url: String,
}

impl CreateOrderRequest {
    pub fn for_patient(order_id: String, request: &CashfreeOrderRequest, return_url: String) -> Self {
        Self {
            customer_details: CustomerDetails {
                customer_id: customer_id_for(&request.phone, &order_id),
                customer_name: request.name.clone(),
                customer_email: request.email.clone(),
                customer_phone: request.phone.clone(),
            },
            order_id,
            order_amount: request.amount,
            order_currency: ORDER_CURRENCY.to_string(),
            order_meta: OrderMeta { return_url },
        }
    }
}

/// Cashfree customer ids must be alphanumeric; derive one from the phone
fn customer_id_for(phone: &str, order_id: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        format!("cust_{}", order_id)
    } else {
        format!("cust_{}", digits)
    }
}

/// Order response from Cashfree API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashfreeOrder {
    pub cf_order_id: Option<serde_json::Value>,
    pub order_id: Option<String>,
    pub order_status: Option<String>,
    pub payment_session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(phone: &str) -> CashfreeOrderRequest {
        CashfreeOrderRequest {
            name: "Asha".into(),
            email: "a@x.com".into(),
            phone: phone.into(),
            amount: 1500.0,
        }
    }

    #[test]
    fn test_order_request_shape() {
        let req = CreateOrderRequest::for_patient(
            "order_1700000000000".into(),
            &patient("+91 99999-99999"),
            "https://clinic.example/payment-status?order_id=order_1700000000000".into(),
        );

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["order_currency"], "INR");
        assert_eq!(json["order_amount"], 1500.0);
        assert_eq!(json["customer_details"]["customer_id"], "cust_919999999999");
        assert_eq!(json["customer_details"]["customer_phone"], "+91 99999-99999");
        assert_eq!(
            json["order_meta"]["return_url"],
            "https://clinic.example/payment-status?order_id=order_1700000000000"
        );
    }

    #[test]
    fn test_customer_id_falls_back_to_order_id() {
        assert_eq!(customer_id_for("n/a", "order_1"), "cust_order_1");
    }
}
