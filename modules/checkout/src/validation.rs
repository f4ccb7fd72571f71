//! Boundary validation for create-order request bodies
//!
//! Bodies arrive untyped. Each validator coerces a `serde_json::Value` into
//! the typed request for its gateway, or rejects it before any signing or
//! outbound call happens.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{CashfreeOrderRequest, PayUOrderRequest};
use crate::signing::contains_delimiter;

/// Validation errors for create-order requests
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Amount must be a decimal number, got: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    #[error("Field '{0}' must not contain '|'")]
    ContainsDelimiter(&'static str),
}

impl ValidationError {
    pub fn is_missing_fields(&self) -> bool {
        matches!(self, ValidationError::MissingFields(_))
    }
}

/// Validate a PayU create-order body
///
/// # Validation Rules
///
/// - `amount`, `firstname` (or `name`), `email`, `phone`, `productinfo` must
///   be present and non-blank
/// - `amount` must be a positive decimal; its text is kept as sent
/// - no signed field may contain the hash delimiter
pub fn validate_payu_request(body: &Value) -> Result<PayUOrderRequest, ValidationError> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let amount = amount_text(obj.get("amount"));
    let firstname = text_field(obj, &["firstname", "name"]);
    let email = text_field(obj, &["email"]);
    let phone = text_field(obj, &["phone"]);
    let productinfo = text_field(obj, &["productinfo"]);

    let missing: Vec<&'static str> = [
        ("amount", amount.is_none()),
        ("firstname", firstname.is_none()),
        ("email", email.is_none()),
        ("phone", phone.is_none()),
        ("productinfo", productinfo.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (Some(amount), Some(firstname), Some(email), Some(phone), Some(productinfo)) =
        (amount, firstname, email, phone, productinfo)
    else {
        return Err(ValidationError::MissingFields(missing));
    };

    parse_positive_amount(&amount)?;

    for (field, value) in [
        ("amount", &amount),
        ("firstname", &firstname),
        ("email", &email),
        ("productinfo", &productinfo),
    ] {
        if contains_delimiter(value) {
            return Err(ValidationError::ContainsDelimiter(field));
        }
    }

    Ok(PayUOrderRequest {
        amount,
        firstname,
        email,
        phone,
        productinfo,
    })
}

/// Validate a Cashfree create-order body
///
/// `name`, `email`, `phone` must be non-blank and `amount` must be a number
/// (or numeric string) greater than zero.
pub fn validate_cashfree_request(body: &Value) -> Result<CashfreeOrderRequest, ValidationError> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = text_field(obj, &["name"]);
    let email = text_field(obj, &["email"]);
    let phone = text_field(obj, &["phone"]);
    let amount = amount_text(obj.get("amount"));

    let missing: Vec<&'static str> = [
        ("name", name.is_none()),
        ("email", email.is_none()),
        ("phone", phone.is_none()),
        ("amount", amount.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (Some(name), Some(email), Some(phone), Some(amount)) = (name, email, phone, amount) else {
        return Err(ValidationError::MissingFields(missing));
    };

    let amount = parse_positive_amount(&amount)?;

    Ok(CashfreeOrderRequest {
        name,
        email,
        phone,
        amount,
    })
}

/// Parse a decimal amount and require it to be positive
pub fn parse_positive_amount(text: &str) -> Result<f64, ValidationError> {
    if !is_decimal(text) {
        return Err(ValidationError::InvalidAmount(text.to_string()));
    }

    let value: f64 = text
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(text.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidAmount(text.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(value));
    }

    Ok(value)
}

/// Digits with at most one decimal point, and at least one digit
fn is_decimal(text: &str) -> bool {
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in text.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// First non-blank string (or number) among the given keys, trimmed
fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Amount as text: strings as sent (trimmed), numbers in shortest form
fn amount_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => match n.as_u64() {
            Some(whole) => Some(whole.to_string()),
            None => n.as_f64().map(|f| f.to_string()),
        },
        _ => None,
    }
}
