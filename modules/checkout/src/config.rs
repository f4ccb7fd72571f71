use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:5173";
pub const DEFAULT_CASHFREE_API_URL: &str = "https://sandbox.cashfree.com/pg/orders";
pub const DEFAULT_CASHFREE_API_VERSION: &str = "2023-08-01";

/// Placeholder substituted with the order id in the Cashfree return URL
pub const ORDER_ID_PLACEHOLDER: &str = "{order_id}";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got: {0}")]
    InvalidPort(String),

    #[error("PAYMENT_GATEWAY must be 'payu' or 'cashfree', got: {0}")]
    UnknownGateway(String),
}

/// Which integration answers the shared create-order route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gateway {
    PayU,
    Cashfree,
}

impl Gateway {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::PayU => "payu",
            Gateway::Cashfree => "cashfree",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gateway {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "payu" => Ok(Gateway::PayU),
            "cashfree" => Ok(Gateway::Cashfree),
            _ => Err(ConfigError::UnknownGateway(s.to_string())),
        }
    }
}

/// PayU merchant credentials and redirect targets
#[derive(Clone)]
pub struct PayUConfig {
    pub key: String,
    pub salt: String,
    pub success_url: String,
    pub failure_url: String,
}

impl fmt::Debug for PayUConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayUConfig")
            .field("key", &self.key)
            .field("salt", &"***")
            .field("success_url", &self.success_url)
            .field("failure_url", &self.failure_url)
            .finish()
    }
}

/// Cashfree credentials and order-creation endpoint
#[derive(Clone)]
pub struct CashfreeConfig {
    pub app_id: String,
    pub secret_key: String,
    pub api_url: String,
    pub api_version: String,
    pub return_url_template: String,
}

impl CashfreeConfig {
    /// Return URL for a specific order
    pub fn return_url(&self, order_id: &str) -> String {
        self.return_url_template.replace(ORDER_ID_PLACEHOLDER, order_id)
    }
}

impl fmt::Debug for CashfreeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CashfreeConfig")
            .field("app_id", &self.app_id)
            .field("secret_key", &"***")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("return_url_template", &self.return_url_template)
            .finish()
    }
}

/// Application configuration parsed from environment variables
///
/// Missing gateway credentials are not a start-up error: the affected
/// endpoint answers 500 until they are supplied.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gateway: Gateway,
    pub payu: Option<PayUConfig>,
    pub cashfree: Option<CashfreeConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_raw = get("PORT").unwrap_or_else(|| "8080".to_string());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let gateway = match get("PAYMENT_GATEWAY") {
            Some(raw) => raw.parse()?,
            None => Gateway::PayU,
        };

        let base_url = get("PUBLIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/');

        let payu = match (get("PAYU_KEY"), get("PAYU_SALT")) {
            (Some(key), Some(salt)) => Some(PayUConfig {
                key,
                salt,
                success_url: get("PAYU_SUCCESS_URL")
                    .unwrap_or_else(|| format!("{}/payment-success", base_url)),
                failure_url: get("PAYU_FAILURE_URL")
                    .unwrap_or_else(|| format!("{}/payment-failure", base_url)),
            }),
            _ => None,
        };

        let cashfree = match (get("CASHFREE_APP_ID"), get("CASHFREE_SECRET_KEY")) {
            (Some(app_id), Some(secret_key)) => Some(CashfreeConfig {
                app_id,
                secret_key,
                api_url: get("CASHFREE_API_URL")
                    .unwrap_or_else(|| DEFAULT_CASHFREE_API_URL.to_string()),
                api_version: get("CASHFREE_API_VERSION")
                    .unwrap_or_else(|| DEFAULT_CASHFREE_API_VERSION.to_string()),
                return_url_template: get("CASHFREE_RETURN_URL").unwrap_or_else(|| {
                    format!("{}/payment-status?order_id={}", base_url, ORDER_ID_PLACEHOLDER)
                }),
            }),
            _ => None,
        };

        Ok(Config {
            host,
            port,
            gateway,
            payu,
            cashfree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.gateway, Gateway::PayU);
        assert!(cfg.payu.is_none());
        assert!(cfg.cashfree.is_none());
    }

    #[test]
    fn test_payu_needs_both_key_and_salt() {
        let cfg = Config::from_lookup(lookup(&[("PAYU_KEY", "gtKFFx")])).unwrap();
        assert!(cfg.payu.is_none());

        let cfg = Config::from_lookup(lookup(&[("PAYU_KEY", "gtKFFx"), ("PAYU_SALT", "  ")]))
            .unwrap();
        assert!(cfg.payu.is_none());

        let cfg = Config::from_lookup(lookup(&[
            ("PAYU_KEY", "gtKFFx"),
            ("PAYU_SALT", "eCwWELxi"),
            ("PUBLIC_BASE_URL", "https://clinic.example/"),
        ]))
        .unwrap();
        let payu = cfg.payu.unwrap();
        assert_eq!(payu.success_url, "https://clinic.example/payment-success");
        assert_eq!(payu.failure_url, "https://clinic.example/payment-failure");
    }

    #[test]
    fn test_cashfree_defaults_to_sandbox() {
        let cfg = Config::from_lookup(lookup(&[
            ("PAYMENT_GATEWAY", "Cashfree"),
            ("CASHFREE_APP_ID", "app"),
            ("CASHFREE_SECRET_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(cfg.gateway, Gateway::Cashfree);
        let cf = cfg.cashfree.unwrap();
        assert_eq!(cf.api_url, DEFAULT_CASHFREE_API_URL);
        assert_eq!(cf.api_version, DEFAULT_CASHFREE_API_VERSION);
        assert_eq!(
            cf.return_url("order_1"),
            "http://localhost:5173/payment-status?order_id=order_1"
        );
    }

    #[test]
    fn test_invalid_port_and_gateway() {
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err(),
            ConfigError::InvalidPort("99999".into())
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("PAYMENT_GATEWAY", "stripe")])).unwrap_err(),
            ConfigError::UnknownGateway("stripe".into())
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cfg = Config::from_lookup(lookup(&[
            ("PAYU_KEY", "gtKFFx"),
            ("PAYU_SALT", "eCwWELxi"),
            ("CASHFREE_APP_ID", "app"),
            ("CASHFREE_SECRET_KEY", "topsecret"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("eCwWELxi"));
        assert!(!rendered.contains("topsecret"));
    }
}
