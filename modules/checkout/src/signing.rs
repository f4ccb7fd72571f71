//! PayU request signing
//!
//! PayU verifies a Bolt checkout launch by recomputing a SHA-512 digest over
//! a fixed, pipe-delimited sequence of the request fields followed by the
//! merchant salt. Field order is part of the contract:
//!
//! `key|txnid|amount|productinfo|firstname|email|udf1|..|udf10|salt`

use sha2::{Digest, Sha512};

/// Separator PayU expects between hashed fields
pub const FIELD_DELIMITER: &str = "|";

/// Number of user-defined fields in the hash sequence
pub const UDF_COUNT: usize = 10;

/// Fields bound together by the PayU request hash
#[derive(Debug, Clone, Default)]
pub struct PayUHashFields<'a> {
    pub key: &'a str,
    pub txnid: &'a str,
    pub amount: &'a str,
    pub productinfo: &'a str,
    pub firstname: &'a str,
    pub email: &'a str,
    pub udf: [&'a str; UDF_COUNT],
}

impl<'a> PayUHashFields<'a> {
    /// Pipe-joined hash input, salt last
    pub fn hash_input(&self, salt: &str) -> String {
        let mut parts: Vec<&str> = vec![
            self.key,
            self.txnid,
            self.amount,
            self.productinfo,
            self.firstname,
            self.email,
        ];
        parts.extend_from_slice(&self.udf);
        parts.push(salt);
        parts.join(FIELD_DELIMITER)
    }
}

/// Compute the lowercase hex SHA-512 request hash
pub fn sign_payu_request(fields: &PayUHashFields<'_>, salt: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(fields.hash_input(salt).as_bytes());
    hex::encode(hasher.finalize())
}

/// True when a value would shift the field boundaries of the hash input
pub fn contains_delimiter(value: &str) -> bool {
    value.contains(FIELD_DELIMITER)
}
