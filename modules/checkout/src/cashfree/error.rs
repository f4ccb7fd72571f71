use thiserror::Error;

#[derive(Error, Debug)]
pub enum CashfreeError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("API error (status {status_code}): {body}")]
    ApiError {
        status_code: u16,
        content_type: Option<String>,
        body: String,
    },

    #[error("Parse error: {0}")]
    ParseError(String),
}
