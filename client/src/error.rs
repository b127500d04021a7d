//! Error types for the directory API client

use thiserror::Error;

/// Errors that can occur when talking to the directory API
///
/// The `Display` output of each variant is the normalized message stored in
/// slice error fields and shown to the user.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network or transport failure before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text, possibly empty
        body: String,
    },

    /// The response body could not be decoded
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// A failure that could not be classified
    #[error("Unknown error")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ApiError::Status {
                status: 404,
                body: "{}".to_string()
            }
            .to_string(),
            "Unexpected status 404: {}"
        );
        assert_eq!(ApiError::Unknown.to_string(), "Unknown error");
    }
}
