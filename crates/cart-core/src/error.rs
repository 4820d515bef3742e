//! Cart Errors
//!
//! Validation failures are raised before any request is made; the
//! other variants describe a request that went out and failed.

use thiserror::Error;

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Failure of a cart operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Quantity was non-numeric or not positive
    #[error("Please enter a valid quantity.")]
    InvalidQuantity { input: String },

    /// Transport failure, the request never produced a response
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// `message` field of the JSON body, when there was one
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl CartError {
    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        CartError::InvalidQuantity { input: input.into() }
    }

    /// True for errors raised locally before any request was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, CartError::InvalidQuantity { .. })
    }

    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CartError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_family() {
        assert!(CartError::invalid_quantity("abc").is_validation());
        assert!(!CartError::Network("offline".into()).is_validation());
        assert!(!CartError::Decode("eof".into()).is_validation());
    }

    #[test]
    fn test_server_message() {
        let err = CartError::Status { status: 401, message: Some("Please login first!".into()) };
        assert_eq!(err.server_message(), Some("Please login first!"));
        assert_eq!(err.to_string(), "server responded with status 401");
        assert_eq!(CartError::Network("x".into()).server_message(), None);
    }
}
