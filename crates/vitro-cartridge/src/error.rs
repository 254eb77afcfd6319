//! Cartridge error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitro_core::error::VitroError;

/// Errors returned by cartridge operations.
#[derive(Debug, Error)]
pub enum CartridgeError {
    /// A query or project was attempted before `activate()`.
    #[error("Bio-Cartridge not active")]
    Inactive,

    /// The ethics check rejected the experiment intent.
    #[error("Ethics rejected: {message}")]
    EthicsRejected { message: String },

    /// Built-in knowledge failed validation, or the snapshot could not be written.
    #[error("Knowledge store error: {0}")]
    Knowledge(#[from] VitroError),
}

impl CartridgeError {
    /// Short machine-readable status, as shown next to the message.
    pub fn status(&self) -> &'static str {
        match self {
            CartridgeError::Inactive => "inactive",
            CartridgeError::EthicsRejected { .. } => "rejected",
            CartridgeError::Knowledge(_) => "error",
        }
    }

    /// Structured form for display and `--json` output.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            status: self.status().to_string(),
        }
    }
}

/// Serializable `{ "error": ..., "status": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: String,
}

/// Result type for cartridge operations.
pub type CartridgeResult<T> = Result<T, CartridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_renders_structured_response() {
        let response = CartridgeError::Inactive.to_response();
        assert_eq!(response.error, "Bio-Cartridge not active");
        assert_eq!(response.status, "inactive");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "inactive");
    }

    #[test]
    fn rejection_keeps_message() {
        let err = CartridgeError::EthicsRejected {
            message: "missing consent".into(),
        };
        assert_eq!(err.status(), "rejected");
        assert!(err.to_string().contains("missing consent"));
    }
}
