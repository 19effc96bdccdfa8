// src/error.rs
// =============================================================================
// The error type for the export pipeline.
//
// Every way an export can fail falls into one of three kinds:
// - Configuration: the settings we were given can't produce a request
// - Network: the GitHub request failed, timed out, or returned non-2xx
// - Parse: the response body wasn't a JSON array of issues
//
// All three are terminal. main.rs turns the kind into the process exit code.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Enums with data: each variant carries the details of what went wrong
// =============================================================================

use thiserror::Error;

// Exit codes for each failure kind (0 is success)
pub const EXIT_CONFIGURATION: i32 = 1;
pub const EXIT_NETWORK: i32 = 2;
pub const EXIT_PARSE: i32 = 3;
pub const EXIT_OUTPUT: i32 = 4;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Settings can't produce a request (bad mode parameter, bad API base URL)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP request didn't produce a 2xx response
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// The response body isn't a JSON array of issues
    #[error("parse error: {0}")]
    Parse(String),
}

impl ExportError {
    /// The process exit code for this kind of failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Configuration(_) => EXIT_CONFIGURATION,
            ExportError::Network { .. } => EXIT_NETWORK,
            ExportError::Parse(_) => EXIT_PARSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes = [
            ExportError::Configuration("x".to_string()).exit_code(),
            ExportError::Network {
                url: "u".to_string(),
                reason: "r".to_string(),
            }
            .exit_code(),
            ExportError::Parse("x".to_string()).exit_code(),
        ];
        assert!(codes.iter().all(|&c| c != 0 && c != EXIT_OUTPUT));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn test_network_error_message_names_url() {
        let err = ExportError::Network {
            url: "https://api.github.com/repos/a/b/issues".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("https://api.github.com/repos/a/b/issues"));
        assert!(message.contains("404"));
    }
}
