//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// Connection-level failure (refused, timeout, unreadable body)
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered with a non-200 HTTP status
    #[error("HTTP status {0}")]
    Http(u16),

    /// A requested tag was absent from the response body
    #[error("Tag <{0}> not found in response")]
    TagNotFound(String),
}
