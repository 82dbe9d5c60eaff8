use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for renderer operations
///
/// This enum classifies every way a control operation can fail, from
/// "the protocol has no such operation" down to transport-level problems.
/// Callbacks receive exactly one of these per operation; nothing is thrown
/// across the async boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation has no AVTransport equivalent
    ///
    /// Raised synchronously, before any network traffic, for rewind,
    /// fast-forward, and play-state queries/subscriptions.
    #[error("Operation not supported by this device")]
    NotSupported,

    /// Network communication error
    ///
    /// Connection refused, timeout, protocol violation, or an unreadable
    /// response body. Not retried automatically; retry policy is the
    /// caller's responsibility.
    #[error("Network error: {0}")]
    Network(String),

    /// The device answered with a non-200 HTTP status
    #[error("Device returned HTTP status {0}")]
    Http(u16),

    /// A response was missing an expected tag
    #[error("Tag <{0}> not found in response")]
    TagNotFound(String),

    /// Malformed input that could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A timecode field was not numeric
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from SoapError to ApiError
impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::Network(msg),
            SoapError::Http(code) => ApiError::Http(code),
            SoapError::TagNotFound(tag) => ApiError::TagNotFound(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_error_conversion() {
        let api_error: ApiError = SoapError::Network("connection timeout".to_string()).into();
        assert!(matches!(api_error, ApiError::Network(_)));

        let api_error: ApiError = SoapError::Http(500).into();
        assert!(matches!(api_error, ApiError::Http(500)));

        let api_error: ApiError = SoapError::TagNotFound("RelTime".to_string()).into();
        assert!(matches!(api_error, ApiError::TagNotFound(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ApiError::Http(404)),
            "Device returned HTTP status 404"
        );
        assert_eq!(
            format!("{}", ApiError::TagNotFound("TrackDuration".to_string())),
            "Tag <TrackDuration> not found in response"
        );
        assert_eq!(
            format!("{}", ApiError::InvalidTimeFormat("abc".to_string())),
            "Invalid time format: abc"
        );
    }
}
