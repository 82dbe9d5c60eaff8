//! Private SOAP client for UPnP device communication
//!
//! This crate provides a minimal SOAP client specifically designed for
//! communicating with UPnP media renderers over the AVTransport control
//! protocol. It builds action envelopes, POSTs them to a device control
//! URL, and classifies the outcome by HTTP status; response bodies are
//! returned as raw text for the caller to pick apart.

mod envelope;
mod error;
mod xml;

pub use envelope::SoapEnvelope;
pub use error::SoapError;
pub use xml::extract_tag;

use std::time::Duration;

/// A minimal SOAP client for UPnP device communication
///
/// The underlying agent is connection-pooled and cheap to clone; one client
/// can be shared across any number of concurrently dispatched commands.
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
}

impl SoapClient {
    /// Create a new SOAP client with default timeouts
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// POST `envelope` to `control_url` and return the raw response body.
    ///
    /// Only the `SOAPAction` header is set explicitly; the content type is
    /// left to the transport default. HTTP 200 yields the body decoded as
    /// UTF-8 text, any other status yields `SoapError::Http`, and
    /// connection-level failures yield `SoapError::Network`. No retries are
    /// attempted at this layer.
    pub fn send(&self, control_url: &str, envelope: &SoapEnvelope) -> Result<String, SoapError> {
        let response = match self
            .agent
            .post(control_url)
            .set("SOAPAction", envelope.action_header())
            .send_string(envelope.body())
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(SoapError::Http(code)),
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        if response.status() != 200 {
            return Err(SoapError::Http(response.status()));
        }

        response
            .into_string()
            .map_err(|e| SoapError::Network(e.to_string()))
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}
