//! Asynchronous command dispatch
//!
//! Every command is a single blocking HTTP exchange executed on its own
//! background thread; callers never block and always hear back through a
//! one-shot callback. Two commands issued back-to-back may race on the
//! wire — callers needing ordering must issue the second from the first's
//! callback, or use the blocking primitive from an already-backgrounded
//! sequence.

use std::sync::Arc;
use std::thread;

use soap_client::{SoapClient, SoapEnvelope};

use crate::error::Result;

/// Dispatches SOAP envelopes to one device control endpoint
///
/// The control URL is fixed at construction and shared read-only across
/// in-flight commands. The HTTP client is injected and reused rather than
/// rebuilt per command; `ureq` pools connections behind it.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    control_url: Arc<str>,
    client: SoapClient,
}

impl CommandDispatcher {
    /// Create a dispatcher with a default SOAP client
    pub fn new(control_url: impl Into<Arc<str>>) -> Self {
        Self::with_client(control_url, SoapClient::new())
    }

    /// Create a dispatcher around an existing SOAP client
    pub fn with_client(control_url: impl Into<Arc<str>>, client: SoapClient) -> Self {
        Self {
            control_url: control_url.into(),
            client,
        }
    }

    /// The endpoint this dispatcher POSTs to
    pub fn control_url(&self) -> &str {
        &self.control_url
    }

    /// Execute `envelope` off the calling thread and hand the outcome to
    /// `on_result`.
    ///
    /// The callback is invoked exactly once on every path — success, HTTP
    /// error, or transport failure. Once dispatched a command cannot be
    /// cancelled; it runs to whatever completion the agent's timeouts
    /// allow.
    pub fn send<F>(&self, envelope: SoapEnvelope, on_result: F)
    where
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let client = self.client.clone();
        let control_url = Arc::clone(&self.control_url);

        thread::spawn(move || {
            tracing::debug!(action = envelope.action_header(), "dispatching command");

            let result = client.send(&control_url, &envelope).map_err(Into::into);
            if let Err(error) = &result {
                tracing::warn!(
                    action = envelope.action_header(),
                    %error,
                    "command failed"
                );
            }

            on_result(result);
        });
    }

    /// Blocking dispatch, used to sequence multi-step operations from a
    /// thread that is already off the caller's.
    pub(crate) fn send_blocking(&self, envelope: &SoapEnvelope) -> Result<String> {
        self.client
            .send(&self.control_url, envelope)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::operations::{action_envelope, TransportAction};
    use std::sync::mpsc;
    use std::time::Duration;

    fn recv_one(rx: &mpsc::Receiver<Result<String>>) -> Result<String> {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("callback was never invoked")
    }

    fn assert_no_second_callback(rx: &mpsc::Receiver<Result<String>>) {
        assert!(
            rx.recv_timeout(Duration::from_millis(200)).is_err(),
            "callback fired more than once"
        );
    }

    #[test]
    fn test_send_delivers_success_once() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/ctl")
            .with_status(200)
            .with_body("OK")
            .create();

        let dispatcher = CommandDispatcher::new(format!("{}/ctl", server.url()));
        let (tx, rx) = mpsc::channel();

        dispatcher.send(action_envelope(TransportAction::Pause, &[]), move |result| {
            tx.send(result).unwrap();
        });

        assert_eq!(recv_one(&rx).unwrap(), "OK");
        assert_no_second_callback(&rx);
    }

    #[test]
    fn test_send_delivers_http_error_once() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/ctl").with_status(500).create();

        let dispatcher = CommandDispatcher::new(format!("{}/ctl", server.url()));
        let (tx, rx) = mpsc::channel();

        dispatcher.send(action_envelope(TransportAction::Stop, &[]), move |result| {
            tx.send(result).unwrap();
        });

        match recv_one(&rx) {
            Err(ApiError::Http(code)) => assert_eq!(code, 500),
            other => panic!("Expected Http(500), got {:?}", other),
        }
        assert_no_second_callback(&rx);
    }

    #[test]
    fn test_send_delivers_network_error_once() {
        let dispatcher = CommandDispatcher::new("http://127.0.0.1:1/ctl");
        let (tx, rx) = mpsc::channel();

        dispatcher.send(action_envelope(TransportAction::Stop, &[]), move |result| {
            tx.send(result).unwrap();
        });

        assert!(matches!(recv_one(&rx), Err(ApiError::Network(_))));
        assert_no_second_callback(&rx);
    }

    #[test]
    fn test_empty_control_url_fails_at_transport() {
        // A device with no AVTransport service resolves to "".
        let dispatcher = CommandDispatcher::new("");
        let (tx, rx) = mpsc::channel();

        dispatcher.send(action_envelope(TransportAction::Play, &[("Speed", "1")]), move |result| {
            tx.send(result).unwrap();
        });

        assert!(matches!(recv_one(&rx), Err(ApiError::Network(_))));
    }
}
