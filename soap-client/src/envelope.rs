//! SOAP 1.1 action envelope construction
//!
//! UPnP control points invoke service actions by POSTing a SOAP envelope
//! whose body holds a single namespace-qualified action element. Renderers
//! are strict about the exact shape, so the envelope is rendered as one
//! line with no indentation and parameter values are inserted verbatim —
//! callers must pre-escape values that may contain XML-significant
//! characters.

/// A fully rendered SOAP action request: the XML body plus the value of
/// the `SOAPAction` header that must accompany it.
///
/// Envelopes are immutable once built and are consumed by a single
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEnvelope {
    body: String,
    action_header: String,
}

impl SoapEnvelope {
    /// Build an action envelope for `action` on the service identified by
    /// `service_uri`.
    ///
    /// The body wraps `<InstanceID>` first, then each `(name, value)` pair
    /// from `parameters` as a same-named child element, in order.
    pub fn action(
        service_uri: &str,
        action: &str,
        instance_id: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        let mut arguments = format!("<InstanceID>{}</InstanceID>", instance_id);
        for (name, value) in parameters {
            arguments.push_str(&format!("<{name}>{value}</{name}>"));
        }

        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <s:Envelope s:encodingStyle=\"http://schemas.xmlsoap.org/soap/encoding/\" \
             xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">\
             <s:Body>\
             <u:{action} xmlns:u=\"{service_uri}\">{arguments}</u:{action}>\
             </s:Body>\
             </s:Envelope>"
        );

        // The surrounding quotes are part of the header value on the wire.
        let action_header = format!("\"{}#{}\"", service_uri, action);

        Self {
            body,
            action_header,
        }
    }

    /// The rendered XML request body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The quoted `SOAPAction` header value, e.g.
    /// `"urn:schemas-upnp-org:service:AVTransport:1#Play"`.
    pub fn action_header(&self) -> &str {
        &self.action_header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "urn:schemas-upnp-org:service:AVTransport:1";

    #[test]
    fn test_play_envelope_body() {
        let envelope = SoapEnvelope::action(SERVICE, "Play", "0", &[("Speed", "1")]);

        assert!(envelope.body().starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(envelope.body().contains(
            "<u:Play xmlns:u=\"urn:schemas-upnp-org:service:AVTransport:1\">\
             <InstanceID>0</InstanceID><Speed>1</Speed></u:Play>"
        ));
        assert_eq!(envelope.body().matches("<InstanceID>").count(), 1);
        assert_eq!(envelope.body().matches("<Speed>").count(), 1);
    }

    #[test]
    fn test_action_header_includes_quotes() {
        let envelope = SoapEnvelope::action(SERVICE, "Play", "0", &[("Speed", "1")]);

        assert_eq!(
            envelope.action_header(),
            "\"urn:schemas-upnp-org:service:AVTransport:1#Play\""
        );
    }

    #[test]
    fn test_parameterless_action_has_only_instance_id() {
        let envelope = SoapEnvelope::action(SERVICE, "Stop", "0", &[]);

        assert!(envelope.body().contains("<u:Stop"));
        assert!(envelope.body().contains("<InstanceID>0</InstanceID></u:Stop>"));
    }

    #[test]
    fn test_parameters_keep_declaration_order() {
        let envelope = SoapEnvelope::action(
            SERVICE,
            "Seek",
            "0",
            &[("Unit", "REL_TIME"), ("Target", "00:01:30")],
        );

        let unit = envelope.body().find("<Unit>").unwrap();
        let target = envelope.body().find("<Target>").unwrap();
        assert!(unit < target);
    }

    #[test]
    fn test_parameter_values_are_not_escaped() {
        // Escaping is the caller's responsibility; pre-escaped metadata must
        // pass through untouched.
        let envelope = SoapEnvelope::action(
            SERVICE,
            "SetAVTransportURI",
            "0",
            &[("CurrentURIMetaData", "&lt;DIDL-Lite&gt;")],
        );

        assert!(envelope
            .body()
            .contains("<CurrentURIMetaData>&lt;DIDL-Lite&gt;</CurrentURIMetaData>"));
    }
}
