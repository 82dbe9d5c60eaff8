//! AVTransport action envelopes
//!
//! Each transport action maps to exactly one SOAP action name. Only
//! instance 0 is addressed; multi-instance AVTransport devices are out of
//! scope.

use soap_client::SoapEnvelope;

use crate::metadata::{didl_metadata, MediaDescriptor};
use crate::service::AV_TRANSPORT_SERVICE;

/// AVTransport instance addressed by every command
const INSTANCE_ID: &str = "0";

/// The transport actions this adapter can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportAction {
    Play,
    Pause,
    Stop,
    Seek,
    SetAvTransportUri,
    GetPositionInfo,
}

impl TransportAction {
    /// The SOAP action name as it appears in the envelope body and the
    /// `SOAPAction` header
    pub fn name(self) -> &'static str {
        match self {
            TransportAction::Play => "Play",
            TransportAction::Pause => "Pause",
            TransportAction::Stop => "Stop",
            TransportAction::Seek => "Seek",
            TransportAction::SetAvTransportUri => "SetAVTransportURI",
            TransportAction::GetPositionInfo => "GetPositionInfo",
        }
    }
}

/// Build the envelope for `action` with the given ordered parameters.
pub fn action_envelope(action: TransportAction, parameters: &[(&str, &str)]) -> SoapEnvelope {
    SoapEnvelope::action(AV_TRANSPORT_SERVICE, action.name(), INSTANCE_ID, parameters)
}

/// Build the `SetAVTransportURI` envelope for `media`: the raw URL in
/// `<CurrentURI>` and the escaped DIDL-Lite fragment in
/// `<CurrentURIMetaData>`.
pub fn set_av_transport_uri(media: &MediaDescriptor) -> SoapEnvelope {
    let metadata = didl_metadata(media);

    action_envelope(
        TransportAction::SetAvTransportUri,
        &[
            ("CurrentURI", media.url.as_str()),
            ("CurrentURIMetaData", metadata.as_str()),
        ],
    )
}
