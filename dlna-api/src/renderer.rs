//! The DLNA renderer adapter
//!
//! `DlnaRenderer` is the public face of this crate: it resolves the
//! AVTransport control endpoint from a device description, translates the
//! capability-trait operations into SOAP commands, and composes the
//! multi-step load-and-play sequence. Handles are cheap clones sharing one
//! dispatcher; clone identity is what launch sessions use to find their
//! way back.

use std::sync::Arc;
use std::thread;

use soap_client::{extract_tag, SoapClient, SoapEnvelope};

use crate::capability::{
    Capability, LaunchListener, MediaControl, MediaPlayer, PlayState, ResponseListener,
};
use crate::dispatcher::CommandDispatcher;
use crate::error::{ApiError, Result};
use crate::metadata::MediaDescriptor;
use crate::operations::{action_envelope, set_av_transport_uri, TransportAction};
use crate::service::DeviceDescription;
use crate::session::{LaunchSession, SessionRecord, SESSION_TYPE_TAG};
use crate::time::{millis_to_timecode, timecode_to_seconds};

/// Capabilities this adapter advertises. The set is static rather than
/// derived from the device's advertised service list.
pub const CAPABILITIES: [Capability; 8] = [
    Capability::DisplayImage,
    Capability::DisplayVideo,
    Capability::Play,
    Capability::MetadataTitle,
    Capability::MetadataMimeType,
    Capability::Duration,
    Capability::Position,
    Capability::Seek,
];

/// Client-side adapter for one DLNA media renderer
#[derive(Debug, Clone)]
pub struct DlnaRenderer {
    dispatcher: Arc<CommandDispatcher>,
}

impl DlnaRenderer {
    /// Bind an adapter directly to a control URL.
    pub fn new(control_url: impl Into<Arc<str>>) -> Self {
        Self::with_client(control_url, SoapClient::new())
    }

    /// Bind an adapter to a control URL using an existing SOAP client.
    pub fn with_client(control_url: impl Into<Arc<str>>, client: SoapClient) -> Self {
        Self {
            dispatcher: Arc::new(CommandDispatcher::with_client(control_url, client)),
        }
    }

    /// Construct an adapter from a device description, resolving the
    /// control endpoint from its service list. A device without an
    /// AVTransport service yields an adapter whose every command fails at
    /// the transport layer.
    pub fn from_description(description: &DeviceDescription) -> Self {
        let control_url = description.control_url();
        if control_url.is_empty() {
            tracing::warn!("device description advertises no AVTransport service");
        }
        Self::new(control_url)
    }

    /// The control endpoint commands are POSTed to
    pub fn control_url(&self) -> &str {
        self.dispatcher.control_url()
    }

    /// The static capability set this adapter advertises
    pub fn capabilities(&self) -> &'static [Capability] {
        &CAPABILITIES
    }

    /// Whether `other` is a handle to this same adapter instance
    pub fn same_instance(&self, other: &DlnaRenderer) -> bool {
        Arc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }

    /// Rebuild a launch session from a persisted record.
    ///
    /// Returns `None` unless `session_type` is this adapter's `"dlna"`
    /// tag; otherwise the record is rebound to this adapter instance.
    pub fn decode_launch_session(
        &self,
        session_type: &str,
        record: &SessionRecord,
    ) -> Option<LaunchSession> {
        if session_type != SESSION_TYPE_TAG {
            return None;
        }
        Some(LaunchSession::from_record(self.clone(), record))
    }

    /// Load `media` and start playback.
    ///
    /// Runs Stop, SetAVTransportURI, and Play(Speed=1) on one background
    /// thread, each step gated on the previous one's success; the first
    /// failing step's error is delivered unchanged and later steps never
    /// reach the wire. Success delivers a media launch session bound to
    /// this adapter. The listener is invoked exactly once either way.
    pub fn load_media(&self, media: &MediaDescriptor, listener: LaunchListener) {
        let renderer = self.clone();
        let media = media.clone();

        thread::spawn(move || {
            listener(renderer.load_and_play(&media));
        });
    }

    fn load_and_play(&self, media: &MediaDescriptor) -> Result<LaunchSession> {
        // Stop is idempotent when nothing is playing, but its failure still
        // surfaces as the overall failure.
        self.dispatcher
            .send_blocking(&action_envelope(TransportAction::Stop, &[]))?;
        self.dispatcher.send_blocking(&set_av_transport_uri(media))?;
        self.dispatcher
            .send_blocking(&action_envelope(TransportAction::Play, &[("Speed", "1")]))?;

        Ok(LaunchSession::for_media(self.clone()))
    }

    fn dispatch_unit(&self, envelope: SoapEnvelope, listener: ResponseListener<()>) {
        self.dispatcher
            .send(envelope, move |result| listener(result.map(|_| ())));
    }

    /// GetPositionInfo, then pull `tag` out of the response and convert
    /// its timecode to milliseconds.
    fn query_position_field(&self, tag: &'static str, listener: ResponseListener<u64>) {
        let envelope = action_envelope(TransportAction::GetPositionInfo, &[]);

        self.dispatcher.send(envelope, move |result| {
            listener(result.and_then(|body| {
                let timecode = extract_tag(&body, tag).map_err(ApiError::from)?;
                Ok(timecode_to_seconds(timecode)? * 1000)
            }));
        });
    }
}

impl MediaControl for DlnaRenderer {
    fn play(&self, listener: ResponseListener<()>) {
        self.dispatch_unit(
            action_envelope(TransportAction::Play, &[("Speed", "1")]),
            listener,
        );
    }

    fn pause(&self, listener: ResponseListener<()>) {
        self.dispatch_unit(action_envelope(TransportAction::Pause, &[]), listener);
    }

    fn stop(&self, listener: ResponseListener<()>) {
        self.dispatch_unit(action_envelope(TransportAction::Stop, &[]), listener);
    }

    fn rewind(&self, listener: ResponseListener<()>) {
        listener(Err(ApiError::NotSupported));
    }

    fn fast_forward(&self, listener: ResponseListener<()>) {
        listener(Err(ApiError::NotSupported));
    }

    fn seek(&self, position_millis: u64, listener: ResponseListener<()>) {
        let target = millis_to_timecode(position_millis);
        self.dispatch_unit(
            action_envelope(
                TransportAction::Seek,
                &[("Unit", "REL_TIME"), ("Target", &target)],
            ),
            listener,
        );
    }

    fn duration(&self, listener: ResponseListener<u64>) {
        self.query_position_field("TrackDuration", listener);
    }

    fn position(&self, listener: ResponseListener<u64>) {
        self.query_position_field("RelTime", listener);
    }

    fn play_state(&self, listener: ResponseListener<PlayState>) {
        listener(Err(ApiError::NotSupported));
    }

    fn subscribe_play_state(&self, listener: ResponseListener<PlayState>) {
        listener(Err(ApiError::NotSupported));
    }
}

impl MediaPlayer for DlnaRenderer {
    fn display_image(&self, media: &MediaDescriptor, listener: LaunchListener) {
        self.load_media(media, listener);
    }

    // AVTransport has no loop flag; the request is honored as a plain
    // load-and-play.
    fn play_media(&self, media: &MediaDescriptor, _should_loop: bool, listener: LaunchListener) {
        self.load_media(media, listener);
    }

    fn close_media(&self, session: &LaunchSession, listener: ResponseListener<()>) {
        session.service().stop(listener);
    }
}
