//! Launch sessions
//!
//! A successful load-and-play hands the caller a `LaunchSession`: a handle
//! correlating the running playback with the adapter that started it. The
//! caller owns the session; the session only references the adapter (a
//! cheap shared-identity clone) so it can later route `close_media` back
//! to the right device.

use serde::{Deserialize, Serialize};

use crate::renderer::DlnaRenderer;

/// Type tag identifying persisted sessions that belong to this adapter
pub const SESSION_TYPE_TAG: &str = "dlna";

/// What kind of launch a session correlates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    #[default]
    Unknown,
    Media,
}

/// Persisted/transmitted form of a launch session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub kind: SessionKind,
}

/// A caller-held handle to an active media launch
#[derive(Debug, Clone)]
pub struct LaunchSession {
    service: DlnaRenderer,
    kind: SessionKind,
    session_id: Option<String>,
}

impl LaunchSession {
    pub(crate) fn for_media(service: DlnaRenderer) -> Self {
        Self {
            service,
            kind: SessionKind::Media,
            session_id: None,
        }
    }

    pub(crate) fn from_record(service: DlnaRenderer, record: &SessionRecord) -> Self {
        Self {
            service,
            kind: record.kind,
            session_id: record.session_id.clone(),
        }
    }

    /// The adapter this session was launched through
    pub fn service(&self) -> &DlnaRenderer {
        &self.service
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Snapshot this session into its persistable form.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            session_id: self.session_id.clone(),
            kind: self.kind,
        }
    }
}
