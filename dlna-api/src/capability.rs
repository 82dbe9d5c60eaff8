//! Capability surface exposed to the adapter-selection framework
//!
//! Rather than a deep inheritance tree, adapters implement small
//! capability traits and advertise a capability set; a surrounding
//! framework picks an adapter by the capabilities a call needs.

use crate::error::Result;
use crate::metadata::MediaDescriptor;
use crate::session::LaunchSession;

/// One-shot result callback for an asynchronous operation
pub type ResponseListener<T> = Box<dyn FnOnce(Result<T>) + Send + 'static>;

/// Result callback for operations that produce a launch session
pub type LaunchListener = ResponseListener<LaunchSession>;

/// Features an adapter can advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    DisplayImage,
    DisplayVideo,
    Play,
    MetadataTitle,
    MetadataMimeType,
    Duration,
    Position,
    Seek,
}

/// Relative preference when several adapters offer the same capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CapabilityPriority {
    Low,
    #[default]
    Normal,
    High,
}

/// Transport state as reported by a renderer
///
/// DLNA offers no usable play-state query through this adapter, so these
/// values only ever reach listeners from adapters for richer protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Unknown,
    Idle,
    Playing,
    Paused,
    Buffering,
    Finished,
}

/// Transport control: play/pause/stop/seek plus position and duration
/// queries. Results always arrive through the listener, never by return
/// value.
pub trait MediaControl {
    fn play(&self, listener: ResponseListener<()>);
    fn pause(&self, listener: ResponseListener<()>);
    fn stop(&self, listener: ResponseListener<()>);

    /// Rewind at increased speed; not expressible in AVTransport
    fn rewind(&self, listener: ResponseListener<()>);
    /// Fast-forward at increased speed; not expressible in AVTransport
    fn fast_forward(&self, listener: ResponseListener<()>);

    /// Seek to an absolute position in milliseconds
    fn seek(&self, position_millis: u64, listener: ResponseListener<()>);

    /// Total duration of the current track, in milliseconds
    fn duration(&self, listener: ResponseListener<u64>);
    /// Playback position within the current track, in milliseconds
    fn position(&self, listener: ResponseListener<u64>);

    fn play_state(&self, listener: ResponseListener<PlayState>);
    fn subscribe_play_state(&self, listener: ResponseListener<PlayState>);

    fn media_control_priority(&self) -> CapabilityPriority {
        CapabilityPriority::default()
    }
}

/// Media launching: load a described media item, start playback, and
/// close it again via the returned session.
pub trait MediaPlayer {
    fn display_image(&self, media: &MediaDescriptor, listener: LaunchListener);
    fn play_media(&self, media: &MediaDescriptor, should_loop: bool, listener: LaunchListener);
    fn close_media(&self, session: &LaunchSession, listener: ResponseListener<()>);

    fn media_player_priority(&self) -> CapabilityPriority {
        CapabilityPriority::default()
    }
}
