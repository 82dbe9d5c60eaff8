//! Typed AVTransport control for DLNA media renderers
//!
//! This crate turns high-level media operations — play, pause, stop, seek,
//! load-media, position queries — into protocol-exact SOAP commands against
//! a renderer's AVTransport control endpoint, and decodes the XML answers
//! back into typed results delivered through one-shot callbacks.
//!
//! ```no_run
//! use dlna_api::{DlnaRenderer, MediaDescriptor, MediaPlayer};
//!
//! let renderer = DlnaRenderer::new("http://192.168.1.50:49152/upnp/control/AVTransport1");
//! let media = MediaDescriptor::new(
//!     "http://192.168.1.10:8000/movie.mp4",
//!     "video/mp4",
//!     "Movie Night",
//! );
//!
//! renderer.play_media(&media, false, Box::new(|result| match result {
//!     Ok(session) => println!("launched, kind = {:?}", session.kind()),
//!     Err(error) => eprintln!("launch failed: {error}"),
//! }));
//! ```
//!
//! Discovery is a separate concern: this crate consumes a device
//! description (or a control URL) that an SSDP layer produced. Every
//! network exchange runs off the caller's thread; two commands issued
//! back-to-back may reach the device in either order unless the second is
//! issued from the first's callback.

pub mod capability;
pub mod dispatcher;
pub mod error;
pub mod metadata;
pub mod operations;
pub mod renderer;
pub mod service;
pub mod session;
pub mod time;

pub use capability::{
    Capability, CapabilityPriority, LaunchListener, MediaControl, MediaPlayer, PlayState,
    ResponseListener,
};
pub use dispatcher::CommandDispatcher;
pub use error::{ApiError, Result};
pub use metadata::{didl_metadata, MediaDescriptor};
pub use operations::TransportAction;
pub use renderer::{DlnaRenderer, CAPABILITIES};
pub use service::{
    discovery_filter, DeviceDescription, DeviceService, DiscoveryFilter, AV_TRANSPORT_SERVICE,
};
pub use session::{LaunchSession, SessionKind, SessionRecord, SESSION_TYPE_TAG};
