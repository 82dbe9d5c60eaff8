//! DIDL-Lite metadata for `SetAVTransportURI`
//!
//! The transport URI is accompanied by a DIDL-Lite `<item>` describing the
//! media. Because the fragment travels as text inside another XML element,
//! it is rendered pre-escaped (`&lt;`/`&gt;`/`&quot;` instead of the raw
//! characters). Title and URL are inserted verbatim; callers owning
//! untrusted titles must escape them first.

/// Description of a media item to load on a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// HTTP URL of the media resource
    pub url: String,
    /// MIME type, e.g. `video/mp4`; its top-level token selects the DIDL
    /// object class
    pub mime_type: String,
    /// Display title
    pub title: String,
}

impl MediaDescriptor {
    pub fn new(
        url: impl Into<String>,
        mime_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            title: title.into(),
        }
    }
}

/// Map a MIME type to the DIDL-Lite object class by its exact top-level
/// token. Unrecognized types deliberately map to nothing — some renderers
/// behave differently on an empty class than on a wrong one.
fn object_class(mime_type: &str) -> Option<&'static str> {
    if mime_type.starts_with("image") {
        Some("object.item.imageItem")
    } else if mime_type.starts_with("video") {
        Some("object.item.videoItem")
    } else if mime_type.starts_with("audio") {
        Some("object.item.audioItem")
    } else {
        None
    }
}

/// Render `media` as a single-line, entity-escaped DIDL-Lite fragment
/// suitable for embedding inside `<CurrentURIMetaData>`.
pub fn didl_metadata(media: &MediaDescriptor) -> String {
    let class = object_class(&media.mime_type).unwrap_or_default();

    format!(
        "&lt;DIDL-Lite xmlns=&quot;urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/&quot; \
         xmlns:upnp=&quot;urn:schemas-upnp-org:metadata-1-0/upnp/&quot; \
         xmlns:dc=&quot;http://purl.org/dc/elements/1.1/&quot;&gt;\
         &lt;item id=&quot;1000&quot; parentID=&quot;0&quot; restricted=&quot;0&quot;&gt;\
         &lt;dc:title&gt;{title}&lt;/dc:title&gt;\
         &lt;res protocolInfo=&quot;http-get:*:{mime}:DLNA.ORG_OP=01&quot;&gt;{url}&lt;/res&gt;\
         &lt;upnp:class&gt;{class}&lt;/upnp:class&gt;\
         &lt;/item&gt;&lt;/DIDL-Lite&gt;",
        title = media.title,
        mime = media.mime_type,
        url = media.url,
        class = class,
    )
}
