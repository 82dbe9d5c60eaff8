//! Flat-XML tag extraction
//!
//! AVTransport query responses are shallow documents where each value of
//! interest appears exactly once as `<Tag>text</Tag>`. A literal delimiter
//! search is enough for that shape and avoids pulling a DOM parser into the
//! dispatch path. Missing delimiters are reported as a typed error instead
//! of panicking on an out-of-range slice.

use crate::error::SoapError;

/// Return the text strictly between the first `<tag>` and the following
/// `</tag>` in `xml`.
///
/// # Errors
///
/// Returns `SoapError::TagNotFound` if either delimiter is absent.
pub fn extract_tag<'a>(xml: &'a str, tag: &str) -> Result<&'a str, SoapError> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = xml
        .find(&open)
        .ok_or_else(|| SoapError::TagNotFound(tag.to_string()))?
        + open.len();
    let end = xml[start..]
        .find(&close)
        .map(|offset| start + offset)
        .ok_or_else(|| SoapError::TagNotFound(tag.to_string()))?;

    Ok(&xml[start..end])
}
