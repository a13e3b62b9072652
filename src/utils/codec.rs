//! Base64 payload decoding for file content crossing the invoke boundary.
//!
//! The backend returns file bytes as base64 text; these helpers turn a
//! payload back into raw bytes, or into a `NamedFile` ready for a
//! renderer plugin.

use crate::error::AppResult;
use crate::model::NamedFile;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode a base64 payload into raw bytes.
///
/// A `data:<mime>;base64,` prefix is stripped if present, since some
/// callers forward data URLs unmodified. Malformed base64 propagates as
/// `AppError::Base64Decode`; nothing is caught or retried here.
pub fn decode_base64(payload: &str) -> AppResult<Vec<u8>> {
    let bytes = STANDARD.decode(strip_data_url_prefix(payload))?;
    log::debug!("decoded base64 payload into {} bytes", bytes.len());
    Ok(bytes)
}

/// Decode a base64 payload and wrap it with its filename.
///
/// The filename is kept verbatim (callers persisting to disk should use
/// `NamedFile::sanitized_name`); the content type is classified from the
/// filename so both conversion paths carry type metadata.
pub fn to_named_file(payload: &str, filename: &str) -> AppResult<NamedFile> {
    let bytes = decode_base64(payload)?;
    Ok(NamedFile {
        name: filename.to_string(),
        content_type: super::filetype::classify(filename),
        bytes,
    })
}

/// Strip a leading `data:<mime>;base64,` prefix, if any.
fn strip_data_url_prefix(payload: &str) -> &str {
    if payload.starts_with("data:") {
        payload.split_once("base64,").map_or(payload, |(_, rest)| rest)
    } else {
        payload
    }
}
