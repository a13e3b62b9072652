//! File-type classification used to pick a renderer plugin.
//!
//! The rendering dispatcher only understands a small set of labels, so
//! this table is deliberately fixed rather than delegating to a full
//! MIME database. Labels like `doc`/`ppt` are renderer names, not real
//! MIME types.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Extension → renderer label table, built once and read-only afterwards.
static EXTENSION_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bmp", "image/bmp"),
        ("csv", "text/csv"),
        ("doc", "doc"),
        ("docx", "doc"),
        ("gif", "image/gif"),
        ("jpg", "image/jpg"),
        ("jpeg", "image/jpeg"),
        ("pptx", "ppt"),
        ("pdf", "application/pdf"),
        ("png", "image/png"),
        ("tiff", "image/tiff"),
        ("mp4", "video/mp4"),
    ])
});

/// Extract the extension: the segment after the final `.`, if any.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Classify a filename into the label the rendering dispatcher expects.
///
/// Matching is case-insensitive on the extension. Unmapped extensions
/// come back lowercased as-is so the dispatcher can still surface them;
/// a filename with no extension classifies as the empty string. Total
/// function, never fails.
pub fn classify(filename: &str) -> String {
    let Some(ext) = extension(filename) else {
        return String::new();
    };
    let ext = ext.to_ascii_lowercase();
    match EXTENSION_TYPES.get(ext.as_str()) {
        Some(label) => (*label).to_string(),
        None => {
            log::debug!("no renderer mapping for extension '{}'", ext);
            ext
        }
    }
}
