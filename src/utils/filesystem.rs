//! Filename sanitization for payloads that end up on disk.

use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-_.]+").expect("valid filename pattern"));

/// Sanitize filename to be safe for file systems
pub fn sanitize_filename(filename: &str) -> String {
    // Remove any potentially dangerous characters
    let sanitized = UNSAFE_CHARS.replace_all(filename, "-").to_string();

    // Ensure the filename is not empty
    if sanitized.is_empty() {
        return "file.txt".to_string();
    }

    sanitized
}
