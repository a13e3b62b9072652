//! Utility modules for the Courseview application.
//!
//! This module provides essential utilities organized by domain:
//! - `datetime`: Display-date formatting for backend timestamps
//! - `codec`: Base64 payload decoding into bytes or named files
//! - `filetype`: Extension-based classification for renderer dispatch
//! - `filesystem`: Filename sanitization

pub mod codec;
pub mod datetime;
pub mod filesystem;
pub mod filetype;

// Re-export commonly used functions for convenience
pub use codec::{decode_base64, to_named_file};
pub use datetime::{format_display_date, format_display_date_or_empty};
pub use filesystem::sanitize_filename;
pub use filetype::{classify, extension};
