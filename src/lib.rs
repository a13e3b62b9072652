//! Utility core for the Courseview desktop application.
//!
//! The UI layer picks a course and lists its scanned QR-code images;
//! everything it needs beyond rendering lives here: formatting backend
//! timestamps for display, decoding base64 payloads into bytes or named
//! files, and classifying filenames so the dispatcher can pick a
//! renderer plugin. All of it is pure and synchronous; the invoke
//! transport and the renderer plugins stay on the other side of the
//! boundary.

pub mod error;
pub mod model;
pub mod utils;

pub use error::{AppError, AppResult};
pub use model::{NamedFile, ScanResult};
pub use utils::{
    classify, decode_base64, format_display_date, format_display_date_or_empty, to_named_file,
};
