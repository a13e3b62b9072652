//! Shared model types exchanged with the backend over the invoke boundary.

use crate::utils;
use serde::{Deserialize, Serialize};

/// A decoded payload paired with its filename and classified content type.
///
/// Produced by `utils::codec::to_named_file`; `name` is whatever the
/// backend sent, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl NamedFile {
    /// Decoded byte length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Filesystem-safe variant of the filename, for callers that persist
    /// the payload to disk. `name` itself stays untouched.
    pub fn sanitized_name(&self) -> String {
        utils::sanitize_filename(&self.name)
    }
}

/// One scanned QR-code record as returned by the backend scan command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: i64,
    pub course_id: i64,
    pub file_name: String,
    /// Asset URL the image viewer loads the scan from.
    pub url: String,
    /// Opaque backend timestamp; format for display via `display_created_at`.
    #[serde(default)]
    pub created_at: String,
}

impl ScanResult {
    /// Upload time as `YYYY/MM/DD HH:mm`, or blank when the backend sent
    /// nothing usable.
    pub fn display_created_at(&self) -> String {
        utils::format_display_date_or_empty(&self.created_at)
    }

    /// Renderer label for this record's file.
    pub fn content_type(&self) -> String {
        utils::classify(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_file_length_and_sanitized_name() {
        let file = NamedFile {
            name: "my scan (1).png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
        assert_eq!(file.sanitized_name(), "my-scan-1-.png");
        assert_eq!(file.name, "my scan (1).png");
    }

    #[test]
    fn test_scan_result_deserializes_camel_case() {
        let json = r#"{
            "id": 42,
            "courseId": 7,
            "fileName": "scan-42.png",
            "url": "https://backend.local/scans/42",
            "createdAt": "2023-01-05T09:03:00"
        }"#;
        let scan: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(scan.course_id, 7);
        assert_eq!(scan.display_created_at(), "2023/01/05 09:03");
        assert_eq!(scan.content_type(), "image/png");
    }

    #[test]
    fn test_scan_result_missing_timestamp_displays_blank() {
        let json = r#"{"id": 1, "courseId": 2, "fileName": "x.pdf", "url": "u"}"#;
        let scan: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(scan.display_created_at(), "");
        assert_eq!(scan.content_type(), "application/pdf");
    }

    #[test]
    fn test_scan_result_serde_round_trip() {
        let scan = ScanResult {
            id: 9,
            course_id: 3,
            file_name: "scan.jpeg".to_string(),
            url: "https://backend.local/scans/9".to_string(),
            created_at: "2024-02-29T23:59:00".to_string(),
        };
        let json = serde_json::to_string(&scan).unwrap();
        assert!(json.contains("\"courseId\":3"));
        let back: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.file_name, scan.file_name);
        assert_eq!(back.created_at, scan.created_at);
    }
}
