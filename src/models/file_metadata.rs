//! Metadata recorded for a submitted film.
//!
//! Only descriptive fields are stored; the file itself never leaves the
//! submitter's machine.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use std::fmt;

/// A persisted file metadata row.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Auto-assigned row id.
    pub id: i64,

    /// Film title. Empty when the submitter left it out.
    pub title: String,

    /// Original filename on the submitter's machine.
    pub filename: String,

    /// Human-formatted size, e.g. `10.00MB`.
    pub size: String,

    /// MIME type reported for the file.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub mime_type: String,

    /// Display timestamp captured when the submission completed.
    pub uploaded_at: String,
}

/// Validated insert payload for `file_metadata`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewFileMetadata {
    pub title: String,
    pub filename: String,
    pub size: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uploaded_at: String,
}

/// One problem found while validating a request body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field path; empty when the body itself is wrong.
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &[&str], code: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|p| p.to_string()).collect(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

impl NewFileMetadata {
    /// Validate an arbitrary JSON body.
    ///
    /// `filename`, `size`, `type` and `uploadedAt` must be strings. `title`
    /// may be missing or null and then defaults to the empty string. Any
    /// `id` in the body is ignored. Every problem is reported, not just the
    /// first one.
    pub fn from_json(value: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let Some(body) = value.as_object() else {
            return Err(vec![ValidationIssue::new(
                &[],
                "invalid_type",
                format!("Expected object, received {}", json_kind(value)),
            )]);
        };

        let mut issues = Vec::new();
        let title = optional_string(body, "title", &mut issues);
        let filename = required_string(body, "filename", &mut issues);
        let size = required_string(body, "size", &mut issues);
        let mime_type = required_string(body, "type", &mut issues);
        let uploaded_at = required_string(body, "uploadedAt", &mut issues);

        match (filename, size, mime_type, uploaded_at) {
            (Some(filename), Some(size), Some(mime_type), Some(uploaded_at))
                if issues.is_empty() =>
            {
                Ok(Self {
                    title: title.unwrap_or_default(),
                    filename,
                    size,
                    mime_type,
                    uploaded_at,
                })
            }
            _ => Err(issues),
        }
    }
}

fn required_string(
    body: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => {
            issues.push(ValidationIssue::new(&[field], "invalid_type", "Required"));
            None
        }
        Some(other) => {
            issues.push(ValidationIssue::new(
                &[field],
                "invalid_type",
                format!("Expected string, received {}", json_kind(other)),
            ));
            None
        }
    }
}

fn optional_string(
    body: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => None,
        Some(other) => {
            issues.push(ValidationIssue::new(
                &[field],
                "invalid_type",
                format!("Expected string, received {}", json_kind(other)),
            ));
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte count the way the submission page displays it
/// (`512 B`, `1.50KB`, `10.00MB`, `2.00GB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2}KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.2}MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2}GB", bytes as f64 / GIB as f64)
    }
}

/// Format a completion time as `October 16, 2026 at 3:04 PM`.
pub fn format_uploaded_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%B %-d, %Y at %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn complete_body_validates() {
        let body = json!({
            "title": "My Film",
            "filename": "my-film.mp4",
            "size": "10.00MB",
            "type": "video/mp4",
            "uploadedAt": "October 16, 2026 at 3:04 PM",
            "id": 99
        });

        let new = NewFileMetadata::from_json(&body).unwrap();
        assert_eq!(new.title, "My Film");
        assert_eq!(new.mime_type, "video/mp4");
        assert_eq!(new.uploaded_at, "October 16, 2026 at 3:04 PM");
    }

    #[test]
    fn title_defaults_to_empty() {
        let body = json!({
            "title": null,
            "filename": "a.mov",
            "size": "1 B",
            "type": "video/quicktime",
            "uploadedAt": "now"
        });

        assert_eq!(NewFileMetadata::from_json(&body).unwrap().title, "");
    }

    #[test]
    fn every_missing_field_is_reported() {
        let body = json!({ "title": 7, "size": "1 B" });

        let issues = NewFileMetadata::from_json(&body).unwrap_err();
        let paths: Vec<String> = issues.iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, ["title", "filename", "type", "uploadedAt"]);
        assert_eq!(issues[0].message, "Expected string, received number");
        assert_eq!(issues[1].message, "Required");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let issues = NewFileMetadata::from_json(&json!(["filename"])).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_empty());
        assert_eq!(issues[0].to_string(), "Expected object, received array");
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = FileMetadata {
            id: 1,
            title: String::new(),
            filename: "f.avi".into(),
            size: "3.00KB".into(),
            mime_type: "video/x-msvideo".into(),
            uploaded_at: "then".into(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "video/x-msvideo");
        assert_eq!(value["uploadedAt"], "then");
        assert!(value.get("mime_type").is_none());
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.50KB");
        assert_eq!(format_file_size(10 * MIB), "10.00MB");
        assert_eq!(format_file_size(2 * GIB), "2.00GB");
    }

    #[test]
    fn uploaded_at_reads_like_a_date() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 15, 4, 0).unwrap();
        assert_eq!(format_uploaded_at(&at), "October 16, 2026 at 3:04 PM");

        let morning = Utc.with_ymd_and_hms(2026, 1, 2, 0, 30, 0).unwrap();
        assert_eq!(format_uploaded_at(&morning), "January 2, 2026 at 12:30 AM");
    }
}
