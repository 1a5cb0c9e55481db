//! Registered report metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one registered report template.
///
/// The template binary itself lives in object storage and the record in the
/// relational store; both are external collaborators. This struct is the
/// in-process shape shared by the catalog, sector listing, and lookup
/// helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Stable business code the report is addressed by (e.g. `REL_VENDAS`).
    pub code: String,
    /// Template object name, usually carrying a template extension.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit sector assignment; inferred from code/name hints when absent.
    #[serde(default)]
    pub sector: Option<String>,
    /// Content type recorded at upload.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Template binary size in bytes.
    #[serde(default)]
    pub file_size: u64,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
}

impl ReportRecord {
    /// Creates a record with the given code and object name; remaining fields
    /// take their documented defaults and `created_at` is stamped now.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: None,
            sector: None,
            content_type: None,
            file_size: 0,
            created_at: Utc::now(),
        }
    }
}
