//! Tree structures for the raw uploads listing.
//!
//! Uploads live on disk only (no file-node rows), so the listing is
//! built by walking `uploads/{project_id}/` and carries filesystem
//! metadata instead of database identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an upload entry is a directory or a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadEntryKind {
    /// A directory.
    Folder,
    /// A regular file.
    File,
}

/// One entry in the uploads tree of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEntry {
    /// Entry name (single path component).
    pub name: String,
    /// Directory or file.
    #[serde(rename = "type")]
    pub kind: UploadEntryKind,
    /// File size in bytes (files only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time, when the filesystem reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    /// Child entries (folders only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UploadEntry>>,
}

impl UploadEntry {
    /// Creates a file entry.
    pub fn file(name: String, size: u64, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            name,
            kind: UploadEntryKind::File,
            size: Some(size),
            modified,
            children: None,
        }
    }

    /// Creates a folder entry with its children.
    pub fn folder(name: String, children: Vec<UploadEntry>) -> Self {
        Self {
            name,
            kind: UploadEntryKind::Folder,
            size: None,
            modified: None,
            children: Some(children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type_field() {
        let entry = UploadEntry::folder(
            "a".to_string(),
            vec![UploadEntry::file("b.txt".to_string(), 3, None)],
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "folder");
        assert_eq!(value["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["size"], 3);
        assert!(value.get("size").is_none());
    }
}
