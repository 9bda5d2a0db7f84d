//! File records as served by `GET /api/files`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::api;

/// Server-assigned file identifier.
///
/// The server may emit either a JSON number or a string; both are kept
/// verbatim so the delete path matches what the server handed out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single uploaded file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    /// Name as stored on the server; doubles as the download path segment.
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl FileRecord {
    /// Same-origin static URL the file is served from.
    pub fn download_url(&self) -> String {
        format!("{}{}/{}", api::BASE_URL, api::DOWNLOADS, self.name)
    }
}

/// `DELETE` endpoint for a file id.
pub fn delete_url(id: &FileId) -> String {
    format!("{}{}/{}", api::BASE_URL, api::FILES, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_and_string_ids() {
        let files: Vec<FileRecord> = serde_json::from_str(
            r#"[{"id":1712,"name":"a.jar","size":10},{"id":"abc","name":"b.zip","size":0}]"#,
        )
        .unwrap();

        assert_eq!(files[0].id, FileId::Number(1712));
        assert_eq!(files[1].id, FileId::Text("abc".to_string()));
        assert_eq!(files[1].size, 0);
    }

    #[test]
    fn test_missing_size_defaults_to_zero() {
        let file: FileRecord = serde_json::from_str(r#"{"id":1,"name":"x"}"#).unwrap();
        assert_eq!(file.size, 0);
    }

    #[test]
    fn test_urls() {
        let file = FileRecord {
            id: FileId::Number(42),
            name: "killaura.jar".to_string(),
            size: 2048,
        };
        assert_eq!(file.download_url(), "/uploads/killaura.jar");
        assert_eq!(delete_url(&file.id), "/api/files/42");
        assert_eq!(delete_url(&FileId::Text("x-1".into())), "/api/files/x-1");
    }
}
