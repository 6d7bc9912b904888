//! JSON artifact writer
//!
//! Serializes a whole export into memory and writes it with a single call.
//! Output is UTF-8 with non-ASCII characters kept literally and no trailing
//! newline.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{ExportError, Result};

/// Writer for pretty-printed JSON export files
#[derive(Debug, Clone, Copy)]
pub struct JsonArtifactWriter {
    /// Spaces per indentation level
    indent: usize,
}

impl JsonArtifactWriter {
    /// Create a writer with the given indentation width
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Serialize a value to pretty JSON bytes
    ///
    /// # Arguments
    /// * `value` - The value to serialize
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - Pretty JSON with custom indent
    pub fn render<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Serialize a value and write it to `path`, replacing any existing file
    ///
    /// # Returns
    /// * `Result<u64>` - Number of bytes written
    pub async fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<u64> {
        let bytes = self.render(value)?;

        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| ExportError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(bytes.len() as u64)
    }
}

impl Default for JsonArtifactWriter {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_four_space_indent() {
        let writer = JsonArtifactWriter::new(4);
        let out = writer.render(&json!([{ "name": "a" }, { "name": "b" }])).unwrap();
        let expected = "[\n    {\n        \"name\": \"a\"\n    },\n    {\n        \"name\": \"b\"\n    }\n]";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_keeps_non_ascii_literal() {
        let writer = JsonArtifactWriter::default();
        let out = writer.render(&json!({ "city": "Zürich", "greeting": "こんにちは" })).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Zürich"));
        assert!(text.contains("こんにちは"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_render_empty_containers() {
        let writer = JsonArtifactWriter::default();
        assert_eq!(writer.render(&json!([])).unwrap(), b"[]");
        assert_eq!(writer.render(&json!({})).unwrap(), b"{}");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "stale content that is longer than the export").unwrap();

        let writer = JsonArtifactWriter::default();
        let written = writer.write(&path, &json!([])).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let writer = JsonArtifactWriter::default();
        let result = writer
            .write(Path::new("/nonexistent/directory/orders.json"), &json!([]))
            .await;
        assert!(result.is_err());
    }
}
