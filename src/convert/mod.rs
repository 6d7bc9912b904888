//! BSON to JSON conversion for exported documents
//!
//! Documents are read from the store as BSON and written as plain JSON.
//! BSON-only types are simplified to the closest JSON representation:
//! - ObjectId → hex string
//! - DateTime → RFC 3339 string
//! - Decimal128 → number when it converts exactly, string otherwise
//! - Binary → canonical UUID string or base64
//! - Regex → `/pattern/options`
//! - Timestamp → `{"t": seconds, "i": increment}`
//!
//! Field order is preserved; `serde_json` is built with `preserve_order`.

mod converter;
mod helpers;

use bson::{Binary, DateTime, Decimal128, Document, Regex, Timestamp, oid::ObjectId};
use serde_json::Value as JsonValue;

pub use converter::BsonJsonConverter;
use helpers::*;

/// Ordered JSON object produced from one exported document.
pub type JsonDocument = serde_json::Map<String, JsonValue>;

/// Converter from BSON values to simplified JSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    /// Create a new JSON converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a whole document into an ordered JSON object
    pub fn document(&self, doc: &Document) -> JsonDocument {
        self.convert_document_to_json(doc)
    }

    /// Convert a sequence of documents, keeping their order
    pub fn documents(&self, docs: &[Document]) -> Vec<JsonDocument> {
        docs.iter().map(|doc| self.document(doc)).collect()
    }
}

impl BsonJsonConverter for JsonConverter {
    fn convert_object_id(&self, oid: &ObjectId) -> JsonValue {
        JsonValue::String(oid.to_hex())
    }

    fn convert_datetime(&self, dt: &DateTime) -> JsonValue {
        JsonValue::String(datetime_to_iso_string(dt))
    }

    fn convert_decimal128(&self, d: &Decimal128) -> JsonValue {
        let text = d.to_string();
        text.parse::<f64>()
            .ok()
            .filter(|f| f.to_string() == text)
            .and_then(serde_json::Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::String(text))
    }

    fn convert_binary(&self, bin: &Binary) -> JsonValue {
        JsonValue::String(binary_to_uuid_string(bin).unwrap_or_else(|| binary_to_base64(bin)))
    }

    fn convert_regex(&self, regex: &Regex) -> JsonValue {
        JsonValue::String(format!("/{}/{}", regex.pattern, regex.options))
    }

    fn convert_timestamp(&self, ts: &Timestamp) -> JsonValue {
        let mut parts = JsonDocument::new();
        parts.insert("t".to_string(), JsonValue::Number(ts.time.into()));
        parts.insert("i".to_string(), JsonValue::Number(ts.increment.into()));
        JsonValue::Object(parts)
    }
}
