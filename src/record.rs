//! Record Module
//!
//! The field-map record model and its single-blob codec.
//!
//! A record is addressed by `(table, key)` and stored under the composite
//! cache key `table:key` as one serialized blob. All fields travel
//! together: reads and writes always cover the entire map.

use std::collections::HashMap;

use crate::error::{AdapterError, Result};

/// A record: field names mapped to raw byte values.
pub type Record = HashMap<String, Vec<u8>>;

/// Composes the cache key for a record.
pub fn record_key(table: &str, key: &str) -> String {
    format!("{}:{}", table, key)
}

/// Serializes a record's field map into its blob form.
pub fn encode(record: &Record) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(AdapterError::Encode)
}

/// Deserializes a blob back into a record's field map.
pub fn decode(blob: &[u8]) -> Result<Record> {
    serde_json::from_slice(blob).map_err(AdapterError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_composition() {
        assert_eq!(record_key("usertable", "user42"), "usertable:user42");
    }

    #[test]
    fn test_encode_decode_preserves_fields() {
        let mut record = Record::new();
        record.insert("field0".to_string(), b"hello".to_vec());
        record.insert("field1".to_string(), vec![0, 159, 146, 150]);

        let blob = encode(&record).unwrap();
        let decoded = decode(&blob).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(b"not a record blob");
        assert!(matches!(result, Err(AdapterError::Decode(_))));
    }

    #[test]
    fn test_empty_record_encodes() {
        let blob = encode(&Record::new()).unwrap();
        assert!(decode(&blob).unwrap().is_empty());
    }
}
