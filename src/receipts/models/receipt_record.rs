use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::receipts::enums::receipt_field::ReceiptField;

/// Flat view of one receipt analysis. Missing fields resolve to their fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptRecord {
    values: HashMap<ReceiptField, String>,
}

impl ReceiptRecord {
    /// Parses an analysis document. The top level must be a JSON object;
    /// unknown keys are ignored and non-scalar or null values count as missing.
    pub fn from_slice(bytes: &[u8]) -> Result<ReceiptRecord, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(bytes)?;

        Ok(ReceiptRecord::from_object(object))
    }

    pub fn from_object(object: Map<String, Value>) -> ReceiptRecord {
        let mut record = ReceiptRecord::default();

        for (key, value) in object {
            let Some(field) = ReceiptField::from_key(&key) else {
                continue;
            };

            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };

            record.set(field, value);
        }

        record
    }

    pub fn set(&mut self, field: ReceiptField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: ReceiptField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn value_or_fallback(&self, field: ReceiptField) -> &str {
        self.value(field).unwrap_or(field.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_known_fields() {
        let record = ReceiptRecord::from_slice(
            br#"{"vendor_name": "Corner Store", "total": "12.50", "date": "2024-03-01"}"#,
        )
        .unwrap();

        assert_eq!(record.value(ReceiptField::VendorName), Some("Corner Store"));
        assert_eq!(record.value(ReceiptField::Total), Some("12.50"));
        assert_eq!(record.value(ReceiptField::Date), Some("2024-03-01"));
        assert_eq!(record.value(ReceiptField::Phone), None);
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let record = ReceiptRecord::from_slice(b"{}").unwrap();

        for field in ReceiptField::ALL {
            assert_eq!(record.value_or_fallback(field), field.fallback());
        }
    }

    #[test]
    fn test_scalars_are_kept_as_text() {
        let record =
            ReceiptRecord::from_slice(br#"{"tax": 1.25, "total": 10, "category": true}"#).unwrap();

        assert_eq!(record.value(ReceiptField::Tax), Some("1.25"));
        assert_eq!(record.value(ReceiptField::Total), Some("10"));
        assert_eq!(record.value(ReceiptField::Category), Some("true"));
    }

    #[test]
    fn test_null_and_nested_values_count_as_missing() {
        let record = ReceiptRecord::from_slice(
            br#"{"phone": null, "address": {"street": "Main"}, "commentary": ["a"], "extra": "x"}"#,
        )
        .unwrap();

        assert_eq!(record, ReceiptRecord::default());
        assert_eq!(record.value_or_fallback(ReceiptField::Phone), "Unknown");
    }

    #[test]
    fn test_rejects_non_object_documents() {
        assert!(ReceiptRecord::from_slice(b"not json").is_err());
        assert!(ReceiptRecord::from_slice(b"[1, 2, 3]").is_err());
        assert!(ReceiptRecord::from_slice(br#""vendor""#).is_err());
    }
}
