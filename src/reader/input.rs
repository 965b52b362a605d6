//! Decoding block records from JSON.
//!
//! Input is either a bare array of records or the parsing service's response
//! envelope, where the array sits at `return_dict.result.blocks`. Each element
//! is decoded on its own so a bad record is reported with its index.

use std::io::Read;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::BlockRecord;

/// Decode records from a JSON string.
pub fn records_from_str(json: &str) -> Result<Vec<BlockRecord>> {
    records_from_value(serde_json::from_str(json)?)
}

/// Decode records from JSON bytes.
pub fn records_from_slice(bytes: &[u8]) -> Result<Vec<BlockRecord>> {
    records_from_value(serde_json::from_slice(bytes)?)
}

/// Decode records from a reader yielding JSON.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<BlockRecord>> {
    records_from_value(serde_json::from_reader(reader)?)
}

/// Decode records from an already parsed JSON value.
pub fn records_from_value(value: Value) -> Result<Vec<BlockRecord>> {
    let blocks = match value {
        Value::Object(mut envelope) => match envelope.remove("return_dict") {
            Some(Value::Object(mut dict)) => match dict.remove("result") {
                Some(Value::Object(mut result)) => result.remove("blocks").unwrap_or(Value::Null),
                _ => Value::Null,
            },
            _ => Value::Null,
        },
        other => other,
    };

    let elements: Vec<Value> = serde_json::from_value(blocks)?;
    log::debug!("Decoding {} block records", elements.len());

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element).map_err(|e| Error::malformed(index, e.to_string()))
        })
        .collect()
}
