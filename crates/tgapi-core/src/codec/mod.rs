//! Field-level JSON codec shared by every record and union in the crate.
//!
//! Values are parsed into a `serde_json::Value` tree first and then walked by
//! hand so failures map onto [`DecodeError`] with a field path instead of a
//! serde message. Encoding builds an insertion-ordered `serde_json::Map`, so the
//! output order is exactly the declaration order of each record.

use std::fmt;

use serde_json::{Map, Value};

use crate::{config::CodecConfig, errors::DecodeError, Result};

mod decoder;
pub(crate) mod macros;
pub mod presence;
mod scalar;

pub use decoder::{Decoder, Segment};

/// JSON value kinds as seen by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    /// Integer above `i64::MAX`; no integer slot can hold it.
    LargeInteger,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(n) if n.is_i64() => JsonKind::Integer,
            Value::Number(n) if n.is_u64() => JsonKind::LargeInteger,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Integer => "integer",
            JsonKind::LargeInteger => "integer out of i64 range",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that can be read from a JSON value.
pub trait Decode: Sized {
    fn decode(value: &Value, cx: &mut Decoder) -> std::result::Result<Self, DecodeError>;
}

/// A type that can be written as a JSON value.
pub trait Encode {
    fn encode(&self) -> Value;
}

/// A flat record: a fixed, ordered list of named attributes.
///
/// Split from [`Decode`]/[`Encode`] so records can be composed into a parent
/// object without an extra nesting level (inline query results embed their
/// shared base this way).
pub trait Record: Sized {
    fn decode_fields(
        obj: &Map<String, Value>,
        cx: &mut Decoder,
    ) -> std::result::Result<Self, DecodeError>;

    fn encode_fields(&self, out: &mut Map<String, Value>);
}

/// Decode a value tree with an explicit configuration.
pub fn from_value<T: Decode>(
    value: &Value,
    config: &CodecConfig,
) -> std::result::Result<T, DecodeError> {
    let mut cx = Decoder::new(config);
    T::decode(value, &mut cx)
}

/// Decode raw JSON bytes using the default configuration.
pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T> {
    from_slice_with(bytes, &CodecConfig::default())
}

pub fn from_slice_with<T: Decode>(bytes: &[u8], config: &CodecConfig) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(from_value(&value, config)?)
}

pub fn to_value<T: Encode + ?Sized>(value: &T) -> Value {
    value.encode()
}

pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    value.encode().to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kinds_distinguish_integers_from_fractions() {
        assert_eq!(JsonKind::of(&json!(3)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(3.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("3")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(u64::MAX)), JsonKind::LargeInteger);
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = from_slice::<String>(b"{not json").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn decode_errors_surface_through_from_slice() {
        let err = from_slice::<i64>(br#""seven""#).unwrap_err();
        match err {
            crate::Error::Decode(DecodeError::TypeMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, JsonKind::Integer);
                assert_eq!(found, JsonKind::String);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
