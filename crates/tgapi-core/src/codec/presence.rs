//! Required vs optional attributes.
//!
//! Optional attributes are `Option<T>`: `None` means the field was absent on
//! the wire and is omitted again on encode; `Some(v)` is always emitted, even
//! when `v` is `0`, `false` or `""`. A JSON `null` in an optional slot reads as
//! absent. Required attributes are plain values and their absence is an error.

use serde_json::{Map, Value};

use crate::{
    codec::{Decode, Decoder, Segment},
    errors::DecodeError,
};

impl Decoder {
    /// Read a required attribute.
    pub fn req<T: Decode>(
        &mut self,
        obj: &Map<String, Value>,
        name: &'static str,
    ) -> Result<T, DecodeError> {
        match obj.get(name) {
            Some(value) => self.at(Segment::Field(name), |cx| T::decode(value, cx)),
            None => Err(DecodeError::MissingRequiredField {
                field: self.path_with(name),
            }),
        }
    }

    /// Read an optional attribute.
    pub fn opt<T: Decode>(
        &mut self,
        obj: &Map<String, Value>,
        name: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        match obj.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self
                .at(Segment::Field(name), |cx| T::decode(value, cx))
                .map(Some),
        }
    }

    /// Read a required attribute of an inline query result variant; absence
    /// means the object's shape does not fit its `type` tag.
    pub fn variant_req<T: Decode>(
        &mut self,
        obj: &Map<String, Value>,
        name: &'static str,
        tag: &str,
    ) -> Result<T, DecodeError> {
        if !obj.contains_key(name) {
            return Err(DecodeError::InvalidVariantShape {
                tag: tag.to_string(),
                field: self.path_with(name),
            });
        }
        self.req(obj, name)
    }
}

/// Whether `name` carries a value. A `null` counts as absent, matching
/// [`Decoder::opt`]; shape and marker detection use this.
pub fn is_present(obj: &Map<String, Value>, name: &str) -> bool {
    obj.get(name).is_some_and(|v| !v.is_null())
}

/// Encode side of the presence model, one function per presence keyword.
pub mod emit {
    use serde_json::{Map, Value};

    use crate::codec::Encode;

    pub fn req<T: Encode>(out: &mut Map<String, Value>, name: &str, value: &T) {
        out.insert(name.to_string(), value.encode());
    }

    pub fn opt<T: Encode>(out: &mut Map<String, Value>, name: &str, value: &Option<T>) {
        if let Some(v) = value {
            out.insert(name.to_string(), v.encode());
        }
    }
}
