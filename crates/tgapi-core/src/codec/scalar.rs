use serde_json::Value;

use crate::{
    codec::{Decode, Decoder, Encode, JsonKind, Segment},
    errors::DecodeError,
};

impl Decode for bool {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| cx.mismatch(JsonKind::Bool, value))
    }
}

impl Encode for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Decode for i64 {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        value.as_i64().ok_or_else(|| cx.mismatch(JsonKind::Integer, value))
    }
}

impl Encode for i64 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Decode for f64 {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        value.as_f64().ok_or_else(|| cx.mismatch(JsonKind::Number, value))
    }
}

impl Encode for f64 {
    // Non-finite values have no JSON form and come out as `null`.
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Decode for String {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| cx.mismatch(JsonKind::String, value))
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| cx.mismatch(JsonKind::Array, value))?;
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| cx.at(Segment::Index(idx), |cx| T::decode(item, cx)))
            .collect()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        T::decode(value, cx).map(Box::new)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}
