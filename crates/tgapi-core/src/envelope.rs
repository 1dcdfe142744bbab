//! The `{"ok": ..., "result": ...}` wrapper around every Bot API response.
//!
//! The envelope never knows its payload type. Callers pick it either through a
//! type parameter ([`decode_response`]) or a decode closure
//! ([`decode_response_with`]), so one envelope decoder serves every method.

use std::{fmt, time::Duration};

use serde_json::{Map, Value};

use crate::{
    codec::{macros::record, Decode, Decoder, Encode, Record, Segment},
    config::CodecConfig,
    errors::DecodeError,
    Result,
};

record! {
    /// Extra hints attached to some failures.
    pub struct ResponseParameters {
        /// The group was upgraded to a supergroup with this id.
        opt migrate_to_chat_id: i64 => "migrate_to_chat_id",
        /// Seconds to wait before repeating a flood-limited request.
        opt retry_after: i64 => "retry_after",
    }
}

record! {
    /// Failure half of the envelope (`"ok": false`).
    pub struct ApiError {
        opt description: String => "description",
        opt error_code: i64 => "error_code",
        opt parameters: ResponseParameters => "parameters",
    }
}

impl ApiError {
    pub fn retry_after(&self) -> Option<Duration> {
        let secs = self.parameters.as_ref()?.retry_after?;
        u64::try_from(secs).ok().map(Duration::from_secs)
    }

    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref()?.migrate_to_chat_id
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.error_code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(self.description.as_deref().unwrap_or("request failed"))
    }
}

impl std::error::Error for ApiError {}

/// A decoded response: the payload on success, the API's error otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Success {
        result: T,
        description: Option<String>,
    },
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn into_result(self) -> std::result::Result<T, ApiError> {
        match self {
            ApiResponse::Success { result, .. } => Ok(result),
            ApiResponse::Failure(err) => Err(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success {
                result,
                description,
            } => ApiResponse::Success {
                result: f(result),
                description,
            },
            ApiResponse::Failure(err) => ApiResponse::Failure(err),
        }
    }
}

/// Decode an envelope from raw bytes, with `T` as the payload type.
pub fn decode_response<T: Decode>(bytes: &[u8], config: &CodecConfig) -> Result<ApiResponse<T>> {
    decode_response_with(bytes, config, T::decode)
}

/// Decode an envelope from raw bytes, decoding `result` with `payload`.
pub fn decode_response_with<T, F>(
    bytes: &[u8],
    config: &CodecConfig,
    payload: F,
) -> Result<ApiResponse<T>>
where
    F: FnOnce(&Value, &mut Decoder) -> std::result::Result<T, DecodeError>,
{
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(decode_envelope(&value, config, payload)?)
}

/// Envelope decoding over an already parsed value tree.
pub fn decode_envelope<T, F>(
    value: &Value,
    config: &CodecConfig,
    payload: F,
) -> std::result::Result<ApiResponse<T>, DecodeError>
where
    F: FnOnce(&Value, &mut Decoder) -> std::result::Result<T, DecodeError>,
{
    let obj = value.as_object().ok_or_else(|| malformed("top level is not an object"))?;
    let ok = match obj.get("ok") {
        Some(Value::Bool(ok)) => *ok,
        Some(_) => return Err(malformed("`ok` is not a boolean")),
        None => return Err(malformed("missing `ok`")),
    };

    let mut cx = Decoder::new(config);
    cx.descend(|cx| {
        if !ok {
            return ApiError::decode_fields(obj, cx).map(ApiResponse::Failure);
        }
        let result = obj
            .get("result")
            .ok_or_else(|| malformed("`ok` is true but `result` is missing"))?;
        let result = cx.at(Segment::Field("result"), |cx| payload(result, cx))?;
        let description = cx.opt(obj, "description")?;
        Ok(ApiResponse::Success {
            result,
            description,
        })
    })
}

fn malformed(reason: &str) -> DecodeError {
    DecodeError::MalformedEnvelope {
        reason: reason.to_string(),
    }
}

impl<T: Encode> Encode for ApiResponse<T> {
    fn encode(&self) -> Value {
        let mut out = Map::new();
        match self {
            ApiResponse::Success {
                result,
                description,
            } => {
                out.insert("ok".to_string(), Value::Bool(true));
                out.insert("result".to_string(), result.encode());
                if let Some(d) = description {
                    out.insert("description".to_string(), Value::String(d.clone()));
                }
            }
            ApiResponse::Failure(err) => {
                out.insert("ok".to_string(), Value::Bool(false));
                err.encode_fields(&mut out);
            }
        }
        Value::Object(out)
    }
}
