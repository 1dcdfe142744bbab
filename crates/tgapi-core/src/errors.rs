use crate::{codec::JsonKind, envelope::ApiError};

/// Decode-time failure of a single payload.
///
/// Every variant carries enough context (field path, tag, reason) for a caller
/// to log a precise diagnostic. Decoding is atomic: a value either decodes
/// completely or yields one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: String },

    #[error("type mismatch at `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: JsonKind,
        found: JsonKind,
    },

    #[error("unknown inline query result type `{tag}`")]
    UnknownVariant { tag: String },

    #[error("inline query result `{tag}` is missing required field `{field}`")]
    InvalidVariantShape { tag: String, field: String },

    #[error("input message content at `{field}` matches several shapes: {}", .candidates.join(", "))]
    AmbiguousContent {
        field: String,
        candidates: Vec<&'static str>,
    },

    #[error("input message content at `{field}` matches no known shape")]
    UnrecognizedContent { field: String },

    #[error("malformed response envelope: {reason}")]
    MalformedEnvelope { reason: String },

    #[error("nesting deeper than {limit} levels at `{field}`")]
    DepthExceeded { limit: usize, field: String },
}

/// Crate-level error.
///
/// Transport adapters should map their failures into `External` so callers of
/// [`crate::ports::call`] see a single error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("telegram api error: {0}")]
    Api(#[from] ApiError),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
