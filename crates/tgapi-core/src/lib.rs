//! Typed wire codec for the Telegram Bot API.
//!
//! Decodes JSON response bodies into strongly typed values and encodes request
//! bodies back out. The HTTP client lives behind [`ports::Transport`]; this
//! crate never opens a connection.
//!
//! ```
//! use tgapi_core::{config::CodecConfig, envelope::decode_response, types::User};
//!
//! let raw = br#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"Bot"}}"#;
//! let me: User = decode_response(raw, &CodecConfig::default())?
//!     .into_result()?;
//! assert_eq!(me.first_name, "Bot");
//! # Ok::<(), tgapi_core::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod content;
pub mod envelope;
pub mod errors;
pub mod inline;
pub mod logging;
pub mod methods;
pub mod ports;
pub mod types;

pub use errors::{DecodeError, Error, Result};
