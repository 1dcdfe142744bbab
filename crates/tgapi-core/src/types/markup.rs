//! Keyboards and reply markup.

use serde_json::Value;

use crate::{
    codec::{macros::record, presence::is_present, Decode, Decoder, Encode, Record},
    errors::DecodeError,
};

record! {
    /// Custom keyboard shown in place of the client's keyboard.
    pub struct ReplyKeyboardMarkup {
        req keyboard: Vec<Vec<KeyboardButton>> => "keyboard",
        opt resize_keyboard: bool => "resize_keyboard",
        opt one_time_keyboard: bool => "one_time_keyboard",
        opt selective: bool => "selective",
    }
}

record! {
    pub struct KeyboardButton {
        req text: String => "text",
        opt request_contact: bool => "request_contact",
        opt request_location: bool => "request_location",
    }
}

record! {
    pub struct ReplyKeyboardRemove {
        req remove_keyboard: bool => "remove_keyboard",
        opt selective: bool => "selective",
    }
}

record! {
    /// Keyboard attached to a message.
    pub struct InlineKeyboardMarkup {
        req inline_keyboard: Vec<Vec<InlineKeyboardButton>> => "inline_keyboard",
    }
}

record! {
    /// Exactly one of the optional fields is expected to be set.
    pub struct InlineKeyboardButton {
        req text: String => "text",
        opt url: String => "url",
        opt callback_data: String => "callback_data",
        opt switch_inline_query: String => "switch_inline_query",
        opt switch_inline_query_current_chat: String => "switch_inline_query_current_chat",
        opt callback_game: CallbackGame => "callback_game",
        opt pay: bool => "pay",
    }
}

record! {
    /// Placeholder; carries no information yet.
    #[derive(Default)]
    pub struct CallbackGame {}
}

record! {
    pub struct ForceReply {
        req force_reply: bool => "force_reply",
        opt selective: bool => "selective",
    }
}

impl InlineKeyboardMarkup {
    /// One callback button per row.
    pub fn single_column<I, L, D>(buttons: I) -> Self
    where
        I: IntoIterator<Item = (L, D)>,
        L: Into<String>,
        D: Into<String>,
    {
        let inline_keyboard = buttons
            .into_iter()
            .map(|(label, data)| vec![InlineKeyboardButton::callback(label, data)])
            .collect();
        Self { inline_keyboard }
    }
}

impl InlineKeyboardButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            callback_data: None,
            ..Self::callback(text, String::new())
        }
    }
}

/// The `reply_markup` parameter of send methods.
///
/// Each form is recognised by its one required key.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

const MARKUP_KEYS: [&str; 4] = ["inline_keyboard", "keyboard", "remove_keyboard", "force_reply"];

impl Decode for ReplyMarkup {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        let obj = cx.object(value)?;
        let present: Vec<&'static str> = MARKUP_KEYS
            .iter()
            .copied()
            .filter(|k| is_present(obj, k))
            .collect();
        let key = match present.as_slice() {
            [key] => *key,
            [] => return Err(DecodeError::UnrecognizedContent { field: cx.path() }),
            _ => {
                return Err(DecodeError::AmbiguousContent {
                    field: cx.path(),
                    candidates: present,
                })
            }
        };
        cx.descend(|cx| match key {
            "inline_keyboard" => {
                InlineKeyboardMarkup::decode_fields(obj, cx).map(ReplyMarkup::InlineKeyboard)
            }
            "keyboard" => ReplyKeyboardMarkup::decode_fields(obj, cx).map(ReplyMarkup::ReplyKeyboard),
            "remove_keyboard" => ReplyKeyboardRemove::decode_fields(obj, cx).map(ReplyMarkup::Remove),
            _ => ForceReply::decode_fields(obj, cx).map(ReplyMarkup::ForceReply),
        })
    }
}

impl Encode for ReplyMarkup {
    fn encode(&self) -> Value {
        match self {
            ReplyMarkup::InlineKeyboard(m) => m.encode(),
            ReplyMarkup::ReplyKeyboard(m) => m.encode(),
            ReplyMarkup::Remove(m) => m.encode(),
            ReplyMarkup::ForceReply(m) => m.encode(),
        }
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(m: InlineKeyboardMarkup) -> Self {
        ReplyMarkup::InlineKeyboard(m)
    }
}
