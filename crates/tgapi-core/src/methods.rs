//! Request records for the Bot API methods the codec covers.
//!
//! Each request knows its method name and the payload type that comes back
//! inside the response envelope, so [`crate::ports::call`] can pick the right
//! decoder without the caller spelling it out.

use serde_json::Value;

use crate::{
    codec::{macros::record, Decode, Decoder, Encode, JsonKind},
    errors::DecodeError,
    inline::InlineQueryResult,
    types::{
        enums::{ChatAction, ParseMode, UpdateType},
        Chat, ChatMember, File, GameHighScore, Message, ReplyMarkup, Update, User,
        UserProfilePhotos, WebhookInfo,
    },
};

/// A Bot API method: its request body plus the expected `result` type.
pub trait Method: Encode {
    const NAME: &'static str;
    type Output: Decode;
}

/// Target chat: numeric id, or `@channelusername` for public channels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl Decode for ChatId {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(ChatId::Username(s.clone())),
            _ => value
                .as_i64()
                .map(ChatId::Id)
                .ok_or_else(|| cx.mismatch(JsonKind::Integer, value)),
        }
    }
}

impl Encode for ChatId {
    fn encode(&self) -> Value {
        match self {
            ChatId::Id(id) => Value::from(*id),
            ChatId::Username(name) => Value::String(name.clone()),
        }
    }
}

macro_rules! method {
    ($req:ident => $name:literal, $out:ty) => {
        impl Method for $req {
            const NAME: &'static str = $name;
            type Output = $out;
        }
    };
}

record! {
    #[derive(Default)]
    pub struct GetMe {}
}

record! {
    /// Long polling for incoming updates.
    #[derive(Default)]
    pub struct GetUpdates {
        /// First update id to return; confirms everything before it.
        opt offset: i64 => "offset",
        opt limit: i64 => "limit",
        /// Long-poll timeout in seconds. `0` is short polling.
        opt timeout: i64 => "timeout",
        opt allowed_updates: Vec<UpdateType> => "allowed_updates",
    }
}

record! {
    #[derive(Default)]
    pub struct GetWebhookInfo {}
}

record! {
    pub struct SendMessage {
        req chat_id: ChatId => "chat_id",
        req text: String => "text",
        opt parse_mode: ParseMode => "parse_mode",
        opt disable_web_page_preview: bool => "disable_web_page_preview",
        opt disable_notification: bool => "disable_notification",
        opt reply_to_message_id: i64 => "reply_to_message_id",
        opt reply_markup: ReplyMarkup => "reply_markup",
    }
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

record! {
    pub struct GetUserProfilePhotos {
        req user_id: i64 => "user_id",
        opt offset: i64 => "offset",
        opt limit: i64 => "limit",
    }
}

record! {
    pub struct GetFile {
        req file_id: String => "file_id",
    }
}

record! {
    pub struct GetChat {
        req chat_id: ChatId => "chat_id",
    }
}

record! {
    pub struct GetChatAdministrators {
        req chat_id: ChatId => "chat_id",
    }
}

record! {
    pub struct GetChatMember {
        req chat_id: ChatId => "chat_id",
        req user_id: i64 => "user_id",
    }
}

record! {
    pub struct GetChatMembersCount {
        req chat_id: ChatId => "chat_id",
    }
}

record! {
    pub struct ExportChatInviteLink {
        req chat_id: ChatId => "chat_id",
    }
}

record! {
    /// Reply to an inline query with up to 50 results.
    pub struct AnswerInlineQuery {
        req inline_query_id: String => "inline_query_id",
        req results: Vec<InlineQueryResult> => "results",
        /// Seconds the results may be cached server-side.
        opt cache_time: i64 => "cache_time",
        opt is_personal: bool => "is_personal",
        opt next_offset: String => "next_offset",
        opt switch_pm_text: String => "switch_pm_text",
        opt switch_pm_parameter: String => "switch_pm_parameter",
    }
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        }
    }
}

record! {
    /// Either `chat_id` with `message_id`, or `inline_message_id`.
    pub struct GetGameHighScores {
        req user_id: i64 => "user_id",
        opt chat_id: i64 => "chat_id",
        opt message_id: i64 => "message_id",
        opt inline_message_id: String => "inline_message_id",
    }
}

record! {
    pub struct SendChatAction {
        req chat_id: ChatId => "chat_id",
        req action: ChatAction => "action",
    }
}

method!(GetMe => "getMe", User);
method!(GetUpdates => "getUpdates", Vec<Update>);
method!(GetWebhookInfo => "getWebhookInfo", WebhookInfo);
method!(SendMessage => "sendMessage", Message);
method!(GetUserProfilePhotos => "getUserProfilePhotos", UserProfilePhotos);
method!(GetFile => "getFile", File);
method!(GetChat => "getChat", Chat);
method!(GetChatAdministrators => "getChatAdministrators", Vec<ChatMember>);
method!(GetChatMember => "getChatMember", ChatMember);
method!(GetChatMembersCount => "getChatMembersCount", i64);
method!(ExportChatInviteLink => "exportChatInviteLink", String);
method!(AnswerInlineQuery => "answerInlineQuery", bool);
method!(GetGameHighScores => "getGameHighScores", Vec<GameHighScore>);
method!(SendChatAction => "sendChatAction", bool);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        codec::{from_value, to_value},
        config::CodecConfig,
        inline::InlineQueryResultArticle,
        types::InlineKeyboardMarkup,
    };

    #[test]
    fn send_message_encodes_only_what_is_set() {
        let mut req = SendMessage::new(42_i64, "<b>hi</b>");
        req.parse_mode = Some(ParseMode::Html);
        req.disable_notification = Some(false);
        assert_eq!(
            to_value(&req),
            json!({
                "chat_id": 42,
                "text": "<b>hi</b>",
                "parse_mode": "HTML",
                "disable_notification": false
            })
        );
        assert_eq!(SendMessage::NAME, "sendMessage");
    }

    #[test]
    fn chat_id_accepts_usernames() {
        let req = GetChat {
            chat_id: ChatId::from("@channel"),
        };
        let v = to_value(&req);
        assert_eq!(v, json!({"chat_id": "@channel"}));
        assert_eq!(from_value::<GetChat>(&v, &CodecConfig::default()).unwrap(), req);

        let err = from_value::<ChatId>(&json!(true), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    }

    #[test]
    fn empty_requests_encode_as_empty_objects() {
        assert_eq!(to_value(&GetMe::default()), json!({}));
        assert_eq!(to_value(&GetUpdates::default()), json!({}));
    }

    #[test]
    fn reply_markup_goes_out_in_its_own_shape() {
        let mut req = SendMessage::new(1_i64, "pick");
        req.reply_markup = Some(InlineKeyboardMarkup::single_column([("Yes", "y")]).into());
        let v = to_value(&req);
        assert_eq!(
            v["reply_markup"],
            json!({"inline_keyboard": [[{"text": "Yes", "callback_data": "y"}]]})
        );
        assert_eq!(from_value::<SendMessage>(&v, &CodecConfig::default()).unwrap(), req);
    }

    #[test]
    fn answer_inline_query_nests_tagged_results() {
        let req = AnswerInlineQuery::new(
            "q1",
            vec![InlineQueryResultArticle::text("a", "Title", "body").into()],
        );
        let v = to_value(&req);
        assert_eq!(v["results"][0]["type"], "article");
        assert_eq!(v["results"][0]["id"], "a");
        assert_eq!(AnswerInlineQuery::NAME, "answerInlineQuery");
    }
}
