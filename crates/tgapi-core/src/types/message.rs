use chrono::{DateTime, Utc};

use crate::{
    codec::macros::record,
    types::{
        chat::{Chat, User},
        enums::MessageEntityType,
        game::Game,
        media::{Audio, Contact, Document, Location, PhotoSize, Sticker, Venue, Video, VideoNote, Voice},
        payments::{Invoice, SuccessfulPayment},
    },
};

record! {
    /// A special span of message text (command, link, mention, …).
    ///
    /// Offsets and lengths are in UTF-16 code units.
    pub struct MessageEntity {
        req kind: MessageEntityType => "type",
        req offset: i64 => "offset",
        req length: i64 => "length",
        /// Only for `text_link`.
        opt url: String => "url",
        /// Only for `text_mention`.
        opt user: User => "user",
    }
}

record! {
    /// <https://core.telegram.org/bots/api#message>
    ///
    /// `reply_to_message` and `pinned_message` link to other messages. The
    /// schema does not bound the chain; the decoder's depth limit does.
    #[derive(Default)]
    pub struct Message {
        req message_id: i64 => "message_id",
        opt from: User => "from",
        /// Unix seconds.
        req date: i64 => "date",
        req chat: Chat => "chat",
        opt forward_from: User => "forward_from",
        opt forward_from_chat: Chat => "forward_from_chat",
        opt forward_from_message_id: i64 => "forward_from_message_id",
        opt forward_date: i64 => "forward_date",
        opt reply_to_message: Box<Message> => "reply_to_message",
        opt edit_date: i64 => "edit_date",
        opt text: String => "text",
        opt entities: Vec<MessageEntity> => "entities",
        opt audio: Audio => "audio",
        opt document: Document => "document",
        opt game: Game => "game",
        opt photo: Vec<PhotoSize> => "photo",
        opt sticker: Sticker => "sticker",
        opt video: Video => "video",
        opt voice: Voice => "voice",
        opt video_note: VideoNote => "video_note",
        opt caption: String => "caption",
        opt contact: Contact => "contact",
        opt location: Location => "location",
        opt venue: Venue => "venue",
        opt new_chat_members: Vec<User> => "new_chat_members",
        opt left_chat_member: User => "left_chat_member",
        opt new_chat_title: String => "new_chat_title",
        opt new_chat_photo: Vec<PhotoSize> => "new_chat_photo",
        opt delete_chat_photo: bool => "delete_chat_photo",
        opt group_chat_created: bool => "group_chat_created",
        opt supergroup_chat_created: bool => "supergroup_chat_created",
        opt channel_chat_created: bool => "channel_chat_created",
        opt migrate_to_chat_id: i64 => "migrate_to_chat_id",
        opt migrate_from_chat_id: i64 => "migrate_from_chat_id",
        opt pinned_message: Box<Message> => "pinned_message",
        opt invoice: Invoice => "invoice",
        opt successful_payment: SuccessfulPayment => "successful_payment",
    }
}

impl Message {
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.date, 0)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edit_date
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    /// Messages this one replies to, nearest first.
    pub fn reply_chain(&self) -> impl Iterator<Item = &Message> {
        std::iter::successors(self.reply_to_message.as_deref(), |m| {
            m.reply_to_message.as_deref()
        })
    }

    /// Text slice covered by `entity`, if the message has text and the
    /// entity's UTF-16 range falls inside it.
    pub fn entity_text(&self, entity: &MessageEntity) -> Option<String> {
        let text = self.text.as_deref().or(self.caption.as_deref())?;
        let units: Vec<u16> = text.encode_utf16().collect();
        let start = usize::try_from(entity.offset).ok()?;
        let end = start.checked_add(usize::try_from(entity.length).ok()?)?;
        let slice = units.get(start..end)?;
        String::from_utf16(slice).ok()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        codec::{from_slice_with, from_value, to_value, Encode},
        config::CodecConfig,
        errors::DecodeError,
        types::enums::ChatType,
    };

    fn chat() -> Value {
        json!({"id": 42, "type": "private", "first_name": "Ann"})
    }

    fn reply_chain(levels: usize) -> Value {
        let mut msg = json!({"message_id": 0, "date": 1, "chat": chat()});
        for id in 1..=levels {
            msg = json!({
                "message_id": id,
                "date": 1,
                "chat": chat(),
                "reply_to_message": msg
            });
        }
        msg
    }

    #[test]
    fn decodes_a_typical_text_message() {
        let raw = json!({
            "message_id": 10,
            "from": {"id": 42, "is_bot": false, "first_name": "Ann", "language_code": "en"},
            "date": 1_700_000_000,
            "chat": chat(),
            "text": "/start now",
            "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
        });
        let msg: Message = from_value(&raw, &CodecConfig::default()).unwrap();
        assert_eq!(msg.chat.kind, ChatType::Private);
        assert_eq!(msg.from.as_ref().and_then(|u| u.is_bot), Some(false));
        let entity = &msg.entities.as_ref().unwrap()[0];
        assert_eq!(msg.entity_text(entity).as_deref(), Some("/start"));
        assert_eq!(msg.sent_at().map(|t| t.timestamp()), Some(1_700_000_000));
        assert_eq!(to_value(&msg), raw);
    }

    #[test]
    fn entity_text_counts_utf16_units() {
        let msg = Message {
            text: Some("😀 @bob".to_string()),
            ..Message::default()
        };
        let entity = MessageEntity {
            kind: MessageEntityType::Mention,
            offset: 3,
            length: 4,
            url: None,
            user: None,
        };
        assert_eq!(msg.entity_text(&entity).as_deref(), Some("@bob"));
    }

    #[test]
    fn all_absent_and_all_zero_messages_roundtrip() {
        let bare = Message::default();
        let back: Message = from_value(&bare.encode(), &CodecConfig::default()).unwrap();
        assert_eq!(back, bare);

        let zeroed = Message {
            forward_from_message_id: Some(0),
            forward_date: Some(0),
            edit_date: Some(0),
            text: Some(String::new()),
            entities: Some(Vec::new()),
            photo: Some(Vec::new()),
            caption: Some(String::new()),
            new_chat_members: Some(Vec::new()),
            new_chat_title: Some(String::new()),
            delete_chat_photo: Some(false),
            group_chat_created: Some(false),
            supergroup_chat_created: Some(false),
            channel_chat_created: Some(false),
            migrate_to_chat_id: Some(0),
            migrate_from_chat_id: Some(0),
            ..Message::default()
        };
        let encoded = zeroed.encode();
        assert_ne!(encoded, bare.encode());
        let back: Message = from_value(&encoded, &CodecConfig::default()).unwrap();
        assert_eq!(back, zeroed);
    }

    #[test]
    fn reply_chains_decode_within_the_limit() {
        let raw = reply_chain(5);
        let msg: Message = from_value(&raw, &CodecConfig::default()).unwrap();
        let ids: Vec<i64> = msg.reply_chain().map(|m| m.message_id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1, 0]);
        assert_eq!(to_value(&msg), raw);
    }

    #[test]
    fn deep_reply_chains_hit_the_depth_limit() {
        let cfg = CodecConfig::default().with_max_depth(8);
        let err = from_value::<Message>(&reply_chain(20), &cfg).unwrap_err();
        match err {
            DecodeError::DepthExceeded { limit, field } => {
                assert_eq!(limit, 8);
                assert!(field.starts_with("reply_to_message.reply_to_message"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn depth_limit_applies_to_raw_bytes() {
        let bytes = reply_chain(40).to_string().into_bytes();
        let cfg = CodecConfig::default().with_max_depth(16);
        let err = from_slice_with::<Message>(&bytes, &cfg).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Decode(DecodeError::DepthExceeded { limit: 16, .. })
        ));
        assert!(from_slice_with::<Message>(&bytes, &CodecConfig::default()).is_ok());
    }

    #[test]
    fn missing_chat_is_reported() {
        let err = from_value::<Message>(&json!({"message_id": 1, "date": 2}), &CodecConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                field: "chat".to_string()
            }
        );
    }
}
