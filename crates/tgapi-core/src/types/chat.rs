use chrono::{DateTime, Utc};

use crate::{
    codec::macros::record,
    types::enums::{ChatMemberStatus, ChatType},
};

record! {
    /// A Telegram user or bot.
    ///
    /// <https://core.telegram.org/bots/api#user>
    #[derive(Default)]
    pub struct User {
        req id: i64 => "id",
        opt is_bot: bool => "is_bot",
        req first_name: String => "first_name",
        opt last_name: String => "last_name",
        opt username: String => "username",
        /// IETF language tag of the user's client.
        opt language_code: String => "language_code",
    }
}

record! {
    /// <https://core.telegram.org/bots/api#chat>
    #[derive(Default)]
    pub struct Chat {
        req id: i64 => "id",
        req kind: ChatType => "type",
        opt title: String => "title",
        opt username: String => "username",
        opt first_name: String => "first_name",
        opt last_name: String => "last_name",
        opt all_members_are_administrators: bool => "all_members_are_administrators",
        opt photo: ChatPhoto => "photo",
        opt description: String => "description",
        opt invite_link: String => "invite_link",
    }
}

record! {
    /// <https://core.telegram.org/bots/api#chatphoto>
    pub struct ChatPhoto {
        req small_file_id: String => "small_file_id",
        req big_file_id: String => "big_file_id",
    }
}

record! {
    /// Membership and permissions of a user in a chat.
    ///
    /// <https://core.telegram.org/bots/api#chatmember>
    pub struct ChatMember {
        req user: User => "user",
        req status: ChatMemberStatus => "status",
        opt until_date: i64 => "until_date",
        opt can_be_edited: bool => "can_be_edited",
        opt can_change_info: bool => "can_change_info",
        opt can_post_messages: bool => "can_post_messages",
        opt can_edit_messages: bool => "can_edit_messages",
        opt can_delete_messages: bool => "can_delete_messages",
        opt can_invite_users: bool => "can_invite_users",
        opt can_restrict_members: bool => "can_restrict_members",
        opt can_pin_messages: bool => "can_pin_messages",
        opt can_promote_members: bool => "can_promote_members",
        opt can_send_messages: bool => "can_send_messages",
        opt can_send_media_messages: bool => "can_send_media_messages",
        opt can_send_other_messages: bool => "can_send_other_messages",
        opt can_add_web_page_previews: bool => "can_add_web_page_previews",
    }
}

impl ChatMember {
    /// End of a restriction or ban, if one is set.
    pub fn until(&self) -> Option<DateTime<Utc>> {
        self.until_date
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        codec::{from_value, to_value, JsonKind},
        config::CodecConfig,
        errors::DecodeError,
    };

    #[test]
    fn chat_type_uses_the_type_wire_name() {
        let raw = json!({"id": -100123, "type": "supergroup", "title": "Ops"});
        let chat: Chat = from_value(&raw, &CodecConfig::default()).unwrap();
        assert_eq!(chat.kind, ChatType::Supergroup);
        assert_eq!(chat.title.as_deref(), Some("Ops"));
        assert_eq!(to_value(&chat), raw);
    }

    #[test]
    fn admin_flag_presence_is_preserved() {
        let mut chat = Chat {
            id: 7,
            kind: ChatType::Group,
            ..Chat::default()
        };
        let absent = to_value(&chat);
        chat.all_members_are_administrators = Some(false);
        let present = to_value(&chat);

        assert_ne!(absent, present);
        assert_eq!(present["all_members_are_administrators"], json!(false));

        let back: Chat = from_value(&present, &CodecConfig::default()).unwrap();
        assert_eq!(back.all_members_are_administrators, Some(false));
        let back: Chat = from_value(&absent, &CodecConfig::default()).unwrap();
        assert_eq!(back.all_members_are_administrators, None);
    }

    #[test]
    fn nested_errors_report_full_path() {
        let raw = json!({
            "user": {"id": "not-a-number", "first_name": "A"},
            "status": "member"
        });
        let err = from_value::<ChatMember>(&raw, &CodecConfig::default()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "user.id".to_string(),
                expected: JsonKind::Integer,
                found: JsonKind::String,
            }
        );
    }

    #[test]
    fn until_converts_unix_seconds() {
        let member: ChatMember = from_value(
            &json!({
                "user": {"id": 1, "first_name": "A"},
                "status": "kicked",
                "until_date": 1_700_000_000
            }),
            &CodecConfig::default(),
        )
        .unwrap();
        assert_eq!(member.until().map(|t| t.timestamp()), Some(1_700_000_000));
    }
}
