//! String-valued enums of the Bot API.

use crate::codec::macros::string_enum;

string_enum! {
    /// Kind of chat.
    #[derive(Default)]
    pub enum ChatType {
        #[default]
        Private = "private",
        Group = "group",
        Supergroup = "supergroup",
        Channel = "channel",
    }
}

string_enum! {
    /// Formatting mode for message text (`parse_mode`).
    pub enum ParseMode {
        Markdown = "Markdown",
        Html = "HTML",
    }
}

string_enum! {
    /// Activity shown to the other side of a chat (`sendChatAction`).
    pub enum ChatAction {
        Typing = "typing",
        UploadPhoto = "upload_photo",
        RecordVideo = "record_video",
        UploadVideo = "upload_video",
        RecordAudio = "record_audio",
        UploadAudio = "upload_audio",
        UploadDocument = "upload_document",
        FindLocation = "find_location",
        RecordVideoNote = "record_video_note",
        UploadVideoNote = "upload_video_note",
    }
}

string_enum! {
    pub enum MessageEntityType {
        Mention = "mention",
        HashTag = "hashtag",
        BotCommand = "bot_command",
        Url = "url",
        Email = "email",
        Bold = "bold",
        Italic = "italic",
        Code = "code",
        Pre = "pre",
        TextLink = "text_link",
        TextMention = "text_mention",
    }
}

string_enum! {
    pub enum ChatMemberStatus {
        Creator = "creator",
        Administrator = "administrator",
        Member = "member",
        Left = "left",
        Kicked = "kicked",
    }
}

string_enum! {
    /// Update kinds, as used by `allowed_updates`.
    pub enum UpdateType {
        Message = "message",
        EditedMessage = "edited_message",
        ChannelPost = "channel_post",
        EditedChannelPost = "edited_channel_post",
        InlineQuery = "inline_query",
        ChosenInlineResult = "chosen_inline_result",
        CallbackQuery = "callback_query",
        ShippingQuery = "shipping_query",
        PreCheckoutQuery = "pre_checkout_query",
    }
}

string_enum! {
    /// Content type of an inline video result.
    pub enum VideoMimeType {
        Html = "text/html",
        Mp4 = "video/mp4",
    }
}

string_enum! {
    /// Content type of an inline document result.
    pub enum DocumentMimeType {
        Pdf = "application/pdf",
        Zip = "application/zip",
    }
}
