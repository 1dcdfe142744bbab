//! The twenty variant records.
//!
//! `reply_markup` lives in the shared base and is not repeated here.

use serde_json::{Map, Value};

use super::{ResultBase, ResultKind};
use crate::{
    codec::{macros::field_ty, presence::emit, Decoder, Record},
    content::InputMessageContent,
    errors::DecodeError,
    types::enums::{DocumentMimeType, VideoMimeType},
};

/// Required variant fields report a shape error against the tag; optional ones
/// follow the ordinary presence rules.
macro_rules! variant_field {
    ($cx:ident, $obj:ident, $tag:ident, req, $wire:literal) => {
        $cx.variant_req($obj, $wire, $tag)?
    };
    ($cx:ident, $obj:ident, $tag:ident, opt, $wire:literal) => {
        $cx.opt($obj, $wire)?
    };
}

macro_rules! inline_result {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $kind:ident {
            $(
                $(#[$fmeta:meta])*
                $presence:ident $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub base: ResultBase,
            $(
                $(#[$fmeta])*
                pub $field: field_ty!($presence $ty),
            )*
        }

        impl $name {
            pub const KIND: ResultKind = ResultKind::$kind;
        }

        impl Record for $name {
            fn decode_fields(
                obj: &Map<String, Value>,
                cx: &mut Decoder,
            ) -> Result<Self, DecodeError> {
                let tag = Self::KIND.tag();
                Ok(Self {
                    base: ResultBase::decode_fields(obj, cx)?,
                    $($field: variant_field!(cx, obj, tag, $presence, $wire),)*
                })
            }

            fn encode_fields(&self, out: &mut Map<String, Value>) {
                out.insert("type".to_string(), Value::String(Self::KIND.tag().to_string()));
                self.base.encode_fields(out);
                $(emit::$presence(out, $wire, &self.$field);)*
            }
        }
    };
}

inline_result! {
    /// Link to an article or web page.
    pub struct InlineQueryResultArticle: Article {
        req title: String => "title",
        req input_message_content: InputMessageContent => "input_message_content",
        opt url: String => "url",
        opt hide_url: bool => "hide_url",
        opt description: String => "description",
        opt thumb_url: String => "thumb_url",
        opt thumb_width: i64 => "thumb_width",
        opt thumb_height: i64 => "thumb_height",
    }
}

inline_result! {
    pub struct InlineQueryResultPhoto: Photo {
        /// JPEG, at most 5 MB.
        req photo_url: String => "photo_url",
        opt photo_width: i64 => "photo_width",
        opt photo_height: i64 => "photo_height",
        req thumb_url: String => "thumb_url",
        opt title: String => "title",
        opt description: String => "description",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultGif: Gif {
        req gif_url: String => "gif_url",
        opt gif_width: i64 => "gif_width",
        opt gif_height: i64 => "gif_height",
        opt gif_duration: i64 => "gif_duration",
        req thumb_url: String => "thumb_url",
        opt title: String => "title",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    /// Silent MPEG-4 animation.
    pub struct InlineQueryResultMpeg4Gif: Mpeg4Gif {
        req mpeg4_url: String => "mpeg4_url",
        opt mpeg4_width: i64 => "mpeg4_width",
        opt mpeg4_height: i64 => "mpeg4_height",
        opt mpeg4_duration: i64 => "mpeg4_duration",
        req thumb_url: String => "thumb_url",
        opt title: String => "title",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    /// Embedded player page (`text/html`) or video file (`video/mp4`).
    pub struct InlineQueryResultVideo: Video {
        req video_url: String => "video_url",
        req mime_type: VideoMimeType => "mime_type",
        req thumb_url: String => "thumb_url",
        req title: String => "title",
        opt caption: String => "caption",
        opt video_width: i64 => "video_width",
        opt video_height: i64 => "video_height",
        opt video_duration: i64 => "video_duration",
        opt description: String => "description",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultAudio: Audio {
        req audio_url: String => "audio_url",
        req title: String => "title",
        opt caption: String => "caption",
        opt performer: String => "performer",
        opt audio_duration: i64 => "audio_duration",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultVoice: Voice {
        req voice_url: String => "voice_url",
        req title: String => "title",
        opt caption: String => "caption",
        opt voice_duration: i64 => "voice_duration",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultDocument: Document {
        req title: String => "title",
        opt caption: String => "caption",
        opt document_url: String => "document_url",
        req mime_type: DocumentMimeType => "mime_type",
        opt description: String => "description",
        opt input_message_content: InputMessageContent => "input_message_content",
        opt thumb_url: String => "thumb_url",
        opt thumb_width: i64 => "thumb_width",
        opt thumb_height: i64 => "thumb_height",
    }
}

inline_result! {
    pub struct InlineQueryResultLocation: Location {
        req latitude: f64 => "latitude",
        req longitude: f64 => "longitude",
        req title: String => "title",
        opt input_message_content: InputMessageContent => "input_message_content",
        opt thumb_url: String => "thumb_url",
        opt thumb_width: i64 => "thumb_width",
        opt thumb_height: i64 => "thumb_height",
    }
}

inline_result! {
    pub struct InlineQueryResultVenue: Venue {
        req latitude: f64 => "latitude",
        req longitude: f64 => "longitude",
        req title: String => "title",
        req address: String => "address",
        opt foursquare_id: String => "foursquare_id",
        opt input_message_content: InputMessageContent => "input_message_content",
        opt thumb_url: String => "thumb_url",
        opt thumb_width: i64 => "thumb_width",
        opt thumb_height: i64 => "thumb_height",
    }
}

inline_result! {
    pub struct InlineQueryResultContact: Contact {
        req phone_number: String => "phone_number",
        req first_name: String => "first_name",
        opt last_name: String => "last_name",
        opt input_message_content: InputMessageContent => "input_message_content",
        opt thumb_url: String => "thumb_url",
        opt thumb_width: i64 => "thumb_width",
        opt thumb_height: i64 => "thumb_height",
    }
}

inline_result! {
    pub struct InlineQueryResultGame: Game {
        req game_short_name: String => "game_short_name",
    }
}

inline_result! {
    /// Photo already stored on Telegram's servers.
    pub struct InlineQueryResultCachedPhoto: CachedPhoto {
        req photo_file_id: String => "photo_file_id",
        opt title: String => "title",
        opt description: String => "description",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedGif: CachedGif {
        req gif_file_id: String => "gif_file_id",
        opt title: String => "title",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedMpeg4Gif: CachedMpeg4Gif {
        req mpeg4_file_id: String => "mpeg4_file_id",
        opt title: String => "title",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    /// Stickers only exist as cached results.
    pub struct InlineQueryResultCachedSticker: CachedSticker {
        req sticker_file_id: String => "sticker_file_id",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedDocument: CachedDocument {
        req title: String => "title",
        req document_file_id: String => "document_file_id",
        opt description: String => "description",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedVideo: CachedVideo {
        req video_file_id: String => "video_file_id",
        req title: String => "title",
        opt description: String => "description",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedVoice: CachedVoice {
        req voice_file_id: String => "voice_file_id",
        req title: String => "title",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

inline_result! {
    pub struct InlineQueryResultCachedAudio: CachedAudio {
        req audio_file_id: String => "audio_file_id",
        opt caption: String => "caption",
        opt input_message_content: InputMessageContent => "input_message_content",
    }
}

impl InlineQueryResultArticle {
    /// Article that sends plain text when chosen.
    pub fn text(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            base: ResultBase::new(id),
            title: title.into(),
            input_message_content: InputMessageContent::text(text),
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        }
    }
}
