//! Inline query results: a union tagged by its `type` field.
//!
//! All twenty variants embed the same [`ResultBase`] (identifier and optional
//! inline keyboard) by value; the `type` tag is not stored but derived from the
//! variant. The Bot API reuses one tag for a "cached" result and its
//! URL-based sibling (`photo` covers both `photo_url` and `photo_file_id`
//! results), so the resolved kind is the pair of tag and file-id marker.

use serde_json::{Map, Value};

use crate::{
    codec::{macros::record, presence::is_present, Decode, Decoder, Encode, Record},
    errors::DecodeError,
    types::markup::InlineKeyboardMarkup,
};

mod results;

pub use results::*;

record! {
    /// Attributes shared by every inline query result.
    pub struct ResultBase {
        /// Unique per result, 1-64 bytes.
        req id: String => "id",
        opt reply_markup: InlineKeyboardMarkup => "reply_markup",
    }
}

impl ResultBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reply_markup: None,
        }
    }
}

/// The twenty inline result kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Article,
    Photo,
    Gif,
    Mpeg4Gif,
    Video,
    Audio,
    Voice,
    Document,
    Location,
    Venue,
    Contact,
    Game,
    CachedPhoto,
    CachedGif,
    CachedMpeg4Gif,
    CachedSticker,
    CachedDocument,
    CachedVideo,
    CachedVoice,
    CachedAudio,
}

impl ResultKind {
    pub const ALL: [ResultKind; 20] = [
        ResultKind::Article,
        ResultKind::Photo,
        ResultKind::Gif,
        ResultKind::Mpeg4Gif,
        ResultKind::Video,
        ResultKind::Audio,
        ResultKind::Voice,
        ResultKind::Document,
        ResultKind::Location,
        ResultKind::Venue,
        ResultKind::Contact,
        ResultKind::Game,
        ResultKind::CachedPhoto,
        ResultKind::CachedGif,
        ResultKind::CachedMpeg4Gif,
        ResultKind::CachedSticker,
        ResultKind::CachedDocument,
        ResultKind::CachedVideo,
        ResultKind::CachedVoice,
        ResultKind::CachedAudio,
    ];

    /// Value of the `type` field on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            ResultKind::Article => "article",
            ResultKind::Photo | ResultKind::CachedPhoto => "photo",
            ResultKind::Gif | ResultKind::CachedGif => "gif",
            ResultKind::Mpeg4Gif | ResultKind::CachedMpeg4Gif => "mpeg4_gif",
            ResultKind::Video | ResultKind::CachedVideo => "video",
            ResultKind::Audio | ResultKind::CachedAudio => "audio",
            ResultKind::Voice | ResultKind::CachedVoice => "voice",
            ResultKind::Document | ResultKind::CachedDocument => "document",
            ResultKind::Location => "location",
            ResultKind::Venue => "venue",
            ResultKind::Contact => "contact",
            ResultKind::Game => "game",
            ResultKind::CachedSticker => "sticker",
        }
    }

    /// Field whose presence marks the cached sub-kind of a shared tag.
    pub fn file_id_marker(self) -> Option<&'static str> {
        match self {
            ResultKind::CachedPhoto => Some("photo_file_id"),
            ResultKind::CachedGif => Some("gif_file_id"),
            ResultKind::CachedMpeg4Gif => Some("mpeg4_file_id"),
            ResultKind::CachedSticker => Some("sticker_file_id"),
            ResultKind::CachedDocument => Some("document_file_id"),
            ResultKind::CachedVideo => Some("video_file_id"),
            ResultKind::CachedVoice => Some("voice_file_id"),
            ResultKind::CachedAudio => Some("audio_file_id"),
            _ => None,
        }
    }

    pub fn is_cached(self) -> bool {
        self.file_id_marker().is_some()
    }

    /// Resolve a wire tag, using the object's keys to split cached kinds from
    /// their URL-based siblings.
    pub fn resolve(tag: &str, obj: &Map<String, Value>) -> Option<ResultKind> {
        let (plain, cached) = match tag {
            "article" => return Some(ResultKind::Article),
            "location" => return Some(ResultKind::Location),
            "venue" => return Some(ResultKind::Venue),
            "contact" => return Some(ResultKind::Contact),
            "game" => return Some(ResultKind::Game),
            "sticker" => return Some(ResultKind::CachedSticker),
            "photo" => (ResultKind::Photo, ResultKind::CachedPhoto),
            "gif" => (ResultKind::Gif, ResultKind::CachedGif),
            "mpeg4_gif" => (ResultKind::Mpeg4Gif, ResultKind::CachedMpeg4Gif),
            "video" => (ResultKind::Video, ResultKind::CachedVideo),
            "audio" => (ResultKind::Audio, ResultKind::CachedAudio),
            "voice" => (ResultKind::Voice, ResultKind::CachedVoice),
            "document" => (ResultKind::Document, ResultKind::CachedDocument),
            _ => return None,
        };
        let marked = cached
            .file_id_marker()
            .is_some_and(|marker| is_present(obj, marker));
        Some(if marked { cached } else { plain })
    }
}

macro_rules! inline_results {
    ($($kind:ident => $ty:ident),* $(,)?) => {
        /// One result of an inline query (`answerInlineQuery`).
        #[derive(Clone, Debug, PartialEq)]
        pub enum InlineQueryResult {
            $($kind($ty),)*
        }

        impl InlineQueryResult {
            pub fn kind(&self) -> ResultKind {
                match self {
                    $(InlineQueryResult::$kind(_) => ResultKind::$kind,)*
                }
            }

            pub fn base(&self) -> &ResultBase {
                match self {
                    $(InlineQueryResult::$kind(r) => &r.base,)*
                }
            }

            fn encode_fields(&self, out: &mut Map<String, Value>) {
                match self {
                    $(InlineQueryResult::$kind(r) => r.encode_fields(out),)*
                }
            }
        }

        /// Decode the attribute set of `kind` from an already-tagged object.
        pub fn decode_variant(
            kind: ResultKind,
            obj: &Map<String, Value>,
            cx: &mut Decoder,
        ) -> Result<InlineQueryResult, DecodeError> {
            match kind {
                $(ResultKind::$kind => $ty::decode_fields(obj, cx).map(InlineQueryResult::$kind),)*
            }
        }

        $(
            impl From<$ty> for InlineQueryResult {
                fn from(r: $ty) -> Self {
                    InlineQueryResult::$kind(r)
                }
            }
        )*
    };
}

inline_results! {
    Article => InlineQueryResultArticle,
    Photo => InlineQueryResultPhoto,
    Gif => InlineQueryResultGif,
    Mpeg4Gif => InlineQueryResultMpeg4Gif,
    Video => InlineQueryResultVideo,
    Audio => InlineQueryResultAudio,
    Voice => InlineQueryResultVoice,
    Document => InlineQueryResultDocument,
    Location => InlineQueryResultLocation,
    Venue => InlineQueryResultVenue,
    Contact => InlineQueryResultContact,
    Game => InlineQueryResultGame,
    CachedPhoto => InlineQueryResultCachedPhoto,
    CachedGif => InlineQueryResultCachedGif,
    CachedMpeg4Gif => InlineQueryResultCachedMpeg4Gif,
    CachedSticker => InlineQueryResultCachedSticker,
    CachedDocument => InlineQueryResultCachedDocument,
    CachedVideo => InlineQueryResultCachedVideo,
    CachedVoice => InlineQueryResultCachedVoice,
    CachedAudio => InlineQueryResultCachedAudio,
}

impl InlineQueryResult {
    pub fn id(&self) -> &str {
        &self.base().id
    }
}

impl Decode for InlineQueryResult {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        let obj = cx.object(value)?;
        cx.descend(|cx| {
            let tag: String = cx.req(obj, "type")?;
            let kind = ResultKind::resolve(&tag, obj)
                .ok_or(DecodeError::UnknownVariant { tag })?;
            decode_variant(kind, obj, cx)
        })
    }
}

impl Encode for InlineQueryResult {
    fn encode(&self) -> Value {
        let mut out = Map::new();
        self.encode_fields(&mut out);
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        codec::{from_value, to_value, JsonKind},
        config::CodecConfig,
        content::{ContentKind, InputMessageContent},
    };

    fn decode(v: Value) -> Result<InlineQueryResult, DecodeError> {
        from_value(&v, &CodecConfig::default())
    }

    /// Smallest valid object for each kind.
    fn minimal(kind: ResultKind) -> Value {
        let mut v = match kind {
            ResultKind::Article => json!({
                "title": "t",
                "input_message_content": {"message_text": "hi"}
            }),
            ResultKind::Photo => json!({"photo_url": "u", "thumb_url": "t"}),
            ResultKind::Gif => json!({"gif_url": "u", "thumb_url": "t"}),
            ResultKind::Mpeg4Gif => json!({"mpeg4_url": "u", "thumb_url": "t"}),
            ResultKind::Video => json!({
                "video_url": "u",
                "mime_type": "video/mp4",
                "thumb_url": "t",
                "title": "v"
            }),
            ResultKind::Audio => json!({"audio_url": "u", "title": "a"}),
            ResultKind::Voice => json!({"voice_url": "u", "title": "v"}),
            ResultKind::Document => json!({"title": "d", "mime_type": "application/pdf"}),
            ResultKind::Location => json!({"latitude": 1.5, "longitude": 2.5, "title": "l"}),
            ResultKind::Venue => json!({
                "latitude": 1.5,
                "longitude": 2.5,
                "title": "v",
                "address": "a"
            }),
            ResultKind::Contact => json!({"phone_number": "+1", "first_name": "c"}),
            ResultKind::Game => json!({"game_short_name": "g"}),
            ResultKind::CachedPhoto => json!({"photo_file_id": "f"}),
            ResultKind::CachedGif => json!({"gif_file_id": "f"}),
            ResultKind::CachedMpeg4Gif => json!({"mpeg4_file_id": "f"}),
            ResultKind::CachedSticker => json!({"sticker_file_id": "f"}),
            ResultKind::CachedDocument => json!({"title": "d", "document_file_id": "f"}),
            ResultKind::CachedVideo => json!({"video_file_id": "f", "title": "v"}),
            ResultKind::CachedVoice => json!({"voice_file_id": "f", "title": "v"}),
            ResultKind::CachedAudio => json!({"audio_file_id": "f"}),
        };
        let obj = v.as_object_mut().unwrap();
        obj.insert("type".to_string(), json!(kind.tag()));
        obj.insert("id".to_string(), json!(format!("r-{kind:?}")));
        v
    }

    #[test]
    fn every_kind_decodes_from_its_minimal_shape() {
        for kind in ResultKind::ALL {
            let raw = minimal(kind);
            let result = decode(raw.clone()).unwrap_or_else(|e| panic!("{kind:?}: {e}"));
            assert_eq!(result.kind(), kind);
            assert_eq!(result.id(), format!("r-{kind:?}"));

            let encoded = to_value(&result);
            assert_eq!(encoded["type"], raw["type"], "{kind:?}");
            assert_eq!(decode(encoded).unwrap(), result);
        }
    }

    #[test]
    fn kinds_are_distinct_and_tags_cover_the_wire_set() {
        let mut tags: Vec<&str> = ResultKind::ALL.iter().map(|k| k.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), 13);
        assert_eq!(ResultKind::ALL.iter().filter(|k| k.is_cached()).count(), 8);
    }

    #[test]
    fn discriminant_is_encoded_first() {
        let r = InlineQueryResult::from(InlineQueryResultGame {
            base: ResultBase::new("g1"),
            game_short_name: "snake".to_string(),
        });
        let text = String::from_utf8(crate::codec::to_vec(&r)).unwrap();
        assert_eq!(text, r#"{"type":"game","id":"g1","game_short_name":"snake"}"#);
    }

    #[test]
    fn file_id_selects_the_cached_sibling() {
        let plain = decode(minimal(ResultKind::Photo)).unwrap();
        let cached = decode(minimal(ResultKind::CachedPhoto)).unwrap();
        assert_eq!(plain.kind(), ResultKind::Photo);
        assert_eq!(cached.kind(), ResultKind::CachedPhoto);
        assert_eq!(to_value(&cached)["type"], json!("photo"));
    }

    #[test]
    fn null_file_id_keeps_the_url_variant() {
        let r = decode(json!({
            "type": "photo",
            "id": "1",
            "photo_url": "u",
            "thumb_url": "t",
            "photo_file_id": null
        }))
        .unwrap();
        assert_eq!(r.kind(), ResultKind::Photo);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = decode(json!({"type": "poll", "id": "1"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownVariant {
                tag: "poll".to_string()
            }
        );
    }

    #[test]
    fn missing_or_non_string_tag() {
        let err = decode(json!({"id": "1", "title": "t"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                field: "type".to_string()
            }
        );

        let err = decode(json!({"type": 4, "id": "1"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "type".to_string(),
                expected: JsonKind::String,
                found: JsonKind::Integer,
            }
        );
    }

    #[test]
    fn mismatched_tag_and_fields_is_an_invalid_shape() {
        let err = decode(json!({
            "type": "photo",
            "id": "1",
            "gif_url": "u",
            "thumb_url": "t"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidVariantShape {
                tag: "photo".to_string(),
                field: "photo_url".to_string()
            }
        );
    }

    #[test]
    fn missing_id_is_a_missing_shared_field() {
        let mut raw = minimal(ResultKind::Game);
        raw.as_object_mut().unwrap().remove("id");
        let err = decode(raw).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                field: "id".to_string()
            }
        );
    }

    #[test]
    fn article_content_goes_through_shape_inference() {
        let raw = json!({
            "type": "article",
            "id": "a1",
            "title": "Where",
            "input_message_content": {
                "latitude": 52.5, "longitude": 13.4, "title": "Office", "address": "Main St"
            },
            "reply_markup": {"inline_keyboard": [[{"text": "Go", "url": "https://x.test"}]]},
            "hide_url": false
        });
        let r = decode(raw).unwrap();
        let InlineQueryResult::Article(article) = &r else {
            panic!("expected article, got {r:?}");
        };
        assert_eq!(article.input_message_content.kind(), ContentKind::Venue);
        assert_eq!(article.hide_url, Some(false));
        assert!(article.base.reply_markup.is_some());
    }

    #[test]
    fn nested_content_errors_keep_their_path() {
        let mut raw = minimal(ResultKind::CachedSticker);
        raw.as_object_mut()
            .unwrap()
            .insert("input_message_content".to_string(), json!({"foo": 1}));
        let err = decode(raw).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnrecognizedContent {
                field: "input_message_content".to_string()
            }
        );
    }

    #[test]
    fn optional_content_roundtrips_when_set() {
        let r = InlineQueryResult::from(InlineQueryResultCachedAudio {
            base: ResultBase::new("c"),
            audio_file_id: "f".to_string(),
            caption: Some(String::new()),
            input_message_content: Some(InputMessageContent::text("played")),
        });
        let v = to_value(&r);
        assert_eq!(v["caption"], json!(""));
        assert_eq!(decode(v).unwrap(), r);
    }
}
