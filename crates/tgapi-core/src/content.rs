//! Input message content: a union with no type tag.
//!
//! The variant is inferred from which keys the object carries. Each variant has
//! a signature (its required keys); signatures are checked in the fixed order
//! of [`PRIORITY`], and a match whose signature is strictly contained in
//! another match's signature is dropped (a venue also looks like a location).
//! One survivor decodes; several are ambiguous; none is unrecognised.

use serde_json::{Map, Value};

use crate::{
    codec::{macros::record, presence::is_present, Decode, Decoder, Encode, Record},
    errors::DecodeError,
    types::enums::ParseMode,
};

record! {
    pub struct InputTextMessageContent {
        req message_text: String => "message_text",
        opt parse_mode: ParseMode => "parse_mode",
        opt disable_web_page_preview: bool => "disable_web_page_preview",
    }
}

record! {
    pub struct InputLocationMessageContent {
        req latitude: f64 => "latitude",
        req longitude: f64 => "longitude",
    }
}

record! {
    pub struct InputVenueMessageContent {
        req latitude: f64 => "latitude",
        req longitude: f64 => "longitude",
        req title: String => "title",
        req address: String => "address",
        opt foursquare_id: String => "foursquare_id",
    }
}

record! {
    pub struct InputContactMessageContent {
        req phone_number: String => "phone_number",
        req first_name: String => "first_name",
        opt last_name: String => "last_name",
    }
}

/// Content of the message sent when an inline result is chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Location,
    Venue,
    Contact,
}

/// Order in which signatures are evaluated.
pub const PRIORITY: [ContentKind; 4] = [
    ContentKind::Text,
    ContentKind::Contact,
    ContentKind::Venue,
    ContentKind::Location,
];

impl ContentKind {
    pub fn name(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Location => "location",
            ContentKind::Venue => "venue",
            ContentKind::Contact => "contact",
        }
    }

    /// Keys whose presence identifies this variant.
    pub fn signature(self) -> &'static [&'static str] {
        match self {
            ContentKind::Text => &["message_text"],
            ContentKind::Location => &["latitude", "longitude"],
            ContentKind::Venue => &["latitude", "longitude", "title", "address"],
            ContentKind::Contact => &["phone_number", "first_name"],
        }
    }

    fn matches(self, obj: &Map<String, Value>) -> bool {
        self.signature().iter().all(|key| is_present(obj, key))
    }

    fn subsumed_by(self, other: ContentKind) -> bool {
        let mine = self.signature();
        let theirs = other.signature();
        mine.len() < theirs.len() && mine.iter().all(|key| theirs.contains(key))
    }
}

/// Pick the variant for an object from its keys alone.
pub fn resolve_shape(obj: &Map<String, Value>, cx: &Decoder) -> Result<ContentKind, DecodeError> {
    let matched: Vec<ContentKind> = PRIORITY.iter().copied().filter(|k| k.matches(obj)).collect();
    let maximal: Vec<ContentKind> = matched
        .iter()
        .copied()
        .filter(|k| !matched.iter().any(|other| k.subsumed_by(*other)))
        .collect();

    match maximal.as_slice() {
        [kind] => Ok(*kind),
        [] => Err(DecodeError::UnrecognizedContent { field: cx.path() }),
        _ => Err(DecodeError::AmbiguousContent {
            field: cx.path(),
            candidates: maximal.iter().map(|k| k.name()).collect(),
        }),
    }
}

impl InputMessageContent {
    pub fn text(message_text: impl Into<String>) -> Self {
        InputMessageContent::Text(InputTextMessageContent {
            message_text: message_text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
        })
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            InputMessageContent::Text(_) => ContentKind::Text,
            InputMessageContent::Location(_) => ContentKind::Location,
            InputMessageContent::Venue(_) => ContentKind::Venue,
            InputMessageContent::Contact(_) => ContentKind::Contact,
        }
    }
}

impl Decode for InputMessageContent {
    fn decode(value: &Value, cx: &mut Decoder) -> Result<Self, DecodeError> {
        let obj = cx.object(value)?;
        let kind = resolve_shape(obj, cx)?;
        cx.descend(|cx| match kind {
            ContentKind::Text => {
                InputTextMessageContent::decode_fields(obj, cx).map(InputMessageContent::Text)
            }
            ContentKind::Location => InputLocationMessageContent::decode_fields(obj, cx)
                .map(InputMessageContent::Location),
            ContentKind::Venue => {
                InputVenueMessageContent::decode_fields(obj, cx).map(InputMessageContent::Venue)
            }
            ContentKind::Contact => InputContactMessageContent::decode_fields(obj, cx)
                .map(InputMessageContent::Contact),
        })
    }
}

impl Encode for InputMessageContent {
    fn encode(&self) -> Value {
        match self {
            InputMessageContent::Text(c) => c.encode(),
            InputMessageContent::Location(c) => c.encode(),
            InputMessageContent::Venue(c) => c.encode(),
            InputMessageContent::Contact(c) => c.encode(),
        }
    }
}
