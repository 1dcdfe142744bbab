//! Record catalog: the flat entity kinds of the Bot API.
//!
//! Every record is declared with `record!`, which fixes the attribute order,
//! the presence of each attribute and its wire name.

pub mod chat;
pub mod enums;
pub mod game;
pub mod markup;
pub mod media;
pub mod message;
pub mod payments;
pub mod update;

pub use chat::{Chat, ChatMember, ChatPhoto, User};
pub use enums::{
    ChatAction, ChatMemberStatus, ChatType, DocumentMimeType, MessageEntityType, ParseMode,
    UpdateType, VideoMimeType,
};
pub use game::{Game, GameHighScore};
pub use markup::{
    CallbackGame, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, PhotoSize, Sticker, UserProfilePhotos,
    Venue, Video, VideoNote, Voice,
};
pub use message::{Message, MessageEntity};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, ShippingAddress, ShippingOption, SuccessfulPayment,
};
pub use update::{
    CallbackQuery, ChosenInlineResult, InlineQuery, PreCheckoutQuery, ShippingQuery, Update,
    WebhookInfo,
};
