use crate::{
    codec::macros::record,
    types::{chat::User, media::Animation, media::PhotoSize, message::MessageEntity},
};

record! {
    /// <https://core.telegram.org/bots/api#game>
    pub struct Game {
        req title: String => "title",
        req description: String => "description",
        req photo: Vec<PhotoSize> => "photo",
        opt text: String => "text",
        opt text_entities: Vec<MessageEntity> => "text_entities",
        opt animation: Animation => "animation",
    }
}

record! {
    /// One row of a game's high score table.
    pub struct GameHighScore {
        req position: i64 => "position",
        req user: User => "user",
        req score: i64 => "score",
    }
}
