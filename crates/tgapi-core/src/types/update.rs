//! Incoming updates and the queries they carry.

use chrono::{DateTime, Utc};

use crate::{
    codec::macros::record,
    types::{
        chat::User,
        enums::UpdateType,
        media::Location,
        message::Message,
        payments::{OrderInfo, ShippingAddress},
    },
};

record! {
    /// One incoming update; at most one of the optional payloads is set.
    ///
    /// <https://core.telegram.org/bots/api#update>
    pub struct Update {
        req update_id: i64 => "update_id",
        opt message: Message => "message",
        opt edited_message: Message => "edited_message",
        opt channel_post: Message => "channel_post",
        opt edited_channel_post: Message => "edited_channel_post",
        opt inline_query: InlineQuery => "inline_query",
        opt chosen_inline_result: ChosenInlineResult => "chosen_inline_result",
        opt callback_query: CallbackQuery => "callback_query",
        opt shipping_query: ShippingQuery => "shipping_query",
        opt pre_checkout_query: PreCheckoutQuery => "pre_checkout_query",
    }
}

impl Update {
    /// Which payload this update carries.
    pub fn kind(&self) -> Option<UpdateType> {
        let kind = if self.message.is_some() {
            UpdateType::Message
        } else if self.edited_message.is_some() {
            UpdateType::EditedMessage
        } else if self.channel_post.is_some() {
            UpdateType::ChannelPost
        } else if self.edited_channel_post.is_some() {
            UpdateType::EditedChannelPost
        } else if self.inline_query.is_some() {
            UpdateType::InlineQuery
        } else if self.chosen_inline_result.is_some() {
            UpdateType::ChosenInlineResult
        } else if self.callback_query.is_some() {
            UpdateType::CallbackQuery
        } else if self.shipping_query.is_some() {
            UpdateType::ShippingQuery
        } else if self.pre_checkout_query.is_some() {
            UpdateType::PreCheckoutQuery
        } else {
            return None;
        };
        Some(kind)
    }

    /// The message-like payload, whichever slot it came in.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

record! {
    /// Current webhook status (`getWebhookInfo`).
    pub struct WebhookInfo {
        req url: String => "url",
        req has_custom_certificate: bool => "has_custom_certificate",
        req pending_update_count: i64 => "pending_update_count",
        opt last_error_date: i64 => "last_error_date",
        opt last_error_message: String => "last_error_message",
        opt max_connections: i64 => "max_connections",
        opt allowed_updates: Vec<UpdateType> => "allowed_updates",
    }
}

impl WebhookInfo {
    pub fn last_error_at(&self) -> Option<DateTime<Utc>> {
        self.last_error_date
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

record! {
    pub struct InlineQuery {
        req id: String => "id",
        req from: User => "from",
        opt location: Location => "location",
        req query: String => "query",
        req offset: String => "offset",
    }
}

record! {
    pub struct ChosenInlineResult {
        req result_id: String => "result_id",
        req from: User => "from",
        opt location: Location => "location",
        opt inline_message_id: String => "inline_message_id",
        req query: String => "query",
    }
}

record! {
    /// Button press on an inline keyboard.
    pub struct CallbackQuery {
        req id: String => "id",
        req from: User => "from",
        opt message: Message => "message",
        opt inline_message_id: String => "inline_message_id",
        req chat_instance: String => "chat_instance",
        opt data: String => "data",
        opt game_short_name: String => "game_short_name",
    }
}

record! {
    pub struct ShippingQuery {
        req id: String => "id",
        req from: User => "from",
        req invoice_payload: String => "invoice_payload",
        req shipping_address: ShippingAddress => "shipping_address",
    }
}

record! {
    pub struct PreCheckoutQuery {
        req id: String => "id",
        req from: User => "from",
        req currency: String => "currency",
        req total_amount: i64 => "total_amount",
        req invoice_payload: String => "invoice_payload",
        opt shipping_option_id: String => "shipping_option_id",
        opt order_info: OrderInfo => "order_info",
    }
}
