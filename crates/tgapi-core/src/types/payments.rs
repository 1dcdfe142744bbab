//! Invoices, shipping and checkout records.
//!
//! Amounts are integers in the smallest currency unit.

use crate::codec::macros::record;

record! {
    pub struct Invoice {
        req title: String => "title",
        req description: String => "description",
        req start_parameter: String => "start_parameter",
        /// Three-letter ISO 4217 code.
        req currency: String => "currency",
        req total_amount: i64 => "total_amount",
    }
}

record! {
    pub struct SuccessfulPayment {
        req currency: String => "currency",
        req total_amount: i64 => "total_amount",
        req invoice_payload: String => "invoice_payload",
        opt shipping_option_id: String => "shipping_option_id",
        opt order_info: OrderInfo => "order_info",
        req telegram_payment_charge_id: String => "telegram_payment_charge_id",
        req provider_payment_charge_id: String => "provider_payment_charge_id",
    }
}

record! {
    pub struct OrderInfo {
        opt name: String => "name",
        opt phone_number: String => "phone_number",
        opt email: String => "email",
        opt shipping_address: ShippingAddress => "shipping_address",
    }
}

record! {
    pub struct ShippingOption {
        req id: String => "id",
        req title: String => "title",
        req prices: Vec<LabeledPrice> => "prices",
    }
}

record! {
    pub struct LabeledPrice {
        req label: String => "label",
        req amount: i64 => "amount",
    }
}

record! {
    pub struct ShippingAddress {
        req country_code: String => "country_code",
        req state: String => "state",
        req city: String => "city",
        req street_line1: String => "street_line1",
        req street_line2: String => "street_line2",
        req post_code: String => "post_code",
    }
}

impl ShippingOption {
    /// Sum of all price portions; `None` if it does not fit in an `i64`.
    pub fn total(&self) -> Option<i64> {
        self.prices
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.amount))
    }
}
