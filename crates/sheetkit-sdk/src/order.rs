// SPDX-License-Identifier: MIT
//
// Completed-checkout result graph.
//
// Immutable snapshot of an order as reported by the SDK's completed event.
// Field shapes are transcribed from the SDK surface; both platform SDKs
// populate the same logical graph. Optionality is preserved exactly — the
// mapper turns every absent optional into an explicit null.

use serde_json::Value;

/// Terminal event payload for a successfully completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutCompletedEvent {
    pub order_details: OrderDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub billing_address: Option<Address>,
    pub deliveries: Option<Vec<DeliveryInfo>>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub cart: Option<CartInfo>,
}

/// Postal address. `zone_code` is the SDK's name for the province/state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zone_code: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryInfo {
    pub method: String,
    pub details: DeliveryDetails,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryDetails {
    pub name: Option<String>,
    pub additional_info: Option<String>,
}

/// Payment instrument summary. `details` is an opaque SDK-provided map.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub kind: String,
    pub details: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartInfo {
    pub token: Option<String>,
    pub lines: Vec<CartLine>,
    pub price: CartPrice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub merchandise_id: Option<String>,
    pub product_id: Option<String>,
    pub title: String,
    pub quantity: i64,
    pub price: Money,
    pub image: Option<CartLineImage>,
    pub discounts: Option<Vec<Discount>>,
}

/// Product image in the three size variants the SDK exposes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineImage {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub alt_text: Option<String>,
}

/// Monetary amount, passed through without reformatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub amount: f64,
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartPrice {
    pub total: Option<Money>,
    pub subtotal: Option<Money>,
    pub taxes: Option<Money>,
    pub shipping: Option<Money>,
    pub discounts: Option<Vec<Discount>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discount {
    pub title: Option<String>,
    pub amount: Option<Money>,
}
