// SPDX-License-Identifier: MIT
//
// Domain-object transcription.
//
// Pure functions turning native SDK result graphs into neutral JSON
// payloads. The key set of every produced object is fixed and exhaustive:
// absent optionals become explicit nulls at the same key, never an omitted
// key, never a substituted default. Values pass through unreformatted and
// collections keep their source order.

use serde_json::{Value, json};

use sheetkit_sdk::error::CheckoutException;
use sheetkit_sdk::order::{
    Address, CartInfo, CartLine, CartLineImage, CartPrice, CheckoutCompletedEvent, DeliveryInfo,
    Discount, Money, OrderDetails, PaymentMethod,
};
use sheetkit_sdk::pixel::{PixelEvent, PixelEventContext};

/// Map a completed-checkout event to `{orderDetails: {...}}`.
pub fn map_checkout_completed_event(event: &CheckoutCompletedEvent) -> Value {
    json!({
        "orderDetails": order_details_value(&event.order_details),
    })
}

fn order_details_value(details: &OrderDetails) -> Value {
    json!({
        "id": details.id,
        "email": details.email,
        "phone": details.phone,
        "billingAddress": details.billing_address.as_ref().map(address_value),
        "deliveries": details
            .deliveries
            .as_ref()
            .map(|deliveries| deliveries.iter().map(delivery_value).collect::<Vec<_>>()),
        "paymentMethods": details
            .payment_methods
            .as_ref()
            .map(|methods| methods.iter().map(payment_method_value).collect::<Vec<_>>()),
        "cart": details.cart.as_ref().map(cart_value),
    })
}

fn address_value(address: &Address) -> Value {
    json!({
        "firstName": address.first_name,
        "lastName": address.last_name,
        "address1": address.address1,
        "address2": address.address2,
        "city": address.city,
        // The SDK calls this zoneCode; the payload keeps the channel name.
        "province": address.zone_code,
        "countryCode": address.country_code,
        "postalCode": address.postal_code,
        "phone": address.phone,
    })
}

fn delivery_value(delivery: &DeliveryInfo) -> Value {
    json!({
        "method": delivery.method,
        "details": {
            "name": delivery.details.name,
            "additionalInfo": delivery.details.additional_info,
        },
    })
}

fn payment_method_value(payment: &PaymentMethod) -> Value {
    json!({
        "type": payment.kind,
        "details": payment.details,
    })
}

fn cart_value(cart: &CartInfo) -> Value {
    json!({
        "token": cart.token,
        "lines": cart.lines.iter().map(cart_line_value).collect::<Vec<_>>(),
        "price": cart_price_value(&cart.price),
    })
}

fn cart_line_value(line: &CartLine) -> Value {
    json!({
        "merchandiseId": line.merchandise_id,
        "productId": line.product_id,
        "title": line.title,
        "quantity": line.quantity,
        "price": money_value(&line.price),
        "image": line.image.as_ref().map(image_value),
        "discounts": line
            .discounts
            .as_ref()
            .map(|discounts| discounts.iter().map(discount_value).collect::<Vec<_>>()),
    })
}

fn image_value(image: &CartLineImage) -> Value {
    json!({
        "sm": image.sm,
        "md": image.md,
        "lg": image.lg,
        "altText": image.alt_text,
    })
}

fn cart_price_value(price: &CartPrice) -> Value {
    json!({
        "total": price.total.as_ref().map(money_value),
        "subtotal": price.subtotal.as_ref().map(money_value),
        "taxes": price.taxes.as_ref().map(money_value),
        "shipping": price.shipping.as_ref().map(money_value),
        "discounts": price
            .discounts
            .as_ref()
            .map(|discounts| discounts.iter().map(discount_value).collect::<Vec<_>>()),
    })
}

fn discount_value(discount: &Discount) -> Value {
    json!({
        "title": discount.title,
        "amount": discount.amount.as_ref().map(money_value),
    })
}

fn money_value(money: &Money) -> Value {
    json!({
        "amount": money.amount,
        "currencyCode": money.currency_code,
    })
}

/// Map a checkout exception to `{message, code, isRecoverable, underlyingError}`.
///
/// The expired subtype is sub-classified by case-insensitive substring
/// match on the description. This mirrors the wording of the native SDK's
/// message catalog and is deliberately preserved as-is; do not tidy it
/// into something stricter.
pub fn map_checkout_error(error: &CheckoutException) -> Value {
    let code = match error {
        CheckoutException::CheckoutExpired { description, .. } => {
            let lowered = description.to_lowercase();
            if lowered.contains("completed") {
                "cartCompleted"
            } else if lowered.contains("invalid") {
                "invalidCart"
            } else {
                "cartExpired"
            }
        }
        CheckoutException::CheckoutUnavailable { .. } => "checkoutUnavailable",
        CheckoutException::ConfigurationError { .. } => "configurationError",
        CheckoutException::Unknown { .. } => "unknown",
    };

    let message = if error.description().is_empty() {
        "Unknown error"
    } else {
        error.description()
    };

    json!({
        "message": message,
        "code": code,
        "isRecoverable": error.is_recoverable(),
        "underlyingError": error.cause(),
    })
}

/// Map a pixel event. Standard events carry the full browser-context
/// snapshot; custom events carry free-form data; unrecognized events map to
/// a bare marker.
pub fn map_pixel_event(event: &PixelEvent) -> Value {
    match event {
        PixelEvent::Standard(standard) => json!({
            "type": "standard",
            "name": standard.name,
            "id": standard.id,
            "timestamp": standard.timestamp,
            "context": standard.context.as_ref().map(pixel_context_value),
            "data": standard.data,
        }),
        PixelEvent::Custom(custom) => json!({
            "type": "custom",
            "name": custom.name,
            "timestamp": custom.timestamp,
            "customData": custom.custom_data,
        }),
        PixelEvent::Unknown => json!({
            "type": "unknown",
            "name": "unknown",
        }),
    }
}

fn pixel_context_value(context: &PixelEventContext) -> Value {
    json!({
        "document": context.document.as_ref().map(|doc| json!({
            "location": doc.location,
            "referrer": doc.referrer,
            "characterSet": doc.character_set,
            "title": doc.title,
        })),
        "navigator": context.navigator.as_ref().map(|nav| json!({
            "language": nav.language,
            "cookieEnabled": nav.cookie_enabled,
            "languages": nav.languages,
            "userAgent": nav.user_agent,
        })),
        "window": context.window.as_ref().map(|win| json!({
            "innerHeight": win.inner_height,
            "innerWidth": win.inner_width,
            "origin": win.origin,
            "outerHeight": win.outer_height,
            "outerWidth": win.outer_width,
            "pageXOffset": win.page_x_offset,
            "pageYOffset": win.page_y_offset,
            "screenX": win.screen_x,
            "screenY": win.screen_y,
            "screenHeight": win.screen_height,
            "screenWidth": win.screen_width,
        })),
    })
}
