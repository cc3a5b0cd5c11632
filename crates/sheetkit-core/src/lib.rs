// SPDX-License-Identifier: MIT
//
// Sheetkit — shared types for the checkout sheet bridge.
//
// The bridge sits between an application-layer message channel and the
// native checkout SDK. This crate holds the channel-facing vocabulary:
// inbound method calls, outbound responses and notifications, and the
// dispatch-level error taxonomy.

pub mod channel;
pub mod error;

pub use channel::{MethodCall, MethodResponse, NotificationSink, Responder};
pub use error::{DispatchError, ErrorCode};
