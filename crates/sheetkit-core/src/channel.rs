// SPDX-License-Identifier: MIT
//
// Channel message types.
//
// The transport itself is the host's concern; this crate only assumes a
// reliable, ordered request/response channel plus fire-and-forget
// notifications. Inbound arguments arrive as untyped JSON values and are
// validated at the dispatch boundary.

use serde_json::Value;

use crate::error::DispatchError;

/// An inbound command: a method name plus an untyped arguments payload.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// String argument lookup; `None` when the key is missing or not a string.
    pub fn string_argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key)?.as_str()
    }
}

/// The response owed to a method call.
#[derive(Debug, PartialEq)]
pub enum MethodResponse {
    /// Successful completion; `Value::Null` when the method has no payload.
    Success(Value),
    /// Dispatch-level failure, answered synchronously.
    Error(DispatchError),
    /// The method name is not recognized. An explicit no-op, not an error.
    NotImplemented,
}

/// One-shot callback delivering the response to the original caller.
///
/// For `present` this fires asynchronously, possibly long after the
/// triggering call returned.
pub type Responder = Box<dyn FnOnce(MethodResponse) + Send>;

/// Outbound fire-and-forget notification channel.
///
/// Implemented by the host transport; the bridge broadcasts every checkout
/// lifecycle event here regardless of whether a pending result exists.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, method: &str, arguments: Value);
}
