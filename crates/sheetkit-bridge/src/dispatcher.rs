// SPDX-License-Identifier: MIT
//
// Command dispatch: the single entry point for inbound channel calls.
//
// Validates untyped argument payloads at the boundary, routes the four
// recognized methods to native SDK operations, and answers every call
// through its responder. Synchronous SDK throws are reported as opaque
// `{code, message, details}` dispatch errors, never reclassified into the
// checkout-error taxonomy.

use std::sync::Arc;

use serde_json::Value;

use sheetkit_core::{
    DispatchError, ErrorCode, MethodCall, MethodResponse, NotificationSink, Responder,
};
use sheetkit_sdk::{CheckoutSheetKit, SdkError};

use crate::pending::PendingResults;
use crate::processor::ChannelEventProcessor;
use crate::surface::SurfaceResolver;
use crate::theme::{decode_color_scheme, decode_hex_color};

/// The bridge: routes channel commands to the native checkout SDK.
pub struct CheckoutBridge {
    sdk: Arc<dyn CheckoutSheetKit>,
    sink: Arc<dyn NotificationSink>,
    surfaces: Box<dyn SurfaceResolver>,
    pending: PendingResults,
}

impl CheckoutBridge {
    pub fn new(
        sdk: Arc<dyn CheckoutSheetKit>,
        sink: Arc<dyn NotificationSink>,
        surfaces: Box<dyn SurfaceResolver>,
    ) -> Self {
        Self {
            sdk,
            sink,
            surfaces,
            pending: PendingResults::new(),
        }
    }

    /// Dispatch one inbound call. Unrecognized methods answer
    /// "not implemented" per host-framework convention; that is an explicit
    /// no-op, not an error.
    pub fn handle_call(&self, call: MethodCall, respond: Responder) {
        match call.method.as_str() {
            "configure" => self.handle_configure(&call, respond),
            "preload" => self.handle_preload(&call, respond),
            "present" => self.handle_present(&call, respond),
            "invalidate" => self.handle_invalidate(respond),
            other => {
                tracing::debug!(method = other, "unrecognized method");
                respond(MethodResponse::NotImplemented);
            }
        }
    }

    /// Whether a `present` response is still owed.
    pub fn has_pending_result(&self) -> bool {
        self.pending.is_outstanding()
    }

    fn handle_configure(&self, call: &MethodCall, respond: Responder) {
        let Some(args) = call.arguments.as_object().cloned() else {
            respond(MethodResponse::Error(DispatchError::invalid_args(
                "Configuration arguments required",
            )));
            return;
        };

        let result = self.sdk.configure(&mut |config| {
            if let Some(token) = args.get("colorScheme").and_then(Value::as_str) {
                // Unrecognized tokens fall through to the SDK's current value.
                if let Some(scheme) = decode_color_scheme(token) {
                    config.color_scheme = scheme;
                }
            }

            if let Some(preloading) = args.get("preloading").and_then(Value::as_object) {
                config.preloading.enabled = preloading
                    .get("enabled")
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
            }

            if let Some(color) = args
                .get("tintColor")
                .and_then(Value::as_str)
                .and_then(decode_hex_color)
            {
                config.tint_color = Some(color);
            }

            if let Some(color) = args
                .get("backgroundColor")
                .and_then(Value::as_str)
                .and_then(decode_hex_color)
            {
                config.background_color = Some(color);
            }

            if let Some(title) = args.get("title").and_then(Value::as_str) {
                config.title = Some(title.to_owned());
            }
        });

        match result {
            Ok(()) => respond(MethodResponse::Success(Value::Null)),
            Err(error) => respond(MethodResponse::Error(sdk_failure(
                ErrorCode::ConfigureError,
                &error,
            ))),
        }
    }

    fn handle_preload(&self, call: &MethodCall, respond: Responder) {
        let Some(url) = checkout_url(call) else {
            respond(MethodResponse::Error(DispatchError::invalid_args(
                "Checkout URL required",
            )));
            return;
        };
        let Some(surface) = self.surfaces.current_surface() else {
            respond(MethodResponse::Error(DispatchError::no_surface(
                "A foreground presentation surface is required for preload",
            )));
            return;
        };

        match self.sdk.preload(url, &surface) {
            Ok(()) => respond(MethodResponse::Success(Value::Null)),
            Err(error) => respond(MethodResponse::Error(sdk_failure(
                ErrorCode::PreloadError,
                &error,
            ))),
        }
    }

    fn handle_present(&self, call: &MethodCall, respond: Responder) {
        let Some(url) = checkout_url(call) else {
            respond(MethodResponse::Error(DispatchError::invalid_args(
                "Checkout URL required",
            )));
            return;
        };
        let Some(surface) = self.surfaces.current_surface() else {
            respond(MethodResponse::Error(DispatchError::no_surface(
                "A foreground presentation surface is required for present",
            )));
            return;
        };

        // The responder moves into the pending slot; from here on the call
        // is answered asynchronously by the first terminal event.
        let handle = self.pending.begin(respond);
        let processor =
            ChannelEventProcessor::new(self.sink.clone(), self.pending.clone(), handle);

        if let Err(error) = self.sdk.present(url, &surface, Box::new(processor)) {
            self.pending.resolve(
                handle,
                MethodResponse::Error(sdk_failure(ErrorCode::PresentError, &error)),
            );
        }
    }

    fn handle_invalidate(&self, respond: Responder) {
        match self.sdk.invalidate() {
            Ok(()) => respond(MethodResponse::Success(Value::Null)),
            Err(error) => respond(MethodResponse::Error(sdk_failure(
                ErrorCode::InvalidateError,
                &error,
            ))),
        }
    }
}

/// Non-empty `url` argument, or `None`.
fn checkout_url(call: &MethodCall) -> Option<&str> {
    call.string_argument("url").filter(|url| !url.is_empty())
}

fn sdk_failure(code: ErrorCode, error: &SdkError) -> DispatchError {
    let failure = DispatchError::new(code, error.to_string());
    match error.diagnostic() {
        Some(diagnostic) => failure.with_details(diagnostic),
        None => failure,
    }
}
