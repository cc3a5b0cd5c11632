// SPDX-License-Identifier: MIT
//
// Checkout event processor: the SDK-facing callback adapter.
//
// One adapter is constructed per `present` call, bound to that call's
// pending handle. Every event is broadcast on the notification channel;
// only terminal events additionally resolve the pending result, and the
// broadcast always immediately precedes the resolution.

use std::sync::Arc;

use serde_json::{Value, json};

use sheetkit_core::{MethodResponse, NotificationSink};
use sheetkit_sdk::error::CheckoutException;
use sheetkit_sdk::order::CheckoutCompletedEvent;
use sheetkit_sdk::pixel::PixelEvent;
use sheetkit_sdk::{CheckoutEventProcessor, PermissionRequest};

use crate::mapping;
use crate::pending::{PendingHandle, PendingResults};

/// Forwards SDK callbacks to the notification channel and the pending
/// result slot of one `present` invocation.
pub struct ChannelEventProcessor {
    sink: Arc<dyn NotificationSink>,
    pending: PendingResults,
    handle: PendingHandle,
}

impl ChannelEventProcessor {
    pub fn new(sink: Arc<dyn NotificationSink>, pending: PendingResults, handle: PendingHandle) -> Self {
        Self {
            sink,
            pending,
            handle,
        }
    }
}

impl CheckoutEventProcessor for ChannelEventProcessor {
    fn on_checkout_completed(&self, event: &CheckoutCompletedEvent) {
        let event_map = mapping::map_checkout_completed_event(event);
        self.sink.notify("onCheckoutCompleted", event_map.clone());
        self.pending.resolve(
            self.handle,
            MethodResponse::Success(json!({
                "type": "completed",
                "event": event_map,
            })),
        );
    }

    fn on_checkout_canceled(&self) {
        self.sink.notify("onCheckoutCanceled", Value::Null);
        self.pending.resolve(
            self.handle,
            MethodResponse::Success(json!({"type": "canceled"})),
        );
    }

    fn on_checkout_failed(&self, error: &CheckoutException) {
        let error_map = mapping::map_checkout_error(error);
        self.sink.notify("onCheckoutFailed", error_map.clone());
        self.pending.resolve(
            self.handle,
            MethodResponse::Success(json!({
                "type": "failed",
                "error": error_map,
            })),
        );
    }

    fn on_checkout_link_clicked(&self, url: &str) {
        // Non-terminal: the presentation stays outstanding.
        self.sink.notify("onCheckoutLinkClicked", json!({"url": url}));
    }

    fn on_web_pixel_event(&self, event: &PixelEvent) {
        self.sink
            .notify("onWebPixelEvent", mapping::map_pixel_event(event));
    }

    fn on_permission_request(&self, request: &mut PermissionRequest) {
        // The checkout surface is a trusted first-party origin; grant
        // whatever it asks for (camera/microphone for embedded payment
        // flows). A deliberate trust decision, not an oversight.
        let requested = request.resources().to_vec();
        request.grant(requested);
    }

    fn should_recover_from_error(&self, error: &CheckoutException) -> bool {
        // Pass-through policy hook: the error's own flag decides.
        error.is_recoverable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use sheetkit_sdk::PermissionResource;
    use sheetkit_sdk::order::OrderDetails;
    use sheetkit_sdk::permission::PermissionDecision;
    use sheetkit_sdk::pixel::CustomPixelEvent;

    /// Records every broadcast in order.
    #[derive(Default)]
    struct CollectingSink {
        notifications: Mutex<Vec<(String, Value)>>,
    }

    impl NotificationSink for CollectingSink {
        fn notify(&self, method: &str, arguments: Value) {
            self.notifications
                .lock()
                .expect("lock")
                .push((method.to_owned(), arguments));
        }
    }

    impl CollectingSink {
        fn methods(&self) -> Vec<String> {
            self.notifications
                .lock()
                .expect("lock")
                .iter()
                .map(|(method, _)| method.clone())
                .collect()
        }
    }

    fn completed_event() -> CheckoutCompletedEvent {
        CheckoutCompletedEvent {
            order_details: OrderDetails {
                id: "gid://shop/Order/7".into(),
                email: None,
                phone: None,
                billing_address: None,
                deliveries: None,
                payment_methods: None,
                cart: None,
            },
        }
    }

    struct Fixture {
        sink: Arc<CollectingSink>,
        pending: PendingResults,
        processor: ChannelEventProcessor,
        responses: Arc<Mutex<Vec<MethodResponse>>>,
    }

    fn fixture() -> Fixture {
        let sink = Arc::new(CollectingSink::default());
        let pending = PendingResults::new();
        let responses = Arc::new(Mutex::new(Vec::new()));
        let responses_in = responses.clone();
        let handle = pending.begin(Box::new(move |response| {
            responses_in.lock().expect("lock").push(response);
        }));
        let processor = ChannelEventProcessor::new(sink.clone(), pending.clone(), handle);
        Fixture {
            sink,
            pending,
            processor,
            responses,
        }
    }

    #[test]
    fn completed_broadcasts_then_resolves_with_matching_payload() {
        let fx = fixture();
        fx.processor.on_checkout_completed(&completed_event());

        let notifications = fx.sink.notifications.lock().expect("lock");
        assert_eq!(notifications.len(), 1);
        let (method, event_map) = &notifications[0];
        assert_eq!(method, "onCheckoutCompleted");

        let responses = fx.responses.lock().expect("lock");
        assert_eq!(responses.len(), 1);
        match &responses[0] {
            MethodResponse::Success(value) => {
                assert_eq!(value["type"], json!("completed"));
                assert_eq!(&value["event"], event_map);
            }
            other => panic!("unexpected response: {other:?}"),
        }
        assert!(!fx.pending.is_outstanding());
    }

    #[test]
    fn canceled_broadcasts_without_payload_and_resolves() {
        let fx = fixture();
        fx.processor.on_checkout_canceled();

        let notifications = fx.sink.notifications.lock().expect("lock");
        assert_eq!(
            notifications[0],
            ("onCheckoutCanceled".to_owned(), Value::Null)
        );

        let responses = fx.responses.lock().expect("lock");
        assert_eq!(
            responses[0],
            MethodResponse::Success(json!({"type": "canceled"}))
        );
    }

    #[test]
    fn failed_carries_mapped_error_in_band() {
        let fx = fixture();
        fx.processor.on_checkout_failed(&CheckoutException::CheckoutExpired {
            description: "Cart completed already".into(),
            is_recoverable: false,
            cause: None,
        });

        let responses = fx.responses.lock().expect("lock");
        match &responses[0] {
            MethodResponse::Success(value) => {
                assert_eq!(value["type"], json!("failed"));
                assert_eq!(value["error"]["code"], json!("cartCompleted"));
                assert_eq!(value["error"]["isRecoverable"], json!(false));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn non_terminal_events_never_resolve() {
        let fx = fixture();
        fx.processor
            .on_checkout_link_clicked("https://shop.example/terms");
        fx.processor.on_web_pixel_event(&PixelEvent::Custom(CustomPixelEvent {
            name: "my_event".into(),
            timestamp: None,
            custom_data: None,
        }));
        fx.processor.on_web_pixel_event(&PixelEvent::Unknown);

        assert_eq!(
            fx.sink.methods(),
            vec!["onCheckoutLinkClicked", "onWebPixelEvent", "onWebPixelEvent"]
        );
        assert!(fx.responses.lock().expect("lock").is_empty());
        assert!(fx.pending.is_outstanding());
    }

    #[test]
    fn exactly_one_terminal_resolution_per_present() {
        let fx = fixture();
        fx.processor.on_checkout_canceled();
        // A late completion still broadcasts but cannot resolve again.
        fx.processor.on_checkout_completed(&completed_event());

        assert_eq!(
            fx.sink.methods(),
            vec!["onCheckoutCanceled", "onCheckoutCompleted"]
        );
        assert_eq!(fx.responses.lock().expect("lock").len(), 1);
    }

    #[test]
    fn permission_requests_are_granted_in_full() {
        let fx = fixture();
        let mut request = PermissionRequest::new(vec![
            PermissionResource::Camera,
            PermissionResource::Microphone,
        ]);
        fx.processor.on_permission_request(&mut request);

        assert_eq!(
            request.decision(),
            Some(&PermissionDecision::Granted(vec![
                PermissionResource::Camera,
                PermissionResource::Microphone,
            ]))
        );
    }

    #[test]
    fn recoverability_passes_through() {
        let fx = fixture();
        let recoverable = CheckoutException::CheckoutUnavailable {
            description: "try again".into(),
            is_recoverable: true,
            cause: None,
        };
        let fatal = CheckoutException::ConfigurationError {
            description: "bad setup".into(),
            is_recoverable: false,
            cause: None,
        };
        assert!(fx.processor.should_recover_from_error(&recoverable));
        assert!(!fx.processor.should_recover_from_error(&fatal));
    }
}
