// SPDX-License-Identifier: MIT
//
// Sheetkit — native checkout SDK abstractions.
//
// The checkout SDK ships separately for each mobile platform; this crate
// models it as an external collaborator behind a capability trait. The
// bridge only ever drives four operations (configure, preload, present,
// invalidate) and observes the callback lifecycle through
// [`CheckoutEventProcessor`]. Result-object graphs are transcribed here
// verbatim from the SDK surface so the mapper can stay pure.

pub mod config;
pub mod error;
pub mod order;
pub mod permission;
pub mod pixel;
pub mod surface;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

pub use config::{ColorScheme, Preloading, Rgba, SdkConfiguration};
pub use error::{CheckoutException, SdkError};
pub use order::CheckoutCompletedEvent;
pub use permission::{PermissionDecision, PermissionRequest, PermissionResource};
pub use pixel::PixelEvent;
pub use surface::PresentationSurface;

/// The native checkout SDK, reduced to the capability set the bridge uses.
///
/// `configure` mutates process-wide SDK state through a builder closure;
/// the bridge never caches or reads that state back. `present` starts an
/// asynchronous presentation whose lifecycle is reported through the
/// supplied processor at arbitrary later times.
pub trait CheckoutSheetKit {
    fn configure(&self, apply: &mut dyn FnMut(&mut SdkConfiguration)) -> Result<(), SdkError>;

    fn preload(&self, url: &str, surface: &PresentationSurface) -> Result<(), SdkError>;

    fn present(
        &self,
        url: &str,
        surface: &PresentationSurface,
        processor: Box<dyn CheckoutEventProcessor>,
    ) -> Result<(), SdkError>;

    fn invalidate(&self) -> Result<(), SdkError>;
}

/// Checkout lifecycle callbacks, delivered by the SDK during a presentation.
///
/// Exactly one of `on_checkout_completed`, `on_checkout_canceled`,
/// `on_checkout_failed` terminates a presentation; link clicks, pixel
/// events, and permission requests may occur any number of times before
/// that.
pub trait CheckoutEventProcessor {
    fn on_checkout_completed(&self, event: &CheckoutCompletedEvent);

    fn on_checkout_canceled(&self);

    fn on_checkout_failed(&self, error: &CheckoutException);

    fn on_checkout_link_clicked(&self, url: &str);

    fn on_web_pixel_event(&self, event: &PixelEvent);

    fn on_permission_request(&self, request: &mut PermissionRequest);

    /// Whether the SDK should attempt recovery for the given error.
    fn should_recover_from_error(&self, error: &CheckoutException) -> bool;
}
