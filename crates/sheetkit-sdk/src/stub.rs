// SPDX-License-Identifier: MIT
//
// Stub SDK for desktop/CI builds where the native checkout SDK does not
// exist. Every operation returns `PlatformUnavailable` — real
// implementations bind the platform SDK behind the same trait.

use crate::config::SdkConfiguration;
use crate::error::SdkError;
use crate::surface::PresentationSurface;
use crate::{CheckoutEventProcessor, CheckoutSheetKit};

/// No-op SDK returned on non-mobile platforms.
pub struct StubCheckoutSheetKit;

impl CheckoutSheetKit for StubCheckoutSheetKit {
    fn configure(&self, _apply: &mut dyn FnMut(&mut SdkConfiguration)) -> Result<(), SdkError> {
        tracing::warn!("configure called on stub checkout sheet kit");
        Err(SdkError::PlatformUnavailable)
    }

    fn preload(&self, _url: &str, _surface: &PresentationSurface) -> Result<(), SdkError> {
        tracing::warn!("preload called on stub checkout sheet kit");
        Err(SdkError::PlatformUnavailable)
    }

    fn present(
        &self,
        _url: &str,
        _surface: &PresentationSurface,
        _processor: Box<dyn CheckoutEventProcessor>,
    ) -> Result<(), SdkError> {
        tracing::warn!("present called on stub checkout sheet kit");
        Err(SdkError::PlatformUnavailable)
    }

    fn invalidate(&self) -> Result<(), SdkError> {
        tracing::warn!("invalidate called on stub checkout sheet kit");
        Err(SdkError::PlatformUnavailable)
    }
}
