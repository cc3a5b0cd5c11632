// SPDX-License-Identifier: MIT
//
// Sheetkit — checkout sheet bridge.
//
// Translational layer between an application-level message channel and the
// native checkout SDK: routes named commands to SDK calls, tracks the
// single in-flight `present` response across the SDK's callback lifecycle,
// and transcribes every native result object into a neutral key-value
// payload.

pub mod dispatcher;
pub mod mapping;
pub mod pending;
pub mod processor;
pub mod surface;
pub mod theme;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

pub use dispatcher::CheckoutBridge;
pub use pending::{PendingHandle, PendingResults};
pub use surface::SurfaceResolver;

/// Surface resolver for the target operating system.
///
/// Android locates the current activity through the NDK context; iOS walks
/// from the key window's root view controller to the topmost presented
/// controller. Other targets resolve nothing — embedders and tests inject
/// their own resolver.
pub fn platform_surface_resolver() -> Box<dyn SurfaceResolver> {
    #[cfg(target_os = "ios")]
    {
        Box::new(ios::IosSurfaceResolver)
    }
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidSurfaceResolver)
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(surface::NullSurfaceResolver)
    }
}
