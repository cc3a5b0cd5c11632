// SPDX-License-Identifier: MIT
//
// Presentation surface resolution.
//
// The dispatcher asks for a live foreground surface right before each
// preload/present; it never holds one across calls. Platform lifecycle
// transitions (activity detach, window changes) are the resolver's
// concern, not the dispatcher's.

use sheetkit_sdk::PresentationSurface;

/// Capability: hand out the current foreground presentation surface, or
/// nothing when the app has none (backgrounded, detached, headless).
pub trait SurfaceResolver {
    fn current_surface(&self) -> Option<PresentationSurface>;
}

/// Resolver for targets without a native UI stack; never resolves.
pub struct NullSurfaceResolver;

impl SurfaceResolver for NullSurfaceResolver {
    fn current_surface(&self) -> Option<PresentationSurface> {
        tracing::debug!("no presentation surface on this platform");
        None
    }
}
