// SPDX-License-Identifier: MIT
//
// iOS surface resolution via objc2.
//
// UIKit requires main-thread access; resolution fails off-main rather than
// risking an undefined message send. The resolver starts at the key
// window's root view controller and walks to the topmost presented
// controller, the same controller UIKit would use for a modal sheet.

#![cfg(target_os = "ios")]

use objc2::MainThreadMarker;
use objc2_ui_kit::UIApplication;

use sheetkit_sdk::PresentationSurface;

use crate::surface::SurfaceResolver;

/// Resolves the topmost presented view controller of the key window.
pub struct IosSurfaceResolver;

impl SurfaceResolver for IosSurfaceResolver {
    fn current_surface(&self) -> Option<PresentationSurface> {
        let Some(mtm) = MainThreadMarker::new() else {
            tracing::warn!("surface resolution requested off the main thread");
            return None;
        };

        let app = UIApplication::sharedApplication(mtm);
        let window = unsafe { app.keyWindow() }?;
        let mut controller = window.rootViewController()?;
        while let Some(presented) = controller.presentedViewController() {
            controller = presented;
        }

        Some(PresentationSurface::from_view_controller(controller))
    }
}
