// SPDX-License-Identifier: MIT
//
// Presentation surface handle.
//
// The SDK needs the platform's current foreground UI container to host the
// modal checkout view: an Activity on Android, a UIViewController on iOS.
// On other targets the handle is a labeled placeholder so the bridge and
// its tests build everywhere.

/// Opaque handle to a live presentation surface.
#[derive(Clone)]
pub struct PresentationSurface {
    #[cfg(target_os = "android")]
    activity: jni::objects::GlobalRef,

    #[cfg(target_os = "ios")]
    view_controller: objc2::rc::Retained<objc2_ui_kit::UIViewController>,

    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    label: String,
}

#[cfg(target_os = "android")]
impl PresentationSurface {
    pub fn from_activity(activity: jni::objects::GlobalRef) -> Self {
        Self { activity }
    }

    pub fn activity(&self) -> &jni::objects::GlobalRef {
        &self.activity
    }
}

#[cfg(target_os = "ios")]
impl PresentationSurface {
    pub fn from_view_controller(
        view_controller: objc2::rc::Retained<objc2_ui_kit::UIViewController>,
    ) -> Self {
        Self { view_controller }
    }

    pub fn view_controller(&self) -> &objc2_ui_kit::UIViewController {
        &self.view_controller
    }
}

#[cfg(not(any(target_os = "ios", target_os = "android")))]
impl PresentationSurface {
    /// Placeholder surface for non-mobile targets and tests.
    pub fn headless(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for PresentationSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        #[cfg(target_os = "android")]
        return f.write_str("PresentationSurface(activity)");

        #[cfg(target_os = "ios")]
        return f.write_str("PresentationSurface(view controller)");

        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        write!(f, "PresentationSurface({})", self.label)
    }
}
