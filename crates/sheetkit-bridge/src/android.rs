// SPDX-License-Identifier: MIT
//
// Android surface resolution via JNI.
//
// The NDK glue publishes the current Activity and JavaVM through
// `ndk-context`. Resolution pins the Activity with a JNI global reference
// so the SDK can hold it across the presentation. Requires an NDK target
// (`aarch64-linux-android` or `armv7-linux-androideabi`).

#![cfg(target_os = "android")]

use jni::objects::JObject;

use sheetkit_sdk::PresentationSurface;

use crate::surface::SurfaceResolver;

/// Resolves the foreground Activity published by the NDK context.
pub struct AndroidSurfaceResolver;

impl SurfaceResolver for AndroidSurfaceResolver {
    fn current_surface(&self) -> Option<PresentationSurface> {
        let ctx = ndk_context::android_context();
        if ctx.context().is_null() {
            tracing::warn!("no Android context registered; activity detached?");
            return None;
        }

        // SAFETY: ctx.vm() is the JavaVM* set by the NDK glue and stays
        // valid for the process lifetime.
        let vm = match unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) } {
            Ok(vm) => vm,
            Err(error) => {
                tracing::warn!(%error, "failed to obtain JavaVM");
                return None;
            }
        };
        let mut env = match vm.attach_current_thread() {
            Ok(env) => env,
            Err(error) => {
                tracing::warn!(%error, "failed to attach JNI thread");
                return None;
            }
        };

        // SAFETY: ctx.context() is the Activity jobject published alongside
        // the VM; non-null was checked above.
        let activity = unsafe { JObject::from_raw(ctx.context() as jni::sys::jobject) };
        match env.new_global_ref(activity) {
            Ok(global) => Some(PresentationSurface::from_activity(global)),
            Err(error) => {
                tracing::warn!(%error, "failed to pin activity reference");
                None
            }
        }
    }
}
