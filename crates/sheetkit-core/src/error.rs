// SPDX-License-Identifier: MIT
//
// Dispatch-level error taxonomy.
//
// These errors answer the triggering method call synchronously: malformed
// requests, missing platform resources, or a native SDK call that threw
// before the presentation lifecycle began. They are distinct from the
// checkout-error taxonomy carried inside a successful `failed` result —
// the two must never be conflated.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Stable error codes surfaced to the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Required arguments missing or of the wrong shape.
    InvalidArgs,
    /// No live presentation surface (activity / view controller) available.
    NoSurface,
    /// The native SDK threw during `configure`.
    ConfigureError,
    /// The native SDK threw during `preload`.
    PreloadError,
    /// The native SDK threw while starting `present`.
    PresentError,
    /// The native SDK threw during `invalidate`.
    InvalidateError,
}

impl ErrorCode {
    /// Wire rendering of the code.
    ///
    /// The missing-surface code keeps the platform-specific spelling the
    /// application layer already matches on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgs => "INVALID_ARGS",
            #[cfg(target_os = "ios")]
            Self::NoSurface => "NO_VIEW_CONTROLLER",
            #[cfg(not(target_os = "ios"))]
            Self::NoSurface => "NO_ACTIVITY",
            Self::ConfigureError => "CONFIGURE_ERROR",
            Self::PreloadError => "PRELOAD_ERROR",
            Self::PresentError => "PRESENT_ERROR",
            Self::InvalidateError => "INVALIDATE_ERROR",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload answering a method call: `{code, message, details}`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message}")]
pub struct DispatchError {
    pub code: ErrorCode,
    pub message: String,
    /// Diagnostic rendering of an underlying native failure, when present.
    pub details: Option<String>,
}

impl DispatchError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgs, message)
    }

    pub fn no_surface(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoSurface, message)
    }
}

impl Serialize for DispatchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DispatchError", 3)?;
        s.serialize_field("code", &self.code)?;
        s.serialize_field("message", &self.message)?;
        s.serialize_field("details", &self.details)?;
        s.end()
    }
}
