// SPDX-License-Identifier: MIT
//
// Native SDK error types.
//
// Two disjoint kinds: [`SdkError`] is a synchronous throw from an SDK entry
// point, surfaced at the dispatch boundary as an opaque platform error.
// [`CheckoutException`] is an in-band failure of an in-progress
// presentation, delivered through `on_checkout_failed` and classified into
// the checkout-error taxonomy by the mapper.

use thiserror::Error;

/// Synchronous failure raised by a native SDK call.
#[derive(Debug, Clone, Error)]
pub enum SdkError {
    #[error("checkout sheet kit is not available on this platform")]
    PlatformUnavailable,

    #[error("{message}")]
    Native {
        message: String,
        /// Platform diagnostic rendering (stack trace or equivalent).
        diagnostic: Option<String>,
    },
}

impl SdkError {
    pub fn native(message: impl Into<String>) -> Self {
        Self::Native {
            message: message.into(),
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(message: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self::Native {
            message: message.into(),
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Native { diagnostic, .. } => diagnostic.as_deref(),
            Self::PlatformUnavailable => None,
        }
    }
}

/// Checkout failure reported during a presentation.
///
/// A closed set of kinds mirroring the SDK's exception hierarchy. Each
/// carries its own recoverability flag, which the embedding application is
/// expected to honor.
#[derive(Debug, Clone, Error)]
pub enum CheckoutException {
    /// The checkout session is no longer usable. Sub-classified by the
    /// mapper from the description text.
    #[error("checkout expired: {description}")]
    CheckoutExpired {
        description: String,
        is_recoverable: bool,
        cause: Option<String>,
    },

    #[error("checkout unavailable: {description}")]
    CheckoutUnavailable {
        description: String,
        is_recoverable: bool,
        cause: Option<String>,
    },

    #[error("checkout configuration error: {description}")]
    ConfigurationError {
        description: String,
        is_recoverable: bool,
        cause: Option<String>,
    },

    /// Anything the SDK did not classify.
    #[error("{description}")]
    Unknown {
        description: String,
        is_recoverable: bool,
        cause: Option<String>,
    },
}

impl CheckoutException {
    pub fn description(&self) -> &str {
        match self {
            Self::CheckoutExpired { description, .. }
            | Self::CheckoutUnavailable { description, .. }
            | Self::ConfigurationError { description, .. }
            | Self::Unknown { description, .. } => description,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::CheckoutExpired { is_recoverable, .. }
            | Self::CheckoutUnavailable { is_recoverable, .. }
            | Self::ConfigurationError { is_recoverable, .. }
            | Self::Unknown { is_recoverable, .. } => *is_recoverable,
        }
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::CheckoutExpired { cause, .. }
            | Self::CheckoutUnavailable { cause, .. }
            | Self::ConfigurationError { cause, .. }
            | Self::Unknown { cause, .. } => cause.as_deref(),
        }
    }
}
