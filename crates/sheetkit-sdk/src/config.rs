// SPDX-License-Identifier: MIT
//
// Process-wide SDK configuration state.
//
// Written through the `configure` builder entry point; effective for all
// subsequent preload/present calls until superseded.

/// Sheet color scheme understood by the native SDK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    /// Follow the system light/dark setting.
    #[default]
    Automatic,
    Light,
    Dark,
    /// Match the storefront web styling.
    Web,
}

/// Checkout preloading toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preloading {
    pub enabled: bool,
}

impl Default for Preloading {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// An ARGB color decoded from a hex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xFF,
        }
    }
}

/// Mutable configuration handed to the `configure` builder closure.
///
/// Tint color, background color, and sheet title are platform extras;
/// platforms that do not support them record and ignore the values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SdkConfiguration {
    pub color_scheme: ColorScheme,
    pub preloading: Preloading,
    pub tint_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub title: Option<String>,
}
