// SPDX-License-Identifier: MIT
//
// Web pixel events emitted by the checkout surface.
//
// Standard events carry a browser-context snapshot (document, navigator,
// window); custom events carry free-form merchant data. Timestamps stay as
// the ISO strings the SDK delivers.

use serde_json::Value;

/// A pixel event as delivered by the SDK.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelEvent {
    Standard(StandardPixelEvent),
    Custom(CustomPixelEvent),
    /// Event shape the SDK did not recognize; forwarded as a marker only.
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardPixelEvent {
    pub name: String,
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub context: Option<PixelEventContext>,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomPixelEvent {
    pub name: String,
    pub timestamp: Option<String>,
    pub custom_data: Option<Value>,
}

/// Browser context snapshot attached to standard events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelEventContext {
    pub document: Option<PixelDocument>,
    pub navigator: Option<PixelNavigator>,
    pub window: Option<PixelWindow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelDocument {
    pub location: Option<String>,
    pub referrer: Option<String>,
    pub character_set: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelNavigator {
    pub language: Option<String>,
    pub cookie_enabled: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelWindow {
    pub inner_height: Option<f64>,
    pub inner_width: Option<f64>,
    pub origin: Option<String>,
    pub outer_height: Option<f64>,
    pub outer_width: Option<f64>,
    pub page_x_offset: Option<f64>,
    pub page_y_offset: Option<f64>,
    pub screen_x: Option<f64>,
    pub screen_y: Option<f64>,
    pub screen_height: Option<f64>,
    pub screen_width: Option<f64>,
}
