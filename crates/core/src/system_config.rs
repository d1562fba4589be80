//! Typed interpretation of the `system_config` key-value table.
//!
//! The table stores every value as text. Each known key declares what its
//! value means, either a reference to an `images` row or an opaque JSON
//! document, and [`ConfigKey::interpret`] turns the raw text into a
//! [`ConfigValue`] accordingly.

use serde_json::json;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub const KEY_CURRENT_BACKGROUND: &str = "current_background";
pub const KEY_ABOUT_CONTENT: &str = "about_content";
pub const KEY_ABOUT_IMAGE: &str = "about_image";

/// A `system_config` key the content service knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CurrentBackground,
    AboutContent,
    AboutImage,
}

/// What kind of value a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValueKind {
    ImageRef,
    Document,
}

/// A decoded `system_config` value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Identifier of a row in the `images` table.
    ImageRef(DbId),
    /// An opaque JSON document, returned to clients verbatim.
    Document(serde_json::Value),
}

impl ConfigKey {
    /// The key as stored in the `key` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::CurrentBackground => KEY_CURRENT_BACKGROUND,
            ConfigKey::AboutContent => KEY_ABOUT_CONTENT,
            ConfigKey::AboutImage => KEY_ABOUT_IMAGE,
        }
    }

    pub fn kind(self) -> ConfigValueKind {
        match self {
            ConfigKey::CurrentBackground | ConfigKey::AboutImage => ConfigValueKind::ImageRef,
            ConfigKey::AboutContent => ConfigValueKind::Document,
        }
    }

    /// Decode the raw text stored under this key.
    ///
    /// Returns [`CoreError::BadData`] when the text does not match the
    /// key's kind (a non-numeric image reference, or invalid JSON).
    pub fn interpret(self, raw: &str) -> Result<ConfigValue, CoreError> {
        match self.kind() {
            ConfigValueKind::ImageRef => raw
                .trim()
                .parse::<DbId>()
                .map(ConfigValue::ImageRef)
                .map_err(|_| {
                    CoreError::BadData(format!(
                        "'{}' does not hold an image id: {raw:?}",
                        self.as_str()
                    ))
                }),
            ConfigValueKind::Document => serde_json::from_str(raw)
                .map(ConfigValue::Document)
                .map_err(|e| {
                    CoreError::BadData(format!("'{}' is not valid JSON: {e}", self.as_str()))
                }),
        }
    }
}

// ---------------------------------------------------------------------------
// Image slots
// ---------------------------------------------------------------------------

/// A named place on the site that displays one admin-selected image.
///
/// Both slots resolve the same way: look up the key, then the image it
/// names. They differ only in key and in the messages reported when either
/// step comes up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Background,
    About,
}

impl ImageSlot {
    pub fn key(self) -> ConfigKey {
        match self {
            ImageSlot::Background => ConfigKey::CurrentBackground,
            ImageSlot::About => ConfigKey::AboutImage,
        }
    }

    /// Message when the slot has no config row.
    pub fn not_configured_message(self) -> &'static str {
        match self {
            ImageSlot::Background => "No background image configured",
            ImageSlot::About => "No about image configured",
        }
    }

    /// Message when the config row names an image that does not exist.
    pub fn not_found_message(self) -> &'static str {
        match self {
            ImageSlot::Background => "Background image not found",
            ImageSlot::About => "About image not found",
        }
    }
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

pub const DEFAULT_ABOUT_TITLE: &str = "About Mind's Eye Photography";
pub const DEFAULT_ABOUT_CONTENT: &str =
    "Welcome to Mind's Eye Photography, where we capture the world through a unique perspective.";

/// About-page payload served when no `about_content` row exists.
pub fn default_about_content() -> serde_json::Value {
    json!({
        "title": DEFAULT_ABOUT_TITLE,
        "content": DEFAULT_ABOUT_CONTENT,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
