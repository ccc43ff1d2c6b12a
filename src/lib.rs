//! Cardrender
//!
//! A headless rendering component for a configurable "product card". The
//! component resolves a deterministic visual tree (layout plus merged
//! per-region styles) from a [`CardConfig`] and reports whether a click was
//! signaled during the render pass. It owns no render loop: the host calls
//! [`ProductCard::render`] once per pass and persists any state it cares
//! about across passes.
//!
//! # Features
//!
//! - **Deterministic layout**: one visual tree per configuration, no hidden
//!   state between passes
//! - **Six styleable regions**: card, image, title, text, price, button with
//!   ordered default-then-user style merging
//! - **Best-effort fonts**: optional remote stylesheet fetch that never
//!   blocks or fails a render (feature `remote-fonts`)
//!
//! # Example
//!
//! ```
//! use cardrender::{CardConfig, ProductCard, Viewport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CardConfig {
//!     product_name: "Elegant Watch".to_string(),
//!     price: Some("€299.99".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut card = ProductCard::new(config)?;
//! let pass = card.render(Viewport::default(), None)?;
//! assert!(!pass.clicked);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;
pub use error::{Error, Result};

pub mod style;

// Best-effort remote font stylesheet loading
pub mod font;

// Layout resolution and paint-command flattening
pub mod rendering;

// The renderer itself
pub mod card;

pub use card::ProductCard;
pub use rendering::{CardTree, RegionNode, RenderPass};
pub use style::{Region, RegionStyles, StyleMap};

/// Configuration for a single card instance
///
/// This is plain data: the optional click callback is registered on the
/// renderer (see [`ProductCard::on_click`]) so the config stays serializable.
/// Exactly one visual layout is derived deterministically from a given
/// config; no hidden state persists between renders.
///
/// # Examples
///
/// ```
/// let cfg = cardrender::CardConfig {
///     product_name: "Stylish Gadget".to_string(),
///     ..Default::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Product title; required and never empty
    pub product_name: String,
    /// Optional description, a single paragraph or a list of lines
    pub description: Option<Description>,
    /// Optional pre-formatted price string (e.g. "€99.99")
    pub price: Option<String>,
    /// Optional image URL; absent means no image region at all
    pub product_image: Option<String>,
    /// Button label; empty or absent means the whole card is the click target
    pub button_text: Option<String>,
    /// Where the image region sits relative to the content
    pub picture_position: PicturePosition,
    /// "native" or a fixed "W/H" ratio for the image box
    pub picture_aspect_ratio: AspectRatio,
    /// How the image resolves inside a fixed-ratio box
    pub picture_object_fit: ObjectFit,
    /// Image region width as a percent of the card, in (0, 100];
    /// meaningful only when the position is left or right
    pub picture_width_percent: f32,
    /// Inset the image region instead of filling edge-to-edge
    pub picture_paddings: bool,
    /// Cosmetic hover/press transitions on the card region
    pub enable_animation: bool,
    /// Optional remote font stylesheet, fetched best-effort before rendering
    pub font_url: Option<String>,
    /// Per-region style overrides, merged over the defaults
    pub styles: RegionStyles,
    /// How horizontal layouts behave below the mobile breakpoint
    pub mobile_breakpoint_behavior: MobileBehavior,
    /// Opaque identity token used by the host to disambiguate repeated
    /// instances; not interpreted by the component
    pub key: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            description: None,
            price: None,
            product_image: None,
            button_text: None,
            picture_position: PicturePosition::Top,
            picture_aspect_ratio: AspectRatio::Native,
            picture_object_fit: ObjectFit::Cover,
            picture_width_percent: 50.0,
            picture_paddings: false,
            enable_animation: false,
            font_url: None,
            styles: RegionStyles::default(),
            mobile_breakpoint_behavior: MobileBehavior::None,
            key: None,
        }
    }
}

impl CardConfig {
    /// Validate the caller contract: non-empty product name and an image
    /// width percent inside (0, 100]. Malformed aspect ratios are rejected
    /// earlier, at parse time.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(Error::ConfigError(
                "product_name is required and must not be empty".to_string(),
            ));
        }
        if !(self.picture_width_percent > 0.0 && self.picture_width_percent <= 100.0) {
            return Err(Error::ConfigError(format!(
                "picture_width_percent must be in (0, 100], got {}",
                self.picture_width_percent
            )));
        }
        Ok(())
    }

    /// Whether a discrete button is rendered. Empty labels count as absent:
    /// the whole card becomes the click target instead.
    pub fn has_button(&self) -> bool {
        self.button_text
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Card description content: a single paragraph or an ordered list of lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// One paragraph rendered as a single block
    Text(String),
    /// Ordered lines rendered one per line
    Lines(Vec<String>),
}

impl Description {
    /// The description as individual display lines
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Description::Text(s) => vec![s.as_str()],
            Description::Lines(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }

    /// True when there is nothing to render (empty list)
    pub fn is_empty(&self) -> bool {
        match self {
            Description::Text(s) => s.is_empty(),
            Description::Lines(v) => v.is_empty(),
        }
    }
}

/// Image region placement relative to the content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PicturePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl PicturePosition {
    /// Left/right positions produce a horizontal flex layout
    pub fn is_horizontal(self) -> bool {
        matches!(self, PicturePosition::Left | PicturePosition::Right)
    }
}

/// How the source image resolves inside a fixed aspect-ratio box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale to cover the box, cropping overflow
    Cover,
    /// Scale to fit entirely inside the box, letterboxing underflow
    Contain,
    /// Stretch to the box, ignoring source proportions
    Fill,
    /// Like contain, but never upscale past the intrinsic size
    ScaleDown,
}

/// Behavior of horizontal layouts below the mobile breakpoint
///
/// Vertical layouts are unaffected by this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobileBehavior {
    /// Relocate the image above the content
    #[serde(rename = "stack top")]
    StackTop,
    /// Relocate the image below the content
    #[serde(rename = "stack bottom")]
    StackBottom,
    /// Keep the horizontal arrangement but shrink the image region
    #[serde(rename = "shrink")]
    Shrink,
    /// Leave the layout unchanged
    #[serde(rename = "none")]
    None,
}

/// Aspect ratio of the image box: intrinsic proportions or a fixed W/H
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectRatio {
    /// Preserve the source image's intrinsic proportions
    Native,
    /// Fixed box computed from a "W/H" ratio
    Fixed { w: f32, h: f32 },
}

impl AspectRatio {
    /// Height of a fixed-ratio box at the given width, if the ratio is fixed
    pub fn height_for_width(self, width: f32) -> Option<f32> {
        match self {
            AspectRatio::Native => None,
            AspectRatio::Fixed { w, h } => Some(width * h / w),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    /// Parse "native" or "W/H" with two positive numbers. Anything else is
    /// an invalid-configuration condition and fails fast so layout stays
    /// deterministic.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("native") {
            return Ok(AspectRatio::Native);
        }
        let mut parts = trimmed.splitn(2, '/');
        let (w_str, h_str) = match (parts.next(), parts.next()) {
            (Some(w), Some(h)) => (w.trim(), h.trim()),
            _ => {
                return Err(Error::AspectRatioError {
                    input: s.to_string(),
                    reason: "expected \"native\" or \"W/H\"".to_string(),
                })
            }
        };
        let w: f32 = w_str.parse().map_err(|_| Error::AspectRatioError {
            input: s.to_string(),
            reason: format!("width {:?} is not a number", w_str),
        })?;
        let h: f32 = h_str.parse().map_err(|_| Error::AspectRatioError {
            input: s.to_string(),
            reason: format!("height {:?} is not a number", h_str),
        })?;
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(Error::AspectRatioError {
                input: s.to_string(),
                reason: "width and height must be positive".to_string(),
            });
        }
        Ok(AspectRatio::Fixed { w, h })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Native => write!(f, "native"),
            AspectRatio::Fixed { w, h } => write!(f, "{}/{}", w, h),
        }
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// A pointer activation delivered by the host for the current render pass
///
/// Coordinates are in the card's coordinate space (the card's top-left corner
/// is the origin). The renderer hit-tests the resolved layout: with a
/// discrete button only the button region signals a click; without one the
/// whole card does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
}

/// A textual snapshot of a rendered card
///
/// Returned by [`ProductCard::render_text_snapshot`]; a flat representation
/// of the content region suitable for textual tests and quick inspection.
#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    /// Product title
    pub title: String,
    /// Description lines joined with newlines (empty when absent)
    pub text: String,
    /// Pre-formatted price if present
    pub price: Option<String>,
    /// Button label if a discrete button is rendered
    pub button: Option<String>,
}
