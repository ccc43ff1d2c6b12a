//! Per-region style maps and the default-then-user merge
//!
//! A card exposes six styleable regions. For each region the component owns a
//! set of default style properties; user-supplied styles are merged on top as
//! an explicit ordered merge, so user keys override defaults and unknown keys
//! pass through uninterpreted (authoring errors surface as visual defects,
//! not runtime failures).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CardConfig, ObjectFit, PicturePosition};

/// Default card corner radius when the user supplies none
pub const DEFAULT_RADIUS: &str = "12px";

/// One of the six named visual sub-areas of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Card,
    Image,
    Title,
    Text,
    Price,
    Button,
}

impl Region {
    /// All regions in resolution order
    pub const ALL: [Region; 6] = [
        Region::Card,
        Region::Image,
        Region::Title,
        Region::Text,
        Region::Price,
        Region::Button,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Card => "card",
            Region::Image => "image",
            Region::Title => "title",
            Region::Text => "text",
            Region::Price => "price",
            Region::Button => "button",
        };
        write!(f, "{}", name)
    }
}

/// A deterministic style-property map with last-wins assignment
///
/// Keys are free-form style property names (kebab-case by convention); values
/// are uninterpreted strings. Iteration order is stable so render passes over
/// identical configuration produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from literal pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut map = Self::new();
        for (k, v) in pairs {
            map.set(k, v);
        }
        map
    }

    /// Assign a property; a later set for the same key wins
    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ordered merge: every entry of `overrides` is applied on top of `self`.
    /// Unknown keys pass through unvalidated.
    pub fn merged_with(&self, overrides: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        for (k, v) in overrides.iter() {
            out.set(k, v);
        }
        out
    }
}

/// User style overrides keyed by region
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionStyles {
    pub card: StyleMap,
    pub image: StyleMap,
    pub title: StyleMap,
    pub text: StyleMap,
    pub price: StyleMap,
    pub button: StyleMap,
}

impl RegionStyles {
    pub fn get(&self, region: Region) -> &StyleMap {
        match region {
            Region::Card => &self.card,
            Region::Image => &self.image,
            Region::Title => &self.title,
            Region::Text => &self.text,
            Region::Price => &self.price,
            Region::Button => &self.button,
        }
    }
}

/// The six fully merged style maps for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyles {
    pub card: StyleMap,
    pub image: StyleMap,
    pub title: StyleMap,
    pub text: StyleMap,
    pub price: StyleMap,
    pub button: StyleMap,
}

impl ResolvedStyles {
    pub fn get(&self, region: Region) -> &StyleMap {
        match region {
            Region::Card => &self.card,
            Region::Image => &self.image,
            Region::Title => &self.title,
            Region::Text => &self.text,
            Region::Price => &self.price,
            Region::Button => &self.button,
        }
    }
}

/// The card's corner radius: the user's card border-radius if supplied,
/// otherwise the default. Resolved before the merge because the image
/// region's corner rounding reuses it.
pub fn card_radius(config: &CardConfig) -> String {
    config
        .styles
        .card
        .get("border-radius")
        .unwrap_or(DEFAULT_RADIUS)
        .to_string()
}

fn object_fit_value(fit: ObjectFit) -> &'static str {
    match fit {
        ObjectFit::Cover => "cover",
        ObjectFit::Contain => "contain",
        ObjectFit::Fill => "fill",
        ObjectFit::ScaleDown => "scale-down",
    }
}

/// Corner rounding for a flush image: only the card-edge corners are rounded,
/// keyed by picture position. A padded image takes the full card radius.
fn image_radius(position: PicturePosition, paddings: bool, radius: &str) -> String {
    if paddings {
        return radius.to_string();
    }
    match position {
        PicturePosition::Left => format!("{r} 0 0 {r}", r = radius),
        PicturePosition::Right => format!("0 {r} {r} 0", r = radius),
        PicturePosition::Top => format!("{r} {r} 0 0", r = radius),
        PicturePosition::Bottom => format!("0 0 {r} {r}", r = radius),
    }
}

/// Merge the component defaults with the user's per-region styles.
///
/// `position` is the effective picture position for this pass (mobile
/// behavior may have restacked a horizontal layout), since flex direction,
/// image margins and corner rounding all depend on it.
pub fn resolve_styles(config: &CardConfig, position: PicturePosition) -> ResolvedStyles {
    let horizontal = position.is_horizontal();
    let radius = card_radius(config);

    let mut card = StyleMap::from_pairs(&[
        ("display", "flex"),
        (
            "flex-direction",
            if horizontal { "row" } else { "column" },
        ),
        ("font-family", "sans-serif"),
        ("background-color", "#f0f2f6"),
        ("box-shadow", "0 6px 20px rgba(0,0,0,0.12)"),
        ("overflow", "hidden"),
        ("max-width", if horizontal { "500px" } else { "320px" }),
        ("margin", "auto"),
        ("position", "relative"),
    ]);
    card.set("border-radius", &radius);
    // The whole card is the click target only when no discrete button exists
    card.set(
        "cursor",
        if config.has_button() { "default" } else { "pointer" },
    );
    if config.enable_animation {
        card.set("transform", "scale(0.95)");
        card.set("transition", "transform 0.2s ease-in-out");
    }

    let mut image = StyleMap::new();
    image.set("object-fit", object_fit_value(config.picture_object_fit));
    image.set(
        "border-radius",
        &image_radius(position, config.picture_paddings, &radius),
    );
    // Gap between image and content, on the content-facing edge
    match position {
        PicturePosition::Left => image.set("margin-right", "12px"),
        PicturePosition::Right => image.set("margin-left", "12px"),
        PicturePosition::Top => image.set("margin-bottom", "12px"),
        PicturePosition::Bottom => image.set("margin-top", "12px"),
    }
    if config.picture_paddings {
        image.set("padding", "12px");
        image.set("box-sizing", "border-box");
    }
    if config.enable_animation {
        image.set("transition", "transform 0.2s ease-in-out");
    }

    let title = StyleMap::from_pairs(&[("margin", "0"), ("font-size", "1.1rem")]);

    let text = StyleMap::from_pairs(&[
        ("font-size", "0.85rem"),
        ("margin", "8px 0 12px"),
        ("line-height", "1.4"),
    ]);

    let price = StyleMap::from_pairs(&[("font-size", "1.3rem"), ("font-weight", "600")]);

    let mut button = StyleMap::from_pairs(&[
        ("background-color", "#ff4b4b"),
        ("color", "#fff"),
        ("border", "none"),
        ("padding", "10px 16px"),
        ("border-radius", "6px"),
        ("cursor", "pointer"),
        ("font-size", "0.9rem"),
    ]);
    button.set(
        "align-self",
        if horizontal { "flex-start" } else { "center" },
    );

    ResolvedStyles {
        card: card.merged_with(&config.styles.card),
        image: image.merged_with(&config.styles.image),
        title: title.merged_with(&config.styles.title),
        text: text.merged_with(&config.styles.text),
        price: price.merged_with(&config.styles.price),
        button: button.merged_with(&config.styles.button),
    }
}
