//! Rendering module: visual tree resolution and paint-command flattening

pub mod layout;
pub mod paint;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::style::{resolve_styles, Region, StyleMap};
use crate::{CardConfig, PointerEvent, Viewport};

pub use layout::{resolve_layout, resolve_object_fit, CardLayout, Rect, MOBILE_BREAKPOINT};
pub use paint::PaintCommand;

/// One resolved region: its rectangle, merged style map, and content
#[derive(Debug, Clone, Serialize)]
pub struct RegionNode {
    pub region: Region,
    pub rect: Rect,
    pub style: StyleMap,
    /// Text content, or the image URL for the image region
    pub content: Option<String>,
}

/// The resolved visual tree for one render pass
///
/// Fixed six-region shape: absent optional regions were omitted by the
/// configuration, never hidden by styling.
#[derive(Debug, Clone, Serialize)]
pub struct CardTree {
    pub card: RegionNode,
    pub image: Option<RegionNode>,
    pub title: RegionNode,
    pub text: Option<RegionNode>,
    pub price: Option<RegionNode>,
    pub button: Option<RegionNode>,
}

/// What a pointer activation resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The whole card (no discrete button configured)
    Card,
    /// The discrete button
    Button,
}

impl CardTree {
    /// Resolve the visual tree for a configuration and viewport. Layout and
    /// style resolution are both pure, so identical inputs always produce an
    /// identical tree.
    pub fn build(config: &CardConfig, viewport: Viewport) -> CardTree {
        let layout = resolve_layout(config, viewport);
        let styles = resolve_styles(config, layout.position);

        let node = |region: Region, rect: Rect, content: Option<String>| RegionNode {
            region,
            rect,
            style: styles.get(region).clone(),
            content,
        };

        CardTree {
            card: node(Region::Card, layout.card, None),
            image: layout
                .image
                .map(|r| node(Region::Image, r, config.product_image.clone())),
            title: node(
                Region::Title,
                layout.title,
                Some(config.product_name.clone()),
            ),
            text: layout.text.map(|r| {
                let joined = config
                    .description
                    .as_ref()
                    .map(|d| d.lines().join("\n"))
                    .unwrap_or_default();
                node(Region::Text, r, Some(joined))
            }),
            price: layout
                .price
                .map(|r| node(Region::Price, r, config.price.clone())),
            button: layout.button.map(|r| {
                node(
                    Region::Button,
                    r,
                    config.button_text.as_ref().map(|t| t.trim().to_string()),
                )
            }),
        }
    }

    /// Hit-test a pointer event against the resolved layout.
    ///
    /// With a discrete button only the button region signals; clicking
    /// elsewhere on the card signals nothing. Without one, anywhere inside
    /// the card's bounds signals a whole-card click.
    pub fn hit_target(&self, pointer: PointerEvent) -> Option<ClickTarget> {
        if let Some(button) = &self.button {
            if button.rect.contains(pointer.x, pointer.y) {
                return Some(ClickTarget::Button);
            }
            return None;
        }
        if self.card.rect.contains(pointer.x, pointer.y) {
            return Some(ClickTarget::Card);
        }
        None
    }
}

/// The output of one render pass
#[derive(Debug, Clone, Serialize)]
pub struct RenderPass {
    /// Resolved visual tree
    pub tree: CardTree,
    /// Flattened deterministic paint list
    pub commands: Vec<PaintCommand>,
    /// Whether a click was signaled during this pass (never cumulative)
    pub clicked: bool,
}

/// Content-addressed digest of a paint list, used by golden tests and the
/// idempotency property. Identical trees always hash identically.
pub fn paint_digest(commands: &[PaintCommand]) -> String {
    let bytes = serde_json::to_vec(commands).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    hex::encode(hasher.finalize())
}
