//! Flattening of the resolved visual tree into paint commands
//!
//! The command list is the lowest-level output of a render pass: an ordered,
//! deterministic sequence a host can rasterize or diff. Image commands carry
//! the object-fit and source URL rather than pixels; hosts that know the
//! intrinsic image size resolve the draw rectangle with
//! [`super::resolve_object_fit`].

use serde::Serialize;

use crate::rendering::{CardTree, Rect, RegionNode};
use crate::ObjectFit;

/// A single paint operation, in back-to-front order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    /// Fill a rectangle with a solid style value (e.g. a background color)
    SolidRect { rect: Rect, fill: String },
    /// Draw the source image into a box with the given fit
    Image {
        rect: Rect,
        url: String,
        fit: ObjectFit,
    },
    /// Draw a text block clipped to its rect
    Text {
        rect: Rect,
        text: String,
        /// Resolved font-size style value
        size: String,
    },
}

fn fill_of(node: &RegionNode) -> String {
    node.style
        .get("background-color")
        .unwrap_or("transparent")
        .to_string()
}

fn size_of(node: &RegionNode) -> String {
    node.style.get("font-size").unwrap_or("1rem").to_string()
}

fn text_command(node: &RegionNode) -> Option<PaintCommand> {
    node.content.as_ref().map(|text| PaintCommand::Text {
        rect: node.rect,
        text: text.clone(),
        size: size_of(node),
    })
}

/// Flatten a resolved tree into its paint list: card background first, then
/// the image box, then the content stack in order, then the button.
pub fn build_paint_list(tree: &CardTree) -> Vec<PaintCommand> {
    let mut commands = Vec::new();

    commands.push(PaintCommand::SolidRect {
        rect: tree.card.rect,
        fill: fill_of(&tree.card),
    });

    if let Some(image) = &tree.image {
        if let Some(url) = &image.content {
            let fit = match image.style.get("object-fit") {
                Some("contain") => ObjectFit::Contain,
                Some("fill") => ObjectFit::Fill,
                Some("scale-down") => ObjectFit::ScaleDown,
                _ => ObjectFit::Cover,
            };
            commands.push(PaintCommand::Image {
                rect: image.rect,
                url: url.clone(),
                fit,
            });
        }
    }

    if let Some(cmd) = text_command(&tree.title) {
        commands.push(cmd);
    }
    if let Some(text) = &tree.text {
        if let Some(cmd) = text_command(text) {
            commands.push(cmd);
        }
    }
    if let Some(price) = &tree.price {
        if let Some(cmd) = text_command(price) {
            commands.push(cmd);
        }
    }

    if let Some(button) = &tree.button {
        commands.push(PaintCommand::SolidRect {
            rect: button.rect,
            fill: fill_of(button),
        });
        if let Some(cmd) = text_command(button) {
            commands.push(cmd);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardConfig, Viewport};

    #[test]
    fn card_background_paints_first() {
        let config = CardConfig {
            product_name: "Gadget".to_string(),
            ..Default::default()
        };
        let tree = CardTree::build(&config, Viewport::default());
        let commands = build_paint_list(&tree);
        match &commands[0] {
            PaintCommand::SolidRect { rect, fill } => {
                assert_eq!(*rect, tree.card.rect);
                assert_eq!(fill, "#f0f2f6");
            }
            other => panic!("expected card background, got {:?}", other),
        }
    }

    #[test]
    fn image_command_carries_url_and_fit() {
        let config = CardConfig {
            product_name: "Art Print".to_string(),
            product_image: Some("https://example.com/a.png".to_string()),
            picture_object_fit: crate::ObjectFit::Contain,
            ..Default::default()
        };
        let tree = CardTree::build(&config, Viewport::default());
        let commands = build_paint_list(&tree);
        let image = commands
            .iter()
            .find(|c| matches!(c, PaintCommand::Image { .. }))
            .expect("image command");
        match image {
            PaintCommand::Image { url, fit, .. } => {
                assert_eq!(url, "https://example.com/a.png");
                assert_eq!(*fit, crate::ObjectFit::Contain);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn content_order_is_title_text_price_button() {
        let config = CardConfig {
            product_name: "Book".to_string(),
            description: Some(crate::Description::Text("A good read".to_string())),
            price: Some("€15".to_string()),
            button_text: Some("Buy".to_string()),
            ..Default::default()
        };
        let tree = CardTree::build(&config, Viewport::default());
        let commands = build_paint_list(&tree);
        let texts: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Book", "A good read", "€15", "Buy"]);
    }
}
