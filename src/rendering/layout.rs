//! Layout resolution for the card's visual regions
//!
//! Resolves a deterministic set of region rectangles from a `CardConfig` and
//! a viewport: orientation from the picture position, the image box from the
//! aspect ratio, the content stack from estimated text metrics, and the
//! mobile breakpoint behavior for horizontal layouts. Text heights use the
//! same coarse character-width estimate throughout (8px per character per
//! scale unit), which keeps the layout exact and testable without a font
//! rasterizer.

use serde::{Deserialize, Serialize};

use crate::{AspectRatio, CardConfig, MobileBehavior, ObjectFit, PicturePosition, Viewport};

/// Viewport width below which mobile layout rules apply
pub const MOBILE_BREAKPOINT: u32 = 480;

/// Image width multiplier for the "shrink" mobile behavior
pub const SHRINK_FACTOR: f32 = 0.75;

/// Card width caps, per orientation
pub const MAX_WIDTH_HORIZONTAL: u32 = 500;
pub const MAX_WIDTH_VERTICAL: u32 = 320;

/// Inner padding of the content region
const CONTENT_PADDING: u32 = 20;

/// Inset around the image when picture paddings are enabled
const IMAGE_INSET: u32 = 12;

/// Image region height for a `native` ratio in vertical layouts
const DEFAULT_IMAGE_HEIGHT: u32 = 180;

// Coarse text metrics: 8px per character / per line, per scale unit
const CHAR_W: u32 = 8;
const LINE_H: u32 = 8;

const TITLE_SCALE: u32 = 2;
const TEXT_SCALE: u32 = 1;
const PRICE_SCALE: u32 = 2;

const TEXT_MARGIN_TOP: u32 = 8;
const TEXT_MARGIN_BOTTOM: u32 = 12;
const PRICE_MARGIN_TOP: u32 = 4;
const BUTTON_MARGIN_TOP: u32 = 12;
const BUTTON_HEIGHT: u32 = 36;
const BUTTON_PADDING_X: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point (card-local coordinates) falls inside this rect
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x + self.width as i32
            && py < self.y + self.height as i32
    }
}

/// Resolved region rectangles for one render pass, all in card-local
/// coordinates. Absent optional regions were omitted by the configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CardLayout {
    /// Picture position after mobile restacking
    pub position: PicturePosition,
    /// Image width percent after mobile shrinking
    pub image_width_percent: f32,
    pub card: Rect,
    pub image: Option<Rect>,
    pub title: Rect,
    pub text: Option<Rect>,
    pub price: Option<Rect>,
    pub button: Option<Rect>,
}

/// The picture position and image width percent effective for this pass.
///
/// Below the breakpoint, horizontal layouts restack or shrink according to
/// the configured mobile behavior; vertical layouts are unaffected.
pub fn effective_placement(config: &CardConfig, viewport: Viewport) -> (PicturePosition, f32) {
    let position = config.picture_position;
    let pct = config.picture_width_percent;
    if !position.is_horizontal() || viewport.width >= MOBILE_BREAKPOINT {
        return (position, pct);
    }
    match config.mobile_breakpoint_behavior {
        MobileBehavior::StackTop => (PicturePosition::Top, pct),
        MobileBehavior::StackBottom => (PicturePosition::Bottom, pct),
        MobileBehavior::Shrink => (position, pct * SHRINK_FACTOR),
        MobileBehavior::None => (position, pct),
    }
}

/// Greedy word-wrap line count at the coarse character metrics
fn wrapped_lines(text: &str, content_w: u32, scale: u32) -> u32 {
    let char_w = CHAR_W * scale;
    let chars_per_line = if content_w >= char_w {
        (content_w / char_w) as usize
    } else {
        1
    };
    let mut lines = 0u32;
    let mut cur = 0usize;
    for word in text.split_whitespace() {
        let add = if cur == 0 { word.len() } else { word.len() + 1 };
        if cur + add > chars_per_line && cur > 0 {
            lines += 1;
            cur = word.len();
        } else {
            cur += add;
        }
    }
    if cur > 0 || lines == 0 {
        lines += 1;
    }
    lines
}

fn block_height(lines: u32, scale: u32) -> u32 {
    lines * LINE_H * scale
}

/// Measured heights of the content stack at a given inner width
struct ContentMeasure {
    title_h: u32,
    text_h: Option<u32>,
    price_h: Option<u32>,
    button: Option<(u32, u32)>, // width, height
    total: u32,
}

fn measure_content(config: &CardConfig, inner_w: u32) -> ContentMeasure {
    let title_h = block_height(wrapped_lines(&config.product_name, inner_w, TITLE_SCALE), TITLE_SCALE);
    let mut total = title_h;

    let text_h = config
        .description
        .as_ref()
        .filter(|d| !d.is_empty())
        .map(|d| {
            let lines: u32 = d
                .lines()
                .iter()
                .map(|line| wrapped_lines(line, inner_w, TEXT_SCALE))
                .sum();
            block_height(lines, TEXT_SCALE)
        });
    if let Some(h) = text_h {
        total += TEXT_MARGIN_TOP + h + TEXT_MARGIN_BOTTOM;
    }

    let price_h = config
        .price
        .as_ref()
        .map(|p| block_height(wrapped_lines(p, inner_w, PRICE_SCALE), PRICE_SCALE));
    if let Some(h) = price_h {
        total += PRICE_MARGIN_TOP + h;
    }

    let button = if config.has_button() {
        let label = config.button_text.as_deref().unwrap_or_default().trim();
        let w = (label.chars().count() as u32 * CHAR_W + 2 * BUTTON_PADDING_X).min(inner_w.max(1));
        total += BUTTON_MARGIN_TOP + BUTTON_HEIGHT;
        Some((w, BUTTON_HEIGHT))
    } else {
        None
    };

    ContentMeasure {
        title_h,
        text_h,
        price_h,
        button,
        total,
    }
}

/// Height of the image region at a given region width.
///
/// A fixed W/H ratio sizes the inner image box; picture paddings inset the
/// box by a fixed amount on every side. `native` has no intrinsic dimensions
/// available in a headless pass, so vertical layouts fall back to the default
/// region height and horizontal layouts stretch to the content height
/// (`None` here).
fn image_region_height(config: &CardConfig, region_w: u32, horizontal: bool) -> Option<u32> {
    let inset = if config.picture_paddings { IMAGE_INSET * 2 } else { 0 };
    let box_w = region_w.saturating_sub(inset).max(1);
    match config.picture_aspect_ratio {
        AspectRatio::Fixed { .. } => {
            let box_h = config
                .picture_aspect_ratio
                .height_for_width(box_w as f32)
                .unwrap_or(box_w as f32)
                .round() as u32;
            Some(box_h + inset)
        }
        AspectRatio::Native => {
            if horizontal {
                None
            } else {
                Some(DEFAULT_IMAGE_HEIGHT + inset)
            }
        }
    }
}

/// Resolve the full region layout for one render pass.
///
/// The algorithm follows the rendering contract: orientation from the
/// effective picture position, image omission when no URL is configured,
/// aspect-ratio sizing of the image box, and the ordered content stack
/// (title, description, price, button).
pub fn resolve_layout(config: &CardConfig, viewport: Viewport) -> CardLayout {
    let (position, pct) = effective_placement(config, viewport);
    let has_image = config.product_image.is_some();
    let horizontal = has_image && position.is_horizontal();

    let max_w = if horizontal {
        MAX_WIDTH_HORIZONTAL
    } else {
        MAX_WIDTH_VERTICAL
    };
    let card_w = viewport.width.min(max_w).max(1);

    // Without an image the content region owns the full card regardless of
    // the configured position and width percent.
    let (image_w, content_w) = if !has_image {
        (0, card_w)
    } else if horizontal {
        let w = ((card_w as f32 * pct / 100.0).round() as u32).clamp(1, card_w);
        (w, card_w.saturating_sub(w))
    } else {
        (card_w, card_w)
    };

    let inner_w = content_w.saturating_sub(2 * CONTENT_PADDING).max(1);
    let measure = measure_content(config, inner_w);
    let content_h = measure.total + 2 * CONTENT_PADDING;

    // Region heights and vertical extents
    let image_h = if has_image {
        image_region_height(config, image_w, horizontal).unwrap_or(content_h)
    } else {
        0
    };

    let card_h = if !has_image {
        content_h
    } else if horizontal {
        content_h.max(image_h)
    } else {
        content_h + image_h
    };

    // Region origins
    let (image_origin, content_origin) = match (has_image, position) {
        (false, _) => (None, (0i32, 0i32)),
        (true, PicturePosition::Left) => (Some((0, 0)), (image_w as i32, 0)),
        (true, PicturePosition::Right) => (Some((content_w as i32, 0)), (0, 0)),
        (true, PicturePosition::Top) => (Some((0, 0)), (0, image_h as i32)),
        (true, PicturePosition::Bottom) => (Some((0, content_h as i32)), (0, 0)),
    };

    let image = image_origin.map(|(x, y)| Rect::new(x, y, image_w, image_h));

    // Content stack, top to bottom
    let (cx, cy) = content_origin;
    let mut y = cy + CONTENT_PADDING as i32;
    let x = cx + CONTENT_PADDING as i32;

    let title = Rect::new(x, y, inner_w, measure.title_h);
    y += measure.title_h as i32;

    let text = measure.text_h.map(|h| {
        y += TEXT_MARGIN_TOP as i32;
        let r = Rect::new(x, y, inner_w, h);
        y += (h + TEXT_MARGIN_BOTTOM) as i32;
        r
    });

    let price = measure.price_h.map(|h| {
        y += PRICE_MARGIN_TOP as i32;
        let r = Rect::new(x, y, inner_w, h);
        y += h as i32;
        r
    });

    let button = measure.button.map(|(w, h)| {
        y += BUTTON_MARGIN_TOP as i32;
        // horizontal cards left-align the button; vertical cards center it
        let bx = if horizontal {
            x
        } else {
            x + ((inner_w.saturating_sub(w)) / 2) as i32
        };
        Rect::new(bx, y, w, h)
    });

    CardLayout {
        position,
        image_width_percent: pct,
        card: Rect::new(0, 0, card_w, card_h),
        image,
        title,
        text,
        price,
        button,
    }
}

/// Placement of a source image inside a fixed box for a given object-fit.
///
/// Returns the draw rectangle of the scaled image, centered in `bounds`. For
/// `cover` the draw rect can exceed the box (the box crops the overflow); for
/// `contain` and `scale-down` it always fits inside.
pub fn resolve_object_fit(
    fit: ObjectFit,
    intrinsic_w: u32,
    intrinsic_h: u32,
    bounds: Rect,
) -> Rect {
    if intrinsic_w == 0 || intrinsic_h == 0 {
        return bounds;
    }
    let (bw, bh) = (bounds.width as f32, bounds.height as f32);
    let (iw, ih) = (intrinsic_w as f32, intrinsic_h as f32);

    let scale = match fit {
        ObjectFit::Fill => return bounds,
        ObjectFit::Cover => (bw / iw).max(bh / ih),
        ObjectFit::Contain => (bw / iw).min(bh / ih),
        ObjectFit::ScaleDown => (bw / iw).min(bh / ih).min(1.0),
    };

    let w = (iw * scale).round() as u32;
    let h = (ih * scale).round() as u32;
    let x = bounds.x + (bounds.width as i32 - w as i32) / 2;
    let y = bounds.y + (bounds.height as i32 - h as i32) / 2;
    Rect::new(x, y, w, h)
}
