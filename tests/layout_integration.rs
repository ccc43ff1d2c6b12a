//! Layout-facing integration tests: aspect-ratio boxes, object-fit
//! resolution, and mobile breakpoint behavior through the public API.

use cardrender::rendering::{resolve_object_fit, Rect, MOBILE_BREAKPOINT};
use cardrender::{
    CardConfig, MobileBehavior, ObjectFit, PicturePosition, ProductCard, Viewport,
};

fn image_config(position: PicturePosition) -> CardConfig {
    CardConfig {
        product_name: "Art Print".to_string(),
        product_image: Some("https://example.com/print.png".to_string()),
        picture_position: position,
        ..Default::default()
    }
}

fn desktop() -> Viewport {
    Viewport {
        width: 1280,
        height: 720,
    }
}

fn mobile() -> Viewport {
    Viewport {
        width: MOBILE_BREAKPOINT - 120,
        height: 720,
    }
}

#[test]
fn fixed_ratio_box_holds_for_cover() {
    let mut config = image_config(PicturePosition::Left);
    config.picture_aspect_ratio = "4/3".parse().unwrap();
    config.picture_object_fit = ObjectFit::Cover;
    config.picture_width_percent = 40.0;
    let mut card = ProductCard::new(config).unwrap();
    let pass = card.render(desktop(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    assert_eq!(image.width, 200);
    assert_eq!(image.height, 150);

    // cover fills the box whatever the source dimensions are
    for (iw, ih) in [(100, 100), (640, 480), (300, 900)] {
        let draw = resolve_object_fit(ObjectFit::Cover, iw, ih, image);
        assert!(draw.width >= image.width);
        assert!(draw.height >= image.height);
    }
}

#[test]
fn stack_top_relocates_image_above_content() {
    let mut config = image_config(PicturePosition::Right);
    config.mobile_breakpoint_behavior = MobileBehavior::StackTop;

    let mut card = ProductCard::new(config.clone()).unwrap();
    let pass = card.render(mobile(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    let title = pass.tree.title.rect;
    assert_eq!(image.y, 0);
    assert!(title.y >= image.y + image.height as i32);

    // above the breakpoint the horizontal arrangement is untouched
    let pass = card.render(desktop(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    let title = pass.tree.title.rect;
    assert!(title.x < image.x);
}

#[test]
fn stack_bottom_relocates_image_below_content() {
    let mut config = image_config(PicturePosition::Left);
    config.mobile_breakpoint_behavior = MobileBehavior::StackBottom;
    let mut card = ProductCard::new(config).unwrap();
    let pass = card.render(mobile(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    let title = pass.tree.title.rect;
    assert!(image.y >= title.y + title.height as i32);
}

#[test]
fn none_keeps_horizontal_arrangement_below_breakpoint() {
    let mut config = image_config(PicturePosition::Left);
    config.mobile_breakpoint_behavior = MobileBehavior::None;
    let mut card = ProductCard::new(config).unwrap();
    let pass = card.render(mobile(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    let title = pass.tree.title.rect;
    assert_eq!(image.x, 0);
    assert!(title.x >= image.width as i32);
}

#[test]
fn shrink_narrows_the_image_region() {
    let mut config = image_config(PicturePosition::Left);
    config.picture_width_percent = 40.0;
    config.mobile_breakpoint_behavior = MobileBehavior::Shrink;
    let mut card = ProductCard::new(config.clone()).unwrap();

    let shrunk = card.render(mobile(), None).unwrap();
    config.mobile_breakpoint_behavior = MobileBehavior::None;
    let mut unshrunk = ProductCard::new(config).unwrap();
    let full = unshrunk.render(mobile(), None).unwrap();

    let shrunk_w = shrunk.tree.image.as_ref().unwrap().rect.width;
    let full_w = full.tree.image.as_ref().unwrap().rect.width;
    assert!(shrunk_w < full_w);
    // still a horizontal layout
    assert!(shrunk.tree.title.rect.x >= shrunk_w as i32);
}

#[test]
fn vertical_layouts_ignore_mobile_behavior() {
    let mut config = image_config(PicturePosition::Top);
    config.mobile_breakpoint_behavior = MobileBehavior::StackBottom;
    let mut card = ProductCard::new(config).unwrap();
    let pass = card.render(mobile(), None).unwrap();
    let image = pass.tree.image.as_ref().unwrap().rect;
    assert_eq!(image.y, 0);
    assert!(pass.tree.title.rect.y >= image.height as i32);
}

#[test]
fn missing_image_lets_content_fill_the_card() {
    let config = CardConfig {
        product_name: "Product Name Only".to_string(),
        picture_position: PicturePosition::Left,
        picture_width_percent: 40.0,
        ..Default::default()
    };
    let mut card = ProductCard::new(config).unwrap();
    let pass = card.render(desktop(), None).unwrap();
    assert!(pass.tree.image.is_none());
    // the content region spans the full card width (20px padding each side)
    let title = pass.tree.title.rect;
    let card_rect = pass.tree.card.rect;
    assert_eq!(title.x, 20);
    assert_eq!(title.width, card_rect.width - 40);
}

#[test]
fn contain_letterboxes_inside_the_box() {
    let bounds = Rect::new(0, 0, 320, 180);
    let draw = resolve_object_fit(ObjectFit::Contain, 100, 100, bounds);
    assert_eq!(draw.height, 180);
    assert_eq!(draw.width, 180);
    assert!(draw.x > bounds.x);
}
