//! Customized example: per-region styles, a discrete button, and a click
//! callback, rendered at desktop and mobile widths

use cardrender::{
    CardConfig, Description, MobileBehavior, PicturePosition, PointerEvent, ProductCard, Viewport,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Cardrender - Customized Example\n");

    let mut config = CardConfig {
        product_name: "Vintage Camera".to_string(),
        description: Some(Description::Lines(vec![
            "Capture moments with this classic vintage camera.".to_string(),
            "Fully functional and restored by experts.".to_string(),
            "Includes leather strap and original manual.".to_string(),
        ])),
        price: Some("€450".to_string()),
        product_image: Some("https://example.com/camera.jpg".to_string()),
        button_text: Some("Add to Collection".to_string()),
        picture_position: PicturePosition::Right,
        picture_width_percent: 40.0,
        picture_aspect_ratio: "4/3".parse()?,
        enable_animation: true,
        mobile_breakpoint_behavior: MobileBehavior::StackTop,
        key: Some("advanced_camera".to_string()),
        ..Default::default()
    };
    config.styles.card.set("border-radius", "12px");
    config.styles.card.set("background-color", "#F4E0C2");
    config.styles.title.set("font-family", "'Bodoni', serif");
    config.styles.title.set("font-size", "2.5em");
    config.styles.title.set("color", "#141413");
    config.styles.text.set("font-family", "'Montserrat', sans-serif");
    config.styles.price.set("font-weight", "bold");

    let mut card = ProductCard::new(config)?;
    card.on_click(|| println!("  -> 'Add to Collection' clicked!"));

    let desktop = Viewport {
        width: 1280,
        height: 720,
    };
    let pass = card.render(desktop, None)?;
    println!(
        "Desktop: card {}x{}, image at {:?}",
        pass.tree.card.rect.width,
        pass.tree.card.rect.height,
        pass.tree.image.as_ref().map(|n| n.rect)
    );
    println!(
        "Merged title style: font-size={:?} color={:?}",
        pass.tree.title.style.get("font-size"),
        pass.tree.title.style.get("color")
    );

    // Click the button (only the button signals; the card itself does not).
    let button = pass.tree.button.as_ref().expect("button region").rect;
    let pass = card.render(
        desktop,
        Some(PointerEvent {
            x: button.x + 2,
            y: button.y + 2,
        }),
    )?;
    println!("Button clicked this pass: {}", pass.clicked);

    // Below the breakpoint the image restacks above the content.
    let mobile = Viewport {
        width: 360,
        height: 720,
    };
    let pass = card.render(mobile, None)?;
    println!(
        "Mobile: position {:?}, image at {:?}",
        pass.tree.card.style.get("flex-direction"),
        pass.tree.image.as_ref().map(|n| n.rect)
    );

    Ok(())
}
