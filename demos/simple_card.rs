//! Minimal example: render a simple card and inspect the pass

use cardrender::{CardConfig, PicturePosition, PointerEvent, ProductCard, Viewport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Cardrender - Minimal Example\n");

    let config = CardConfig {
        product_name: "Elegant Watch".to_string(),
        description: Some(cardrender::Description::Text(
            "A timeless piece for every occasion.".to_string(),
        )),
        price: Some("€299.99".to_string()),
        product_image: Some("https://example.com/watch.jpg".to_string()),
        picture_position: PicturePosition::Right,
        picture_aspect_ratio: "16/9".parse()?,
        key: Some("basic_card".to_string()),
        ..Default::default()
    };

    let mut card = ProductCard::new(config)?;

    let pass = card.render(Viewport::default(), None)?;
    let snap = card.render_text_snapshot()?;
    println!(
        "Snapshot:\n  title: {}\n  text: {}\n  price: {}\n",
        snap.title,
        snap.text,
        snap.price.as_deref().unwrap_or("-")
    );
    println!(
        "Card is {}x{}; image on the right: {:?}",
        pass.tree.card.rect.width,
        pass.tree.card.rect.height,
        pass.tree.image.as_ref().map(|n| n.rect)
    );

    // No button was configured, so the whole card is the click target.
    let pass = card.render(Viewport::default(), Some(PointerEvent { x: 10, y: 10 }))?;
    println!("Clicked this pass: {}", pass.clicked);

    Ok(())
}
