use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cardrender::{CardConfig, PointerEvent, ProductCard, Viewport};

/// Render a product-card configuration headlessly and print the result.
#[derive(Parser, Debug)]
#[command(name = "cardrender", version, about)]
struct Args {
    /// Path to a JSON CardConfig
    config: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Simulate a pointer activation at "X,Y" (card-local coordinates)
    #[arg(long)]
    click: Option<String>,

    /// Print the flattened paint command list as JSON instead of a snapshot
    #[arg(long)]
    paint: bool,
}

fn parse_click(raw: &str) -> anyhow::Result<PointerEvent> {
    let (x, y) = raw
        .split_once(',')
        .context("--click expects \"X,Y\"")?;
    Ok(PointerEvent {
        x: x.trim().parse().context("click X is not a number")?,
        y: y.trim().parse().context("click Y is not a number")?,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;
    let config: CardConfig = serde_json::from_str(&raw).context("invalid card config")?;

    let pointer = args.click.as_deref().map(parse_click).transpose()?;

    let mut card = ProductCard::new(config)?;
    let viewport = Viewport {
        width: args.width,
        height: args.height,
    };
    let pass = card.render(viewport, pointer)?;

    if args.paint {
        println!("{}", serde_json::to_string_pretty(&pass.commands)?);
    } else {
        let snap = card.render_text_snapshot()?;
        println!("Card: {}", snap.title);
        if !snap.text.is_empty() {
            println!("{}", snap.text);
        }
        if let Some(price) = &snap.price {
            println!("Price: {}", price);
        }
        if let Some(button) = &snap.button {
            println!("[ {} ]", button);
        }
        println!(
            "Layout: {}x{}",
            pass.tree.card.rect.width, pass.tree.card.rect.height
        );
    }
    println!("clicked: {}", pass.clicked);

    Ok(())
}
