#![cfg(feature = "remote-fonts")]

//! Remote font loading is best-effort: a reachable stylesheet is fetched
//! once and its families recorded; an unreachable one degrades to default
//! fonts without failing the render pass.

use cardrender::{CardConfig, ProductCard, Viewport};
use tiny_http::Server;

#[test]
fn reachable_stylesheet_is_fetched_once() {
    let server = Server::http("0.0.0.0:0").unwrap();
    let addr = server.server_addr();

    std::thread::spawn(move || {
        // answer at most two requests; the second would indicate a re-fetch
        for _ in 0..2 {
            if let Ok(request) = server.recv() {
                let css = "@font-face { font-family: 'Space Grotesk'; src: url(sg.woff2); }";
                let _ = request.respond(tiny_http::Response::from_string(css));
            }
        }
    });

    let url = format!("http://{}", addr);
    let config = CardConfig {
        product_name: "Typeset Gadget".to_string(),
        font_url: Some(url.clone()),
        ..Default::default()
    };
    let mut card = ProductCard::new(config).expect("valid config");

    let pass = card.render(Viewport::default(), None).expect("render pass");
    assert!(!pass.clicked);
    assert!(card.fonts().is_loaded(&url));
    assert_eq!(card.fonts().families(), &["Space Grotesk".to_string()]);

    // a second pass reuses the cache
    card.render(Viewport::default(), None).expect("render pass");
    assert!(card.fonts().is_loaded(&url));
}

#[test]
fn unreachable_stylesheet_does_not_block_rendering() {
    let config = CardConfig {
        product_name: "Offline Gadget".to_string(),
        // nothing listens here; the fetch fails fast
        font_url: Some("http://127.0.0.1:9/fonts.css".to_string()),
        ..Default::default()
    };
    let mut card = ProductCard::new(config).expect("valid config");

    let pass = card.render(Viewport::default(), None).expect("render pass");
    assert_eq!(pass.tree.title.rect.x, 20);
    assert!(!card.fonts().is_loaded("http://127.0.0.1:9/fonts.css"));
    assert!(card.fonts().families().is_empty());
}
