//! The card renderer: one-shot evaluate-and-report render passes
//!
//! `ProductCard` owns no render loop and no cross-pass state beyond the font
//! cache. The host calls [`ProductCard::render`] once per pass, handing in
//! the pointer activation for that pass (if any); the pass reports whether a
//! click was signaled. Persisting anything across passes is the host's job.

use std::sync::Arc;

use crate::font::{FontCache, FontSource};
use crate::rendering::paint::build_paint_list;
use crate::rendering::{CardTree, RenderPass};
use crate::{CardConfig, CardSnapshot, Error, PointerEvent, Result, Viewport};

type OnClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A single card instance
pub struct ProductCard {
    config: CardConfig,
    fonts: FontCache,
    on_click: Option<OnClickHandler>,
}

impl ProductCard {
    /// Create a card, validating the configuration eagerly. Missing product
    /// name or an out-of-range image width percent are caller contract
    /// violations and are rejected here rather than at render time.
    pub fn new(config: CardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fonts: FontCache::new(),
            on_click: None,
        })
    }

    /// Create a card with a custom font fetch seam
    pub fn with_font_source(config: CardConfig, source: Box<dyn FontSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fonts: FontCache::with_source(source),
            on_click: None,
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// The host-facing identity token, if one was configured
    pub fn key(&self) -> Option<&str> {
        self.config.key.as_deref()
    }

    /// Replace the configuration; validated like `new`
    pub fn set_config(&mut self, config: CardConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Register a callback invoked synchronously when a click is signaled,
    /// before the pass reports `clicked = true`.
    pub fn on_click<F>(&mut self, cb: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(cb));
    }

    /// Remove a previously registered click callback if any
    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    /// Loaded font state (inspection/tests)
    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    /// Run one render pass.
    ///
    /// Resolves the visual tree for this configuration and viewport, flattens
    /// it to paint commands, and hit-tests the pointer event the host
    /// delivered for this pass. The optional font stylesheet is ensured
    /// first, best-effort: a failed fetch falls back to default fonts and
    /// never fails the pass.
    pub fn render(&mut self, viewport: Viewport, pointer: Option<PointerEvent>) -> Result<RenderPass> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(Error::RenderError(format!(
                "viewport must be non-empty, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        if let Some(url) = self.config.font_url.clone() {
            self.fonts.ensure(&url);
        }

        let tree = CardTree::build(&self.config, viewport);
        let commands = build_paint_list(&tree);

        let clicked = pointer
            .map(|p| tree.hit_target(p).is_some())
            .unwrap_or(false);
        if clicked {
            if let Some(cb) = &self.on_click {
                cb();
            }
        }

        log::debug!(
            "render pass: key={:?} viewport={}x{} clicked={}",
            self.config.key,
            viewport.width,
            viewport.height,
            clicked
        );

        Ok(RenderPass {
            tree,
            commands,
            clicked,
        })
    }

    /// A flat textual snapshot of the content region, for textual tests and
    /// quick inspection
    pub fn render_text_snapshot(&self) -> Result<CardSnapshot> {
        Ok(CardSnapshot {
            title: self.config.product_name.clone(),
            text: self
                .config
                .description
                .as_ref()
                .map(|d| d.lines().join("\n"))
                .unwrap_or_default(),
            price: self.config.price.clone(),
            button: if self.config.has_button() {
                self.config.button_text.as_ref().map(|t| t.trim().to_string())
            } else {
                None
            },
        })
    }
}
