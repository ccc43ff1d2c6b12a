//! Best-effort remote font stylesheet loading
//!
//! A card config may name a remote stylesheet URL so that font-family style
//! values resolve to real fonts. The fetch is strictly best-effort: it runs
//! at most once per URL, a failure is logged and rendering proceeds with
//! fallback fonts, and no ordering guarantee exists between font
//! availability and the first paint.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Seam for fetching a stylesheet body from a URL.
///
/// The default implementation is [`HttpFontSource`] (feature `remote-fonts`);
/// tests substitute stubs.
pub trait FontSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP stylesheet fetcher
#[cfg(feature = "remote-fonts")]
pub struct HttpFontSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote-fonts")]
impl HttpFontSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_millis(5000))
            .build()
            .map_err(|e| Error::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "remote-fonts")]
impl FontSource for HttpFontSource {
    fn fetch(&self, raw_url: &str) -> Result<String> {
        let parsed = url::Url::parse(raw_url).map_err(|e| Error::FontFetchError {
            url: raw_url.to_string(),
            reason: format!("invalid URL: {}", e),
        })?;
        let resp = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| Error::FontFetchError {
                url: raw_url.to_string(),
                reason: format!("request failed: {}", e),
            })?;
        if !resp.status().is_success() {
            return Err(Error::FontFetchError {
                url: raw_url.to_string(),
                reason: format!("HTTP status {}", resp.status()),
            });
        }
        resp.text().map_err(|e| Error::FontFetchError {
            url: raw_url.to_string(),
            reason: format!("failed to read body: {}", e),
        })
    }
}

/// Pull the declared font-family names out of a stylesheet body.
///
/// A plain string scan is enough here: we only need the names so that
/// subsequently-applied font-family style values can be checked against what
/// actually loaded, not a full CSS parse.
pub fn extract_families(css: &str) -> Vec<String> {
    let mut families = Vec::new();
    let mut rest = css;
    while let Some(pos) = rest.find("font-family") {
        rest = &rest[pos + "font-family".len()..];
        let Some(colon) = rest.find(':') else { break };
        rest = &rest[colon + 1..];
        let end = rest.find([';', '}']).unwrap_or(rest.len());
        let name = rest[..end].trim().trim_matches(['\'', '"']).to_string();
        if !name.is_empty() && !families.contains(&name) {
            families.push(name);
        }
        rest = &rest[end..];
    }
    families
}

/// One-fetch-per-URL stylesheet cache
///
/// `ensure` is called before each render pass; it fetches a URL at most once
/// and never fails the pass. Without the `remote-fonts` feature (or when the
/// HTTP client cannot be built) every fetch degrades to a logged no-op.
pub struct FontCache {
    source: Option<Box<dyn FontSource>>,
    /// url -> fetched stylesheet body, None when the fetch failed
    attempted: HashMap<String, Option<String>>,
    families: Vec<String>,
}

impl FontCache {
    pub fn new() -> Self {
        #[cfg(feature = "remote-fonts")]
        let source: Option<Box<dyn FontSource>> = match HttpFontSource::new() {
            Ok(s) => Some(Box::new(s)),
            Err(e) => {
                log::warn!("Font loading disabled: {}", e);
                None
            }
        };
        #[cfg(not(feature = "remote-fonts"))]
        let source: Option<Box<dyn FontSource>> = None;

        Self {
            source,
            attempted: HashMap::new(),
            families: Vec::new(),
        }
    }

    /// Replace the fetch seam (tests, host-provided transports)
    pub fn with_source(source: Box<dyn FontSource>) -> Self {
        Self {
            source: Some(source),
            attempted: HashMap::new(),
            families: Vec::new(),
        }
    }

    /// Fetch a stylesheet once; repeated calls for the same URL are no-ops.
    /// Failure falls back to default fonts and never raises.
    pub fn ensure(&mut self, url: &str) {
        if self.attempted.contains_key(url) {
            return;
        }
        let Some(source) = &self.source else {
            log::debug!("No font source configured; skipping {}", url);
            self.attempted.insert(url.to_string(), None);
            return;
        };
        match source.fetch(url) {
            Ok(css) => {
                for family in extract_families(&css) {
                    if !self.families.contains(&family) {
                        self.families.push(family);
                    }
                }
                self.attempted.insert(url.to_string(), Some(css));
            }
            Err(e) => {
                log::warn!("{}; falling back to default fonts", e);
                self.attempted.insert(url.to_string(), None);
            }
        }
    }

    /// Whether a stylesheet body was actually retrieved for this URL
    pub fn is_loaded(&self, url: &str) -> bool {
        matches!(self.attempted.get(url), Some(Some(_)))
    }

    /// Font family names declared by every loaded stylesheet
    pub fn families(&self) -> &[String] {
        &self.families
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new()
    }
}
