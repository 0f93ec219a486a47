//! Prerendering overlays into static HTML
//!
//! HTML carries no layout, so element boxes come from a [`LayoutSheet`] keyed
//! by element `id`:
//!
//! ```toml
//! [boxes.hero]
//! width = 640
//! height = 320
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use lol_html::html_content::ContentType;
use lol_html::errors::SelectorError;
use lol_html::{element, rewrite_str, RewriteStrSettings, Selector};
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::ElementBounds;
use crate::overlay::{ConfigError, Overlay, OverlayConfig};

use super::SkipReason;

/// Layout box of one element as written in a layout sheet
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutEntry {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl From<LayoutEntry> for ElementBounds {
    fn from(e: LayoutEntry) -> Self {
        ElementBounds::new(e.top, e.left, e.width, e.height)
    }
}

/// Element layout boxes keyed by element id
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSheet {
    #[serde(default)]
    pub boxes: BTreeMap<String, LayoutEntry>,
}

impl LayoutSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a layout sheet from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a layout sheet from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_box(mut self, id: impl Into<String>, bounds: ElementBounds) -> Self {
        self.boxes.insert(
            id.into(),
            LayoutEntry {
                top: bounds.top,
                left: bounds.left,
                width: bounds.width,
                height: bounds.height,
            },
        );
        self
    }

    pub fn get(&self, id: &str) -> Option<ElementBounds> {
        self.boxes.get(id).copied().map(ElementBounds::from)
    }
}

/// Errors that abort a prerender
#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid selector '{selector}': {source}")]
    Selector {
        selector: String,
        source: SelectorError,
    },

    #[error("HTML rewriting failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

/// Rewritten HTML plus what happened to each eligible element
#[derive(Debug, Clone, PartialEq)]
pub struct PrerenderOutput {
    pub html: String,
    /// Ids of elements that received an overlay
    pub rendered: Vec<String>,
    /// Element id (or `<tag>` when it has none) and the reason it was skipped
    pub skipped: Vec<(String, SkipReason)>,
}

/// Inject an overlay as the first child of every eligible element.
///
/// Overlays left by an earlier prerender are removed first, so running this
/// on its own output yields the same document.
pub fn prerender_html(
    html: &str,
    layout: &LayoutSheet,
    config: &OverlayConfig,
) -> Result<PrerenderOutput, PrerenderError> {
    config.validate()?;

    let eligible = format!("[{}]", config.descriptor_attribute);
    let stale = format!("[{}] > svg.{}", config.descriptor_attribute, config.overlay_class);
    // element! unwraps its selector parse
    check_selector(&eligible)?;
    check_selector(&stale)?;

    let rendered = RefCell::new(Vec::new());
    let skipped = RefCell::new(Vec::new());

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(eligible, |el| {
                    let id = el.get_attribute("id");
                    let name = id.clone().unwrap_or_else(|| format!("<{}>", el.tag_name()));
                    let descriptor = el.get_attribute(&config.descriptor_attribute);
                    let classes = el.get_attribute(&config.classes_attribute);

                    match overlay_for(id.as_deref(), descriptor, classes.as_deref(), layout, config)
                    {
                        Ok(overlay) => {
                            el.prepend(&overlay.to_markup(), ContentType::Html);
                            debug!("prerendered overlay for {}", name);
                            rendered.borrow_mut().push(name);
                        }
                        Err(reason) => {
                            warn!("skipping slurve element {}: {}", name, reason);
                            skipped.borrow_mut().push((name, reason));
                        }
                    }
                    Ok(())
                }),
                element!(stale, |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok(PrerenderOutput {
        html: output,
        rendered: rendered.into_inner(),
        skipped: skipped.into_inner(),
    })
}

fn check_selector(selector: &str) -> Result<(), PrerenderError> {
    selector
        .parse::<Selector>()
        .map(drop)
        .map_err(|source| PrerenderError::Selector {
            selector: selector.to_string(),
            source,
        })
}

fn overlay_for(
    id: Option<&str>,
    descriptor: Option<String>,
    classes: Option<&str>,
    layout: &LayoutSheet,
    config: &OverlayConfig,
) -> Result<Overlay, SkipReason> {
    let descriptor = descriptor.ok_or(SkipReason::NotEligible)?;
    let bounds = id
        .and_then(|id| layout.get(id))
        .ok_or(SkipReason::MissingLayout)?;
    Ok(Overlay::build(&descriptor, classes, bounds, config)?)
}
