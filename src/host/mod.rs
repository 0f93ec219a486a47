//! Render targets and the controller that keeps their overlays current
//!
//! The document is reached only through [`Host`] and [`RenderTarget`], so the
//! whole lifecycle runs against any tree that can report attributes and a
//! layout box: a browser DOM binding, the in-memory [`memory::MemoryDocument`],
//! or the HTML prerender in [`html`].

pub mod controller;
pub mod html;
pub mod memory;

use std::fmt;

use thiserror::Error;

use crate::geometry::ElementBounds;
use crate::overlay::Overlay;
use crate::DescriptorError;

pub use controller::{clear, render_pass, update_target, RenderReport, SlurveController};

/// Handle of a target inside its host, stable for the host's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub usize);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capabilities the controller needs from one element
pub trait RenderTarget {
    /// Current value of an attribute
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current layout box; may trigger a layout pass in a live document
    fn layout_box(&self) -> ElementBounds;

    /// Insert an overlay ahead of all existing children
    fn insert_overlay(&mut self, overlay: Overlay);

    /// Remove the first overlay tagged with `class`; false when none exists
    fn remove_overlay(&mut self, class: &str) -> bool;
}

/// A document holding render targets
pub trait Host {
    type Target: RenderTarget;

    /// Every element carrying `attribute`, in document order
    fn eligible_targets(&self, attribute: &str) -> Vec<TargetId>;

    fn target_mut(&mut self, id: TargetId) -> Option<&mut Self::Target>;
}

/// Host notifications that trigger a re-render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The page finished loading; eligible targets are queried again
    Load,
    /// The viewport changed size; cached targets are re-rendered
    Resize,
}

/// Why a target got no overlay during a pass
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("no descriptor attribute")]
    NotEligible,

    #[error("target is no longer in the document")]
    Detached,

    #[error("no layout box known for this element")]
    MissingLayout,

    #[error("{0}")]
    Descriptor(#[from] DescriptorError),
}
