//! Overlay lifecycle: clear, render, and full re-render passes

use log::{debug, warn};

use crate::overlay::{Overlay, OverlayConfig};

use super::{Host, HostEvent, RenderTarget, SkipReason, TargetId};

/// Outcome of one pass over a set of targets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub rendered: Vec<TargetId>,
    pub skipped: Vec<(TargetId, SkipReason)>,
}

impl RenderReport {
    /// Number of targets that ended the pass with an overlay
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Remove the target's overlay if it has one
pub fn clear<T: RenderTarget + ?Sized>(target: &mut T, config: &OverlayConfig) -> bool {
    target.remove_overlay(&config.overlay_class)
}

/// Build an overlay from the target's current attributes and layout and
/// insert it as the first child.
pub fn update_target<T: RenderTarget + ?Sized>(
    target: &mut T,
    config: &OverlayConfig,
) -> Result<(), SkipReason> {
    let descriptor = target
        .attribute(&config.descriptor_attribute)
        .ok_or(SkipReason::NotEligible)?;
    let classes = target.attribute(&config.classes_attribute);

    let overlay = Overlay::build(&descriptor, classes.as_deref(), target.layout_box(), config)?;
    target.insert_overlay(overlay);
    Ok(())
}

/// One render pass: clear, then recreate
pub fn render_pass<T: RenderTarget + ?Sized>(
    target: &mut T,
    config: &OverlayConfig,
) -> Result<(), SkipReason> {
    clear(target, config);
    update_target(target, config)
}

/// Keeps one overlay on every eligible target of a host.
///
/// The controller caches the eligible set from the last [`refresh`]. Load
/// events query the host again; resize events re-render the cached set.
/// Events are ignored until [`start`] and after [`stop`].
///
/// [`refresh`]: SlurveController::refresh
/// [`start`]: SlurveController::start
/// [`stop`]: SlurveController::stop
#[derive(Debug, Clone, Default)]
pub struct SlurveController {
    config: OverlayConfig,
    targets: Vec<TargetId>,
    listening: bool,
}

impl SlurveController {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
            listening: false,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Targets found by the last refresh
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Start listening for host events and render everything once
    pub fn start<H: Host>(&mut self, host: &mut H) -> RenderReport {
        self.listening = true;
        debug!("slurve controller started");
        self.refresh(host)
    }

    /// Stop reacting to host events; existing overlays stay in place
    pub fn stop(&mut self) {
        self.listening = false;
        debug!("slurve controller stopped");
    }

    /// Query eligible targets again and re-render all of them.
    ///
    /// Call this after changing descriptors or adding elements.
    pub fn refresh<H: Host>(&mut self, host: &mut H) -> RenderReport {
        self.targets = host.eligible_targets(&self.config.descriptor_attribute);
        self.render_all(host)
    }

    /// React to a host event; `None` while not listening
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: HostEvent) -> Option<RenderReport> {
        if !self.listening {
            return None;
        }
        debug!("handling {:?}", event);
        let report = match event {
            HostEvent::Load => self.refresh(host),
            HostEvent::Resize => self.render_all(host),
        };
        Some(report)
    }

    fn render_all<H: Host>(&self, host: &mut H) -> RenderReport {
        let mut report = RenderReport::default();

        for &id in &self.targets {
            let outcome = match host.target_mut(id) {
                Some(target) => render_pass(target, &self.config),
                None => Err(SkipReason::Detached),
            };
            match outcome {
                Ok(()) => report.rendered.push(id),
                Err(reason) => {
                    warn!("skipping slurve target {}: {}", id, reason);
                    report.skipped.push((id, reason));
                }
            }
        }

        debug!(
            "render pass: {} rendered, {} skipped",
            report.rendered.len(),
            report.skipped.len()
        );
        report
    }
}
