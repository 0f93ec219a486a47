//! In-memory document for embedding without a DOM

use std::collections::BTreeMap;

use crate::geometry::ElementBounds;
use crate::overlay::Overlay;

use super::{Host, RenderTarget, TargetId};

/// A child node of a [`MemoryElement`]
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Overlay(Overlay),
    /// Opaque existing content (markup or text)
    Content(String),
}

impl Child {
    pub fn as_overlay(&self) -> Option<&Overlay> {
        match self {
            Child::Overlay(o) => Some(o),
            Child::Content(_) => None,
        }
    }
}

/// An element with attributes, a layout box and ordered children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    attributes: BTreeMap<String, String>,
    layout: ElementBounds,
    children: Vec<Child>,
    inserts: usize,
    removals: usize,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_layout(mut self, layout: ElementBounds) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.children.push(Child::Content(content.into()));
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Simulate a layout change
    pub fn set_layout(&mut self, layout: ElementBounds) {
        self.layout = layout;
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.children.iter().filter_map(Child::as_overlay)
    }

    pub fn overlay_count(&self, class: &str) -> usize {
        self.overlays().filter(|o| o.has_class(class)).count()
    }

    /// Overlays inserted over this element's lifetime
    pub fn insert_count(&self) -> usize {
        self.inserts
    }

    /// Overlays removed over this element's lifetime
    pub fn removal_count(&self) -> usize {
        self.removals
    }
}

impl RenderTarget for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn layout_box(&self) -> ElementBounds {
        self.layout
    }

    fn insert_overlay(&mut self, overlay: Overlay) {
        self.children.insert(0, Child::Overlay(overlay));
        self.inserts += 1;
    }

    fn remove_overlay(&mut self, class: &str) -> bool {
        let position = self
            .children
            .iter()
            .position(|c| c.as_overlay().is_some_and(|o| o.has_class(class)));
        match position {
            Some(i) => {
                self.children.remove(i);
                self.removals += 1;
                true
            }
            None => false,
        }
    }
}

/// A flat document of elements; removed elements leave their id unused
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<Option<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element in document order
    pub fn push(&mut self, element: MemoryElement) -> TargetId {
        self.elements.push(Some(element));
        TargetId(self.elements.len() - 1)
    }

    pub fn remove(&mut self, id: TargetId) -> Option<MemoryElement> {
        self.elements.get_mut(id.0).and_then(Option::take)
    }

    pub fn element(&self, id: TargetId) -> Option<&MemoryElement> {
        self.elements.get(id.0).and_then(Option::as_ref)
    }

    pub fn element_mut(&mut self, id: TargetId) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn elements(&self) -> impl Iterator<Item = (TargetId, &MemoryElement)> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (TargetId(i), e)))
    }

    /// Total overlays across all elements
    pub fn overlay_count(&self) -> usize {
        self.elements().map(|(_, e)| e.overlays().count()).sum()
    }
}

impl Host for MemoryDocument {
    type Target = MemoryElement;

    fn eligible_targets(&self, attribute: &str) -> Vec<TargetId> {
        self.elements()
            .filter(|(_, e)| e.has_attribute(attribute))
            .map(|(id, _)| id)
            .collect()
    }

    fn target_mut(&mut self, id: TargetId) -> Option<&mut MemoryElement> {
        self.element_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayConfig;

    fn overlay(class: &str) -> Overlay {
        Overlay::build(
            "0,0 0,0 0,0 0,0",
            None,
            ElementBounds::sized(1.0, 1.0),
            &OverlayConfig::default().with_overlay_class(class),
        )
        .expect("valid")
    }

    #[test]
    fn test_remove_overlay_only_matching_class() {
        let mut el = MemoryElement::new().with_content("text");
        el.insert_overlay(overlay("other"));
        assert!(!el.remove_overlay("slurve-svg"));
        el.insert_overlay(overlay("slurve-svg"));
        assert!(el.remove_overlay("slurve-svg"));
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.removal_count(), 1);
        assert_eq!(el.insert_count(), 2);
    }

    #[test]
    fn test_eligible_targets_in_document_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.push(MemoryElement::new().with_attribute("data-slurve", ""));
        doc.push(MemoryElement::new());
        let c = doc.push(MemoryElement::new().with_attribute("data-slurve", ""));
        assert_eq!(doc.eligible_targets("data-slurve"), vec![a, c]);

        doc.remove(a);
        assert_eq!(doc.eligible_targets("data-slurve"), vec![c]);
        assert!(doc.target_mut(a).is_none());
    }
}
