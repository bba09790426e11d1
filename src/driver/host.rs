//! The seam between the tracker and the document it runs in.

use crate::progress::Geometry;
use crate::tracked::ScrollEvent;

/// Vertical extent of an element relative to the top of the layout viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f32,
    pub bottom: f32,
}

impl ElementBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// The visual viewport (pinch-zoom / on-screen keyboard aware) inside the layout viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualViewport {
    pub height: f32,
    /// Offset of the visual viewport from the top of the layout viewport
    pub offset_top: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub visual: Option<VisualViewport>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            visual: None,
        }
    }

    pub fn with_visual(mut self, height: f32, offset_top: f32) -> Self {
        self.visual = Some(VisualViewport { height, offset_top });
        self
    }

    /// Height the interval lines are measured against
    pub fn effective_height(&self, use_visual: bool) -> f32 {
        match self.visual {
            Some(visual) if use_visual => visual.height,
            _ => self.height,
        }
    }

    /// Geometry of an element measured against this viewport
    pub fn geometry(&self, bounds: ElementBounds, use_visual: bool) -> Geometry {
        match self.visual {
            Some(visual) if use_visual => Geometry::new(
                bounds.top - visual.offset_top,
                bounds.bottom - visual.offset_top,
                visual.height,
            ),
            _ => Geometry::new(bounds.top, bounds.bottom, self.height),
        }
    }
}

/// Everything the driver needs from the surrounding document.
///
/// Implementations discover elements, read their attributes and geometry, and
/// write the computed outputs back. None of these calls may fail loudly: a
/// missing element is reported as `None` and simply skipped.
pub trait ScrollHost {
    type Handle: Clone + PartialEq;

    /// Elements currently matching `selector`, in document order
    fn query(&mut self, selector: &str) -> Vec<Self::Handle>;

    fn attribute(&self, element: &Self::Handle, name: &str) -> Option<String>;

    /// Current bounds, or `None` if the element is no longer laid out
    fn bounds(&self, element: &Self::Handle) -> Option<ElementBounds>;

    fn viewport(&self) -> Viewport;

    /// Write a numeric presentation variable
    fn set_property(&mut self, element: &Self::Handle, name: &str, value: f32);

    fn set_class(&mut self, element: &Self::Handle, class: &str, enabled: bool);

    /// Deliver a transition notification
    fn dispatch(&mut self, element: &Self::Handle, event: ScrollEvent);

    /// Drop any per-element binding the host keeps (observers, listeners)
    fn release(&mut self, _element: &Self::Handle) {}
}
