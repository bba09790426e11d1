//! Global configuration for scroll tracking.

use crate::range::OriginMode;

/// Default hysteresis margin around progress 0 and 1
pub const DEFAULT_THRESHOLD: f32 = 0.0005;

/// Default minimum height change (in px) for a resize to trigger a refresh
pub const DEFAULT_RESIZE_MIN_DELTA: f32 = 80.0;

/// Attribute names read from each tracked element
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeNames {
    /// Range spec declaration (`--x=0..1;...`)
    pub spec: String,
    /// Start line as a fraction of the viewport height
    pub start: String,
    /// End line as a fraction of the viewport height
    pub end: String,
    /// Per-element origin override
    pub origin: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            spec: "data-scroll".to_string(),
            start: "data-scroll-start".to_string(),
            end: "data-scroll-end".to_string(),
            origin: "data-scroll-origin".to_string(),
        }
    }
}

/// Class names toggled to mirror the boundary flags
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNames {
    pub started: String,
    pub active: String,
    pub ended: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            started: "is-scroll-started".to_string(),
            active: "is-scroll-active".to_string(),
            ended: "is-scroll-ended".to_string(),
        }
    }
}

/// Configuration for the scroll tracker
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Selector used to discover tracked elements
    pub selector: String,
    pub attributes: AttributeNames,
    pub classes: ClassNames,
    /// Clamp progress into [0, 1] before mapping
    pub clamp: bool,
    /// Hysteresis margin for the started/ended flags, in [0, 0.5)
    pub threshold: f32,
    /// Ignore resizes that only change the height by a small amount
    pub smart_resize: bool,
    /// Minimum height change (px) for a resize to count when `smart_resize` is on
    pub resize_min_delta: f32,
    /// Measure against the visual viewport when the host reports one
    pub use_visual_viewport: bool,
    /// Hold every variable at its rest value until the element has started
    pub init_until_start: bool,
    /// Origin used by elements without an override
    pub origin: OriginMode,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            selector: "[data-scroll]".to_string(),
            attributes: AttributeNames::default(),
            classes: ClassNames::default(),
            clamp: true,
            threshold: DEFAULT_THRESHOLD,
            smart_resize: true,
            resize_min_delta: DEFAULT_RESIZE_MIN_DELTA,
            use_visual_viewport: true,
            init_until_start: true,
            origin: OriginMode::Init,
        }
    }
}

impl ScrollConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> ScrollConfigBuilder {
        ScrollConfigBuilder::new()
    }

    /// Threshold usable by the flag computation.
    ///
    /// Non-finite values fall back to the default; anything else is kept in
    /// `[0, 0.5)` so that started and ended can never both flip on the same
    /// side of the interval.
    pub fn effective_threshold(&self) -> f32 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 0.499)
        } else {
            DEFAULT_THRESHOLD
        }
    }
}

/// Builder for customizing the scroll tracker
#[derive(Default)]
pub struct ScrollConfigBuilder {
    config: ScrollConfig,
}

impl ScrollConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector used to discover elements
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.config.selector = selector.into();
        self
    }

    /// Set the attribute holding the range spec declaration
    pub fn spec_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.attributes.spec = name.into();
        self
    }

    /// Set the attribute holding the start line
    pub fn start_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.attributes.start = name.into();
        self
    }

    /// Set the attribute holding the end line
    pub fn end_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.attributes.end = name.into();
        self
    }

    /// Set the attribute holding the origin override
    pub fn origin_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.attributes.origin = name.into();
        self
    }

    /// Set the class names for the started, active and ended flags
    pub fn classes(
        mut self,
        started: impl Into<String>,
        active: impl Into<String>,
        ended: impl Into<String>,
    ) -> Self {
        self.config.classes = ClassNames {
            started: started.into(),
            active: active.into(),
            ended: ended.into(),
        };
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.config.clamp = clamp;
        self
    }

    /// Set the hysteresis margin for the boundary flags
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Enable smart resize with the given minimum height delta in px
    pub fn smart_resize(mut self, min_delta: f32) -> Self {
        self.config.smart_resize = true;
        self.config.resize_min_delta = min_delta;
        self
    }

    /// Refresh on every resize
    pub fn always_refresh_on_resize(mut self) -> Self {
        self.config.smart_resize = false;
        self
    }

    pub fn use_visual_viewport(mut self, enabled: bool) -> Self {
        self.config.use_visual_viewport = enabled;
        self
    }

    pub fn init_until_start(mut self, enabled: bool) -> Self {
        self.config.init_until_start = enabled;
        self
    }

    /// Set the default origin mode
    pub fn origin(mut self, origin: OriginMode) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn build(self) -> ScrollConfig {
        self.config
    }
}
