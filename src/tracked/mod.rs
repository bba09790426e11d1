//! Per-element scroll state.
//!
//! A [`TrackedElement`] owns the parsed range specs of one element, its
//! interval and origin, and the progress and flags of the previous update.
//! Each [`TrackedElement::update`] recomputes everything from the current
//! geometry and reports the values to apply and the transitions to dispatch.

mod flags;

pub use flags::{transitions, BoundaryFlags, ScrollEvent, ScrollEventKind};

use crate::config::ScrollConfig;
use crate::progress::Geometry;
use crate::range::{map_value, OriginMode, RangeSpec};

/// Start and end lines of the tracked interval, as fractions of the viewport height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

/// Value computed for one range spec
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValue<'a> {
    pub name: &'a str,
    pub value: f32,
}

/// Everything an update produced for one element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementUpdate<'a> {
    /// Progress used for this update
    pub t: f32,
    /// Current boundary flags (levels)
    pub flags: BoundaryFlags,
    /// One value per spec, in declaration order
    pub values: Vec<PropertyValue<'a>>,
    /// Transitions since the previous update (edges), in dispatch order
    pub events: Vec<ScrollEvent>,
}

pub struct TrackedElement<H> {
    handle: H,
    specs: Vec<RangeSpec>,
    interval: Interval,
    origin: OriginMode,
    t: f32,
    flags: BoundaryFlags,
}

impl<H> TrackedElement<H> {
    /// Start tracking an element at progress 0. No transition is reported for
    /// the initial state.
    pub fn new(handle: H, specs: Vec<RangeSpec>, interval: Interval, origin: OriginMode) -> Self {
        Self {
            handle,
            specs,
            interval,
            origin,
            t: 0.0,
            flags: BoundaryFlags::empty(),
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn specs(&self) -> &[RangeSpec] {
        &self.specs
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn origin(&self) -> OriginMode {
        self.origin
    }

    /// Progress computed by the last update
    pub fn progress(&self) -> f32 {
        self.t
    }

    pub fn flags(&self) -> BoundaryFlags {
        self.flags
    }

    /// Recompute progress from fresh geometry and apply it.
    pub fn update(&mut self, geometry: Geometry, config: &ScrollConfig) -> ElementUpdate<'_> {
        let t = geometry.progress(self.interval.start, self.interval.end);
        self.apply_progress(t, config)
    }

    /// Apply an already computed progress value.
    ///
    /// Flags and values are derived from `t` alone; only the events depend on
    /// the previous update.
    pub fn apply_progress(&mut self, t: f32, config: &ScrollConfig) -> ElementUpdate<'_> {
        let t = if t.is_nan() {
            0.0
        } else if config.clamp {
            t.clamp(0.0, 1.0)
        } else {
            t
        };

        let flags = BoundaryFlags::from_progress(t, config.effective_threshold());
        let events = transitions(self.flags, flags, t);
        self.t = t;
        self.flags = flags;

        let hold_init = config.init_until_start && !flags.is_started();
        let values = self
            .specs
            .iter()
            .map(|spec| PropertyValue {
                name: spec.name(),
                value: if hold_init {
                    spec.init()
                } else {
                    map_value(t, spec, self.origin)
                },
            })
            .collect();

        ElementUpdate {
            t,
            flags,
            values,
            events,
        }
    }
}
