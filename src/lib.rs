//! Scroll-driven progress for tracked elements.
//!
//! Each tracked element gets a progress value in `[0, 1]` from its position
//! relative to the viewport. Progress is mapped through named numeric ranges
//! to presentation variables, and boundary flags (started / active / ended)
//! report transitions as `start`, `enter`, `leave` and `end` notifications.
//!
//! The pure parts live in [`progress`], [`range`] and [`tracked`]. The
//! [`driver`] module sweeps a collection of elements once per frame through a
//! [`driver::ScrollHost`] adapter supplied by the caller.

pub mod config;
pub mod driver;
pub mod progress;
pub mod range;
pub mod tracked;

pub mod prelude {
    pub use crate::config::{ScrollConfig, ScrollConfigBuilder};
    pub use crate::driver::{Driver, ElementBounds, ScrollHost, Viewport};
    pub use crate::progress::{compute_progress, Geometry};
    pub use crate::range::{map_value, parse_specs, OriginMode, RangeSpec};
    pub use crate::tracked::{
        BoundaryFlags, ElementUpdate, Interval, ScrollEvent, ScrollEventKind, TrackedElement,
    };
}
