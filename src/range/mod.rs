//! Named numeric ranges driven by scroll progress.
//!
//! A [`RangeSpec`] binds one presentation variable to a `min..max` range with
//! a rest value. [`OriginMode`] selects the reference point progress
//! interpolates from.

mod origin;
mod spec;

pub use origin::{map_value, OriginError, OriginMode};
pub use spec::{parse_specs, RangeSpec, SpecError};
