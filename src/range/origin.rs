use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::RangeSpec;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown origin mode {0:?} (expected init, min or center)")]
pub struct OriginError(pub String);

/// Reference point that scroll progress interpolates from.
///
/// # Example
/// ```
/// use scrollvars::range::{map_value, OriginMode, RangeSpec};
///
/// let spec = RangeSpec::new("--x", -10.0, 10.0).with_init(2.0);
///
/// // Start at the rest value and move towards max
/// assert_eq!(map_value(0.0, &spec, OriginMode::Init), 2.0);
/// // Classic min -> max
/// assert_eq!(map_value(0.0, &spec, OriginMode::Min), -10.0);
/// // Swing around the midpoint
/// assert_eq!(map_value(0.5, &spec, OriginMode::Center), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginMode {
    /// Interpolate from the spec's rest value towards `max`
    #[default]
    Init,
    /// Interpolate from `min` towards `max`
    Min,
    /// Interpolate symmetrically around the midpoint of `min` and `max`
    Center,
}

impl OriginMode {
    /// Map progress `t` to a raw value for `spec`, without clamping.
    pub fn resolve(&self, t: f32, spec: &RangeSpec) -> f32 {
        let (min, max) = (spec.min(), spec.max());
        match self {
            OriginMode::Init => lerp(spec.init(), max, t),
            OriginMode::Min => lerp(min, max, t),
            OriginMode::Center => {
                let mid = (min + max) / 2.0;
                mid + (t - 0.5) * (max - min)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OriginMode::Init => "init",
            OriginMode::Min => "min",
            OriginMode::Center => "center",
        }
    }
}

impl FromStr for OriginMode {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "init" => Ok(OriginMode::Init),
            "min" => Ok(OriginMode::Min),
            "center" => Ok(OriginMode::Center),
            _ => Err(OriginError(s.to_string())),
        }
    }
}

impl fmt::Display for OriginMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map progress `t` to the value of `spec` under `origin`.
///
/// The result never leaves the spec's bounds, whatever the origin.
pub fn map_value(t: f32, spec: &RangeSpec, origin: OriginMode) -> f32 {
    spec.clamp(origin.resolve(t, spec))
}

/// Exact at both ends: `t = 0` yields `from`, `t = 1` yields `to`
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_init_origin() {
        let spec = RangeSpec::new("--o", 0.0, 1.0).with_init(0.4);
        assert_eq!(map_value(0.0, &spec, OriginMode::Init), 0.4);
        assert_eq!(map_value(1.0, &spec, OriginMode::Init), 1.0);
        assert!(approx_eq(map_value(0.5, &spec, OriginMode::Init), 0.7));
    }

    #[test]
    fn test_min_origin() {
        let spec = RangeSpec::new("--x", -5.0, 5.0).with_init(0.0);
        assert_eq!(map_value(0.0, &spec, OriginMode::Min), -5.0);
        assert_eq!(map_value(1.0, &spec, OriginMode::Min), 5.0);
        assert_eq!(map_value(0.25, &spec, OriginMode::Min), -2.5);
    }

    #[test]
    fn test_center_origin() {
        let spec = RangeSpec::new("--r", 10.0, 30.0);
        assert_eq!(map_value(0.5, &spec, OriginMode::Center), 20.0);
        assert_eq!(map_value(0.0, &spec, OriginMode::Center), 10.0);
        assert_eq!(map_value(1.0, &spec, OriginMode::Center), 30.0);
    }

    #[test]
    fn test_reversed_range() {
        let spec = RangeSpec::new("--fade", 1.0, 0.0);
        assert_eq!(map_value(0.0, &spec, OriginMode::Min), 1.0);
        assert_eq!(map_value(1.0, &spec, OriginMode::Min), 0.0);
        assert!(approx_eq(map_value(0.25, &spec, OriginMode::Min), 0.75));
        assert!(approx_eq(map_value(0.5, &spec, OriginMode::Center), 0.5));
    }

    #[test]
    fn test_result_is_clamped() {
        let spec = RangeSpec::new("--x", 0.0, 100.0);
        assert_eq!(map_value(1.5, &spec, OriginMode::Min), 100.0);
        assert_eq!(map_value(-0.5, &spec, OriginMode::Center), 0.0);

        let reversed = RangeSpec::new("--y", 100.0, 0.0);
        assert_eq!(map_value(2.0, &reversed, OriginMode::Min), 0.0);
        assert_eq!(map_value(-1.0, &reversed, OriginMode::Init), 100.0);
    }

    #[test]
    fn test_endpoints_are_exact() {
        let bounds = [(-40.0, 3.3), (0.3, -7.3), (-12.7, 100.7), (0.1, 9.1)];
        for (min, max) in bounds {
            let spec = RangeSpec::new("--p", min, max).with_init((min + max) / 3.0);
            assert_eq!(map_value(0.0, &spec, OriginMode::Min), min);
            assert_eq!(map_value(1.0, &spec, OriginMode::Min), max);
            assert_eq!(map_value(0.0, &spec, OriginMode::Init), spec.init());
            assert_eq!(map_value(1.0, &spec, OriginMode::Init), max);
        }

        let mut a = -400;
        while a < 400 {
            let min = a as f32 * 0.1;
            for max in [-7.3, 0.7, 3.3, 9.1, 17.9, 0.3, 100.7] {
                let spec = RangeSpec::new("--p", min, max);
                assert_eq!(map_value(1.0, &spec, OriginMode::Min), max, "{}..{}", min, max);
                assert_eq!(map_value(1.0, &spec, OriginMode::Init), max, "{}..{}", min, max);
            }
            a += 1;
        }
    }

    #[test]
    fn test_parse_origin() {
        assert_eq!("init".parse::<OriginMode>(), Ok(OriginMode::Init));
        assert_eq!(" Center ".parse::<OriginMode>(), Ok(OriginMode::Center));
        assert_eq!("MIN".parse::<OriginMode>(), Ok(OriginMode::Min));
        assert_eq!(
            "middle".parse::<OriginMode>(),
            Err(OriginError("middle".into()))
        );
    }

    #[test]
    fn test_default() {
        assert_eq!(OriginMode::default(), OriginMode::Init);
        assert_eq!(OriginMode::Center.to_string(), "center");
    }
}
