//! Turning a discovered element into a [`TrackedElement`].

use super::ScrollHost;
use crate::config::ScrollConfig;
use crate::range::{parse_specs, OriginMode};
use crate::tracked::{Interval, TrackedElement};

/// Read the element's attributes once and build its tracking state.
///
/// Missing or unparseable attributes fall back to their defaults.
pub(crate) fn bind<H: ScrollHost>(
    host: &H,
    handle: H::Handle,
    config: &ScrollConfig,
) -> TrackedElement<H::Handle> {
    let names = &config.attributes;

    let specs = host
        .attribute(&handle, &names.spec)
        .map(|source| parse_specs(&source))
        .unwrap_or_default();

    let defaults = Interval::default();
    let interval = Interval::new(
        read_fraction(host.attribute(&handle, &names.start), defaults.start),
        read_fraction(host.attribute(&handle, &names.end), defaults.end),
    );

    let origin = host
        .attribute(&handle, &names.origin)
        .and_then(|value| read_origin(&value))
        .unwrap_or(config.origin);

    TrackedElement::new(handle, specs, interval, origin)
}

fn read_fraction(value: Option<String>, default: f32) -> f32 {
    let Some(value) = value else {
        return default;
    };
    match value.trim().parse::<f32>() {
        Ok(fraction) if fraction.is_finite() => fraction,
        _ => {
            log::debug!("Ignoring boundary {:?}, using {}", value, default);
            default
        }
    }
}

fn read_origin(value: &str) -> Option<OriginMode> {
    if value.trim().is_empty() {
        return None;
    }
    match value.parse() {
        Ok(origin) => Some(origin),
        Err(err) => {
            log::debug!("{}", err);
            None
        }
    }
}
