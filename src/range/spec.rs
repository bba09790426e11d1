//! The range spec mini-language.
//!
//! A declaration is a list of `;`-separated entries:
//!
//! ```text
//! <name>=<min>..<max>[@<init>]
//! ```
//!
//! e.g. `--x=-5..5@0; --scale=0..1`. Entries that do not match are dropped
//! one by one, the rest of the declaration still applies.

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("missing '=' in entry {0:?}")]
    MissingEquals(String),
    #[error("invalid variable name {0:?}")]
    InvalidName(String),
    #[error("missing '..' range separator in {0:?}")]
    MissingRange(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("number out of range {0:?}")]
    NonFinite(String),
}

/// One named numeric range bound to a presentation variable.
///
/// `min` and `max` may be given in any order; `min > max` interpolates
/// downwards. `init` always lies between the two bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpec {
    name: String,
    min: f32,
    max: f32,
    init: f32,
}

impl RangeSpec {
    /// Create a range whose rest value is `min`
    pub fn new(name: impl Into<String>, min: f32, max: f32) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            init: min,
        }
    }

    /// Set the rest value, clamped into the range bounds
    pub fn with_init(mut self, init: f32) -> Self {
        self.init = self.clamp(init);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn init(&self) -> f32 {
        self.init
    }

    /// Lower of the two bounds
    pub fn low(&self) -> f32 {
        self.min.min(self.max)
    }

    /// Higher of the two bounds
    pub fn high(&self) -> f32 {
        self.min.max(self.max)
    }

    /// Returns true if the range interpolates downwards
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// Clamp a value into `[low, high]`
    pub fn clamp(&self, value: f32) -> f32 {
        // f32::clamp panics on NaN bounds
        value.max(self.low()).min(self.high())
    }
}

impl FromStr for RangeSpec {
    type Err = SpecError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let entry = entry.trim();
        let (name, range) = entry
            .split_once('=')
            .ok_or_else(|| SpecError::MissingEquals(entry.to_string()))?;

        let name = name.trim();
        if !is_identifier(name) {
            return Err(SpecError::InvalidName(name.to_string()));
        }

        let (range, init) = match range.split_once('@') {
            Some((range, init)) => (range, Some(parse_number(init)?)),
            None => (range, None),
        };

        let (min, max) = range
            .split_once("..")
            .ok_or_else(|| SpecError::MissingRange(range.trim().to_string()))?;

        let spec = RangeSpec::new(name, parse_number(min)?, parse_number(max)?);
        Ok(match init {
            Some(init) => spec.with_init(init),
            None => spec,
        })
    }
}

/// Parse a whole declaration, dropping entries that do not match the grammar.
pub fn parse_specs(source: &str) -> Vec<RangeSpec> {
    source
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<RangeSpec>() {
            Ok(spec) => Some(spec),
            Err(err) => {
                log::debug!("Dropping range spec entry {:?}: {}", entry, err);
                None
            }
        })
        .collect()
}

fn is_identifier(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphanumeric())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Signed decimal number: `[+-]?(digits[.digits]|.digits)`
fn parse_number(text: &str) -> Result<f32, SpecError> {
    let text = text.trim();
    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);

    let mut dots = 0;
    let mut digits = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(SpecError::InvalidNumber(text.to_string())),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(SpecError::InvalidNumber(text.to_string()));
    }

    let value: f32 = text
        .parse()
        .map_err(|_| SpecError::InvalidNumber(text.to_string()))?;
    if !value.is_finite() {
        return Err(SpecError::NonFinite(text.to_string()));
    }
    Ok(value)
}
