//! Heading levels and the overrides that adjust them.
//!
//! A [`Level`] is always a valid heading depth between 1 and 6. Raw arithmetic happens on `i64`
//! and is only turned into a `Level` by clamping, which is the last step before a value is
//! published to descendants or written to an element.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CANONICAL_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Heading depth in the document outline, guaranteed to lie in `1..=6`.
pub struct Level(u8);

impl Level {
    /// Outermost heading level.
    pub const MIN: Self = Self(1);
    /// Deepest heading level HTML offers a native tag for.
    pub const MAX: Self = Self(6);

    #[must_use]
    /// Clamps an arbitrary depth into the heading range.
    pub fn clamp(raw: i64) -> Self {
        let bounded = raw.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        u8::try_from(bounded).map_or(Self::MIN, Self)
    }

    #[must_use]
    /// The level as a plain number.
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    /// The level widened for override arithmetic.
    pub fn depth(self) -> i64 {
        i64::from(self.0)
    }

    #[must_use]
    /// Native heading tag for this level, e.g. `h3` for level 3.
    pub fn canonical_tag(self) -> &'static str {
        CANONICAL_TAGS[usize::from(self.0 - 1)]
    }

    #[must_use]
    /// Reads the level back from a native heading tag, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        CANONICAL_TAGS
            .iter()
            .position(|canonical| canonical.eq_ignore_ascii_case(tag))
            .and_then(|i| u8::try_from(i + 1).ok())
            .map(Self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLevel")]
/// Explicit replacement for the default level of a single element.
///
/// Relative overrides are applied to the reference depth: the parent scope's depth for a
/// section, the ambient depth for a heading. They never compose with the default increment.
pub enum LevelOverride {
    /// Use exactly this depth.
    Absolute(i64),
    /// Shift the reference depth by this signed amount.
    Relative(i64),
}

impl FromStr for LevelOverride {
    type Err = Error;

    /// Parses the markup form: `"3"` is absolute, `"+2"` and `"-1"` are relative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedLevel {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (sign, digits) = match trimmed.as_bytes().first() {
            Some(b'+') => (Some(1), &trimmed[1..]),
            Some(b'-') => (Some(-1), &trimmed[1..]),
            _ => (None, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        // Only overflow can fail past the digit check; such levels clamp anyway.
        let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
        Ok(match sign {
            Some(sign) => Self::Relative(sign * magnitude),
            None => Self::Absolute(magnitude),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawLevel> for LevelOverride {
    type Error = Error;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        match raw {
            RawLevel::Integer(n) => Ok(Self::Absolute(n)),
            RawLevel::Float(n) if n.is_finite() && n.fract() == 0.0 => {
                // `as` saturates, which is what an out-of-range level wants.
                #[allow(clippy::cast_possible_truncation)]
                let depth = n as i64;
                Ok(Self::Absolute(depth))
            }
            RawLevel::Float(n) => Err(Error::MalformedLevel {
                value: n.to_string(),
            }),
            RawLevel::Text(text) => text.parse(),
        }
    }
}

#[must_use]
/// Applies an optional override, returning the unclamped depth.
///
/// `default` is what the element gets without an override; `reference` is the depth a relative
/// override is measured from. Callers clamp the result.
pub fn resolve(default: i64, reference: i64, level: Option<LevelOverride>) -> i64 {
    match level {
        None => default,
        Some(LevelOverride::Absolute(n)) => n,
        Some(LevelOverride::Relative(delta)) => reference.saturating_add(delta),
    }
}

#[cfg(test)]
#[path = "tests/level.rs"]
mod tests;
