//! The [`Elevation`] newtype.
//!
//! Elevations are letter grades `a` (lowest) through `z` (highest), stored
//! as `0..=25`. The start marker `S` reads as `a` and the target marker `E`
//! reads as `z`.

use std::fmt;

/// Character marking the start cell in a height map.
pub const START_MARKER: char = 'S';

/// Character marking the target cell in a height map.
pub const TARGET_MARKER: char = 'E';

/// A cell elevation in `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Elevation(u8);

impl Elevation {
    /// Elevation `a`, also carried by the start marker.
    pub const LOWEST: Self = Self(0);

    /// Elevation `z`, also carried by the target marker.
    pub const HIGHEST: Self = Self(25);

    /// Create an elevation, rejecting values above [`HIGHEST`](Self::HIGHEST).
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::HIGHEST.0 {
            return None;
        }
        Some(Self(value))
    }

    /// Read a height-map character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            START_MARKER => Some(Self::LOWEST),
            TARGET_MARKER => Some(Self::HIGHEST),
            'a'..='z' => Some(Self(ch as u8 - b'a')),
            _ => None,
        }
    }

    /// The underlying value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The letter for this elevation (never a marker).
    pub fn to_char(self) -> char {
        char::from(b'a' + self.0)
    }

    /// Signed climb from `self` to `to`. Negative when descending.
    #[inline]
    pub fn climb_to(self, to: Elevation) -> i16 {
        i16::from(to.0) - i16::from(self.0)
    }
}

impl From<Elevation> for u8 {
    fn from(e: Elevation) -> Self {
        e.0
    }
}

impl TryFrom<u8> for Elevation {
    type Error = ElevationOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ElevationOutOfRange(value))
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A raw value that does not fit in `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationOutOfRange(pub u8);

impl fmt::Display for ElevationOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elevation {} is outside 0..={}",
            self.0,
            Elevation::HIGHEST.0
        )
    }
}

impl std::error::Error for ElevationOutOfRange {}
