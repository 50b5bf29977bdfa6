//! Named movement-speed configuration.

use std::fmt;

/// Per-tick movement distance, exposed to applications as a named profile
/// rather than a raw pixel count.
///
/// The pixel values are per 50 ms tick, matching the reference animation
/// speeds (slow = 1, normal = 2, fast = 4).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedProfile {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedProfile {
    /// The distance in pixels a pet covers per tick at this profile.
    #[inline]
    pub fn pixels_per_tick(self) -> f32 {
        match self {
            SpeedProfile::Slow   => 1.0,
            SpeedProfile::Normal => 2.0,
            SpeedProfile::Fast   => 4.0,
        }
    }
}

impl fmt::Display for SpeedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpeedProfile::Slow   => "slow",
            SpeedProfile::Normal => "normal",
            SpeedProfile::Fast   => "fast",
        };
        f.write_str(s)
    }
}
