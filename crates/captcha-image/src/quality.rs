//! JPEG quality levels.
//!
//! Quality is an integer where [`QUALITY_NONE`] (100) lets the encoder keep
//! its best/default setting and the named levels step down towards
//! [`QUALITY_LEVEL_5`] (50), the most compressed level captchas use.
//!
//! Invalid qualities are never rejected: [`normalize_quality`] replaces them
//! with [`QUALITY_NONE`].

use serde::{Deserialize, Serialize};

/// Encoder default quality.
pub const QUALITY_NONE: i32 = 100;
pub const QUALITY_LEVEL_1: i32 = 90;
pub const QUALITY_LEVEL_2: i32 = 80;
pub const QUALITY_LEVEL_3: i32 = 70;
pub const QUALITY_LEVEL_4: i32 = 60;
/// Lowest quality accepted by the export adapters.
pub const QUALITY_LEVEL_5: i32 = 50;

/// Named quality level, suitable for config files.
///
/// Serialized as lowercase names (`"none"`, `"level1"` .. `"level5"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// Encoder default.
    #[default]
    None,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl QualityLevel {
    /// Numeric quality passed to the export adapters.
    pub fn value(self) -> i32 {
        match self {
            QualityLevel::None => QUALITY_NONE,
            QualityLevel::Level1 => QUALITY_LEVEL_1,
            QualityLevel::Level2 => QUALITY_LEVEL_2,
            QualityLevel::Level3 => QUALITY_LEVEL_3,
            QualityLevel::Level4 => QUALITY_LEVEL_4,
            QualityLevel::Level5 => QUALITY_LEVEL_5,
        }
    }
}

impl From<QualityLevel> for i32 {
    fn from(level: QualityLevel) -> Self {
        level.value()
    }
}

/// Returns true if `quality` is forwarded to the encoder as-is.
///
/// Levels descend numerically, so the accepted band is
/// `QUALITY_LEVEL_5..=QUALITY_NONE`.
#[inline]
pub(crate) fn is_valid_quality(quality: i32) -> bool {
    quality <= QUALITY_NONE && quality >= QUALITY_LEVEL_5
}

/// Map a caller-supplied quality to the value handed to the codec.
///
/// Out-of-range values fall back to [`QUALITY_NONE`].
pub fn normalize_quality(quality: i32) -> u8 {
    if is_valid_quality(quality) {
        quality as u8
    } else {
        log::debug!(
            "quality {} outside {}..={}, using encoder default",
            quality,
            QUALITY_LEVEL_5,
            QUALITY_NONE
        );
        QUALITY_NONE as u8
    }
}

/// Clamp an arbitrary quality into the 1-100 range JPEG encoders accept.
///
/// Used by file export, which forwards the caller's quality without the
/// level-band check.
pub(crate) fn clamp_quality(quality: i32) -> u8 {
    quality.clamp(1, 100) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Normalized quality always lands in the accepted band.
        #[test]
        fn prop_normalized_in_band(quality in any::<i32>()) {
            let q = normalize_quality(quality) as i32;
            prop_assert!(is_valid_quality(q));
        }

        /// Property: Normalization is idempotent.
        #[test]
        fn prop_normalize_idempotent(quality in any::<i32>()) {
            let once = normalize_quality(quality);
            prop_assert_eq!(normalize_quality(once as i32), once);
        }

        /// Property: In-band values pass through untouched.
        #[test]
        fn prop_in_band_passes_through(quality in QUALITY_LEVEL_5..=QUALITY_NONE) {
            prop_assert_eq!(normalize_quality(quality) as i32, quality);
        }
    }
}
