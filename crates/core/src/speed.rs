//! Speed curve - maps level to the automatic drop interval
//!
//! The curve is expressed in G (rows advanced per 60 FPS simulation frame)
//! and converted to real time as `(1 / G) * FRAME_TIME_MS`, truncated to whole
//! milliseconds.

use std::time::Duration;

use crate::types::FRAME_TIME_MS;

/// G values for levels 1 through 20; higher levels reuse the last entry
pub const SPEED_CURVE: [f64; 20] = [
    0.01667, 0.021017, 0.026977, 0.035256, 0.04693, 0.06361, 0.0879, 0.1236, 0.1775, 0.2598,
    0.388, 0.59, 0.92, 1.46, 2.36, 3.91, 6.61, 11.43, 20.23, 36.6,
];

/// G value for a level, clamped to the nearest table entry
pub fn gravity_for_level(level: u32) -> f64 {
    let idx = (level.max(1) as usize - 1).min(SPEED_CURVE.len() - 1);
    SPEED_CURVE[idx]
}

/// Automatic drop interval in whole milliseconds; the fraction is dropped
pub fn drop_interval_ms(level: u32) -> u64 {
    let frames_per_row = 1.0 / gravity_for_level(level);
    (frames_per_row * FRAME_TIME_MS) as u64
}

/// Automatic drop interval for a level
pub fn drop_interval(level: u32) -> Duration {
    Duration::from_millis(drop_interval_ms(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_levels() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 793);
        assert_eq!(drop_interval_ms(3), 617);
        assert_eq!(drop_interval_ms(10), 64);
    }

    #[test]
    fn test_fractions_are_truncated() {
        let expected = [
            1000, 793, 617, 472, 355, 262, 189, 134, 93, 64, 42, 28, 18, 11, 7, 4, 2, 1, 0, 0,
        ];
        for (level, ms) in (1..=20).zip(expected) {
            assert_eq!(drop_interval_ms(level), ms, "level {}", level);
        }
    }

    #[test]
    fn test_intervals_never_increase() {
        for level in 1..30 {
            assert!(
                drop_interval_ms(level + 1) <= drop_interval_ms(level),
                "level {} is slower than level {}",
                level + 1,
                level
            );
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(gravity_for_level(0), SPEED_CURVE[0]);
        assert_eq!(gravity_for_level(20), 36.6);
        assert_eq!(gravity_for_level(21), 36.6);
        assert_eq!(gravity_for_level(u32::MAX), 36.6);
        assert_eq!(drop_interval(20), Duration::ZERO);
        assert_eq!(drop_interval(19), Duration::ZERO);
    }
}
