use serde::Serialize;

pub const POINTS_PER_LEVEL: i64 = 60;

/// Progress derived from a user's cumulative points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelInfo {
    pub level: i64,
    pub points_in_level: i64,
    pub points_to_next: i64,
    pub total_points: i64,
    /// Fraction of the current level completed, in `[0, 1)`
    pub progress: f64,
}

impl LevelInfo {
    /// Negative totals are treated as zero.
    pub fn from_total(total_points: i64) -> Self {
        let total_points = total_points.max(0);
        let points_in_level = total_points % POINTS_PER_LEVEL;
        Self {
            level: total_points / POINTS_PER_LEVEL + 1,
            points_in_level,
            points_to_next: POINTS_PER_LEVEL - points_in_level,
            total_points,
            progress: points_in_level as f64 / POINTS_PER_LEVEL as f64,
        }
    }
}

/// New level reached when the total moves from `before` to `after`.
pub fn level_up(before: i64, after: i64) -> Option<i64> {
    let old = LevelInfo::from_total(before).level;
    let new = LevelInfo::from_total(after).level;
    (new > old).then_some(new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(LevelInfo::from_total(0).level, 1);
        assert_eq!(LevelInfo::from_total(59).level, 1);
        assert_eq!(LevelInfo::from_total(60).level, 2);
        assert_eq!(LevelInfo::from_total(125).level, 3);
    }

    #[test]
    fn test_points_in_level_and_to_next_sum_to_level_size() {
        for total in 0..500 {
            let info = LevelInfo::from_total(total);
            assert_eq!(info.points_in_level + info.points_to_next, POINTS_PER_LEVEL);
            assert!(info.progress >= 0.0 && info.progress < 1.0);
        }
    }

    #[test]
    fn test_fresh_level_needs_full_sixty() {
        let info = LevelInfo::from_total(120);
        assert_eq!(info.points_in_level, 0);
        assert_eq!(info.points_to_next, 60);
        assert_eq!(info.total_points, 120);
    }

    #[test]
    fn test_negative_total_clamps() {
        assert_eq!(LevelInfo::from_total(-10), LevelInfo::from_total(0));
    }

    #[test]
    fn test_level_up_detection() {
        assert_eq!(level_up(50, 59), None);
        assert_eq!(level_up(50, 60), Some(2));
        assert_eq!(level_up(100, 250), Some(5));
        assert_eq!(level_up(70, 10), None);
    }
}
