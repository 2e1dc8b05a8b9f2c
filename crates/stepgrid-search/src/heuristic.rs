use stepgrid_core::Point;

/// Divisor applied to each axis of the Manhattan distance.
pub const HEURISTIC_SCALE: u64 = 9;

/// Scaled Manhattan estimate used to order siblings in the greedy driver:
/// `|dx| / 9 + |dy| / 9`, each term truncated.
///
/// Only sibling order depends on it; it never prunes.
#[inline]
pub fn heuristic(p: Point, target: Point) -> u64 {
    target.x.abs_diff(p.x) / HEURISTIC_SCALE + target.y.abs_diff(p.y) / HEURISTIC_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_per_axis() {
        let t = Point::new(0, 0);
        assert_eq!(heuristic(Point::new(8, 8), t), 0);
        assert_eq!(heuristic(Point::new(9, 8), t), 1);
        assert_eq!(heuristic(Point::new(-17, 18), t), 3);
        assert_eq!(heuristic(Point::new(100, 100), Point::new(100, 100)), 0);
    }

    #[test]
    fn never_exceeds_scaled_manhattan() {
        for x in -30..30 {
            for y in -30..30 {
                let p = Point::new(x, y);
                let l1 = x.unsigned_abs() + y.unsigned_abs();
                assert!(heuristic(p, Point::ZERO) * HEURISTIC_SCALE <= l1);
            }
        }
    }

    #[test]
    fn far_apart_points_do_not_overflow() {
        let target = Point::new(i64::from(i32::MAX), 0);
        let p = Point::new(-i64::from(u32::MAX), i64::from(i32::MIN));
        let dx = u64::from(i32::MAX.unsigned_abs()) + u64::from(u32::MAX);
        let dy = u64::from(i32::MIN.unsigned_abs());
        assert_eq!(heuristic(p, target), dx / 9 + dy / 9);
    }
}
