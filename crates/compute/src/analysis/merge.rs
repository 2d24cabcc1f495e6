//! Merging directed longitude intervals.
//!
//! Each input `(west, east)` asks the map to show every longitude met when
//! travelling eastward from `west` to `east`. The smallest single interval that
//! honours all of them is the complement of the widest stretch of the circle
//! that no input covers:
//!
//! ```text
//! -180                                            180 = -180
//!   |     >--------------->                        |
//!   |         >------->                            |
//!   |            >------------->                   |
//!   |->    >------->                         >-----|
//!   11000012223334433322221111100000000000000111111|
//!                              ^ widest empty stretch
//! ```
//!
//! Coverage at -180 equals the number of intervals that wrap through the
//! antimeridian. Events are repeated one turn later so that an empty stretch
//! crossing the antimeridian shows up in a single left-to-right sweep.

use foundation::bounds::LonInterval;
use foundation::math::{StableF64, normalize_longitude};
use tracing::trace;

/// Returned when there is nothing to merge, and when the inputs leave no gap.
pub const NO_GAP: (f64, f64) = (-180.0, -180.0);

/// Smallest directed `(west, east)` interval covering every input interval.
pub fn merge_longitude_bounds(intervals: &[(f64, f64)]) -> (f64, f64) {
    let intervals: Vec<LonInterval> = intervals.iter().copied().map(LonInterval::from).collect();
    merge_intervals(&intervals).into()
}

pub fn merge_intervals(intervals: &[LonInterval]) -> LonInterval {
    match intervals {
        [] => return NO_GAP.into(),
        [only] => return *only,
        _ => {}
    }

    let normalized: Vec<LonInterval> = intervals.iter().map(|i| i.normalized()).collect();

    let mut coverage: i64 = normalized.iter().filter(|i| i.west > i.east).count() as i64;

    // (angle, delta): ends sort before starts at the same angle.
    let mut events: Vec<(StableF64, i64)> = Vec::with_capacity(normalized.len() * 4);
    for i in &normalized {
        events.push((StableF64(i.west), 1));
        events.push((StableF64(i.east), -1));
    }
    let next_turn: Vec<(StableF64, i64)> = events
        .iter()
        .map(|&(StableF64(angle), delta)| (StableF64(angle + 360.0), delta))
        .collect();
    events.extend(next_turn);
    events.sort();

    let mut widest = NO_GAP;
    let mut segment_start = -180.0;
    for (StableF64(angle), delta) in events {
        if coverage == 0 && angle - segment_start > widest.1 - widest.0 {
            widest = (segment_start, angle);
        }
        segment_start = angle;
        coverage += delta;
        assert!(
            coverage >= 0,
            "negative coverage at longitude {angle}: intervals are not consistent on the circle"
        );
    }

    trace!(gap_start = widest.0, gap_end = widest.1, "widest uncovered gap");

    // The covering interval starts where the gap ends and ends where it starts.
    LonInterval::new(normalize_longitude(widest.1), normalize_longitude(widest.0))
}

#[cfg(test)]
mod tests {
    use super::{NO_GAP, merge_intervals, merge_longitude_bounds};
    use crate::analysis::longitude_bounds;
    use foundation::bounds::LonInterval;

    fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        let step = (end - start) / (n - 1) as f64;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn no_bounds_gives_fallback() {
        assert_eq!(merge_longitude_bounds(&[]), NO_GAP);
        assert_eq!(merge_longitude_bounds(&[]), (-180.0, -180.0));
    }

    #[test]
    fn single_bounds_pass_through() {
        assert_eq!(merge_longitude_bounds(&[(10.0, 20.0)]), (10.0, 20.0));
        assert_eq!(merge_longitude_bounds(&[(170.0, -170.0)]), (170.0, -170.0));
        // Passed through verbatim, not normalized.
        assert_eq!(merge_longitude_bounds(&[(190.0, 400.0)]), (190.0, 400.0));
    }

    #[test]
    fn overlapping_bounds() {
        assert_eq!(merge_longitude_bounds(&[(10.0, 20.0), (15.0, 25.0)]), (10.0, 25.0));
    }

    #[test]
    fn contained_bounds() {
        assert_eq!(merge_longitude_bounds(&[(5.0, 55.0), (20.0, 25.0)]), (5.0, 55.0));
    }

    #[test]
    fn disjoint_negative_bounds() {
        assert_eq!(merge_longitude_bounds(&[(-25.0, 5.0), (10.0, 15.0)]), (-25.0, 15.0));
    }

    #[test]
    fn order_of_inputs_does_not_matter() {
        assert_eq!(merge_longitude_bounds(&[(10.0, 15.0), (-25.0, 5.0)]), (-25.0, 15.0));
    }

    #[test]
    fn wrapping_bounds_are_joined_across_antimeridian() {
        let merged = merge_longitude_bounds(&[(170.0, -170.0), (-160.0, -150.0), (160.0, 165.0)]);
        assert_eq!(merged, (160.0, -150.0));
    }

    #[test]
    fn gap_across_antimeridian_is_excluded() {
        // Widest empty stretch is (30, -170) through 180.
        let merged = merge_longitude_bounds(&[(-170.0, -100.0), (0.0, 30.0), (-90.0, -10.0)]);
        assert_eq!(merged, (-170.0, 30.0));
    }

    #[test]
    fn whole_earth_absorbs_smaller_bounds() {
        let whole = (-179.99999, 179.99999);
        let (lower, upper) = merge_longitude_bounds(&[whole, (10.0, 15.0)]);
        assert!((lower - whole.0).abs() < 1e-9, "lower = {lower}");
        assert!((upper - whole.1).abs() < 1e-9, "upper = {upper}");
    }

    #[test]
    fn whole_earth_estimate_covers_everything() {
        let whole = longitude_bounds(&linspace(-179.0, 179.0, 100)).unwrap();
        let merged = LonInterval::from(merge_longitude_bounds(&[whole, (10.0, 15.0)]));
        assert!(merged.covers(&LonInterval::new(10.0, 15.0)));
        assert!(merged.width() > 359.9);
    }

    #[test]
    fn complementary_bounds_leave_no_gap() {
        assert_eq!(merge_longitude_bounds(&[(0.0, 180.0), (180.0, 0.0)]), NO_GAP);
    }

    #[test]
    fn result_covers_every_input() {
        let inputs = [
            LonInterval::new(100.0, 120.0),
            LonInterval::new(-130.0, -100.0),
            LonInterval::new(175.0, -175.0),
            LonInterval::new(110.0, 140.0),
        ];
        let merged = merge_intervals(&inputs);
        for i in &inputs {
            assert!(merged.covers(i), "{merged:?} does not cover {i:?}");
        }
        assert_eq!(merged, LonInterval::new(100.0, -100.0));
    }

    #[test]
    fn unnormalized_inputs_are_normalized() {
        assert_eq!(merge_longitude_bounds(&[(370.0, 380.0), (15.0, 385.0)]), (10.0, 25.0));
    }
}
