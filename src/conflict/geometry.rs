//! Closed-form intersection of two train trajectories.

use super::types::Crossing;
use crate::models::Train;
use crate::time::{add_hours_wrapping, duration_to_fraction};

/// Find where two trains' position-vs-time rays meet, using exact speed equality.
///
/// Each train is modeled as `speed * (t - departure)` for `t >= departure`,
/// not clipped to its own stops. The result does not depend on argument order.
/// A pair involving a train with an invalid speed never crosses.
#[must_use]
pub fn find_crossing(train_a: &Train, train_b: &Train) -> Option<Crossing> {
    calculate_crossing(train_a, train_b, 0.0)
}

/// Same as `find_crossing`, treating speeds within `speed_tolerance` as equal
#[must_use]
pub fn calculate_crossing(train_a: &Train, train_b: &Train, speed_tolerance: f64) -> Option<Crossing> {
    if !train_a.has_valid_speed() || !train_b.has_valid_speed() {
        return None;
    }

    // Earlier departure first
    let (first, second) = if train_a.departure > train_b.departure {
        (train_b, train_a)
    } else {
        (train_a, train_b)
    };

    let delta_t = duration_to_fraction(second.departure - first.departure);
    if delta_t < 0.0 {
        return None;
    }

    let (v1, v2) = (first.speed, second.speed);
    if (v1 - v2).abs() <= speed_tolerance {
        return None; // Parallel
    }

    // Meeting distance in the later train's frame
    let distance = (v2 * delta_t) / (1.0 - v1 / v2);
    if !distance.is_finite() || distance <= 0.0 {
        return None;
    }

    Some(Crossing {
        time: add_hours_wrapping(first.departure, distance / v1),
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn train(name: &str, speed: f64, departure: NaiveTime) -> Train {
        Train::new(name, speed).with_departure(departure)
    }

    #[test]
    fn test_later_faster_train_catches_up() {
        let r1 = train("R1", 50.0, hm(8, 0));
        let r2 = train("R2", 100.0, hm(9, 0));

        let crossing = find_crossing(&r1, &r2).expect("trains should cross");
        assert_eq!(crossing.distance, 200.0);
        assert_eq!(crossing.time, hm(12, 0));
    }

    #[test]
    fn test_same_departure_faster_train_pulls_ahead() {
        let r1 = train("R1", 100.0, hm(8, 0));
        let r2 = train("R2", 50.0, hm(8, 0));

        assert_eq!(find_crossing(&r1, &r2), None);
        assert_eq!(find_crossing(&r2, &r1), None);
    }

    #[test]
    fn test_later_slower_train_never_crosses() {
        let r1 = train("R1", 100.0, hm(8, 0));
        let r2 = train("R2", 50.0, hm(9, 0));

        assert_eq!(find_crossing(&r1, &r2), None);
    }

    #[test]
    fn test_equal_speeds_never_cross() {
        let r1 = train("R1", 80.0, hm(8, 0));
        let r2 = train("R2", 80.0, hm(8, 0));
        let r3 = train("R3", 80.0, hm(10, 30));

        assert_eq!(find_crossing(&r1, &r2), None);
        assert_eq!(find_crossing(&r1, &r3), None);
    }

    #[test]
    fn test_crossing_is_symmetric() {
        let pairs = [
            (train("A", 50.0, hm(8, 0)), train("B", 100.0, hm(9, 0))),
            (train("A", 40.0, hm(6, 15)), train("B", 120.0, hm(7, 0))),
            (train("A", 90.0, hm(11, 0)), train("B", 30.0, hm(10, 0))),
            (train("A", 60.0, hm(8, 0)), train("B", 75.0, hm(8, 0))),
        ];

        for (a, b) in &pairs {
            assert_eq!(find_crossing(a, b), find_crossing(b, a));
        }
    }

    #[test]
    fn test_crossing_time_wraps_past_midnight() {
        // delta 1h: distance = 100 / 0.5 = 200, 200 / 50 = 4h after 22:00
        let r1 = train("R1", 50.0, hm(22, 0));
        let r2 = train("R2", 100.0, hm(23, 0));

        let crossing = find_crossing(&r1, &r2).expect("trains should cross");
        assert_eq!(crossing.distance, 200.0);
        assert_eq!(crossing.time, hm(2, 0));
    }

    #[test]
    fn test_invalid_speed_never_crosses() {
        let ok = train("OK", 50.0, hm(8, 0));
        let broken = train("Broken", 0.0, hm(9, 0));

        assert_eq!(find_crossing(&ok, &broken), None);
        assert_eq!(find_crossing(&broken, &ok), None);
    }

    #[test]
    fn test_speed_tolerance_treats_close_speeds_as_parallel() {
        let r1 = train("R1", 100.0, hm(8, 0));
        let r2 = train("R2", 100.5, hm(9, 0));

        assert!(find_crossing(&r1, &r2).is_some());
        assert_eq!(calculate_crossing(&r1, &r2, 1.0), None);
    }

    #[test]
    fn test_equal_speeds_never_cross_with_any_tolerance() {
        let r1 = train("R1", 80.0, hm(8, 0));
        let r2 = train("R2", 80.0, hm(8, 0));
        let r3 = train("R3", 80.0, hm(9, 0));

        for tolerance in [-1.0, f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(calculate_crossing(&r1, &r2, tolerance), None);
            assert_eq!(calculate_crossing(&r1, &r3, tolerance), None);
            assert_eq!(calculate_crossing(&r3, &r2, tolerance), None);
        }
    }

    #[test]
    fn test_find_crossing_is_idempotent() {
        let r1 = train("R1", 37.0, hm(7, 13));
        let r2 = train("R2", 91.0, hm(8, 47));

        let first = find_crossing(&r1, &r2).expect("trains should cross");
        let second = find_crossing(&r1, &r2).expect("trains should cross");
        assert_eq!(first.distance.to_bits(), second.distance.to_bits());
        assert_eq!(first.time, second.time);
    }
}
