//! Property-based tests for the fee schedule and rental state machine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use movie_rental::core::models::{FeeSchedule, Movie, MovieKind};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = MovieKind> {
    prop_oneof![Just(MovieKind::Digital), Just(MovieKind::Physical)]
}

proptest! {
    /// Past the grace period every day adds the flat surcharge
    #[test]
    fn late_rentals_add_two_per_day(kind in any_kind(), days in 4u32..10_000) {
        let fees = FeeSchedule::STANDARD;
        let expected = fees.base_fee(kind) + f64::from(days - 3) * 2.0;
        prop_assert!((fees.total_fee(kind, days) - expected).abs() < 1e-9);
    }

    /// Within the grace period only the base fee is charged
    #[test]
    fn grace_period_charges_base(kind in any_kind(), days in 0u32..=3) {
        let fees = FeeSchedule::STANDARD;
        prop_assert_eq!(fees.total_fee(kind, days), fees.base_fee(kind));
    }

    /// Fees never decrease as a rental gets longer
    #[test]
    fn fee_is_monotonic_in_days(kind in any_kind(), days in 0u32..10_000) {
        let fees = FeeSchedule::STANDARD;
        prop_assert!(fees.total_fee(kind, days + 1) >= fees.total_fee(kind, days));
    }

    /// Returning a movie charges the schedule's fee and leaves it available
    #[test]
    fn return_charges_schedule_fee(kind in any_kind(), days in 0u32..1_000) {
        let fees = FeeSchedule::STANDARD;
        let mut movie = Movie::new("Any", kind);
        movie.rent().unwrap();
        movie.mark_days(days);

        let fee = movie.return_item(&fees).unwrap();
        prop_assert_eq!(fee, fees.total_fee(kind, days));
        prop_assert!(!movie.is_rented());
        prop_assert_eq!(movie.days_rented(), 0);
    }
}
