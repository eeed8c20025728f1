//! Property-based tests for operations module.
//!
//! These tests focus on the domain invariants the planners rely on: stay
//! geometry, pricing, window reservation, and status terminality.

use crate::booking::{Booking, BookingStatus};
use crate::room::AvailabilityWindow;
use crate::stay::StayRange;
use chrono::NaiveDate;
use proptest::prelude::*;
use uuid::Uuid;

// Strategy for generating days within a couple of years of the epoch date
fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

// Strategy for generating valid stays (check-out strictly after check-in)
fn stay_strategy() -> impl Strategy<Value = StayRange> {
    (day_strategy(), 1i64..60).prop_map(|(check_in, nights)| {
        StayRange::new(check_in, check_in + chrono::Duration::days(nights)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // A stay always spans at least one night and prices linearly
    #[test]
    fn stay_pricing_is_nights_times_rate(stay in stay_strategy(), rate in 0i64..100_000) {
        prop_assert!(stay.nights() >= 1);
        prop_assert_eq!(stay.total_price(rate), stay.nights() * rate);
    }

    // Overlap is symmetric and back-to-back stays never overlap
    #[test]
    fn stay_overlap_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(b), b.overlaps(a));

        let next = StayRange::new(a.check_out(), a.check_out() + chrono::Duration::days(1)).unwrap();
        prop_assert!(!a.overlaps(next));
    }

    // A stay always overlaps itself
    #[test]
    fn stay_overlaps_itself(stay in stay_strategy()) {
        prop_assert!(stay.overlaps(stay));
    }

    // Reserving a window closes exactly the booked dates: the stay that was
    // admitted no longer fits, and any stay starting at check-out still does
    #[test]
    fn reserve_excludes_booked_stay(stay in stay_strategy()) {
        let window = AvailabilityWindow::open_from(stay.check_in());
        prop_assert!(window.contains(stay));

        let reserved = window.reserve(stay.check_out());
        prop_assert!(!reserved.contains(stay));

        let follow_up = StayRange::new(
            stay.check_out(),
            stay.check_out() + chrono::Duration::days(1),
        ).unwrap();
        prop_assert!(reserved.contains(follow_up));
    }

    // Reopening a window makes any future stay admissible again
    #[test]
    fn reopen_restores_future_stays(stay in stay_strategy()) {
        let reserved = AvailabilityWindow::open_from(stay.check_in()).reserve(stay.check_out());
        let reopened = reserved.reopen(stay.check_in());
        prop_assert!(reopened.contains(stay));
    }

    // Terminal statuses accept no transition in any order of attempts
    #[test]
    fn terminal_bookings_stay_terminal(
        stay in stay_strategy(),
        terminal in prop::sample::select(vec![BookingStatus::Cancelled, BookingStatus::Rejected]),
        attempts in prop::collection::vec(0u8..4, 1..8),
    ) {
        let booking = Booking::builder(Uuid::new_v4(), Uuid::new_v4(), stay, 100)
            .status(terminal)
            .build()
            .unwrap();

        for attempt in attempts {
            let mut b = booking.clone();
            let result = match attempt {
                0 => b.cancel(),
                1 => b.approve(),
                2 => b.reject(),
                _ => b.pay(),
            };
            prop_assert!(result.is_err());
            prop_assert_eq!(b.status(), terminal);
        }
    }

    // Payment never changes a booking's status
    #[test]
    fn payment_preserves_status(stay in stay_strategy()) {
        let mut booking = Booking::builder(Uuid::new_v4(), Uuid::new_v4(), stay, 100)
            .build()
            .unwrap();
        booking.pay().unwrap();
        prop_assert_eq!(booking.status(), BookingStatus::Pending);
        prop_assert!(booking.is_paid());
    }
}
