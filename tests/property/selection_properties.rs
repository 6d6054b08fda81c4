// Property-based tests for selection and range compaction
// Exercises the engine with random weeks, days and hour bounds

use proptest::prelude::*;
use std::collections::BTreeSet;
use time_period_selector::models::hour::HourIndex;
use time_period_selector::models::selection::SelectedTime;
use time_period_selector::models::week_day::WeekDay;
use time_period_selector::services::range_format::compact_ranges;
use time_period_selector::services::selection::SelectionService;

fn any_day() -> impl Strategy<Value = WeekDay> {
    (0usize..7).prop_map(|i| WeekDay::ALL[i])
}

fn any_hour() -> impl Strategy<Value = HourIndex> {
    (0u8..24).prop_map(|h| HourIndex::new(h).unwrap())
}

fn any_hours() -> impl Strategy<Value = Vec<HourIndex>> {
    proptest::collection::btree_set(0u8..24, 0..20)
        .prop_map(|set| set.into_iter().map(|h| HourIndex::new(h).unwrap()).collect())
}

fn any_week() -> impl Strategy<Value = SelectedTime> {
    proptest::collection::vec(proptest::collection::vec(0u8..24, 0..12), 7).prop_map(|days| {
        SelectedTime::from_hours(
            WeekDay::ALL
                .into_iter()
                .zip(days.iter().map(Vec::as_slice)),
        )
        .unwrap()
    })
}

proptest! {
    /// Property: compaction is a pure function of its input
    #[test]
    fn prop_compaction_is_idempotent(hours in any_hours()) {
        prop_assert_eq!(compact_ranges(&hours), compact_ranges(&hours));
    }

    /// Property: ranges cover exactly the input hours, in order, without
    /// touching or overlapping each other
    #[test]
    fn prop_compaction_covers_input_exactly(hours in any_hours()) {
        let ranges = compact_ranges(&hours);

        let covered: Vec<u8> = ranges.iter().flat_map(|r| r.start()..r.end()).collect();
        let input: Vec<u8> = hours.iter().map(|h| h.value()).collect();
        prop_assert_eq!(covered, input);

        for pair in ranges.windows(2) {
            // A gap of at least one hour separates maximal runs
            prop_assert!(pair[0].end() < pair[1].start());
        }
    }

    /// Property: toggling the same slot twice restores the original state
    #[test]
    fn prop_toggle_is_an_involution(state in any_week(), day in any_day(), hour in any_hour()) {
        let once = SelectionService::toggle_hour(&state, day, hour);
        prop_assert_ne!(&once, &state);
        let twice = SelectionService::toggle_hour(&once, day, hour);
        prop_assert_eq!(twice, state);
    }

    /// Property: apply_range only ever adds hours, and only to its own day
    #[test]
    fn prop_apply_range_is_monotonic(
        state in any_week(),
        day in any_day(),
        a in any_hour(),
        b in any_hour(),
    ) {
        let next = SelectionService::apply_range(&state, day, a, b);

        prop_assert!(next.hours(day).is_superset(state.hours(day)));
        let expected: BTreeSet<HourIndex> = HourIndex::span(a, b).collect();
        prop_assert!(next.hours(day).is_superset(&expected));

        for other in WeekDay::ALL.into_iter().filter(|d| *d != day) {
            prop_assert_eq!(next.hours(other), state.hours(other));
        }
    }

    /// Property: applying the same range twice equals applying it once
    #[test]
    fn prop_apply_range_is_idempotent(
        state in any_week(),
        day in any_day(),
        a in any_hour(),
        b in any_hour(),
    ) {
        let once = SelectionService::apply_range(&state, day, a, b);
        let twice = SelectionService::apply_range(&once, day, a, b);
        prop_assert_eq!(once, twice);
    }

    /// Property: bound order does not matter
    #[test]
    fn prop_apply_range_normalizes_order(
        state in any_week(),
        day in any_day(),
        a in any_hour(),
        b in any_hour(),
    ) {
        prop_assert_eq!(
            SelectionService::apply_range(&state, day, a, b),
            SelectionService::apply_range(&state, day, b, a)
        );
    }
}
