// Range formatting service
// Compacts selected hours into [start, end) runs and renders the weekly summary

use crate::models::hour::HourIndex;
use crate::models::language::Language;
use crate::models::selection::{SelectedTime, TimeRange};
use crate::models::week_day::WeekDay;

/// Glyph placed between ranges of the same day.
pub const RANGE_SEPARATOR: &str = "、";

/// Placed between days in the full summary.
pub const DAY_SEPARATOR: &str = "\n";

/// Group ascending hours into maximal consecutive runs.
///
/// Each run `h, h+1, ..., k` becomes `TimeRange [h, k+1)`. Output is ordered
/// by start hour. Input is expected in ascending order; an element that does
/// not directly follow its predecessor always starts a new run.
///
/// # Examples
/// ```
/// use time_period_selector::models::hour::HourIndex;
/// use time_period_selector::models::selection::TimeRange;
/// use time_period_selector::services::range_format::compact_ranges;
///
/// let hours: Vec<HourIndex> = [9, 10, 11, 14, 15]
///     .into_iter()
///     .map(|h| HourIndex::new(h).unwrap())
///     .collect();
/// assert_eq!(
///     compact_ranges(&hours),
///     vec![TimeRange::new(9, 12).unwrap(), TimeRange::new(14, 16).unwrap()]
/// );
/// ```
pub fn compact_ranges(hours: &[HourIndex]) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut iter = hours.iter().copied();

    let Some(first) = iter.next() else {
        return ranges;
    };

    let mut start = first;
    let mut prev = first;
    for hour in iter {
        if prev.next() != Some(hour) {
            ranges.push(TimeRange::covering(start, prev));
            start = hour;
        }
        prev = hour;
    }
    ranges.push(TimeRange::covering(start, prev));

    ranges
}

/// Render one day's line, e.g. `Monday 09:00~12:00、14:00~16:00`.
///
/// Returns `None` when the day has no ranges so callers can drop it.
pub fn format_day(day: WeekDay, ranges: &[TimeRange], language: Language) -> Option<String> {
    if ranges.is_empty() {
        return None;
    }

    let formatted = ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(RANGE_SEPARATOR);

    Some(format!("{} {}", day.display_name(language), formatted))
}

/// Compacted ranges for every day, in canonical order, including empty days.
pub fn week_ranges(state: &SelectedTime) -> Vec<(WeekDay, Vec<TimeRange>)> {
    WeekDay::ALL
        .into_iter()
        .map(|day| (day, compact_ranges(&state.sorted_hours(day))))
        .collect()
}

/// Full summary: one line per non-empty day, Monday first.
pub fn format_all(state: &SelectedTime, language: Language) -> String {
    week_ranges(state)
        .into_iter()
        .filter_map(|(day, ranges)| format_day(day, &ranges, language))
        .collect::<Vec<_>>()
        .join(DAY_SEPARATOR)
}
