// Selection service
// Pure transformations over SelectedTime: toggle, additive range, clear

use crate::models::hour::HourIndex;
use crate::models::selection::SelectedTime;
use crate::models::week_day::WeekDay;

/// Owns no state; every operation takes the current snapshot and returns a
/// new one, leaving the input untouched so callers can diff old against new.
pub struct SelectionService;

impl SelectionService {
    /// Starting value: the seed if one was supplied, otherwise an empty week.
    pub fn initialize(seed: Option<SelectedTime>) -> SelectedTime {
        seed.unwrap_or_default()
    }

    /// Remove `hour` from `day` if present, otherwise add it.
    pub fn toggle_hour(state: &SelectedTime, day: WeekDay, hour: HourIndex) -> SelectedTime {
        let mut next = state.clone();
        let hours = next.hours_mut(day);
        if !hours.remove(&hour) {
            hours.insert(hour);
        }
        log::debug!("Toggled {} {:02}:00 -> {}", day, hour.value(), hours.contains(&hour));
        next
    }

    /// Add every hour between `a` and `b` inclusive to `day`.
    ///
    /// Bounds may come in either order. Never removes anything: hours that
    /// were already selected stay selected.
    pub fn apply_range(
        state: &SelectedTime,
        day: WeekDay,
        a: HourIndex,
        b: HourIndex,
    ) -> SelectedTime {
        let mut next = state.clone();
        next.hours_mut(day).extend(HourIndex::span(a, b));
        log::debug!(
            "Applied range {} {:02}..={:02}",
            day,
            a.value().min(b.value()),
            a.value().max(b.value())
        );
        next
    }

    /// A fresh week with nothing selected.
    pub fn clear(_state: &SelectedTime) -> SelectedTime {
        log::info!("Cleared selection");
        SelectedTime::empty()
    }
}
