// Test fixtures - reusable test data
// Provides slot builders and a pointer-event driver shared by the scenario tests

use time_period_selector::models::hour::HourIndex;
use time_period_selector::models::selection::{SelectedTime, Slot};
use time_period_selector::models::week_day::WeekDay;
use time_period_selector::services::interaction::InteractionController;

/// Build a slot from a raw hour (panics on invalid input, tests only)
pub fn slot(day: WeekDay, hour: u8) -> Slot {
    Slot::new(day, HourIndex::new(hour).expect("valid hour"))
}

/// Hours selected on `day` as plain numbers
pub fn hours_of(state: &SelectedTime, day: WeekDay) -> Vec<u8> {
    state.hours(day).iter().map(|h| h.value()).collect()
}

/// Sample selections
pub mod selections {
    use super::*;

    /// Monday 09:00~12:00 only
    pub fn monday_morning() -> SelectedTime {
        SelectedTime::from_hours([(WeekDay::Mon, &[9u8, 10, 11][..])]).expect("valid hours")
    }

    /// Office hours with a lunch break on every weekday
    pub fn office_week() -> SelectedTime {
        let hours: &[u8] = &[9, 10, 11, 13, 14, 15, 16];
        SelectedTime::from_hours(WeekDay::ALL[..5].iter().map(|&day| (day, hours)))
            .expect("valid hours")
    }
}

/// A pointer event as a host would deliver it
#[derive(Debug, Clone, Copy)]
pub enum Pointer {
    Press(Slot),
    Enter(Slot),
    /// Release over a cell, or off the grid with `None`
    Release(Option<Slot>),
}

/// Feed a sequence of events through a fresh controller, threading state
/// the way a host re-renders from the latest value after every event.
pub fn drive(initial: SelectedTime, events: &[Pointer]) -> (SelectedTime, usize) {
    let mut controller = InteractionController::new();
    let mut state = initial;
    let mut updates = 0;

    for event in events {
        let outcome = match *event {
            Pointer::Press(slot) => controller.on_press(slot),
            Pointer::Enter(slot) => controller.on_enter(&state, slot),
            Pointer::Release(slot) => controller.on_release(&state, slot),
        };
        if let Some(next) = outcome.into_update() {
            state = next;
            updates += 1;
        }
    }

    (state, updates)
}
