// Selection module
// Per-day selected hours, grid slots and compacted hour ranges

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::models::error::SelectionError;
use crate::models::hour::{HourIndex, HOURS_PER_DAY};
use crate::models::week_day::WeekDay;

/// One selectable (weekday, hour) cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: WeekDay,
    pub hour: HourIndex,
}

impl Slot {
    pub const fn new(day: WeekDay, hour: HourIndex) -> Self {
        Self { day, hour }
    }
}

/// Maximal run of consecutive selected hours, rendered as `[start, end)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Inclusive.
    start: u8,

    /// Exclusive, at most 24.
    end: u8,
}

impl TimeRange {
    /// Returns `None` unless `start < end <= 24`.
    pub fn new(start: u8, end: u8) -> Option<Self> {
        (start < end && end <= HOURS_PER_DAY).then_some(Self { start, end })
    }

    /// Range spanning `first..=last`.
    pub fn covering(first: HourIndex, last: HourIndex) -> Self {
        let (first, last) = if first <= last { (first, last) } else { (last, first) };
        Self {
            start: first.value(),
            end: last.value() + 1,
        }
    }

    pub fn start(self) -> u8 {
        self.start
    }

    pub fn end(self) -> u8 {
        self.end
    }

    /// Number of hours covered.
    pub fn len(self) -> u8 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    pub fn contains(self, hour: HourIndex) -> bool {
        (self.start <= hour.value()) && (hour.value() < self.end)
    }
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00~{:02}:00", self.start, self.end)
    }
}

type DayMap = BTreeMap<WeekDay, BTreeSet<HourIndex>>;

/// Selected hours for every day of the week.
///
/// All seven days are always present. Each day's hours live in an ordered
/// set, so they are unique and always read back in ascending order.
///
/// Serializes as an object keyed by short day name, e.g.
/// `{"Mon":[9,10],"Tue":[],...}`; days missing from an input document are
/// filled in as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "DayMap", into = "DayMap")]
pub struct SelectedTime {
    days: [BTreeSet<HourIndex>; 7],
}

impl SelectedTime {
    /// All seven days empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a selection from raw hour numbers, rejecting any outside `0..=23`.
    pub fn from_hours<'a, I>(entries: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = (WeekDay, &'a [u8])>,
    {
        let mut selected = Self::empty();
        for (day, hours) in entries {
            for &hour in hours {
                selected.days[day.index()].insert(HourIndex::new(hour)?);
            }
        }
        Ok(selected)
    }

    pub fn hours(&self, day: WeekDay) -> &BTreeSet<HourIndex> {
        &self.days[day.index()]
    }

    pub(crate) fn hours_mut(&mut self, day: WeekDay) -> &mut BTreeSet<HourIndex> {
        &mut self.days[day.index()]
    }

    /// The day's hours materialized as an ascending sequence.
    pub fn sorted_hours(&self, day: WeekDay) -> Vec<HourIndex> {
        self.hours(day).iter().copied().collect()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.hours(slot.day).contains(&slot.hour)
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(BTreeSet::is_empty)
    }

    /// Total number of selected slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(BTreeSet::len).sum()
    }

    /// Days in canonical order with their hours.
    pub fn iter(&self) -> impl Iterator<Item = (WeekDay, &BTreeSet<HourIndex>)> {
        WeekDay::ALL.into_iter().zip(self.days.iter())
    }
}

impl From<DayMap> for SelectedTime {
    fn from(map: DayMap) -> Self {
        let mut selected = Self::empty();
        for (day, hours) in map {
            selected.days[day.index()] = hours;
        }
        selected
    }
}

impl From<SelectedTime> for DayMap {
    fn from(selected: SelectedTime) -> Self {
        WeekDay::ALL.into_iter().zip(selected.days).collect()
    }
}
