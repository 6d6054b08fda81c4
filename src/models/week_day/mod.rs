// Week day module
// Fixed Monday-first weekday ordering shared by the grid and the summary

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::error::SelectionError;
use crate::models::language::Language;

/// Row of the weekly grid. Variant order is the canonical display order, so
/// the derived `Ord` sorts Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekDay {
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Mon,
        WeekDay::Tue,
        WeekDay::Wed,
        WeekDay::Thu,
        WeekDay::Fri,
        WeekDay::Sat,
        WeekDay::Sun,
    ];

    /// Zero-based row index (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WeekDay::Mon => "Mon",
            WeekDay::Tue => "Tue",
            WeekDay::Wed => "Wed",
            WeekDay::Thu => "Thu",
            WeekDay::Fri => "Fri",
            WeekDay::Sat => "Sat",
            WeekDay::Sun => "Sun",
        }
    }

    pub fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::En => match self {
                WeekDay::Mon => "Monday",
                WeekDay::Tue => "Tuesday",
                WeekDay::Wed => "Wednesday",
                WeekDay::Thu => "Thursday",
                WeekDay::Fri => "Friday",
                WeekDay::Sat => "Saturday",
                WeekDay::Sun => "Sunday",
            },
            Language::Zh => match self {
                WeekDay::Mon => "周一",
                WeekDay::Tue => "周二",
                WeekDay::Wed => "周三",
                WeekDay::Thu => "周四",
                WeekDay::Fri => "周五",
                WeekDay::Sat => "周六",
                WeekDay::Sun => "周日",
            },
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl From<WeekDay> for Weekday {
    fn from(day: WeekDay) -> Self {
        match day {
            WeekDay::Mon => Weekday::Mon,
            WeekDay::Tue => Weekday::Tue,
            WeekDay::Wed => Weekday::Wed,
            WeekDay::Thu => Weekday::Thu,
            WeekDay::Fri => Weekday::Fri,
            WeekDay::Sat => Weekday::Sat,
            WeekDay::Sun => Weekday::Sun,
        }
    }
}

impl FromStr for WeekDay {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownWeekDay(s.to_string()))
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
