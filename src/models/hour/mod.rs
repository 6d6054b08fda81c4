// Hour module
// Validated hour-of-day index used by every selection operation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::error::SelectionError;

/// Number of one-hour slots in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// Start of a one-hour slot, always within `0..=23`.
///
/// The only way to build one from a raw number is [`HourIndex::new`] (or the
/// `TryFrom` impls), so an out-of-range hour can never reach a selection set.
///
/// # Examples
/// ```
/// use time_period_selector::models::hour::HourIndex;
///
/// let nine = HourIndex::new(9).unwrap();
/// assert_eq!(nine.value(), 9);
/// assert!(HourIndex::new(24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourIndex(u8);

impl HourIndex {
    pub const MIN: HourIndex = HourIndex(0);
    pub const MAX: HourIndex = HourIndex(HOURS_PER_DAY - 1);

    pub fn new(hour: u8) -> Result<Self, SelectionError> {
        if hour < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(SelectionError::HourOutOfRange(hour))
        }
    }

    /// Build an hour by clamping into `0..=23` instead of rejecting.
    pub fn saturating(hour: u8) -> Self {
        Self(hour.min(HOURS_PER_DAY - 1))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The following hour, or `None` past 23.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Every hour of the day in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = HourIndex> + ExactSizeIterator {
        (0..HOURS_PER_DAY).map(HourIndex)
    }

    /// Inclusive run of hours between two bounds, given in either order.
    pub fn span(a: HourIndex, b: HourIndex) -> impl Iterator<Item = HourIndex> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo.0..=hi.0).map(HourIndex)
    }
}

impl TryFrom<u8> for HourIndex {
    type Error = SelectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourIndex> for u8 {
    fn from(hour: HourIndex) -> Self {
        hour.0
    }
}

impl fmt::Display for HourIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
