// Error module
// Domain errors raised when constructing selection values at the boundary

use thiserror::Error;

/// Errors produced while validating values coming from outside the engine
/// (configuration files, seeds, host input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Hour {0} is out of range (expected 0..=23)")]
    HourOutOfRange(u8),
    #[error("Unknown week day '{0}'")]
    UnknownWeekDay(String),
    #[error("Unknown language '{0}' (expected 'en' or 'zh')")]
    UnknownLanguage(String),
}
