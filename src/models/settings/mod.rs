// Settings module
// Host configuration surface for the selector

use serde::{Deserialize, Serialize};

use crate::models::language::Language;
use crate::models::selection::SelectedTime;

/// Options the host reads before building a selector. None of them affect
/// the engine; they only change what gets rendered and the initial value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub language: Language,
    /// Show the formatted summary below the grid.
    pub show_time: bool,
    /// Optional seed; `None` starts with every day empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SelectedTime>,
}
