// Language module
// Display language for weekday names and host labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::error::SelectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn clear_label(self) -> &'static str {
        match self {
            Language::En => "Clear",
            Language::Zh => "清空",
        }
    }

    pub fn corner_label(self) -> &'static str {
        match self {
            Language::En => "Date/Time",
            Language::Zh => "日期/时间",
        }
    }

    pub fn summary_heading(self) -> &'static str {
        match self {
            Language::En => "Selected Times:",
            Language::Zh => "已选择时间:",
        }
    }
}

impl FromStr for Language {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(SelectionError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
