// Module exports for models

pub mod error;
pub mod hour;
pub mod language;
pub mod selection;
pub mod settings;
pub mod week_day;
