mod app;
mod palette;
pub mod selector;
pub mod slot_grid;

pub use app::TimePeriodApp;
pub use selector::TimePeriodSelector;
