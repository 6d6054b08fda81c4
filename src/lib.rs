// Time Period Selector Library
// Weekly hour-slot selection engine plus an egui host

pub mod models;
pub mod services;
pub mod ui_egui;
