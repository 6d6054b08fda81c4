// Service module exports

pub mod interaction;
pub mod range_format;
pub mod selection;
pub mod settings;
