pub mod api;
pub mod calendar;
pub mod models;

pub use models::*;
