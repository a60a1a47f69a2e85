mod calendar;
mod preferences;
mod tasks;

pub use calendar::*;
pub use preferences::*;
pub use tasks::*;
