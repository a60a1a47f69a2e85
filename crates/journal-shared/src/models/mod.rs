mod comment;
mod preferences;
mod task;

pub use comment::*;
pub use preferences::*;
pub use task::*;
