pub mod format;
pub mod state;

pub use format::format_remaining;
pub use state::{Countdown, CountdownState};
