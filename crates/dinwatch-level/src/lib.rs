pub mod constants;
pub mod detector;
pub mod window;

pub use constants::{TRIGGER_THRESHOLD, WINDOW_CAPACITY};
pub use detector::LevelDetector;
pub use window::MovingWindow;
