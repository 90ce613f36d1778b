//! Level detection constants for the countdown trigger

/// Number of magnitude samples held by the moving window.
/// At 16 kHz mono this spans 256 ms of audio.
pub const WINDOW_CAPACITY: usize = 4096;

/// Moving-average magnitude above which the countdown resets.
/// Raw i16 magnitude units; tweak this to match your soundcard gain.
pub const TRIGGER_THRESHOLD: f32 = 1000.0;
