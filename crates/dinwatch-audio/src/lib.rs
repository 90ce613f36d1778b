pub mod bridge;
pub mod capture;
pub mod device;

// Public API
pub use bridge::{samples_from_bytes, SampleBatch, SampleBridge};
pub use capture::{AudioCapture, CaptureConfig};
