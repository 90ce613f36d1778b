use crate::constants::{TRIGGER_THRESHOLD, WINDOW_CAPACITY};
use crate::window::MovingWindow;

/// Decides when ambient sound is loud enough to reset the countdown.
pub struct LevelDetector {
    window: MovingWindow,
    threshold: f32,
}

impl LevelDetector {
    pub fn new(capacity: usize, threshold: f32) -> Self {
        Self {
            window: MovingWindow::new(capacity),
            threshold,
        }
    }

    /// Feed one batch of samples as absolute magnitudes and report whether
    /// the smoothed level now exceeds the threshold.
    pub fn ingest(&mut self, samples: &[i16]) -> bool {
        for &sample in samples {
            self.window.push(f32::from(sample).abs());
        }

        let average = self.window.average();
        tracing::trace!(
            "LevelDetector: avg={:.1}, threshold={}, samples={}",
            average,
            self.threshold,
            samples.len()
        );
        average > self.threshold
    }

    pub fn average(&self) -> f32 {
        self.window.average()
    }
}

impl Default for LevelDetector {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY, TRIGGER_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_stays_below_threshold() {
        let mut detector = LevelDetector::new(256, 1000.0);
        let silence = vec![0i16; 512];
        assert!(!detector.ingest(&silence));
        assert_eq!(detector.average(), 0.0);
    }

    #[test]
    fn test_loud_batch_trips_threshold() {
        let mut detector = LevelDetector::new(256, 1000.0);
        let loud = vec![8000i16; 512];
        assert!(detector.ingest(&loud));
    }

    #[test]
    fn test_negative_samples_count_as_magnitude() {
        let mut detector = LevelDetector::new(256, 1000.0);
        let loud = vec![-8000i16; 512];
        assert!(detector.ingest(&loud));
        assert!((detector.average() - 8000.0).abs() < 1.0);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut detector = LevelDetector::new(256, 1000.0);
        assert!(!detector.ingest(&[]));
        assert_eq!(detector.average(), 0.0);
    }

    #[test]
    fn test_loud_burst_decays_as_window_refills() {
        let mut detector = LevelDetector::new(64, 1000.0);
        assert!(detector.ingest(&vec![20_000i16; 64]));

        // A full window of silence displaces the burst entirely.
        assert!(!detector.ingest(&vec![0i16; 64]));
        assert_eq!(detector.average(), 0.0);
    }

    #[test]
    fn test_i16_min_magnitude_does_not_overflow() {
        let mut detector = LevelDetector::new(16, 1000.0);
        assert!(detector.ingest(&[i16::MIN; 16]));
        assert!((detector.average() - 32768.0).abs() < 1.0);
    }
}
