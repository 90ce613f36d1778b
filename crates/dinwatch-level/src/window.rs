use std::collections::VecDeque;

/// Bounded FIFO of magnitude values with an incrementally maintained sum.
///
/// The running sum keeps `push` O(1), which matters because the window is
/// fed once per audio sample at capture rates (thousands per second).
pub struct MovingWindow {
    values: VecDeque<f32>,
    sum: f64,
    capacity: usize,
}

impl MovingWindow {
    /// Create a window holding at most `capacity` values.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be non-zero");
        Self {
            values: VecDeque::with_capacity(capacity),
            sum: 0.0,
            capacity,
        }
    }

    /// Insert one value, evicting the oldest once at capacity.
    pub fn push(&mut self, value: f32) {
        if self.values.len() == self.capacity {
            if let Some(evicted) = self.values.pop_front() {
                self.sum -= evicted as f64;
            }
        }
        self.values.push_back(value);
        self.sum += value as f64;
    }

    /// Mean of the currently held values. An empty window averages to 0.0.
    pub fn average(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        (self.sum / self.values.len() as f64) as f32
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
