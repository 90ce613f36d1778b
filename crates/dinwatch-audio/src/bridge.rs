use crossbeam_channel::{bounded, Receiver, Sender};
use std::time::Instant;

/// One capture callback's worth of samples, owned by the batch.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    pub samples: Vec<i16>,
    pub timestamp: Instant,
}

/// Producer side of the capacity-1 handoff between the capture callback
/// and the render loop.
///
/// A send blocks while the previous batch is still unconsumed, so the
/// capture thread lags the loop by at most one buffer.
#[derive(Clone)]
pub struct SampleBridge {
    tx: Sender<SampleBatch>,
}

impl SampleBridge {
    /// Create the bridge together with its consumer endpoint.
    pub fn channel() -> (Self, Receiver<SampleBatch>) {
        let (tx, rx) = bounded(1);
        (Self { tx }, rx)
    }

    /// Reinterpret a capture buffer of native-endian i16 bytes and hand an
    /// owned copy to the consumer. A trailing odd byte is truncated; the
    /// caller's buffer is not retained past this call.
    pub fn push_bytes(&self, bytes: &[u8]) {
        self.deliver(samples_from_bytes(bytes));
    }

    /// Hand an owned copy of already-converted samples to the consumer.
    pub fn push_samples(&self, samples: &[i16]) {
        self.deliver(samples.to_vec());
    }

    fn deliver(&self, samples: Vec<i16>) {
        let batch = SampleBatch {
            samples,
            timestamp: Instant::now(),
        };
        if self.tx.send(batch).is_err() {
            tracing::debug!("Sample batch dropped: consumer has shut down");
        }
    }
}

/// Pair native-endian bytes into signed 16-bit samples.
pub fn samples_from_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect()
}
