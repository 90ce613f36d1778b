use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};

use super::bridge::SampleBridge;
use super::device;
use dinwatch_foundation::AudioError;

/// Fixed capture configuration: mono signed 16-bit at 16 kHz, delivered in
/// 512-sample buffers per callback.
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfig {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub buffer_size: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 16_000,
            channels: 1,
            buffer_size: 512,
        }
    }
}

/// Live input stream feeding the sample bridge. Dropping this stops the
/// capture callbacks.
pub struct AudioCapture {
    _stream: Stream,
}

impl AudioCapture {
    /// Open the device, build the input stream, and start capturing.
    /// Every failure here is fatal; there is no recovery path.
    pub fn start(
        config: CaptureConfig,
        bridge: SampleBridge,
        device_name: Option<&str>,
    ) -> Result<Self, AudioError> {
        let device = device::open_input_device(device_name)?;
        let sample_format = device.default_input_config()?.sample_format();

        let stream_config = StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate_hz),
            buffer_size: cpal::BufferSize::Fixed(config.buffer_size),
        };
        tracing::info!(
            "Starting capture: {} Hz, {} ch, {}-sample buffers, format {:?}",
            config.sample_rate_hz,
            config.channels,
            config.buffer_size,
            sample_format
        );

        let stream = build_stream(&device, &stream_config, sample_format, bridge)?;
        stream.play()?;

        Ok(Self { _stream: stream })
    }
}

fn build_stream(
    device: &cpal::Device,
    config: &StreamConfig,
    sample_format: SampleFormat,
    bridge: SampleBridge,
) -> Result<Stream, AudioError> {
    let err_fn = |err: cpal::StreamError| {
        tracing::error!("Audio stream error: {}", err);
    };

    // Reuse one conversion buffer per callback thread to keep the non-i16
    // paths allocation-free up to the handoff copy.
    thread_local! {
        static CONVERT_BUFFER: std::cell::RefCell<Vec<i16>> =
            const { std::cell::RefCell::new(Vec::new()) };
    }

    let stream = match sample_format {
        // The device already delivers native-endian i16 bytes; the bridge
        // owns the reinterpretation and the copy.
        SampleFormat::I16 => device.build_input_stream_raw(
            config,
            SampleFormat::I16,
            move |data: &cpal::Data, _: &cpal::InputCallbackInfo| {
                bridge.push_bytes(data.bytes());
            },
            err_fn,
            None,
        )?,
        SampleFormat::F32 => device.build_input_stream(
            config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                CONVERT_BUFFER.with(|buf| {
                    let mut converted = buf.borrow_mut();
                    converted.clear();
                    converted.reserve(data.len());
                    // Clamp [-1.0, 1.0] and scale to i16
                    for &s in data {
                        converted.push((s.clamp(-1.0, 1.0) * 32767.0).round() as i16);
                    }
                    bridge.push_samples(&converted);
                });
            },
            err_fn,
            None,
        )?,
        SampleFormat::U16 => device.build_input_stream(
            config,
            move |data: &[u16], _: &cpal::InputCallbackInfo| {
                CONVERT_BUFFER.with(|buf| {
                    let mut converted = buf.borrow_mut();
                    converted.clear();
                    converted.reserve(data.len());
                    // Convert unsigned [0,65535] to signed [-32768,32767]
                    for &s in data {
                        converted.push((s as i32 - 32768) as i16);
                    }
                    bridge.push_samples(&converted);
                });
            },
            err_fn,
            None,
        )?,
        other => {
            return Err(AudioError::FormatNotSupported {
                format: format!("{:?}", other),
            });
        }
    };

    Ok(stream)
}
