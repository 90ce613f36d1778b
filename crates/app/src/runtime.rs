use std::time::Duration;

use crossbeam_channel::Receiver;
use dinwatch_audio::{AudioCapture, CaptureConfig, SampleBatch, SampleBridge};
use dinwatch_foundation::{real_clock, AppError, AudioError};
use dinwatch_level::LevelDetector;
use dinwatch_timer::{format_remaining, Countdown, CountdownState};

use crate::display::TerminalDisplay;

/// Wire the pipeline and run the render loop until the countdown reaches
/// a terminal state.
///
/// The capture stream stays alive for the whole loop; dropping it on the
/// way out stops the callbacks.
pub fn run(duration: Duration, device: Option<String>) -> Result<(), AppError> {
    let (bridge, batches) = SampleBridge::channel();
    let _capture = AudioCapture::start(CaptureConfig::default(), bridge, device.as_deref())?;

    let mut display = TerminalDisplay::new()?;
    let mut detector = LevelDetector::default();
    let mut countdown = Countdown::start(real_clock(), duration);
    tracing::info!("Countdown started: {:?}", duration);

    run_loop(&batches, &mut display, &mut detector, &mut countdown)
}

fn run_loop(
    batches: &Receiver<SampleBatch>,
    display: &mut TerminalDisplay,
    detector: &mut LevelDetector,
    countdown: &mut Countdown,
) -> Result<(), AppError> {
    while !countdown.is_finished() {
        if display.drain_quit_events()? {
            countdown.quit();
            break;
        }

        // Sole suspension point: the loop runs at audio delivery rate.
        let batch = batches.recv().map_err(|_| AudioError::ChannelClosed)?;
        tracing::trace!(
            "Batch: {} samples, {:?} since capture",
            batch.samples.len(),
            batch.timestamp.elapsed()
        );

        if detector.ingest(&batch.samples) {
            tracing::debug!("Trigger: level average {:.1}", detector.average());
            countdown.trigger();
        }
        countdown.tick();

        display.draw(&format_remaining(countdown.remaining()))?;
    }

    match countdown.state() {
        CountdownState::Expired => tracing::info!("Countdown expired"),
        CountdownState::Terminated => tracing::info!("Quit requested"),
        CountdownState::Running => {}
    }
    Ok(())
}
