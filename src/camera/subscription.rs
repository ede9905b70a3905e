// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for the live camera preview.
//!
//! The subscription owns the capture lifecycle: it acquires the device on a
//! blocking worker, pumps frames into the UI event loop, and releases the
//! device when the subscription is dropped (the channel hang-up stops the
//! worker, which drops the frame source). A single-permit gate serializes
//! workers so a restart cannot open a second device before the old one is
//! released.

use crate::camera::device::{CaptureDevice, Facing};
use crate::camera::v4l2::V4l2CaptureDevice;
use crate::error::CameraError;
use iced::futures::SinkExt;
use iced::stream;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info};

/// At most one capture device may be held at any instant. A restarted
/// session's worker waits here until the previous worker has dropped its
/// frame source, so the re-acquire never races the release.
static DEVICE_GATE: Semaphore = Semaphore::const_new(1);

/// Subscription ID for a preview session.
/// Each start (and each facing switch) gets a fresh ID so the subscription
/// is torn down and recreated rather than reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PreviewId(u64);

/// Events emitted by the preview subscription.
#[derive(Debug, Clone)]
pub enum PreviewEvent {
    /// A new preview frame is ready for display.
    FrameReady {
        /// RGBA pixel data, unmirrored.
        rgba: Arc<Vec<u8>>,
        width: u32,
        height: u32,
    },

    /// Acquisition or streaming failed; the worker has stopped.
    Failed(CameraError),
}

/// Creates a preview subscription for one capture session.
///
/// `session_id` must change whenever the preview is restarted (including a
/// facing switch) so Iced replaces the old subscription instead of keeping
/// the stale device open.
pub fn preview(session_id: u64, facing: Facing) -> iced::Subscription<PreviewEvent> {
    iced::Subscription::run_with(
        (PreviewId(session_id), facing),
        |&(PreviewId(session_id), facing)| {
        stream::channel(
            4,
            move |mut output: iced::futures::channel::mpsc::Sender<PreviewEvent>| async move {
            let Ok(permit) = DEVICE_GATE.acquire().await else {
                // The gate is never closed.
                return;
            };

            let (tx, mut rx) = mpsc::channel(2);

            // The worker holds the permit for as long as it holds the device.
            let worker = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let device = V4l2CaptureDevice;
                capture_loop(&device, facing, &tx);
            });

            while let Some(event) = rx.recv().await {
                if output.send(event).await.is_err() {
                    break;
                }
            }
            drop(rx);
            let _ = worker.await;
            debug!(session_id, "preview worker finished");

            // Keep the subscription alive but idle until Iced drops it.
            std::future::pending::<()>().await;
            },
            )
        },
    )
}

/// Blocking capture pump: acquires a frame source and forwards frames until
/// the receiver hangs up or the device errors.
///
/// Runs on a blocking worker thread. Dropping out of this function drops the
/// frame source, which releases the device.
pub(crate) fn capture_loop(
    device: &dyn CaptureDevice,
    facing: Facing,
    tx: &mpsc::Sender<PreviewEvent>,
) {
    let mut source = match device.acquire(facing) {
        Ok(source) => source,
        Err(err) => {
            info!(%err, ?facing, "capture device acquisition failed");
            let _ = tx.blocking_send(PreviewEvent::Failed(err));
            return;
        }
    };

    loop {
        match source.next_frame() {
            Ok(frame) => {
                let event = PreviewEvent::FrameReady {
                    rgba: frame.rgba,
                    width: frame.width,
                    height: frame.height,
                };
                // A closed channel means the UI stopped the preview.
                if tx.blocking_send(event).is_err() {
                    debug!("preview receiver hung up, releasing device");
                    return;
                }
            }
            Err(err) => {
                info!(%err, "frame capture failed, stopping preview");
                let _ = tx.blocking_send(PreviewEvent::Failed(err));
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::device::FakeCaptureDevice;

    #[tokio::test]
    async fn capture_loop_streams_frames_until_hangup() {
        let (tx, mut rx) = mpsc::channel(2);
        let worker = tokio::task::spawn_blocking(move || {
            let device = FakeCaptureDevice::default();
            capture_loop(&device, Facing::Front, &tx);
        });

        match rx.recv().await {
            Some(PreviewEvent::FrameReady { rgba, width, height }) => {
                assert_eq!((width, height), (8, 4));
                assert_eq!(rgba.len(), 8 * 4 * 4);
            }
            other => panic!("expected FrameReady, got {:?}", other),
        }

        // Hanging up must stop the worker.
        drop(rx);
        worker.await.expect("worker should exit cleanly");
    }

    #[tokio::test]
    async fn restart_waits_for_the_old_worker_to_release_the_device() {
        let permit = DEVICE_GATE.acquire().await.expect("gate is never closed");
        let (tx, mut rx) = mpsc::channel(2);
        let worker = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let device = FakeCaptureDevice::default();
            capture_loop(&device, Facing::Front, &tx);
        });

        // While the first worker runs, a second session cannot open a device.
        assert!(rx.recv().await.is_some());
        assert!(DEVICE_GATE.try_acquire().is_err());

        drop(rx);
        worker.await.expect("worker should exit cleanly");
        assert!(DEVICE_GATE.try_acquire().is_ok());
    }

    #[tokio::test]
    async fn capture_loop_reports_denial_and_stops() {
        let (tx, mut rx) = mpsc::channel(2);
        let worker = tokio::task::spawn_blocking(move || {
            let device = FakeCaptureDevice {
                failing: Some(CameraError::PermissionDenied),
                ..FakeCaptureDevice::default()
            };
            capture_loop(&device, Facing::Front, &tx);
        });

        match rx.recv().await {
            Some(PreviewEvent::Failed(err)) => assert_eq!(err, CameraError::PermissionDenied),
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(rx.recv().await.is_none(), "channel should close after failure");
        worker.await.expect("worker should exit cleanly");
    }

    #[test]
    fn preview_events_can_be_cloned_and_debugged() {
        let event = PreviewEvent::Failed(CameraError::Busy);
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Busy"));
    }
}
