// SPDX-License-Identifier: MPL-2.0
//! The capture-device port.
//!
//! `CaptureDevice` is the only boundary between the application and the
//! platform camera stack. The real implementation lives in
//! [`crate::camera::v4l2`]; `FakeCaptureDevice` provides deterministic
//! frames (or scripted failures) for tests.

use crate::error::CameraResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which way the preferred capture device should face.
///
/// This is a preference, not a guarantee: on hardware with a single camera
/// both values resolve to the same device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facing {
    Front,
    Rear,
}

impl Facing {
    /// The other facing, used by the switch button.
    pub fn toggled(self) -> Self {
        match self {
            Facing::Front => Facing::Rear,
            Facing::Rear => Facing::Front,
        }
    }
}

/// A single RGBA frame delivered by a frame source.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// RGBA pixel data (width × height × 4 bytes), unmirrored.
    pub rgba: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

/// A live source of frames from an acquired device.
///
/// Dropping the source releases the underlying device; there is no explicit
/// close operation.
pub trait FrameSource: Send {
    /// Blocks until the next frame is available and returns it as RGBA.
    fn next_frame(&mut self) -> CameraResult<CameraFrame>;
}

/// Factory for frame sources: `acquire` either hands over exclusive access
/// to a matching device or reports why it could not.
pub trait CaptureDevice: Send + Sync {
    fn acquire(&self, facing: Facing) -> CameraResult<Box<dyn FrameSource>>;
}

/// Test double producing gradient frames without touching any hardware.
///
/// `failing` makes `acquire` return the given error instead, for exercising
/// the denial path.
pub struct FakeCaptureDevice {
    pub width: u32,
    pub height: u32,
    pub failing: Option<crate::error::CameraError>,
}

impl Default for FakeCaptureDevice {
    fn default() -> Self {
        Self {
            width: 8,
            height: 4,
            failing: None,
        }
    }
}

impl CaptureDevice for FakeCaptureDevice {
    fn acquire(&self, _facing: Facing) -> CameraResult<Box<dyn FrameSource>> {
        if let Some(err) = &self.failing {
            return Err(err.clone());
        }
        Ok(Box::new(FakeFrameSource {
            width: self.width,
            height: self.height,
            counter: 0,
        }))
    }
}

struct FakeFrameSource {
    width: u32,
    height: u32,
    counter: u8,
}

impl FrameSource for FakeFrameSource {
    fn next_frame(&mut self) -> CameraResult<CameraFrame> {
        // Horizontal gradient, brightened per frame so frames are distinguishable.
        let mut rgba = Vec::with_capacity((self.width * self.height * 4) as usize);
        for _y in 0..self.height {
            for x in 0..self.width {
                let level = ((x * 255 / self.width.max(1)) as u8).wrapping_add(self.counter);
                rgba.extend_from_slice(&[level, level, level, 255]);
            }
        }
        self.counter = self.counter.wrapping_add(1);
        Ok(CameraFrame {
            rgba: Arc::new(rgba),
            width: self.width,
            height: self.height,
        })
    }
}
