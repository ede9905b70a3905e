// SPDX-License-Identifier: MPL-2.0
//! Camera capability: acquisition and release of a capture device, pixel
//! format conversion, and the Iced subscription that streams preview frames
//! into the UI.
//!
//! Platform access is isolated behind the [`CaptureDevice`] port so the UI
//! and tests never touch V4L2 directly.

pub mod convert;
pub mod device;
pub mod subscription;
pub mod v4l2;

pub use device::{CameraFrame, CaptureDevice, Facing, FrameSource};
pub use subscription::{preview, PreviewEvent};
