// SPDX-License-Identifier: MPL-2.0
//! V4L2 implementation of the capture-device port.
//!
//! Devices are enumerated from `/dev/video*`, filtered to those with the
//! video-capture capability, and matched to the requested facing by card
//! name. Format negotiation prefers RGB24 and falls back to YUYV.

use crate::camera::convert::{rgb_to_rgba, yuyv_to_rgba};
use crate::camera::device::{CameraFrame, CaptureDevice, Facing, FrameSource};
use crate::error::{CameraError, CameraResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// Requested capture size; the driver may negotiate something else.
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

const FOURCC_RGB24: FourCC = FourCC { repr: *b"RGB3" };
const FOURCC_YUYV: FourCC = FourCC { repr: *b"YUYV" };

const BUFFER_COUNT: u32 = 4;

/// Capture-device port backed by Video4Linux2.
#[derive(Debug, Default)]
pub struct V4l2CaptureDevice;

struct Candidate {
    path: PathBuf,
    card: String,
}

impl V4l2CaptureDevice {
    /// Lists capture-capable video nodes, sorted by device path.
    fn candidates(&self) -> CameraResult<Vec<Candidate>> {
        let mut found = Vec::new();
        let entries = std::fs::read_dir("/dev").map_err(CameraError::from)?;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with("video") {
                continue;
            }
            let path = entry.path();
            let Ok(dev) = Device::with_path(&path) else {
                debug!(path = %path.display(), "skipping unopenable video node");
                continue;
            };
            let Ok(caps) = dev.query_caps() else {
                continue;
            };
            if !caps
                .capabilities
                .contains(v4l::capability::Flags::VIDEO_CAPTURE)
            {
                continue;
            }
            found.push(Candidate {
                path,
                card: caps.card,
            });
        }
        found.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(found)
    }

    /// Picks the candidate best matching the facing preference.
    ///
    /// Card names rarely advertise orientation on desktop hardware, so an
    /// unmatched preference degrades to positional choice rather than failing.
    fn select(candidates: &[Candidate], facing: Facing) -> Option<&Candidate> {
        let by_card = |needles: &[&str]| {
            candidates.iter().find(|c| {
                let card = c.card.to_lowercase();
                needles.iter().any(|n| card.contains(n))
            })
        };
        match facing {
            Facing::Front => by_card(&["front", "user"]).or_else(|| candidates.first()),
            Facing::Rear => by_card(&["back", "rear"]).or_else(|| candidates.last()),
        }
    }
}

impl CaptureDevice for V4l2CaptureDevice {
    fn acquire(&self, facing: Facing) -> CameraResult<Box<dyn FrameSource>> {
        let candidates = self.candidates()?;
        let Some(candidate) = Self::select(&candidates, facing) else {
            return Err(CameraError::NoDevice);
        };
        info!(
            path = %candidate.path.display(),
            card = %candidate.card,
            ?facing,
            "acquiring capture device"
        );
        V4l2FrameSource::open(&candidate.path).map(|s| Box::new(s) as Box<dyn FrameSource>)
    }
}

struct V4l2FrameSource {
    // Kept open for the lifetime of the stream.
    _device: Device,
    stream: MmapStream<'static>,
    fourcc: FourCC,
    width: u32,
    height: u32,
}

impl V4l2FrameSource {
    fn open(path: &Path) -> CameraResult<Self> {
        let device = Device::with_path(path).map_err(CameraError::from)?;

        let mut negotiated = None;
        for fourcc in [FOURCC_RGB24, FOURCC_YUYV] {
            let wanted = Format::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, fourcc);
            match device.set_format(&wanted) {
                Ok(actual) if actual.fourcc == fourcc => {
                    negotiated = Some(actual);
                    break;
                }
                Ok(actual) => {
                    debug!(requested = %fourcc, offered = %actual.fourcc, "format rejected");
                }
                Err(err) => {
                    warn!(%fourcc, %err, "set_format failed");
                }
            }
        }
        let Some(format) = negotiated else {
            return Err(CameraError::Unsupported(
                "device offers neither RGB24 nor YUYV".to_string(),
            ));
        };
        info!(
            width = format.width,
            height = format.height,
            fourcc = %format.fourcc,
            "negotiated capture format"
        );

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(CameraError::from)?;

        Ok(Self {
            _device: device,
            stream,
            fourcc: format.fourcc,
            width: format.width,
            height: format.height,
        })
    }
}

impl FrameSource for V4l2FrameSource {
    fn next_frame(&mut self) -> CameraResult<CameraFrame> {
        let (buf, _meta) = self.stream.next().map_err(CameraError::from)?;
        let rgba = if self.fourcc == FOURCC_YUYV {
            yuyv_to_rgba(buf)
        } else {
            rgb_to_rgba(buf)
        };
        Ok(CameraFrame {
            rgba: Arc::new(rgba),
            width: self.width,
            height: self.height,
        })
    }
}
