// SPDX-License-Identifier: MPL-2.0
//! Captured-media handling: the snapshot type, its mirror transform, and
//! PNG export.

mod snapshot;

pub use snapshot::{flip_rgba_horizontal, Snapshot, SNAPSHOT_FILE_NAME};
