// SPDX-License-Identifier: MPL-2.0
//! `lens_coach` is a step-by-step coach for first-time contact-lens wearers,
//! built with the Iced GUI framework.
//!
//! It walks the user through insertion and removal procedures as ordered step
//! cards, shows lens-care and safety guidance, and offers an optional live
//! camera preview with an alignment guide for taking a local snapshot. No
//! data ever leaves the device.

pub mod app;
pub mod camera;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
