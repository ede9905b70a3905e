// SPDX-License-Identifier: MPL-2.0
//! UI components for the coaching screen.
//!
//! Each component follows the same shape: a `State` (when it has one), a
//! `Message` enum, a free `update` returning an `Event` for the parent, and
//! a free `view` over a `ViewContext`.

pub mod camera_panel;
pub mod care_panel;
pub mod design_tokens;
pub mod mode_tabs;
pub mod safety_panel;
pub mod session;
pub mod snapshot_panel;
pub mod step_card;
pub mod styles;
pub mod troubleshooting;
