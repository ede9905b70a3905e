// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component events are translated here into cross-cutting effects:
//! persisting preference changes, handing captures to the snapshot panel,
//! and running the save dialog.

use super::{App, Message};
use crate::config;
use crate::media::{Snapshot, SNAPSHOT_FILE_NAME};
use crate::ui::{camera_panel, mode_tabs, snapshot_panel, step_card, troubleshooting};
use iced::Task;
use tracing::{info, warn};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeTabs(mode_tabs::Message::Select(mode)) => {
                // Selecting a tab always rewinds, even for the active mode.
                self.session.switch_mode(mode);
                self.camera.force_stop();
                Task::none()
            }
            Message::StepCard(message) => {
                match message {
                    step_card::Message::Previous => self.session.previous_step(),
                    step_card::Message::Next => self.session.next_step(),
                }
                // Leaving the camera step must release the device.
                self.camera.force_stop();
                Task::none()
            }
            Message::Camera(message) => {
                match camera_panel::update(&mut self.camera, message) {
                    camera_panel::Event::None => {}
                    camera_panel::Event::Captured(snapshot) => {
                        self.snapshot.set(snapshot);
                    }
                    camera_panel::Event::FacingChanged(facing) => {
                        self.config.camera_facing = Some(facing);
                        self.persist_config();
                    }
                    camera_panel::Event::MirrorChanged(mirrored) => {
                        self.config.mirror_preview = Some(mirrored);
                        self.persist_config();
                    }
                }
                Task::none()
            }
            Message::Snapshot(message) => {
                match snapshot_panel::update(&mut self.snapshot, message) {
                    snapshot_panel::Event::None => Task::none(),
                    snapshot_panel::Event::Download(snapshot) => save_dialog_task(snapshot),
                }
            }
            Message::SnapshotSaveDialogResult { path, snapshot } => {
                if let Some(path) = path {
                    match snapshot.save_png(&path) {
                        Ok(()) => {
                            info!(path = %path.display(), "snapshot saved");
                            self.snapshot.set_save_failed(false);
                        }
                        Err(err) => {
                            warn!(%err, path = %path.display(), "snapshot save failed");
                            self.snapshot.set_save_failed(true);
                        }
                    }
                }
                Task::none()
            }
            Message::Troubleshooting(message) => {
                let troubleshooting::Event::None =
                    troubleshooting::update(&mut self.troubleshooting, message);
                Task::none()
            }
        }
    }

    fn persist_config(&self) {
        if let Err(err) = config::save(&self.config) {
            warn!(%err, "failed to persist settings");
        }
    }
}

/// Opens the save dialog and reports its outcome with the snapshot attached,
/// so the write happens only after the user picked a location.
fn save_dialog_task(snapshot: Snapshot) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(SNAPSHOT_FILE_NAME)
                .add_filter("PNG image", &["png"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::SnapshotSaveDialogResult {
            path,
            snapshot: snapshot.clone(),
        },
    )
}
