// SPDX-License-Identifier: MPL-2.0
//! The captured-snapshot panel: shows the most recent capture with discard
//! and download actions.
//!
//! Only one snapshot is held at a time; a new capture replaces the previous
//! one. Nothing is written to disk until the user picks a location through
//! the save dialog.

use crate::i18n::fluent::I18n;
use crate::media::Snapshot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

struct Held {
    snapshot: Snapshot,
    handle: Handle,
}

/// State for the snapshot panel.
#[derive(Default)]
pub struct State {
    current: Option<Held>,
    save_failed: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds a new snapshot, replacing any previous one.
    pub fn set(&mut self, snapshot: Snapshot) {
        let handle = snapshot.to_handle();
        self.current = Some(Held { snapshot, handle });
        self.save_failed = false;
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }

    /// Marks the outcome of the last save attempt.
    pub fn set_save_failed(&mut self, failed: bool) {
        self.save_failed = failed;
    }
}

/// Messages emitted by the snapshot panel.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Discard,
    Download,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked to save this snapshot; the parent runs the dialog.
    Download(Snapshot),
}

/// Process a snapshot panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Discard => {
            state.current = None;
            state.save_failed = false;
            Event::None
        }
        Message::Download => match &state.current {
            Some(held) => Event::Download(held.snapshot.clone()),
            None => Event::None,
        },
    }
}

/// Contextual data needed to render the snapshot panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the snapshot panel, or nothing when no snapshot is held.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let held = ctx.state.current.as_ref()?;

    let thumbnail = container(
        iced::widget::image(held.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SNAPSHOT_MAX_HEIGHT)),
    )
    .width(Length::Fill)
    .style(styles::container::preview_surface);

    let discard = button(text(ctx.i18n.tr("snapshot-discard")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press(Message::Discard);

    let download = button(text(ctx.i18n.tr("snapshot-download")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Download);

    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(discard)
        .push(download);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(ctx.i18n.tr("snapshot-title")).size(typography::TITLE_SM))
        .push(thumbnail)
        .push(text(ctx.i18n.tr("snapshot-local-note")).size(typography::CAPTION))
        .push(actions);

    if ctx.state.save_failed {
        column = column.push(
            text(ctx.i18n.tr("snapshot-save-failed"))
                .size(typography::BODY)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(palette::DANGER_500),
                }),
        );
    }

    Some(
        container(column)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn snapshot(first_byte: u8) -> Snapshot {
        let mut rgba = vec![0; 4];
        rgba[0] = first_byte;
        Snapshot {
            rgba: Arc::new(rgba),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn new_capture_replaces_the_previous_one() {
        let mut state = State::new();
        state.set(snapshot(1));
        state.set(snapshot(2));

        let held = state.current.as_ref().unwrap();
        assert_eq!(held.snapshot.rgba[0], 2);
    }

    #[test]
    fn discard_clears_the_snapshot() {
        let mut state = State::new();
        state.set(snapshot(1));

        let event = update(&mut state, Message::Discard);
        assert!(matches!(event, Event::None));
        assert!(!state.has_snapshot());
    }

    #[test]
    fn download_hands_the_snapshot_to_the_parent() {
        let mut state = State::new();
        state.set(snapshot(7));

        let event = update(&mut state, Message::Download);
        match event {
            Event::Download(snapshot) => assert_eq!(snapshot.rgba[0], 7),
            other => panic!("expected Download, got {:?}", other),
        }
    }

    #[test]
    fn download_without_a_snapshot_is_a_noop() {
        let mut state = State::new();
        let event = update(&mut state, Message::Download);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn a_new_capture_clears_a_stale_save_failure() {
        let mut state = State::new();
        state.set(snapshot(1));
        state.set_save_failed(true);

        state.set(snapshot(2));
        assert!(!state.save_failed);
    }

    #[test]
    fn view_is_empty_without_a_snapshot() {
        let i18n = I18n::default();
        let state = State::new();
        assert!(view(ViewContext {
            i18n: &i18n,
            state: &state,
        })
        .is_none());
    }

    #[test]
    fn view_renders_a_held_snapshot() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.set(snapshot(1));
        assert!(view(ViewContext {
            i18n: &i18n,
            state: &state,
        })
        .is_some());
    }
}
