// SPDX-License-Identifier: MPL-2.0
//! Collapsible troubleshooting entries shown under the procedure steps.
//!
//! Each entry is a short question with an answer that expands on click.
//! Several entries can be open at the same time.

use crate::content::TROUBLESHOOTING;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{button, container, text, Column, Row};
use iced::{Border, Element, Length, Theme};

/// State for the troubleshooting list (tracks which entries are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: std::collections::HashSet<usize>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an entry is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Toggle an entry's expanded state.
    pub fn toggle(&mut self, index: usize) {
        if self.expanded.contains(&index) {
            self.expanded.remove(&index);
        } else {
            self.expanded.insert(index);
        }
    }
}

/// Contextual data needed to render the troubleshooting list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the troubleshooting list.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleEntry(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
}

/// Process a troubleshooting message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleEntry(index) => {
            state.toggle(index);
            Event::None
        }
    }
}

/// Render the troubleshooting list.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("troubleshooting-title")).size(typography::TITLE_SM));

    for (index, entry) in TROUBLESHOOTING.iter().enumerate() {
        column = column.push(build_entry(&ctx, index, entry.question, entry.answer));
    }

    column.into()
}

fn build_entry<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    question: &'a str,
    answer: &'a str,
) -> Element<'a, Message> {
    let is_expanded = ctx.state.is_expanded(index);

    let indicator = text(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);
    let header_content = Row::new()
        .spacing(spacing::SM)
        .push(indicator)
        .push(text(question).size(typography::BODY));

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            match status {
                button::Status::Hovered | button::Status::Pressed => button::Style {
                    background: Some(palette.background.strong.color.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                _ => button::Style {
                    background: Some(palette.background.weak.color.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            }
        })
        .on_press(Message::ToggleEntry(index));

    let mut entry_column = Column::new().spacing(spacing::XXS).push(header);

    if is_expanded {
        let answer_container = container(text(answer).size(typography::BODY))
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            });
        entry_column = entry_column.push(answer_container);
    }

    entry_column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn troubleshooting_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn troubleshooting_view_renders_every_entry_expanded() {
        let i18n = I18n::default();
        let mut state = State::new();
        for index in 0..TROUBLESHOOTING.len() {
            state.toggle(index);
        }
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_entry_expands_and_collapses() {
        let mut state = State::new();
        assert!(!state.is_expanded(0));

        update(&mut state, Message::ToggleEntry(0));
        assert!(state.is_expanded(0));

        update(&mut state, Message::ToggleEntry(0));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn multiple_entries_can_be_expanded() {
        let mut state = State::new();

        update(&mut state, Message::ToggleEntry(0));
        update(&mut state, Message::ToggleEntry(2));

        assert!(state.is_expanded(0));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(1));
        assert!(!state.is_expanded(3));
    }
}
