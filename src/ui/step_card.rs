// SPDX-License-Identifier: MPL-2.0
//! The instruction card for one procedure step, with previous/next
//! navigation and a progress label.

use crate::content::Step;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

/// Contextual data needed to render a step card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub step: &'a Step,
    /// Zero-based index of the step within its procedure.
    pub index: usize,
    /// Total number of steps in the procedure.
    pub total: usize,
}

/// Messages emitted by the step card.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Previous,
    Next,
}

/// Render the step card. The edge buttons are disabled rather than hidden,
/// so the navigation row keeps a stable layout.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(ctx.step.title).size(typography::TITLE_SM));

    if let Some(rationale) = ctx.step.why_it_matters {
        column = column.push(text(rationale).size(typography::BODY));
    }

    let mut checklist = Column::new().spacing(spacing::XXS);
    for item in ctx.step.checklist {
        checklist = checklist.push(text(format!("• {}", item)).size(typography::BODY));
    }
    column = column.push(checklist);

    if !ctx.step.tips.is_empty() {
        let mut tips = Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("tips-title")).size(typography::CAPTION));
        for tip in ctx.step.tips {
            tips = tips.push(text(format!("• {}", tip)).size(typography::BODY));
        }
        column = column.push(
            container(tips)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::tip_card),
        );
    }

    if let Some(warning) = ctx.step.warning {
        let warning_block = Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("warning-title")).size(typography::CAPTION))
            .push(text(warning).size(typography::BODY));
        column = column.push(
            container(warning_block)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::warning_card),
        );
    }

    column = column.push(navigation(ctx.i18n, ctx.index, ctx.total));

    container(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Render only the previous/progress/next row. Used on steps whose card is
/// replaced by another panel, so navigation stays available.
pub fn navigation(i18n: &I18n, index: usize, total: usize) -> Element<'_, Message> {
    let mut previous = button(text(i18n.tr("nav-previous")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    if index > 0 {
        previous = previous.on_press(Message::Previous);
    }

    let mut next = button(text(i18n.tr("nav-next")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if index + 1 < total {
        next = next.on_press(Message::Next);
    }

    let progress = text(format!(
        "{} {}/{}",
        i18n.tr("step-progress-label"),
        index + 1,
        total
    ))
    .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(progress)
        .push(next)
        .into()
}
