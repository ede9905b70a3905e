// SPDX-License-Identifier: MPL-2.0
//! The mode tab row (insertion / removal / care).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::session::Mode;
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{Element, Length};

/// Contextual data needed to render the tab row.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Mode,
}

/// Messages emitted by the tab row.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select(Mode),
}

/// Render the tab row. Selection handling lives in the parent: even clicking
/// the active tab emits `Select`, which restarts that mode's procedure.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).width(Length::Fill);

    for mode in Mode::ALL {
        let label = text(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY);
        let style = if mode == ctx.active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(label)
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::Select(mode)),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn tab_row_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Mode::Insertion,
        };
        let _element = view(ctx);
    }

    #[test]
    fn every_mode_has_a_label_key() {
        let i18n = I18n::default();
        for mode in Mode::ALL {
            assert!(!i18n.tr(mode.i18n_key()).starts_with("MISSING:"));
        }
    }
}
