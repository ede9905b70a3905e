// SPDX-License-Identifier: MPL-2.0
//! The always-visible safety panel: educational disclaimer and the
//! remove-the-lens-now red flags.

use crate::content::SAFETY_RED_FLAGS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the safety panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the safety panel. Shown in every mode, never collapsed.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let disclaimer = text(ctx.i18n.tr("disclaimer")).size(typography::CAPTION);

    let mut flags = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("safety-title")).size(typography::TITLE_SM));
    for flag in SAFETY_RED_FLAGS {
        flags = flags.push(text(format!("• {}", flag)).size(typography::BODY));
    }

    Column::new()
        .spacing(spacing::SM)
        .push(disclaimer)
        .push(
            container(flags)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::danger_card),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn safety_panel_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
    }
}
