// SPDX-License-Identifier: MPL-2.0
//! Care mode content: everyday care rules and the never-use-water warning.

use crate::content::CARE_RULES;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the care panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the care panel.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let mut rules = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("care-title")).size(typography::TITLE_SM));
    for rule in CARE_RULES {
        rules = rules.push(text(format!("• {}", rule)).size(typography::BODY));
    }

    let water_warning = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("care-water-title")).size(typography::TITLE_SM))
        .push(text(ctx.i18n.tr("care-water-body")).size(typography::BODY));

    Column::new()
        .spacing(spacing::SM)
        .push(
            container(rules)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::card),
        )
        .push(
            container(water_warning)
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
    fn care_panel_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
    }
}
