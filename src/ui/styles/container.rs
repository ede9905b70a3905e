// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic card surface used for steps and panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes without
/// hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Red-tinted card for safety red flags and the never-use-water warning.
pub fn danger_card(_theme: &Theme) -> container::Style {
    tinted_card(palette::DANGER_500)
}

/// Amber-tinted card for per-step cautions.
pub fn warning_card(_theme: &Theme) -> container::Style {
    tinted_card(palette::WARNING_500)
}

/// Green-tinted card for supplementary tips.
pub fn tip_card(_theme: &Theme) -> container::Style {
    tinted_card(palette::TIP_500)
}

/// Black surface behind the live camera preview.
pub fn preview_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Circular ring drawn over the preview to help center the eye.
pub fn guide_ring(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

fn tinted_card(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT_SUBTLE,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tinted_cards_keep_their_accent_border() {
        let theme = Theme::Dark;
        assert_eq!(danger_card(&theme).border.color, palette::DANGER_500);
        assert_eq!(warning_card(&theme).border.color, palette::WARNING_500);
        assert_eq!(tip_card(&theme).border.color, palette::TIP_500);
    }

    #[test]
    fn guide_ring_has_no_fill() {
        let style = guide_ring(&Theme::Dark);
        assert!(style.background.is_none());
    }
}
