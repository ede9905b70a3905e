// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the coaching UI.
//!
//! - **Palette**: base colors, including the semantic danger/warning/tip scale
//! - **Opacity**: standardized opacity levels for overlays and surfaces
//! - **Spacing**: 8px-grid spacing scale
//! - **Sizing**: component sizes (preview area, guide ring, buttons)
//! - **Typography**: font size scale
//! - **Border / Radius / Shadow**: stroke and elevation scales
//!
//! Tokens keep their ratios (e.g. `spacing::MD = spacing::XS * 2`); the
//! compile-time asserts at the bottom catch accidental reordering.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (teal scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.35, 0.72, 0.72);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.62, 0.62);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.5, 0.52);

    // Semantic colors
    /// Danger surfaces: safety red flags, never-use-water warning.
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    /// Warning surfaces: per-step cautions.
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    /// Tip surfaces: supplementary hints.
    pub const TIP_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT_SUBTLE: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for panels and cards.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Maximum height of the live camera preview area.
    pub const PREVIEW_MAX_HEIGHT: f32 = 360.0;

    /// Diameter of the eye-alignment guide ring drawn over the preview.
    pub const GUIDE_RING: f32 = 160.0;

    /// Maximum height of the captured snapshot thumbnail.
    pub const SNAPSHOT_MAX_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - main screen heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - panel headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - step titles, section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - checklist items, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - progress label, local-only note, badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - card outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, guide ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill / ring shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Sizing validation
    assert!(sizing::PREVIEW_MAX_HEIGHT > sizing::GUIDE_RING);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
