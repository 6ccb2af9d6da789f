// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast capsule and its overlay stack.
//!
//! A trimmed token set in the W3C Design Tokens spirit: palette, opacity,
//! spacing, sizing, typography, radius, and shadows, scoped to what the
//! toast renderer actually draws.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    // Semantic tints callers can pass to `Toast::tint`.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Capsule drop shadow strength.
    pub const SHADOW: f32 = 0.12;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Horizontal padding inside the capsule.
    pub const CAPSULE_PADDING_X: f32 = 15.0;
    /// Vertical padding inside the capsule.
    pub const CAPSULE_PADDING_Y: f32 = 8.0;
    /// Widest a capsule may grow, as a fraction of the overlay width.
    pub const TOAST_WIDTH_FRACTION: f32 = 0.7;
    /// Distance between the anchored screen edge and the newest toast.
    pub const STACK_EDGE_PADDING: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Capsule title text.
    pub const BODY: f32 = 14.0;

    /// Glyph rendered before the title.
    pub const GLYPH: f32 = 18.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::opacity;
    use iced::{Color, Shadow, Vector};

    /// Soft drop shadow under each capsule.
    pub const CAPSULE: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::SHADOW,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_WIDTH_FRACTION > 0.0 && sizing::TOAST_WIDTH_FRACTION <= 1.0);
    assert!(sizing::CAPSULE_PADDING_X > sizing::CAPSULE_PADDING_Y);

    // Typography validation
    assert!(typography::GLYPH > typography::BODY);
};
