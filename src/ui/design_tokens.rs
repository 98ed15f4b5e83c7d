// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step and size used by the scanner window.

## Organization

- **Palette**: Base colors, brand gradient ends and bar tones
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use paw_feel::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card_bg = Color {
    a: opacity::CARD,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.16, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.50);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_200: Color = Color::from_rgb(0.90, 0.91, 0.92);

    // Brand colors (indigo to purple)
    pub const INDIGO_50: Color = Color::from_rgb(0.93, 0.95, 1.0);
    pub const INDIGO_100: Color = Color::from_rgb(0.88, 0.91, 1.0);
    pub const INDIGO_200: Color = Color::from_rgb(0.78, 0.82, 1.0);
    pub const INDIGO_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const INDIGO_500: Color = Color::from_rgb(0.39, 0.40, 0.95);
    pub const INDIGO_600: Color = Color::from_rgb(0.31, 0.27, 0.90);
    pub const PURPLE_600: Color = Color::from_rgb(0.58, 0.20, 0.92);

    // Semantic colors
    pub const ERROR_50: Color = Color::from_rgb(1.0, 0.95, 0.95);
    pub const ERROR_200: Color = Color::from_rgb(1.0, 0.79, 0.79);
    pub const ERROR_400: Color = Color::from_rgb(0.97, 0.44, 0.44);
    pub const ERROR_600: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Probability bar tones
    pub const BAR_STRONG: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const BAR_MEDIUM: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const BAR_WEAK: Color = Color::from_rgb(0.92, 0.70, 0.03);
    pub const BAR_FAINT: Color = Color::from_rgb(0.61, 0.64, 0.69);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const PLACEHOLDER: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Glass card background
    pub const CARD: f32 = 0.6;
    /// Inner panels sitting on the card
    pub const SURFACE: f32 = 0.5;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Window
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 680.0;
    pub const WINDOW_MIN_WIDTH: f32 = 720.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 560.0;

    // Layout
    pub const CARD_MAX_WIDTH: f32 = 1024.0;
    pub const UPLOAD_PANEL_WIDTH: f32 = 400.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 56.0;
    pub const REMOVE_BUTTON: f32 = 36.0;

    // Result panel
    pub const PLACEHOLDER_BADGE: f32 = 128.0;
    pub const BAR_HEIGHT: f32 = 10.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale, largest first.

    /// Predicted emotion headline
    pub const DISPLAY: f32 = 48.0;

    /// Placeholder glyph and badge emoji
    pub const GLYPH: f32 = 60.0;

    /// App name
    pub const TITLE_LG: f32 = 30.0;

    /// Confidence readout
    pub const TITLE_MD: f32 = 28.0;

    /// Section headers
    pub const TITLE_SM: f32 = 20.0;

    /// Button labels
    pub const BODY_LG: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Captions and hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Dashed-look upload zone and preview frame
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const XXL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 40.0,
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
    assert!(opacity::CARD > 0.0 && opacity::CARD < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::WINDOW_WIDTH >= sizing::WINDOW_MIN_WIDTH);
    assert!(sizing::WINDOW_HEIGHT >= sizing::WINDOW_MIN_HEIGHT);
    assert!(sizing::UPLOAD_PANEL_WIDTH < sizing::WINDOW_MIN_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};
