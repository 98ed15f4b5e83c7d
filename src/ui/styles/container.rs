// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_4;

fn translucent(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Pastel gradient behind the whole window.
pub fn backdrop(theme: &Theme) -> container::Style {
    let (from, to) = if matches!(theme, Theme::Dark) {
        (palette::GRAY_900, palette::GRAY_700)
    } else {
        (palette::INDIGO_100, Color::from_rgb(0.99, 0.91, 0.95))
    };

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Radians(FRAC_PI_4))
                .add_stop(0.0, from)
                .add_stop(1.0, to),
        ))),
        ..Default::default()
    }
}

/// Main glass card holding the upload and result panels.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(translucent(base, opacity::CARD))),
        border: Border {
            color: translucent(palette::WHITE, opacity::OVERLAY_MEDIUM),
            width: border::WIDTH_SM,
            radius: radius::XXL.into(),
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Inner surface, used by the analysis breakdown.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(translucent(base, opacity::SURFACE))),
        border: Border {
            color: translucent(palette::WHITE, opacity::PLACEHOLDER),
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Frame around the selected image preview.
pub fn preview_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_LG,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Round badge behind the placeholder glyph.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INDIGO_100)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Red panel shown when the analysis fails.
pub fn error_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_50)),
        border: Border {
            color: palette::ERROR_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(palette::ERROR_400),
        ..Default::default()
    }
}

/// Gray track behind a probability bar.
pub fn bar_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a probability bar.
pub fn bar_fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
