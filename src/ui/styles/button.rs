// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

fn brand_gradient(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Radians(FRAC_PI_2))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Main call to action ("Analyze Emotion").
///
/// A disabled button with an image selected means a submission is in
/// flight, so `busy` picks the waiting look over the plain gray one.
pub fn analyze(busy: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = button::Style {
            background: Some(brand_gradient(palette::INDIGO_600, palette::PURPLE_600)),
            text_color: WHITE,
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        };

        match status {
            button::Status::Active => base,
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(brand_gradient(palette::INDIGO_500, palette::PURPLE_600)),
                shadow: shadow::XL,
                ..base
            },
            button::Status::Disabled if busy => button::Style {
                background: Some(Background::Color(palette::INDIGO_400)),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(palette::GRAY_300)),
                shadow: shadow::NONE,
                ..base
            },
        }
    }
}

/// Round "remove image" button floating over the preview.
pub fn remove(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::ERROR_50, palette::ERROR_600)
        }
        _ => (Color { a: 0.9, ..WHITE }, palette::GRAY_700),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Borderless button wrapping the upload drop zone.
pub fn upload_zone(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::INDIGO_50, palette::INDIGO_400)
        }
        _ => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::INDIGO_50
            },
            palette::INDIGO_200,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_500,
        border: Border {
            color: border_color,
            width: border::WIDTH_LG,
            radius: radius::XL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
