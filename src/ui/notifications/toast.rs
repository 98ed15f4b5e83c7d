// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: a white card with a severity stripe on the left.

use super::manager::{Manager, Message, NotificationId};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Width of the severity stripe.
const STRIPE_WIDTH: f32 = 4.0;

pub struct Toast;

impl Toast {
    /// Resolves the toast text in the current locale.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }

    pub fn view<'a>(
        id: NotificationId,
        notification: &'a Notification,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let stripe = Container::new(Space::new())
            .width(Length::Fixed(STRIPE_WIDTH))
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(notification.severity().glyph())
                    .size(typography::TITLE_SM)
                    .color(accent),
            )
            .push(
                Text::new(Self::message_text(notification, i18n))
                    .size(typography::BODY)
                    .color(palette::GRAY_700)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("✕").size(typography::BODY))
                    .padding(spacing::XXS)
                    .style(dismiss_style)
                    .on_press(Message::Dismiss(id)),
            );

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .height(Length::Shrink)
                .push(stripe)
                .push(body),
        )
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(card_style)
        .into()
    }

    /// Stacks the visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, (id, notification)| {
                column.push(Self::view(id, notification, i18n))
            });

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::GRAY_700),
        ..container::Style::default()
    }
}

fn dismiss_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|a| Background::Color(Color { a, ..palette::GRAY_400 }));

    button::Style {
        background,
        text_color: palette::GRAY_500,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
