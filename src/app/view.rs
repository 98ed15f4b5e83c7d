// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays the upload panel and the result panel side by side on a glass card,
//! with the footer below and toasts stacked on top.

use super::Message;
use crate::domain::scan::ScanSession;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::results::{self, ResultView};
use crate::ui::scanner;
use crate::ui::styles::container as container_styles;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a ScanSession<Handle>,
    pub result: &'a ResultView,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let upload = scanner::view(scanner::ViewContext {
        i18n: ctx.i18n,
        preview: ctx.session.preview(),
        selection_error: ctx.session.selection_error(),
        can_submit: ctx.session.can_submit(),
        is_submitting: ctx.session.is_submitting(),
    })
    .map(Message::Scanner);

    let result = results::view(ctx.result, ctx.i18n, ctx.spinner_rotation);

    let card = Container::new(
        Row::new()
            .height(Length::Fill)
            .push(upload)
            .push(result),
    )
    .max_width(sizing::CARD_MAX_WIDTH)
    .height(Length::Fill)
    .style(container_styles::card);

    let footer = Text::new(ctx.i18n.tr("footer"))
        .size(typography::CAPTION)
        .color(Color {
            a: opacity::PLACEHOLDER,
            ..palette::GRAY_500
        });

    let page = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(card)
        .push(footer);

    let backdrop = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::backdrop);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(toasts)
        .into()
}
