// SPDX-License-Identifier: MPL-2.0
//! Upload panel view.
//!
//! Shows either the drop zone or the selected image preview, the inline
//! selection error and the analyze button. Selection changes are disabled
//! while a submission is in flight.

use crate::domain::scan::SelectionError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, tooltip, Column, Container, Stack, Text};
use iced::{alignment, font, ContentFit, Element, Font, Length};

/// Messages emitted by the upload panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenFileDialog,
    RemoveImage,
    Analyze,
}

/// Everything the panel needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: Option<&'a Handle>,
    pub selection_error: Option<&'a SelectionError>,
    pub can_submit: bool,
    pub is_submitting: bool,
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("app-title"))
                .size(typography::TITLE_LG)
                .font(BOLD)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(ctx.i18n.tr("app-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );

    let selection_area = match ctx.preview {
        Some(handle) => preview(handle, ctx.i18n, ctx.is_submitting),
        None => drop_zone(ctx.i18n, ctx.is_submitting),
    };

    let mut content = Column::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(header)
        .push(selection_area);

    if let Some(error) = ctx.selection_error {
        content = content.push(
            Text::new(ctx.i18n.tr(error.i18n_key()))
                .size(typography::BODY)
                .color(palette::ERROR_600),
        );
    }

    content = content.push(analyze_button(
        ctx.i18n,
        ctx.can_submit,
        ctx.is_submitting,
    ));

    Container::new(content)
        .width(Length::Fixed(sizing::UPLOAD_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn drop_zone(i18n: &I18n, is_submitting: bool) -> Element<'_, Message> {
    let prompt = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("📤").size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("upload-prompt")).font(BOLD))
        .push(
            Text::new(i18n.tr("upload-formats"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("upload-drop-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    button(
        Container::new(prompt)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(button_styles::upload_zone)
    .on_press_maybe((!is_submitting).then_some(Message::OpenFileDialog))
    .into()
}

fn preview<'a>(handle: &'a Handle, i18n: &'a I18n, is_submitting: bool) -> Element<'a, Message> {
    let image = Image::new(handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let remove = button(
        Text::new("✕").size(typography::BODY_LG).center(),
    )
    .width(Length::Fixed(sizing::REMOVE_BUTTON))
    .height(Length::Fixed(sizing::REMOVE_BUTTON))
    .style(button_styles::remove)
    .on_press_maybe((!is_submitting).then_some(Message::RemoveImage));

    let remove = tooltip(
        remove,
        Text::new(i18n.tr("remove-image")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let overlay = Container::new(remove)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::SM);

    Container::new(Stack::new().push(image).push(overlay))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(container_styles::preview_frame)
        .into()
}

fn analyze_button(i18n: &I18n, can_submit: bool, is_submitting: bool) -> Element<'_, Message> {
    let label = if is_submitting {
        i18n.tr("analyzing")
    } else {
        format!("✨ {}", i18n.tr("analyze-button"))
    };

    button(
        Text::new(label)
            .size(typography::BODY_LG)
            .font(BOLD)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::MD)
    .style(button_styles::analyze(is_submitting))
    .on_press_maybe(can_submit.then_some(Message::Analyze))
    .into()
}
