// SPDX-License-Identifier: MPL-2.0
//! Result panel rendering.

use super::display_model::{BarTone, BreakdownRow, ResultView};
use super::emotion::{DEFAULT_GLYPH, ERROR_GLYPH};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, font, Color, Element, Font, Length};

/// Resolution of a bar's fill ratio when split into layout portions.
const BAR_PORTIONS: u16 = 1000;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

#[must_use]
pub fn tone_color(tone: BarTone) -> Color {
    match tone {
        BarTone::Strong => palette::BAR_STRONG,
        BarTone::Medium => palette::BAR_MEDIUM,
        BarTone::Weak => palette::BAR_WEAK,
        BarTone::Faint => palette::BAR_FAINT,
    }
}

/// Renders the right-hand result panel.
pub fn view<'a, Message: 'static>(
    model: &'a ResultView,
    i18n: &'a I18n,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        ResultView::Placeholder => placeholder(i18n),
        ResultView::Loading => loading(i18n, spinner_rotation),
        ResultView::Error { message } => error(message, i18n),
        ResultView::Prediction {
            headline,
            glyph,
            confidence,
            breakdown,
        } => prediction(headline, glyph, confidence, breakdown, i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn centered<'a, Message: 'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content.align_x(alignment::Horizontal::Center))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn placeholder<Message: 'static>(i18n: &I18n) -> Element<'_, Message> {
    let faded = Color {
        a: opacity::PLACEHOLDER,
        ..palette::GRAY_700
    };

    let badge = Container::new(Text::new(DEFAULT_GLYPH).size(typography::GLYPH))
        .width(Length::Fixed(sizing::PLACEHOLDER_BADGE))
        .height(Length::Fixed(sizing::PLACEHOLDER_BADGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::badge);

    centered(
        Column::new()
            .spacing(spacing::MD)
            .push(badge)
            .push(
                Text::new(i18n.tr("placeholder-title"))
                    .size(typography::TITLE_SM)
                    .font(BOLD)
                    .color(faded),
            )
            .push(
                Text::new(i18n.tr("placeholder-subtitle"))
                    .size(typography::BODY)
                    .color(Color {
                        a: opacity::PLACEHOLDER,
                        ..palette::GRAY_500
                    }),
            ),
    )
}

fn loading<Message: 'static>(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    centered(
        Column::new()
            .spacing(spacing::LG)
            .push(
                AnimatedSpinner::new(
                    palette::INDIGO_600,
                    rotation,
                    sizing::PLACEHOLDER_BADGE / 2.0,
                )
                .into_element(),
            )
            .push(
                Text::new(i18n.tr("loading-title"))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_500),
            ),
    )
}

fn error<'a, Message: 'static>(message: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let panel = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ERROR_GLYPH).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("error-title"))
                .font(BOLD)
                .color(palette::ERROR_600),
        )
        .push(Text::new(message).size(typography::BODY));

    Container::new(panel)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(container_styles::error_panel)
        .into()
}

fn prediction<'a, Message: 'static>(
    headline: &'a str,
    glyph: &'static str,
    confidence: &'a str,
    breakdown: &'a [BreakdownRow],
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let primary = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("primary-emotion").to_uppercase())
                .size(typography::BODY)
                .color(palette::GRAY_500),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(headline).size(typography::DISPLAY).font(BOLD))
                .push(Text::new(glyph).size(typography::DISPLAY)),
        );

    let readout = Column::new()
        .align_x(alignment::Horizontal::Right)
        .push(
            Text::new(i18n.tr_with_args("confidence-value", &[("value", confidence)]))
                .size(typography::TITLE_MD)
                .font(BOLD)
                .color(palette::INDIGO_600),
        )
        .push(
            Text::new(i18n.tr("confidence-caption"))
                .size(typography::CAPTION)
                .font(BOLD)
                .color(palette::GRAY_500),
        );

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(primary)
        .push(Space::new().width(Length::Fill))
        .push(readout);

    let rows = breakdown
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, row| {
            column.push(breakdown_row(row, i18n))
        });

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("breakdown-title"))
                    .size(typography::BODY_LG)
                    .font(BOLD),
            )
            .push(rows),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(container_styles::panel);

    Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(panel)
        .into()
}

fn breakdown_row<'a, Message: 'static>(
    row: &'a BreakdownRow,
    i18n: &I18n,
) -> Element<'a, Message> {
    let labels = Row::new()
        .push(Text::new(row.label.as_str()).size(typography::BODY).font(BOLD))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(i18n.tr_with_args("probability-value", &[("value", row.probability.as_str())]))
                .size(typography::BODY)
                .font(Font::MONOSPACE)
                .color(palette::GRAY_500),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(labels)
        .push(bar(row.fill, tone_color(row.tone)))
        .into()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // fill is in [0, 1]
fn bar<'a, Message: 'static>(fill: f32, color: Color) -> Element<'a, Message> {
    let filled = (fill * f32::from(BAR_PORTIONS)).round() as u16;

    let mut track = Row::new().height(Length::Fill);
    // A zero portion would not shrink to nothing, so empty sides are left out.
    if filled > 0 {
        track = track.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(container_styles::bar_fill(color)),
        );
    }
    if filled < BAR_PORTIONS {
        track = track.push(Space::new().width(Length::FillPortion(BAR_PORTIONS - filled)));
    }

    Container::new(track)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BAR_HEIGHT))
        .style(container_styles::bar_track)
        .into()
}
