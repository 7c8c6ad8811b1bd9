//! Advanced color dialog
//!
//! Edits a temporary palette of up to eight colors. Nothing reaches the
//! showcase until Apply; Cancel, Escape and backdrop clicks discard it.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Background, Border, Color, Element, Fill};

use crate::app::{ColorDialogState, Message};
use crate::features::palette::{self, SWATCHES};
use crate::i18n::{Key, Locale};
use crate::ui::components::color_editor::{color_row, gradient_bar};
use crate::ui::primitives::blob_canvas::to_color;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Swatches per grid row
const SWATCH_COLUMNS: usize = 6;
const SWATCH_SIZE: f32 = 32.0;

fn label<'a>(content: &'static str) -> Element<'a, Message> {
    text(content)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

fn swatch_button<'a>(color: &'static str) -> Element<'a, Message> {
    let fill = palette::parse_hex(color).map(to_color).unwrap_or(Color::BLACK);
    button(Space::new().width(SWATCH_SIZE).height(SWATCH_SIZE))
        .padding(0)
        .style(move |theme, status| {
            let hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    radius: 6.0.into(),
                    width: if hovered { 2.0 } else { 1.0 },
                    color: if hovered {
                        theme::text_primary(theme)
                    } else {
                        theme::divider(theme)
                    },
                },
                ..Default::default()
            }
        })
        .on_press(Message::DialogSwatchPicked(color))
        .into()
}

fn swatch_grid<'a>() -> Element<'a, Message> {
    SWATCHES
        .chunks(SWATCH_COLUMNS)
        .fold(column![].spacing(8), |grid, chunk| {
            grid.push(
                chunk
                    .iter()
                    .fold(row![].spacing(8), |line, color| line.push(swatch_button(color))),
            )
        })
        .into()
}

/// Build the color dialog overlay; empty once fully faded out
pub fn view(dialog: &ColorDialogState, locale: Locale) -> Element<'static, Message> {
    let opacity = dialog.animation.progress();
    if opacity < 0.01 {
        return Space::new().height(0).into();
    }

    let title = row![
        text(locale.get(Key::ColorDialogTitle)).size(18).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().width(Fill),
        button(text("✕").size(14))
            .padding([4, 8])
            .style(theme::text_button)
            .on_press(Message::CloseColorDialog),
    ]
    .align_y(Alignment::Center);

    let palette_rows = dialog.palette.colors().iter().enumerate().fold(
        column![].spacing(8),
        |rows, (index, color)| {
            rows.push(color_row(
                index,
                color,
                dialog.palette.can_remove(),
                Message::DialogColorChanged,
                Message::DialogRemoveColor,
            ))
        },
    );

    let add = button(text(locale.get(Key::AddColor)).size(13))
        .padding([6, 12])
        .style(theme::secondary_button)
        .on_press_maybe(dialog.palette.can_add().then_some(Message::DialogAddColor));

    let css = dialog.palette.css();
    let copy_label = if dialog.copied.is_on() {
        locale.get(Key::Copied)
    } else {
        locale.get(Key::ColorDialogCopyCss)
    };

    let preview = column![
        label(locale.get(Key::ColorDialogPreview)),
        gradient_bar(dialog.palette.colors(), 48.0),
        row![
            text(css)
                .size(12)
                .font(iced::Font::MONOSPACE)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme))
                })
                .width(Fill),
            button(text(copy_label).size(12))
                .padding([5, 10])
                .style(theme::secondary_button)
                .on_press(Message::DialogCopyCss),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    let actions = row![
        Space::new().width(Fill),
        button(text(locale.get(Key::ColorDialogCancel)).size(14))
            .padding([10, 20])
            .style(theme::secondary_button)
            .on_press(Message::CloseColorDialog),
        Space::new().width(12),
        button(text(locale.get(Key::ColorDialogApply)).size(14))
            .padding([10, 24])
            .style(theme::primary_button)
            .on_press(Message::ApplyColorDialog),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        label(locale.get(Key::ColorDialogPalette)),
        palette_rows,
        add,
        label(locale.get(Key::ColorDialogSwatches)),
        swatch_grid(),
        preview,
        actions,
    ]
    .spacing(14)
    .width(440)
    .padding(24);

    // Clicks inside the box must not reach the backdrop
    let dialog_box = opaque(container(content).style(move |theme| theme::dialog(theme, opacity)));

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |theme| container::Style {
            background: Some(Background::Color(theme::overlay_backdrop(theme, 0.5 * opacity))),
            ..Default::default()
        });

    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseColorDialog);

    opaque(event_blocker).into()
}
