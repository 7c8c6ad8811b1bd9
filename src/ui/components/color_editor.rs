//! Color scheme picker with the inline custom palette editor

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Background, Border, Element, Fill};

use crate::app::{Message, StudioState};
use crate::features::ColorScheme;
use crate::features::palette::{self, MAX_DIALOG_COLORS};
use crate::i18n::{Key, Locale};
use crate::ui::components::blob_controls::card;
use crate::ui::primitives::blob_canvas::{gradient_stops, to_color};
use crate::ui::theme;
use crate::ui::widgets::{section_header, styled_pick_list};

/// Horizontal bar filled with the gradient of `colors`
pub fn gradient_bar<'a>(colors: &[String], height: f32) -> Element<'a, Message> {
    let stops = palette::resample(&gradient_stops(colors), MAX_DIALOG_COLORS);
    let linear = stops.into_iter().fold(
        // Left to right
        iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2)),
        |linear, (offset, rgba)| linear.add_stop(offset, to_color(rgba)),
    );

    container(Space::new().width(Fill).height(height))
        .width(Fill)
        .style(move |theme| container::Style {
            background: Some(Background::Gradient(iced::Gradient::Linear(linear))),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: theme::divider(theme),
            },
            ..Default::default()
        })
        .into()
}

/// Small square showing one color; outlined in red when it does not parse
pub fn swatch<'a>(color: &str, size: f32) -> Element<'a, Message> {
    let fill = palette::parse_hex(color).map(to_color);
    container(Space::new().width(size).height(size))
        .style(move |theme| container::Style {
            background: fill.map(Background::Color),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: if fill.is_some() {
                    theme::divider(theme)
                } else {
                    theme::danger(theme)
                },
            },
            ..Default::default()
        })
        .into()
}

/// One editable hex row: swatch, text input, remove button
pub fn color_row<'a>(
    index: usize,
    color: &str,
    can_remove: bool,
    on_input: fn(usize, String) -> Message,
    on_remove: fn(usize) -> Message,
) -> Element<'a, Message> {
    let remove = button(text("✕").size(12))
        .padding([6, 10])
        .style(theme::secondary_button)
        .on_press_maybe(can_remove.then_some(on_remove(index)));

    row![
        swatch(color, 28.0),
        text_input("#rrggbb", color)
            .on_input(move |value| on_input(index, value))
            .padding([6, 10])
            .size(13)
            .width(Fill)
            .style(theme::color_input),
        remove,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Colors card: scheme pick list, custom editor and the dialog entry point
pub fn view(studio: &StudioState, locale: Locale) -> Element<'static, Message> {
    let mut content = column![
        section_header::view(
            locale.get(Key::SectionColors),
            Some((locale.get(Key::AdvancedColors), Message::OpenColorDialog)),
        ),
        row![
            text(locale.get(Key::LabelColorScheme))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme))
                }),
            Space::new().width(Fill),
            styled_pick_list(
                ColorScheme::all(),
                Some(studio.scheme),
                Message::SchemeSelected
            ),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(14);

    if studio.scheme == ColorScheme::Custom {
        let custom = &studio.custom;
        let rows = custom
            .colors()
            .iter()
            .enumerate()
            .fold(column![].spacing(8), |rows, (index, color)| {
                rows.push(color_row(
                    index,
                    color,
                    custom.can_remove(),
                    Message::CustomColorChanged,
                    Message::RemoveCustomColor,
                ))
            });

        let add = button(text(locale.get(Key::AddColor)).size(13))
            .padding([6, 12])
            .style(theme::secondary_button)
            .on_press_maybe(studio.can_add_custom().then_some(Message::AddCustomColor));

        content = content.push(
            column![
                text(locale.get(Key::CustomColorsTitle))
                    .size(13)
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme))
                    }),
                rows,
                add,
            ]
            .spacing(10),
        );
    }

    content = content.push(gradient_bar(&studio.config.resolved_colors(), 24.0));

    card(content.into())
}

