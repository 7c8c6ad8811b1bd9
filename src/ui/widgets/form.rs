//! Form rows shared by the showcase controls and the settings page

use std::ops::RangeInclusive;

use iced::widget::{Space, column, container, pick_list, row, slider, text};
use iced::{Alignment, Background, Element, Fill};

use crate::ui::theme;

/// Label (plus optional description) on the left, control on the right
pub fn setting_row<'a, Message: 'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_text = text(label.to_string()).size(15).style(|theme| text::Style {
        color: Some(theme::settings_label(theme)),
    });

    let label_section: Element<'a, Message> = match description {
        Some(desc) => column![
            label_text,
            text(desc.to_string()).size(12).style(|theme| text::Style {
                color: Some(theme::settings_desc(theme))
            }),
        ]
        .spacing(4)
        .into(),
        None => label_text.into(),
    };

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([12, 0])
    .into()
}

/// One-pixel separator
pub fn divider<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}

/// Pick list with the shared dropdown style
pub fn styled_pick_list<'a, T, Message, F>(
    options: Vec<T>,
    selected: Option<T>,
    on_selected: F,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
    Message: Clone + 'a,
    F: Fn(T) -> Message + 'a,
{
    pick_list(options, selected, on_selected)
        .style(theme::settings_pick_list)
        .menu_style(theme::settings_pick_list_menu)
        .padding([8, 12])
        .into()
}

/// Slider with its label above and the formatted value on the right
pub fn labeled_slider<'a, Message, F>(
    label: &str,
    value_label: String,
    range: RangeInclusive<f32>,
    value: f32,
    step: f32,
    on_change: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: 'a + Fn(f32) -> Message,
{
    let header = row![
        text(label.to_string()).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme))
        }),
        Space::new().width(Fill),
        text(value_label).size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme))
        }),
    ]
    .align_y(Alignment::Center);

    column![header, slider(range, value, on_change).step(step)]
        .spacing(6)
        .into()
}
