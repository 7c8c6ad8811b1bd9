//! Section header widget
//!
//! Card title with an optional trailing action button.
//! Uses a generic Message type so any card can host it.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `action` - Optional (label, message) pair for the trailing button
pub fn view<'a, Message: Clone + 'a>(
    title: &str,
    action: Option<(&str, Message)>,
) -> Element<'a, Message> {
    let title_text = text(title.to_string())
        .size(16)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let action_btn: Element<'a, Message> = match action {
        Some((label, msg)) => button(text(label.to_string()).size(13))
            .padding([4, 10])
            .style(theme::secondary_button)
            .on_press(msg)
            .into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), action_btn]
        .align_y(Alignment::Center)
        .into()
}
