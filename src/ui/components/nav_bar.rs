//! Top navigation bar
//!
//! App name on the left, one tab per page on the right.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Page};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Nav bar height in pixels
pub const NAV_BAR_HEIGHT: f32 = 56.0;

/// Label key for a page tab
pub fn page_label(page: Page) -> Key {
    match page {
        Page::Showcase => Key::NavShowcase,
        Page::Examples => Key::NavExamples,
        Page::Scene => Key::NavScene,
        Page::Settings => Key::NavSettings,
    }
}

pub fn view(current: Page, locale: Locale) -> Element<'static, Message> {
    let brand = row![
        container(Space::new().width(18).height(18)).style(|_theme| container::Style {
            background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI * 0.75))
                    .add_stop(0.0, theme::ACCENT)
                    .add_stop(1.0, iced::color!(0xec4899)),
            ))),
            border: iced::Border {
                radius: 9.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
        Space::new().width(10),
        text(locale.get(Key::AppName)).size(18).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
    ]
    .align_y(Alignment::Center);

    let tabs = Page::all().iter().fold(row![].spacing(4), |tabs, page| {
        let active = *page == current;
        tabs.push(
            button(text(locale.get(page_label(*page))).size(14))
                .padding([8, 16])
                .style(theme::nav_item(active))
                .on_press(Message::Navigate(*page)),
        )
    });

    container(
        row![brand, Space::new().width(Fill), tabs]
            .align_y(Alignment::Center)
            .height(Fill),
    )
    .height(NAV_BAR_HEIGHT)
    .width(Fill)
    .padding(Padding::new(0.0).left(24.0).right(24.0))
    .style(theme::nav_bar)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_distinct_label() {
        let labels: std::collections::HashSet<_> =
            Page::all().iter().map(|p| page_label(*p)).collect();
        assert_eq!(labels.len(), Page::all().len());
    }
}
