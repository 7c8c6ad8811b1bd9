//! Generated code card with copy and SVG export actions

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{BlobConfig, ColorScheme};
use crate::i18n::{Key, Locale};
use crate::ui::components::blob_controls::card;
use crate::ui::theme::{self, BOLD_WEIGHT};

pub fn view(
    config: &BlobConfig,
    scheme: ColorScheme,
    copied: bool,
    locale: Locale,
) -> Element<'static, Message> {
    let copy_label = if copied {
        locale.get(Key::Copied)
    } else {
        locale.get(Key::CopyCode)
    };

    let header = row![
        text(locale.get(Key::SectionCode)).size(16).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().width(Fill),
        button(text(locale.get(Key::ExportSvg)).size(13))
            .padding([6, 12])
            .style(theme::secondary_button)
            .on_press(Message::ExportSvg),
        Space::new().width(8),
        button(text(copy_label).size(13))
            .padding([6, 12])
            .style(theme::primary_button)
            .on_press(Message::CopyCode),
    ]
    .align_y(Alignment::Center);

    let code = container(
        scrollable(
            text(config.to_code(scheme))
                .size(13)
                .font(iced::Font::MONOSPACE)
                .color(theme::CODE_GREEN),
        )
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4).scroller_width(4),
        ))
        .style(theme::dark_scrollable),
    )
    .width(Fill)
    .padding(16)
    .style(theme::code_block);

    card(column![header, code].spacing(14).into())
}
