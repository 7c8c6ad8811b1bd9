//! Settings page component
//!
//! Display preferences and showcase persistence on one scrollable page.
//! Every toggle saves immediately; the showcase is only stored on Save.

use iced::widget::{Space, button, column, container, row, scrollable, text, toggler};
use iced::{Element, Fill, Padding};

use crate::app::{Message, Page};
use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme;
use crate::ui::widgets::{divider, setting_row, styled_pick_list};

/// Settings page view
pub fn view(settings: &Settings, locale: Locale) -> Element<'static, Message> {
    let header = text(locale.get(Key::SettingsTitle).to_string())
        .size(32)
        .style(|theme| text::Style {
            color: Some(theme::settings_title(theme)),
        });

    let content = column![
        header,
        Space::new().height(24),
        section_header(locale.get(Key::SettingsDisplay)),
        Space::new().height(8),
        display_section(settings, locale),
        Space::new().height(32),
        section_header(locale.get(Key::SettingsShowcase)),
        Space::new().height(8),
        showcase_section(locale),
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(60.0).bottom(60.0).left(60.0));

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .id(iced::widget::Id::new(Page::Settings.scroll_id()))
            .style(theme::dark_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn section_header(title: &str) -> Element<'static, Message> {
    text(title.to_string())
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::settings_section_title(theme)),
        })
        .into()
}

fn display_section(settings: &Settings, locale: Locale) -> Element<'static, Message> {
    column![
        setting_row(
            locale.get(Key::SettingsDarkMode),
            Some(locale.get(Key::SettingsDarkModeDesc)),
            toggler(settings.display.dark_mode)
                .on_toggle(Message::ToggleDarkMode)
                .size(24)
                .into()
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsLanguage),
            Some(locale.get(Key::SettingsLanguageDesc)),
            styled_pick_list(
                Language::all().to_vec(),
                Some(Language::from_code(&settings.display.language)),
                Message::LanguageChanged,
            )
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsReduceMotion),
            Some(locale.get(Key::SettingsReduceMotionDesc)),
            toggler(settings.display.reduce_motion)
                .on_toggle(Message::ToggleReduceMotion)
                .size(24)
                .into()
        ),
    ]
    .into()
}

fn showcase_section(locale: Locale) -> Element<'static, Message> {
    let actions = row![
        button(text(locale.get(Key::SettingsResetShowcase).to_string()).size(14))
            .padding([8, 16])
            .style(theme::secondary_button)
            .on_press(Message::ResetShowcase),
        button(text(locale.get(Key::SettingsSave).to_string()).size(14))
            .padding([8, 20])
            .style(theme::primary_button)
            .on_press(Message::SaveShowcase),
    ]
    .spacing(10);

    column![setting_row(
        locale.get(Key::SettingsResetShowcase),
        Some(locale.get(Key::SettingsResetShowcaseDesc)),
        actions.into()
    )]
    .into()
}
