//! Animation preset gallery
//!
//! One card per showcase preset with a live thumbnail. Hover fades the card
//! background and border in; clicking applies the preset to the preview.

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, Background, Border, Color, Element, Fill, Shadow, Vector};

use crate::app::Message;
use crate::features::{BlobSlot, ShowcasePreset, Stage};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components::blob_controls::card;
use crate::ui::primitives::blob_canvas;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::section_header;

/// Thumbnail canvas edge in pixels
const THUMBNAIL_SIZE: f32 = 96.0;

pub fn preset_labels(preset: ShowcasePreset) -> (Key, Key) {
    match preset {
        ShowcasePreset::Static => (Key::PresetStatic, Key::PresetStaticDesc),
        ShowcasePreset::RainbowSpin => (Key::PresetRainbowSpin, Key::PresetRainbowSpinDesc),
        ShowcasePreset::FastNeon => (Key::PresetFastNeon, Key::PresetFastNeonDesc),
        ShowcasePreset::SlowSunset => (Key::PresetSlowSunset, Key::PresetSlowSunsetDesc),
    }
}

pub fn view<'a>(
    stage: &'a Stage,
    animations: &HoverAnimations<ShowcasePreset>,
    locale: Locale,
) -> Element<'a, Message> {
    let cards = ShowcasePreset::all().iter().fold(row![].spacing(16), |cards, preset| {
        let progress = animations.get_progress(preset);
        cards.push(preset_card(stage, *preset, progress, locale))
    });

    card(
        column![
            section_header::view(locale.get(Key::SectionPresets), None),
            cards.wrap(),
        ]
        .spacing(16)
        .into(),
    )
}

fn preset_card<'a>(
    stage: &'a Stage,
    preset: ShowcasePreset,
    hover_progress: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let slot = BlobSlot::Preset(preset);
    let thumbnail: Element<'a, Message> = match (stage.frame(slot), stage.config(slot)) {
        (Some(frame), Some(config)) => blob_canvas::view(frame, config, THUMBNAIL_SIZE),
        _ => Space::new().width(THUMBNAIL_SIZE).height(THUMBNAIL_SIZE).into(),
    };

    let (title, description) = preset_labels(preset);
    let content = column![
        container(thumbnail).center_x(Fill),
        text(locale.get(title)).size(14).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        text(locale.get(description))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(180);

    let body = container(content)
        .padding(14)
        .style(move |theme| card_style(theme, hover_progress));

    let clickable = button(body)
        .padding(0)
        .style(theme::transparent_btn)
        .on_press(Message::ApplyShowcasePreset(preset));

    mouse_area(clickable)
        .on_enter(Message::HoverPreset(Some(preset)))
        .on_exit(Message::HoverPreset(None))
        .into()
}

fn card_style(theme: &iced::Theme, hover_progress: f32) -> container::Style {
    let border = theme::divider(theme);
    container::Style {
        background: Some(Background::Color(theme::hover_bg_alpha(
            theme,
            0.03 + 0.07 * hover_progress,
        ))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: mix(border, theme::ACCENT, hover_progress),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * hover_progress),
            offset: Vector::new(0.0, 4.0 * hover_progress),
            blur_radius: 16.0 * hover_progress,
        },
        ..Default::default()
    }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_hits_both_ends() {
        let a = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
        let b = Color::from_rgba(1.0, 0.5, 0.0, 1.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn every_preset_has_labels() {
        for preset in ShowcasePreset::all() {
            let (title, description) = preset_labels(*preset);
            assert_ne!(title, description);
        }
    }
}
