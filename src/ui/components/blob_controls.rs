//! Blob settings, effect toggles and motion presets for the showcase

use iced::widget::{column, container, row, text, toggler};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::outline::{MAX_VERTICES, MIN_VERTICES};
use crate::features::{BlobConfig, MotionPreset};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::{divider, labeled_slider, section_header, setting_row};

pub fn motion_label(preset: MotionPreset) -> Key {
    match preset {
        MotionPreset::Subtle => Key::MotionSubtle,
        MotionPreset::Normal => Key::MotionNormal,
        MotionPreset::Dynamic => Key::MotionDynamic,
        MotionPreset::Extreme => Key::MotionExtreme,
        MotionPreset::Static => Key::MotionStatic,
        MotionPreset::GradientSpin => Key::MotionGradientSpin,
        MotionPreset::FastSpin => Key::MotionFastSpin,
    }
}

/// Size, intensity, speed and vertex sliders
pub fn blob_card(config: &BlobConfig, locale: Locale) -> Element<'static, Message> {
    let content = column![
        section_header::view(locale.get(Key::SectionBlob), None),
        labeled_slider(
            locale.get(Key::LabelSize),
            format!("{}px", config.size),
            50.0..=400.0,
            config.size,
            10.0,
            Message::SizeChanged,
        ),
        labeled_slider(
            locale.get(Key::LabelIntensity),
            format!("{:.1}", config.intensity),
            0.0..=2.0,
            config.intensity,
            0.1,
            Message::IntensityChanged,
        ),
        labeled_slider(
            locale.get(Key::LabelSpeed),
            format!("{:.1}x", config.speed),
            0.0..=3.0,
            config.speed,
            0.1,
            Message::SpeedChanged,
        ),
        labeled_slider(
            locale.get(Key::LabelVertices),
            config.vertices.to_string(),
            MIN_VERTICES as f32..=MAX_VERTICES as f32,
            config.vertices as f32,
            2.0,
            |v| Message::VerticesChanged(v.round() as u32),
        ),
    ]
    .spacing(14);

    card(content.into())
}

/// Glow and drop shadow toggles
pub fn effects_card(config: &BlobConfig, locale: Locale) -> Element<'static, Message> {
    let content = column![
        section_header::view(locale.get(Key::SectionEffects), None),
        setting_row(
            locale.get(Key::LabelGlow),
            None,
            toggler(config.glow)
                .on_toggle(Message::GlowToggled)
                .size(20)
                .into(),
        ),
        divider(),
        setting_row(
            locale.get(Key::LabelDropShadow),
            None,
            toggler(config.drop_shadow)
                .on_toggle(Message::DropShadowToggled)
                .size(20)
                .into(),
        ),
    ]
    .spacing(4);

    card(content.into())
}

/// Motion preset chips; none is highlighted since presets only seed values
pub fn motion_presets(locale: Locale) -> Element<'static, Message> {
    let chips = MotionPreset::all().iter().fold(row![].spacing(8), |chips, preset| {
        chips.push(
            iced::widget::button(text(locale.get(motion_label(*preset))).size(13))
                .padding([6, 12])
                .style(theme::chip_button(false))
                .on_press(Message::ApplyMotionPreset(*preset)),
        )
    });

    card(
        column![
            section_header::view(locale.get(Key::SectionMotionPresets), None),
            chips.wrap(),
        ]
        .spacing(12)
        .into(),
    )
}

/// Rounded card around a control group
pub fn card<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Fill)
        .padding(20)
        .style(theme::card)
        .into()
}
