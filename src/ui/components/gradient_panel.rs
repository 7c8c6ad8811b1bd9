//! Gradient controls: type, animation, angle and direction

use iced::widget::{Space, button, column, row, text, toggler};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::presets::GRADIENT_DIRECTIONS;
use crate::features::{BlobConfig, BlobFrame, GradientDirection, GradientKind, GradientType};
use crate::i18n::{Key, Locale};
use crate::ui::components::blob_controls::card;
use crate::ui::primitives::gradient_dial;
use crate::ui::theme;
use crate::ui::widgets::{labeled_slider, section_header, setting_row, styled_pick_list};

const DIAL_SIZE: f32 = 72.0;

/// Localized pick list entry for a gradient type
#[derive(Debug, Clone, Copy, PartialEq)]
struct TypeOption {
    kind: GradientType,
    label: &'static str,
}

impl std::fmt::Display for TypeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

fn type_option(kind: GradientType, locale: Locale) -> TypeOption {
    let label = match kind {
        GradientType::Linear => locale.get(Key::GradientLinear),
        GradientType::Radial => locale.get(Key::GradientRadial),
    };
    TypeOption { kind, label }
}

fn direction_label(direction: GradientDirection) -> Key {
    match direction {
        GradientDirection::Clockwise => Key::DirectionClockwise,
        GradientDirection::CounterClockwise => Key::DirectionCounterClockwise,
    }
}

/// Gradient card; `frame` supplies the live angle for the spinning dial
pub fn view(config: &BlobConfig, frame: &BlobFrame, locale: Locale) -> Element<'static, Message> {
    let options: Vec<TypeOption> = GradientType::all()
        .into_iter()
        .map(|kind| type_option(kind, locale))
        .collect();

    let mut content = column![
        section_header::view(locale.get(Key::SectionGradient), None),
        setting_row(
            locale.get(Key::LabelGradientType),
            None,
            styled_pick_list(
                options,
                Some(type_option(config.gradient_type, locale)),
                |option: TypeOption| Message::GradientTypeSelected(option.kind),
            ),
        ),
        setting_row(
            locale.get(Key::LabelAnimateGradient),
            None,
            toggler(config.animate_gradient)
                .on_toggle(Message::AnimateGradientToggled)
                .size(20)
                .into(),
        ),
    ]
    .spacing(8);

    match config.gradient_type {
        GradientType::Radial => {
            content = content.push(text(locale.get(Key::RadialHint)).size(12).style(|theme| {
                text::Style {
                    color: Some(theme::text_muted(theme)),
                }
            }));
        }
        GradientType::Linear if config.animate_gradient => {
            content = content.push(animated_controls(config, frame, locale));
        }
        GradientType::Linear => {
            content = content.push(static_controls(config, locale));
        }
    }

    card(content.into())
}

/// Rotation speed, direction buttons and the spinning dial
fn animated_controls(
    config: &BlobConfig,
    frame: &BlobFrame,
    locale: Locale,
) -> Element<'static, Message> {
    let live_angle = match frame.gradient {
        GradientKind::Linear { angle_degrees } => angle_degrees,
        GradientKind::Radial => config.gradient_angle,
    };

    let directions = [GradientDirection::Clockwise, GradientDirection::CounterClockwise]
        .into_iter()
        .fold(row![].spacing(8), |buttons, direction| {
            buttons.push(
                button(text(locale.get(direction_label(direction))).size(13))
                    .padding([6, 12])
                    .style(theme::chip_button(config.gradient_direction == direction))
                    .on_press(Message::GradientDirectionSelected(direction)),
            )
        });

    column![
        labeled_slider(
            locale.get(Key::LabelRotationSpeed),
            format!("{:.1}x", config.gradient_speed),
            0.1..=3.0,
            config.gradient_speed,
            0.1,
            Message::GradientSpeedChanged,
        ),
        row![
            column![
                text(locale.get(Key::LabelDirection))
                    .size(13)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme))
                    }),
                directions,
            ]
            .spacing(8),
            Space::new().width(Fill),
            gradient_dial::view(live_angle, None, DIAL_SIZE),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .into()
}

/// Angle slider, quick directions and the clickable dial
fn static_controls(config: &BlobConfig, locale: Locale) -> Element<'static, Message> {
    let quick = GRADIENT_DIRECTIONS
        .iter()
        .fold(row![].spacing(6), |chips, (label, angle)| {
            let selected = (config.gradient_angle - angle).abs() < f32::EPSILON;
            chips.push(
                button(text(*label).size(12))
                    .padding([5, 10])
                    .style(theme::chip_button(selected))
                    .on_press(Message::GradientAngleChanged(*angle)),
            )
        });

    column![
        row![
            column![labeled_slider(
                locale.get(Key::LabelAngle),
                format!("{}°", config.gradient_angle),
                0.0..=360.0,
                config.gradient_angle,
                5.0,
                Message::GradientAngleChanged,
            )]
            .width(Fill),
            Space::new().width(16),
            gradient_dial::view(
                config.gradient_angle,
                Some(Message::GradientAngleChanged),
                DIAL_SIZE
            ),
        ]
        .align_y(Alignment::Center),
        text(locale.get(Key::QuickDirections))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
        quick.wrap(),
    ]
    .spacing(10)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn type_options_compare_by_kind_and_label() {
        let locale = Locale::new(Language::English);
        assert_eq!(
            type_option(GradientType::Radial, locale),
            type_option(GradientType::Radial, locale)
        );
        assert_ne!(
            type_option(GradientType::Linear, locale).to_string(),
            type_option(GradientType::Radial, locale).to_string()
        );
    }
}
