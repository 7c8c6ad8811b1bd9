//! Mesh scene page
//!
//! Full-bleed 3D canvas with the title card and controls floating on top.

use iced::widget::{Space, column, container, row, stack, text, toggler};
use iced::{Alignment, Background, Border, Color, Element, Fill, Padding};

use crate::app::{Message, SceneState};
use crate::i18n::{Key, Locale};
use crate::ui::primitives::mesh_canvas::{self, MeshCanvas};
use crate::ui::theme::BOLD_WEIGHT;

fn overlay_text<'a>(content: &'static str, size: u32, alpha: f32) -> Element<'a, Message> {
    text(content)
        .size(size)
        .color(Color::from_rgba(1.0, 1.0, 1.0, alpha))
        .into()
}

pub fn view<'a>(scene: &'a SceneState, locale: Locale) -> Element<'a, Message> {
    let canvas = mesh_canvas::view(MeshCanvas {
        blobs: &scene.blobs,
        geometry: &scene.geometry,
        camera: &scene.camera,
        lighting: &scene.lighting,
        on_drag: Message::SceneDragged,
        on_zoom: Message::SceneZoomed,
    });

    let title = column![
        text(locale.get(Key::SceneTitle))
            .size(36)
            .color(Color::WHITE)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        overlay_text(locale.get(Key::SceneSubtitle), 16, 0.8),
        overlay_text(locale.get(Key::SceneHint), 13, 0.6),
    ]
    .spacing(6);

    let auto_rotate = container(
        row![
            overlay_text(locale.get(Key::SceneAutoRotate), 13, 0.9),
            toggler(scene.camera.auto_rotate)
                .on_toggle(Message::SceneAutoRotateToggled)
                .size(18),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([8, 14])
    .style(|_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.35))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let overlay = column![
        title,
        Space::new().height(Fill),
        row![Space::new().width(Fill), auto_rotate],
    ]
    .padding(Padding::new(32.0))
    .width(Fill)
    .height(Fill);

    stack![canvas, overlay].width(Fill).height(Fill).into()
}
