//! Showcase page
//!
//! Live preview on the left, control cards on the right, then the preset
//! gallery and the generated code.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Page, StudioState, UiState};
use crate::features::BlobSlot;
use crate::i18n::{Key, Locale};
use crate::ui::components::{
    blob_controls, code_output, color_editor, gradient_panel, preset_gallery,
};
use crate::ui::primitives::blob_canvas;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Preview column width; fits the largest blob with its effect margin
const PREVIEW_WIDTH: f32 = 520.0;
const PREVIEW_PADDING: f32 = 16.0;

/// Title and subtitle shared by every page
pub fn page_header<'a>(title: &'static str, subtitle: &'static str) -> Element<'a, Message> {
    column![
        text(title).size(32).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        text(subtitle).size(15).style(|theme| text::Style {
            color: Some(theme::text_muted(theme))
        }),
    ]
    .spacing(6)
    .into()
}

fn preview_card<'a>(studio: &'a StudioState, locale: Locale) -> Element<'a, Message> {
    let stage = &studio.stage;
    let canvas: Element<'a, Message> =
        match (stage.frame(BlobSlot::Preview), stage.config(BlobSlot::Preview)) {
            (Some(frame), Some(config)) => {
                let fit = PREVIEW_WIDTH - 2.0 * PREVIEW_PADDING;
                blob_canvas::view(frame, config, blob_canvas::natural_size(config).min(fit))
            }
            _ => Space::new().width(Fill).height(PREVIEW_WIDTH).into(),
        };

    let running = stage.is_running(BlobSlot::Preview);
    let toggle_label = if running {
        locale.get(Key::PreviewPause)
    } else {
        locale.get(Key::PreviewResume)
    };

    let controls = row![
        button(text(toggle_label).size(13))
            .padding([6, 14])
            .style(theme::secondary_button)
            .on_press(Message::TogglePreview),
        Space::new().width(12),
        text(locale.get(Key::PreviewHint))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            container(canvas).center_x(Fill).center_y(PREVIEW_WIDTH),
            controls,
        ]
        .spacing(12),
    )
    .width(PREVIEW_WIDTH)
    .padding(PREVIEW_PADDING)
    .style(theme::card)
    .into()
}

pub fn view<'a>(studio: &'a StudioState, ui: &'a UiState, locale: Locale) -> Element<'a, Message> {
    let frame = studio.preview_frame();

    let controls = column![
        blob_controls::blob_card(&studio.config, locale),
        blob_controls::motion_presets(locale),
        color_editor::view(studio, locale),
        gradient_panel::view(&studio.config, &frame, locale),
        blob_controls::effects_card(&studio.config, locale),
    ]
    .spacing(16)
    .width(Fill);

    let content = column![
        page_header(
            locale.get(Key::ShowcaseTitle),
            locale.get(Key::ShowcaseSubtitle)
        ),
        row![preview_card(studio, locale), controls]
            .spacing(24)
            .align_y(Alignment::Start),
        preset_gallery::view(&studio.stage, &ui.preset_animations, locale),
        code_output::view(&studio.config, studio.scheme, ui.code_copied.is_on(), locale),
    ]
    .spacing(24)
    .padding(Padding::new(32.0).right(40.0).left(40.0));

    container(
        scrollable(content)
            .id(iced::widget::Id::new(Page::Showcase.scroll_id()))
            .style(theme::dark_scrollable)
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}
