//! Examples page: three example blobs and a large simple blob

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Page};
use crate::features::{BlobSlot, Stage};
use crate::i18n::{Key, Locale};
use crate::ui::pages::showcase::page_header;
use crate::ui::primitives::blob_canvas;
use crate::ui::theme::{self, BOLD_WEIGHT};

const EXAMPLE_LABELS: [Key; 3] = [Key::ExampleDefault, Key::ExampleSunset, Key::ExampleOcean];

fn blob_tile<'a>(stage: &'a Stage, slot: BlobSlot, title: &'static str) -> Element<'a, Message> {
    let canvas: Element<'a, Message> = match (stage.frame(slot), stage.config(slot)) {
        (Some(frame), Some(config)) => {
            blob_canvas::view(frame, config, blob_canvas::natural_size(config))
        }
        _ => Space::new().width(0).height(0).into(),
    };

    container(
        column![
            canvas,
            text(title).size(15).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(20)
    .style(theme::card)
    .into()
}

pub fn view<'a>(stage: &'a Stage, locale: Locale) -> Element<'a, Message> {
    let examples = EXAMPLE_LABELS
        .iter()
        .enumerate()
        .fold(row![].spacing(24), |tiles, (index, label)| {
            tiles.push(blob_tile(
                stage,
                BlobSlot::Example(index as u8),
                locale.get(*label),
            ))
        });

    let content = column![
        page_header(
            locale.get(Key::ExamplesTitle),
            locale.get(Key::ExamplesSubtitle)
        ),
        examples.align_y(Alignment::End).wrap(),
        blob_tile(stage, BlobSlot::SimpleBlob, locale.get(Key::SimpleBlobTitle)),
    ]
    .spacing(32)
    .padding(Padding::new(32.0).right(40.0).left(40.0));

    container(
        scrollable(content)
            .id(iced::widget::Id::new(Page::Examples.scroll_id()))
            .style(theme::dark_scrollable)
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::presets;

    #[test]
    fn one_label_per_example_blob() {
        assert_eq!(EXAMPLE_LABELS.len(), presets::example_blobs().len());
    }
}
