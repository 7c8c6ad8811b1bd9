// src/app/update/color_dialog.rs
//! Advanced color dialog handlers

use iced::Task;

use super::showcase::COPIED_DURATION;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::palette::{CustomPalette, MAX_DIALOG_COLORS};
use crate::features::ColorScheme;

impl App {
    /// Handle color dialog messages
    pub fn handle_color_dialog(&mut self, message: &Message) -> Option<Task<Message>> {
        let dialog = &mut self.ui.color_dialog;
        match message {
            Message::OpenColorDialog => {
                let colors = self.studio.custom.colors().to_vec();
                dialog.open_with(&colors);
                Some(Task::none())
            }
            Message::CloseColorDialog => {
                dialog.close();
                Some(Task::none())
            }
            Message::DialogColorChanged(index, color) => {
                dialog.palette.set(*index, color.clone());
                Some(Task::none())
            }
            Message::DialogAddColor => {
                dialog.palette.push(crate::features::palette::NEW_COLOR);
                Some(Task::none())
            }
            Message::DialogRemoveColor(index) => {
                dialog.palette.remove(*index);
                Some(Task::none())
            }
            Message::DialogSwatchPicked(color) => {
                dialog.pick_swatch(color);
                Some(Task::none())
            }
            Message::DialogCopyCss => {
                let css = dialog.palette.css();
                let generation = dialog.copied.raise();
                Some(Task::batch([
                    iced::clipboard::write(css),
                    Task::perform(
                        async {
                            tokio::time::sleep(COPIED_DURATION).await;
                        },
                        move |_| Message::DialogCopiedReset(generation),
                    ),
                ]))
            }
            Message::DialogCopiedReset(generation) => {
                dialog.copied.expire(*generation);
                Some(Task::none())
            }
            Message::ApplyColorDialog => {
                let colors = dialog.palette.colors().to_vec();
                dialog.close();
                tracing::info!("Applying {} colors from the color dialog", colors.len());

                self.studio.custom = CustomPalette::new(colors, MAX_DIALOG_COLORS);
                self.studio.scheme = ColorScheme::Custom;
                self.studio.apply_scheme();
                Some(Task::none())
            }
            _ => None,
        }
    }
}
