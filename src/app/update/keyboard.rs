// src/app/update/keyboard.rs
//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::BlobSlot;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if modifiers.command() || modifiers.alt() {
                    return Some(Task::none());
                }

                match key {
                    Key::Named(Named::Escape) if self.ui.color_dialog.open => {
                        Some(self.update(Message::CloseColorDialog))
                    }
                    Key::Named(Named::Space)
                        if self.studio.stage.is_mounted(BlobSlot::Preview)
                            && !self.ui.color_dialog.open =>
                    {
                        Some(self.update(Message::TogglePreview))
                    }
                    _ => Some(Task::none()),
                }
            }
            _ => None,
        }
    }
}
