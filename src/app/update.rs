//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod color_dialog;
mod export;
mod keyboard;
mod navigation;
mod scene;
mod settings;
mod showcase;
mod toast;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_showcase(&message) {
            return task;
        }
        if let Some(task) = self.handle_color_dialog(&message) {
            return task;
        }
        if let Some(task) = self.handle_export(&message) {
            return task;
        }
        if let Some(task) = self.handle_scene(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
