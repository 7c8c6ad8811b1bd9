// src/app/update/animation.rs
//! Frame tick handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle frame ticks
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = iced::time::Instant::now();
                self.ui.tick_animations(now);

                // Blobs stay on their last frame while reduce motion is on
                if !self.core.reduce_motion() {
                    self.studio.tick();
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
