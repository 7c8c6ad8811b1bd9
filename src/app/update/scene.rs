// src/app/update/scene.rs
//! Mesh scene orbit controls

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle mesh scene messages
    pub fn handle_scene(&mut self, message: &Message) -> Option<Task<Message>> {
        let camera = &mut self.studio.scene.camera;
        match message {
            Message::SceneDragged(dx, dy) => {
                camera.drag(*dx, *dy);
                Some(Task::none())
            }
            Message::SceneZoomed(delta) => {
                camera.zoom(*delta);
                Some(Task::none())
            }
            Message::SceneAutoRotateToggled(enabled) => {
                camera.auto_rotate = *enabled;
                Some(Task::none())
            }
            _ => None,
        }
    }
}
