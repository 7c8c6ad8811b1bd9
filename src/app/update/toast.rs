// src/app/update/toast.rs
//! Toast notifications

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Show `toast` and schedule it to hide
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        let generation = self.ui.toast_visible.raise();
        Task::perform(
            async {
                tokio::time::sleep(TOAST_DURATION).await;
            },
            move |_| Message::HideToast(generation),
        )
    }

    /// Handle toast messages
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HideToast(generation) => {
                self.ui.toast_visible.expire(*generation);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
