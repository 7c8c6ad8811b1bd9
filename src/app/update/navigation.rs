// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::{Message, Page};
use crate::app::state::App;

impl App {
    /// Switch pages, unmounting the blobs of the page being left
    fn navigate_to(&mut self, page: Page) -> Task<Message> {
        if self.ui.page == page {
            return Task::none();
        }

        let previous = self.ui.page;
        self.studio.unmount_page(previous);
        if previous == Page::Showcase {
            self.ui.color_dialog.close();
            self.ui.preset_animations.clear();
        }

        self.ui.page = page;
        self.studio.mount_page(page);
        tracing::info!(
            "Navigated {:?} -> {:?} ({} blobs mounted)",
            previous,
            page,
            self.studio.stage.len()
        );

        iced::widget::operation::snap_to(
            iced::widget::Id::new(page.scroll_id()),
            iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
        )
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(page) => Some(self.navigate_to(*page)),
            _ => None,
        }
    }
}
