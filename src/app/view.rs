// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::{Message, Page};
use crate::ui::{components, pages, widgets};

impl App {
    /// Build the window view: nav bar, current page and overlays
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let page: Element<'_, Message> = match self.ui.page {
            Page::Showcase => pages::showcase::view(&self.studio, &self.ui, locale),
            Page::Examples => pages::examples::view(&self.studio.stage, locale),
            Page::Scene => pages::scene::view(&self.studio.scene, locale),
            Page::Settings => pages::settings::view(&self.core.settings, locale),
        };

        let main_content = column![components::nav_bar::view(self.ui.page, locale), page]
            .width(Fill)
            .height(Fill);

        // Toast overlay (empty space if not visible)
        let toast_visible = self.ui.toast_visible.is_on();
        let toast_overlay: Element<'_, Message> = match (&self.ui.toast, toast_visible) {
            (Some(toast), true) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(24)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into(),
            _ => Space::new().width(0).height(0).into(),
        };

        // Color dialog overlay (empty once faded out)
        let color_dialog_overlay = components::color_dialog::view(&self.ui.color_dialog, locale);

        stack![main_content, color_dialog_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
