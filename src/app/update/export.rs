// src/app/update/export.rs
//! SVG export handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::svg;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle export messages
    pub fn handle_export(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ExportSvg => {
                let now = chrono::Local::now();
                let config = &self.studio.config;
                let frame = self.studio.preview_frame();
                let id = format!("blob-gradient-{}", now.timestamp_millis());

                let document = match svg::render_document(config, &frame, &id) {
                    Ok(document) => document,
                    Err(e) => {
                        tracing::error!("Failed to render SVG: {}", e);
                        let text = format!("{}: {}", self.core.locale.get(Key::ExportFailed), e);
                        return Some(self.show_toast(Toast::error(text)));
                    }
                };

                let file_name = helpers::export_file_name(now);
                let title = self.core.locale.get(Key::ExportDialogTitle).to_string();
                tracing::info!("Exporting frame at t={:.2} as {}", frame.time, file_name);

                Some(Task::perform(
                    helpers::save_svg(document, file_name, title),
                    |result| Message::ExportFinished(result.map_err(|e| e.to_string())),
                ))
            }

            Message::ExportFinished(result) => match result {
                Ok(Some(path)) => {
                    tracing::info!("SVG exported to {}", path.display());
                    let text = format!(
                        "{}: {}",
                        self.core.locale.get(Key::ExportSuccess),
                        path.display()
                    );
                    Some(self.show_toast(Toast::success(text)))
                }
                Ok(None) => {
                    tracing::debug!("SVG export cancelled");
                    Some(Task::none())
                }
                Err(e) => {
                    tracing::error!("Failed to export SVG: {}", e);
                    let text = format!("{}: {}", self.core.locale.get(Key::ExportFailed), e);
                    Some(self.show_toast(Toast::error(text)))
                }
            },

            _ => None,
        }
    }
}
