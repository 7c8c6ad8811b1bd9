// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, StudioState};
use crate::features::settings::ShowcaseSettings;
use crate::i18n::{Key, Locale};
use crate::ui::widgets::Toast;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::LanguageChanged(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                tracing::info!("Language changed to: {:?}", language);
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::ToggleReduceMotion(enabled) => {
                self.core.settings.display.reduce_motion = *enabled;
                tracing::info!("Reduce motion: {}", enabled);
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::ResetShowcase => {
                let mut studio = StudioState::from_settings(&ShowcaseSettings::default());
                // Keep the scene camera and mounted blobs; only the showcase is reset
                std::mem::swap(&mut studio.stage, &mut self.studio.stage);
                std::mem::swap(&mut studio.scene, &mut self.studio.scene);
                self.studio = studio;
                self.studio.sync_preview();
                tracing::info!("Showcase reset to defaults");
                Some(Task::none())
            }
            Message::SaveShowcase => {
                self.core.settings.showcase = self.studio.to_settings();
                let toast = match self.core.settings.save() {
                    Ok(()) => {
                        tracing::info!("Settings saved successfully");
                        Toast::success(self.core.locale.get(Key::SettingsSaved))
                    }
                    Err(e) => {
                        tracing::error!("Failed to save settings: {}", e);
                        Toast::error(format!(
                            "{}: {}",
                            self.core.locale.get(Key::SettingsSaveFailed),
                            e
                        ))
                    }
                };
                Some(self.show_toast(toast))
            }
            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
