//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::i18n::Key;
use crate::ui::components::nav_bar::page_label;
pub use message::{Message, Page};
pub use state::{App, ColorDialogState, CoreState, SceneState, StudioState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale and the showcase
        let settings = Settings::load();
        let studio = StudioState::from_settings(&settings.showcase);
        let core = CoreState::new(settings);
        let ui = UiState::new();

        let mut app = Self { core, studio, ui };

        // 2. Mount the blobs of the landing page
        app.studio.mount_page(app.ui.page);
        tracing::info!(
            "Morphblob started on {:?} with {} mounted blobs",
            app.ui.page,
            app.studio.stage.len()
        );

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the current page
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.core.locale.get(Key::AppName),
            self.core.locale.get(page_label(self.ui.page))
        )
    }

    /// Subscriptions for frame ticks and keyboard events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Blob drivers and the mesh scene (frozen while reduce motion is on)
        let blobs_need_frames = subscription_logic::blobs_need_frames(
            self.studio.is_animating(),
            self.core.reduce_motion(),
        );

        // 2. Hover fades and the dialog transition
        let has_animations = self.ui.has_active_animations();

        // 3. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 4. Animation subscription (vsync rate when needed)
        let animation_sub =
            if subscription_logic::needs_frames(blobs_need_frames, has_animations) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        iced::Subscription::batch([keyboard_sub, animation_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn blobs_need_frames(any_running: bool, reduce_motion: bool) -> bool {
        any_running && !reduce_motion
    }

    pub fn needs_frames(blobs_need_frames: bool, has_ui_animations: bool) -> bool {
        blobs_need_frames || has_ui_animations
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frame_subscription {
        use super::*;

        #[test]
        fn running_blobs_request_frames() {
            assert!(needs_frames(blobs_need_frames(true, false), false));
        }

        #[test]
        fn no_drivers_drop_the_subscription() {
            assert!(
                !needs_frames(blobs_need_frames(false, false), false),
                "No frames when nothing is mounted or every driver is stopped"
            );
        }

        #[test]
        fn reduce_motion_freezes_blobs() {
            assert!(!blobs_need_frames(true, true));
        }

        #[test]
        fn ui_animations_keep_frames_alive() {
            assert!(
                needs_frames(blobs_need_frames(true, true), true),
                "Hover fades still need frames with reduce motion on"
            );
        }
    }
}
