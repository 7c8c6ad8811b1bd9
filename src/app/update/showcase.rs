// src/app/update/showcase.rs
//! Showcase control handlers
//!
//! Every control edits `studio.config` and hands the result to the preview
//! slot; the preview picks it up on its next tick.

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{BlobConfig, BlobSlot};

/// How long the "copied" badge stays visible
pub(super) const COPIED_DURATION: Duration = Duration::from_secs(2);

impl App {
    /// Apply `edit` to the showcase configuration and forward it to the preview
    fn edit_config(&mut self, edit: impl FnOnce(BlobConfig) -> BlobConfig) -> Task<Message> {
        let config = std::mem::take(&mut self.studio.config);
        self.studio.config = edit(config);
        self.studio.sync_preview();
        Task::none()
    }

    /// Handle showcase control messages
    pub fn handle_showcase(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TogglePreview => {
                let stage = &mut self.studio.stage;
                if stage.is_running(BlobSlot::Preview) {
                    stage.pause(BlobSlot::Preview);
                    tracing::debug!("Preview paused");
                } else {
                    stage.resume(BlobSlot::Preview);
                    tracing::debug!("Preview resumed from t=0");
                }
                Some(Task::none())
            }

            // Blob settings
            Message::SizeChanged(size) => Some(self.edit_config(|c| c.size(*size))),
            Message::IntensityChanged(intensity) => {
                Some(self.edit_config(|c| c.intensity(*intensity)))
            }
            Message::SpeedChanged(speed) => Some(self.edit_config(|c| c.speed(*speed))),
            Message::VerticesChanged(vertices) => {
                Some(self.edit_config(|c| c.vertices(*vertices)))
            }

            // Colors
            Message::SchemeSelected(scheme) => {
                self.studio.scheme = *scheme;
                self.studio.apply_scheme();
                Some(Task::none())
            }
            Message::CustomColorChanged(index, color) => {
                self.studio.custom.set(*index, color.clone());
                self.studio.apply_scheme();
                Some(Task::none())
            }
            Message::AddCustomColor => {
                if self.studio.add_custom_color() {
                    self.studio.apply_scheme();
                }
                Some(Task::none())
            }
            Message::RemoveCustomColor(index) => {
                if self.studio.custom.remove(*index) {
                    self.studio.apply_scheme();
                }
                Some(Task::none())
            }

            // Gradient
            Message::GradientTypeSelected(gradient_type) => {
                Some(self.edit_config(|c| c.gradient_type(*gradient_type)))
            }
            Message::GradientAngleChanged(angle) => {
                Some(self.edit_config(|c| c.gradient_angle(*angle)))
            }
            Message::AnimateGradientToggled(animate) => {
                Some(self.edit_config(|c| c.animate_gradient(*animate)))
            }
            Message::GradientSpeedChanged(speed) => {
                Some(self.edit_config(|c| c.gradient_speed(*speed)))
            }
            Message::GradientDirectionSelected(direction) => {
                Some(self.edit_config(|c| c.gradient_direction(*direction)))
            }

            // Effects
            Message::GlowToggled(glow) => Some(self.edit_config(|c| c.glow(*glow))),
            Message::DropShadowToggled(shadow) => {
                Some(self.edit_config(|c| c.drop_shadow(*shadow)))
            }

            // Presets
            Message::ApplyMotionPreset(preset) => {
                tracing::info!("Applying motion preset {:?}", preset);
                Some(self.edit_config(|c| preset.apply(c)))
            }
            Message::ApplyShowcasePreset(preset) => {
                tracing::info!("Applying showcase preset {:?}", preset);
                self.studio.scheme = preset.scheme();
                Some(self.edit_config(|config| preset.apply(config)))
            }
            Message::HoverPreset(preset) => {
                self.ui.preset_animations.set_hovered_exclusive(*preset);
                Some(Task::none())
            }

            // Generated code
            Message::CopyCode => {
                let code = self.studio.config.to_code(self.studio.scheme);
                let generation = self.ui.code_copied.raise();
                Some(Task::batch([
                    iced::clipboard::write(code),
                    Task::perform(
                        async {
                            tokio::time::sleep(COPIED_DURATION).await;
                        },
                        move |_| Message::CodeCopiedReset(generation),
                    ),
                ]))
            }
            Message::CodeCopiedReset(generation) => {
                self.ui.code_copied.expire(*generation);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, StudioState, UiState};
    use crate::features::Settings;
    use crate::features::settings::ShowcaseSettings;
    use crate::features::{ShowcasePreset, presets::MotionPreset};

    fn app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            studio: StudioState::from_settings(&ShowcaseSettings::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn second_copy_outlives_first_reset() {
        let mut app = app();
        let _ = app.update(Message::CopyCode);
        let _ = app.update(Message::CopyCode);

        let _ = app.update(Message::CodeCopiedReset(1));
        assert!(app.ui.code_copied.is_on(), "badge belongs to the second copy");

        let _ = app.update(Message::CodeCopiedReset(2));
        assert!(!app.ui.code_copied.is_on());
    }

    #[test]
    fn showcase_preset_leaves_effect_toggles() {
        let mut app = app();
        let _ = app.update(Message::GlowToggled(false));
        let _ = app.update(Message::ApplyShowcasePreset(ShowcasePreset::FastNeon));
        assert!(!app.studio.config.glow);
        assert!(app.studio.config.drop_shadow);
        assert_eq!(app.studio.config.vertices, 32);

        let _ = app.update(Message::ApplyMotionPreset(MotionPreset::Static));
        assert_eq!(app.studio.config.speed, 0.0);
    }
}
