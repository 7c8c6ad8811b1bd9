// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::app::Page;
use crate::features::mesh::{
    DEFAULT_RINGS, DEFAULT_SEGMENTS, Lighting, MeshBlob, MeshGeometry, OrbitCamera,
};
use crate::features::palette::{self, MAX_CUSTOM_COLORS, MAX_DIALOG_COLORS, NEW_COLOR};
use crate::features::settings::ShowcaseSettings;
use crate::features::{
    BlobConfig, BlobFrame, BlobSlot, ColorScheme, CustomPalette, Settings, ShowcasePreset, Stage,
    presets,
};
use crate::i18n::{Language, Locale};
use crate::ui::animation::{HoverAnimations, SingleHoverAnimation};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, Locale)
    pub core: CoreState,
    /// Blob data (Showcase configuration, mounted drivers, mesh scene)
    pub studio: StudioState,
    /// UI state (Navigation, Dialogs, Animations)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        Self { settings, locale }
    }

    pub fn reduce_motion(&self) -> bool {
        self.settings.display.reduce_motion
    }
}

/// Showcase configuration plus every mounted blob
pub struct StudioState {
    /// Configuration edited by the showcase controls
    pub config: BlobConfig,
    pub scheme: ColorScheme,
    /// Colors used while `scheme` is [`ColorScheme::Custom`]; the inline editor
    /// grows it to six colors, the color dialog may apply up to eight
    pub custom: CustomPalette,
    pub stage: Stage,
    pub scene: SceneState,
}

impl StudioState {
    /// Restore the showcase from saved settings
    pub fn from_settings(showcase: &ShowcaseSettings) -> Self {
        let custom = CustomPalette::new(showcase.custom_colors.clone(), MAX_DIALOG_COLORS);
        let mut config = showcase.config.clone();
        config.colors = showcase.scheme.colors(custom.colors());

        Self {
            config,
            scheme: showcase.scheme,
            custom,
            stage: Stage::new(),
            scene: SceneState::default(),
        }
    }

    /// Snapshot for the `showcase` settings section
    pub fn to_settings(&self) -> ShowcaseSettings {
        ShowcaseSettings {
            config: self.config.clone(),
            scheme: self.scheme,
            custom_colors: self.custom.colors().to_vec(),
        }
    }

    /// Hand the edited configuration to the preview; applied on its next tick
    pub fn sync_preview(&mut self) {
        self.stage.set_config(BlobSlot::Preview, self.config.clone());
    }

    /// Whether the inline editor may append another color
    pub fn can_add_custom(&self) -> bool {
        self.custom.len() < MAX_CUSTOM_COLORS
    }

    /// Append a white stop from the inline editor
    pub fn add_custom_color(&mut self) -> bool {
        self.can_add_custom() && self.custom.push(NEW_COLOR)
    }

    /// Re-resolve colors after the scheme or custom palette changed
    pub fn apply_scheme(&mut self) {
        self.config.colors = self.scheme.colors(self.custom.colors());
        self.sync_preview();
    }

    /// Last frame of the preview, or a fresh frame at time 0 when unmounted
    pub fn preview_frame(&self) -> BlobFrame {
        self.stage
            .frame(BlobSlot::Preview)
            .cloned()
            .unwrap_or_else(|| BlobFrame::at(&self.config, 0.0))
    }

    /// Mount the blobs shown on `page`
    pub fn mount_page(&mut self, page: Page) {
        match page {
            Page::Showcase => {
                self.stage.mount(BlobSlot::Preview, self.config.clone());
                for preset in ShowcasePreset::all() {
                    self.stage.mount(BlobSlot::Preset(*preset), preset.thumbnail());
                }
            }
            Page::Examples => {
                for (index, config) in presets::example_blobs().into_iter().enumerate() {
                    self.stage.mount(BlobSlot::Example(index as u8), config);
                }
                self.stage.mount(BlobSlot::SimpleBlob, presets::simple_blob());
            }
            Page::Scene => self.scene.start(),
            Page::Settings => {}
        }
    }

    /// Unmount the blobs shown on `page`
    pub fn unmount_page(&mut self, page: Page) {
        match page {
            Page::Showcase => self
                .stage
                .unmount_where(|slot| matches!(slot, BlobSlot::Preview | BlobSlot::Preset(_))),
            Page::Examples => self
                .stage
                .unmount_where(|slot| matches!(slot, BlobSlot::Example(_) | BlobSlot::SimpleBlob)),
            Page::Scene => self.scene.stop(),
            Page::Settings => {}
        }
    }

    /// Whether any blob or the scene wants frames
    pub fn is_animating(&self) -> bool {
        self.stage.any_running() || self.scene.running
    }

    /// Advance every running blob and the scene by one frame
    pub fn tick(&mut self) {
        self.stage.tick_all();
        self.scene.tick();
    }
}

/// Mesh time step per frame (60 fps)
const SCENE_TIME_STEP: f32 = 1.0 / 60.0;
/// Displacement intensity of the scene blobs
const SCENE_INTENSITY: f32 = 1.0;

/// 3D mesh scene: camera, lights and the shared geometry for the current frame
pub struct SceneState {
    pub blobs: Vec<MeshBlob>,
    pub camera: OrbitCamera,
    pub lighting: Lighting,
    pub geometry: MeshGeometry,
    pub time: f32,
    pub running: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            blobs: MeshBlob::scene(),
            camera: OrbitCamera::default(),
            lighting: Lighting::default(),
            geometry: MeshGeometry::generate(DEFAULT_RINGS, DEFAULT_SEGMENTS, 0.0, SCENE_INTENSITY),
            time: 0.0,
            running: false,
        }
    }
}

impl SceneState {
    /// Start from time 0 with the camera reset
    pub fn start(&mut self) {
        self.time = 0.0;
        self.camera = OrbitCamera {
            auto_rotate: self.camera.auto_rotate,
            ..OrbitCamera::default()
        };
        self.geometry = MeshGeometry::generate(DEFAULT_RINGS, DEFAULT_SEGMENTS, 0.0, SCENE_INTENSITY);
        self.running = true;
        tracing::debug!("Mesh scene started");
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!("Mesh scene stopped at t={:.2}", self.time);
        }
        self.running = false;
    }

    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.time += SCENE_TIME_STEP;
        self.camera.advance();
        self.geometry =
            MeshGeometry::generate(DEFAULT_RINGS, DEFAULT_SEGMENTS, self.time, SCENE_INTENSITY);
    }
}

/// UI State (Navigation, Dialogs, Animations)
pub struct UiState {
    pub page: Page,
    pub toast: Option<Toast>,
    pub toast_visible: TimedFlag,
    pub color_dialog: ColorDialogState,
    /// "Copied" badge on the code card
    pub code_copied: TimedFlag,
    pub preset_animations: HoverAnimations<ShowcasePreset>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            page: Page::default(),
            toast: None,
            toast_visible: TimedFlag::default(),
            color_dialog: ColorDialogState::default(),
            code_copied: TimedFlag::default(),
            preset_animations: HoverAnimations::new(),
        }
    }

    /// Check if any hover or dialog animation is currently active
    pub fn has_active_animations(&self) -> bool {
        self.preset_animations.is_animating() || self.color_dialog.animation.is_animating()
    }

    /// Advance hover and dialog animations
    pub fn tick_animations(&mut self, now: Instant) {
        self.preset_animations.tick(now);
        self.color_dialog.animation.tick(now);
        self.preset_animations.cleanup_completed();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Flag switched off by a delayed reset message
///
/// Each [`raise`](Self::raise) bumps the generation; a reset carrying an
/// older generation is ignored, so re-raising restarts the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimedFlag {
    on: bool,
    generation: u64,
}

impl TimedFlag {
    /// Switch on; returns the generation the reset message must carry
    pub fn raise(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.on = true;
        self.generation
    }

    /// Switch off if `generation` belongs to the latest raise
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.on = false;
        }
    }

    pub fn clear(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Advanced color dialog: a temporary palette committed only on Apply
pub struct ColorDialogState {
    pub open: bool,
    pub palette: CustomPalette,
    /// "Copied" badge next to the CSS button
    pub copied: TimedFlag,
    pub animation: SingleHoverAnimation,
}

impl Default for ColorDialogState {
    fn default() -> Self {
        Self {
            open: false,
            palette: CustomPalette::new(palette::to_owned(palette::PURPLE), MAX_DIALOG_COLORS),
            copied: TimedFlag::default(),
            animation: SingleHoverAnimation::new(),
        }
    }
}

impl ColorDialogState {
    /// Open with a copy of `colors`
    pub fn open_with(&mut self, colors: &[String]) {
        self.palette = CustomPalette::new(colors.to_vec(), MAX_DIALOG_COLORS);
        self.copied.clear();
        self.open = true;
        self.animation.start();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.copied.clear();
        self.animation.stop();
    }

    /// Append a swatch, or overwrite the last color when the palette is full
    pub fn pick_swatch(&mut self, color: &str) {
        if !self.palette.push(color) {
            let last = self.palette.len().saturating_sub(1);
            self.palette.set(last, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_round_trips_through_settings() {
        let mut studio = StudioState::from_settings(&ShowcaseSettings::default());
        studio.scheme = ColorScheme::Custom;
        studio.custom.push("#123456");
        studio.apply_scheme();

        let restored = StudioState::from_settings(&studio.to_settings());
        assert_eq!(restored.scheme, ColorScheme::Custom);
        assert_eq!(restored.config.colors, studio.custom.colors());
    }

    #[test]
    fn inline_editor_stops_at_six_colors() {
        let mut studio = StudioState::from_settings(&ShowcaseSettings::default());
        while studio.add_custom_color() {}
        assert_eq!(studio.custom.len(), MAX_CUSTOM_COLORS);

        // The dialog may still apply a longer palette
        studio.custom = CustomPalette::new(palette::to_owned(palette::RAINBOW), MAX_DIALOG_COLORS);
        assert_eq!(studio.custom.len(), MAX_DIALOG_COLORS);
        assert!(!studio.can_add_custom());
    }

    #[test]
    fn page_mounting_is_scoped() {
        let mut studio = StudioState::from_settings(&ShowcaseSettings::default());
        studio.mount_page(Page::Showcase);
        assert_eq!(studio.stage.len(), 1 + ShowcasePreset::all().len());

        studio.mount_page(Page::Examples);
        studio.unmount_page(Page::Showcase);
        assert!(!studio.stage.is_mounted(BlobSlot::Preview));
        assert!(studio.stage.is_mounted(BlobSlot::SimpleBlob));
        assert_eq!(studio.stage.len(), 4);

        studio.unmount_page(Page::Examples);
        assert!(!studio.is_animating());
    }

    #[test]
    fn scene_only_ticks_while_running() {
        let mut scene = SceneState::default();
        scene.tick();
        assert_eq!(scene.time, 0.0);

        scene.start();
        scene.tick();
        scene.tick();
        assert!(scene.time > 0.0);
        assert!(scene.camera.azimuth > 0.0, "auto-rotate advances the orbit");

        scene.stop();
        let time = scene.time;
        scene.tick();
        assert_eq!(scene.time, time);

        scene.start();
        assert_eq!(scene.time, 0.0, "restart resets the clock");
    }

    #[test]
    fn timed_flag_ignores_stale_resets() {
        let mut flag = TimedFlag::default();
        let first = flag.raise();
        let second = flag.raise();

        flag.expire(first);
        assert!(flag.is_on(), "an older reset must not clear a newer raise");

        flag.expire(second);
        assert!(!flag.is_on());

        flag.expire(second);
        assert!(!flag.is_on());
    }

    #[test]
    fn dialog_swatches_fill_then_replace_last() {
        let mut dialog = ColorDialogState::default();
        dialog.open_with(&palette::to_owned(palette::NEON));
        for swatch in palette::SWATCHES.iter().take(4) {
            dialog.pick_swatch(swatch);
        }
        assert_eq!(dialog.palette.len(), MAX_DIALOG_COLORS);
        assert_eq!(dialog.palette.colors().last().map(String::as_str), Some(palette::SWATCHES[3]));

        dialog.pick_swatch("#000000");
        assert_eq!(dialog.palette.len(), MAX_DIALOG_COLORS);
        assert_eq!(dialog.palette.colors().last().map(String::as_str), Some("#000000"));
    }
}
