//! Application messages

use std::path::PathBuf;

use iced::keyboard::{Key, Modifiers};

use crate::features::{
    ColorScheme, GradientDirection, GradientType, MotionPreset, ShowcasePreset,
};
use crate::i18n::Language;

/// Top-level pages reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Showcase,
    Examples,
    Scene,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Showcase, Page::Examples, Page::Scene, Page::Settings]
    }

    /// Id of the page's scrollable, reset to the top on navigation
    pub fn scroll_id(&self) -> &'static str {
        match self {
            Page::Showcase => "showcase_scroll",
            Page::Examples => "examples_scroll",
            Page::Scene => "scene_scroll",
            Page::Settings => "settings_scroll",
        }
    }
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Nav bar page selected
    Navigate(Page),

    // ============ Animation ============
    /// Frame tick from `window::frames()`
    AnimationTick,
    /// Keyboard shortcut
    KeyPressed(Key, Modifiers),
    /// Pause or resume the showcase preview
    TogglePreview,

    // ============ Blob settings ============
    SizeChanged(f32),
    IntensityChanged(f32),
    SpeedChanged(f32),
    VerticesChanged(u32),

    // ============ Colors ============
    SchemeSelected(ColorScheme),
    /// Hex text edited in the inline custom editor
    CustomColorChanged(usize, String),
    AddCustomColor,
    RemoveCustomColor(usize),

    // ============ Gradient ============
    GradientTypeSelected(GradientType),
    GradientAngleChanged(f32),
    AnimateGradientToggled(bool),
    GradientSpeedChanged(f32),
    GradientDirectionSelected(GradientDirection),

    // ============ Effects ============
    GlowToggled(bool),
    DropShadowToggled(bool),

    // ============ Presets ============
    ApplyMotionPreset(MotionPreset),
    ApplyShowcasePreset(ShowcasePreset),
    /// Preset card hover changed (None = left all cards)
    HoverPreset(Option<ShowcasePreset>),

    // ============ Code & Export ============
    CopyCode,
    /// Hide the "copied" badge on the code card, if still from this copy
    CodeCopiedReset(u64),
    ExportSvg,
    /// Save dialog finished; `Ok(None)` when the user cancelled
    ExportFinished(Result<Option<PathBuf>, String>),

    // ============ Color dialog ============
    OpenColorDialog,
    CloseColorDialog,
    DialogColorChanged(usize, String),
    DialogAddColor,
    DialogRemoveColor(usize),
    /// Swatch clicked: appended when there is room, otherwise assigned to the last color
    DialogSwatchPicked(&'static str),
    DialogCopyCss,
    DialogCopiedReset(u64),
    ApplyColorDialog,

    // ============ Scene ============
    /// Orbit drag delta in pixels
    SceneDragged(f32, f32),
    /// Scroll zoom in lines (positive = closer)
    SceneZoomed(f32),
    SceneAutoRotateToggled(bool),

    // ============ Settings ============
    ToggleDarkMode(bool),
    LanguageChanged(Language),
    ToggleReduceMotion(bool),
    ResetShowcase,
    /// Store the showcase in settings and save with feedback
    SaveShowcase,
    SaveSettings,

    // ============ Toast ============
    /// Hide the toast shown with this generation
    HideToast(u64),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::SceneDragged(_, _) => simple!("SceneDragged"),

            // Navigation
            Self::Navigate(p) => simple!("Navigate", "{:?}", p),

            // Keyboard
            Self::KeyPressed(_, _) => simple!("KeyPressed"),
            Self::TogglePreview => simple!("TogglePreview"),

            // Blob settings
            Self::SizeChanged(v) => simple!("SizeChanged", "{:.0}", v),
            Self::IntensityChanged(v) => simple!("IntensityChanged", "{:.1}", v),
            Self::SpeedChanged(v) => simple!("SpeedChanged", "{:.1}", v),
            Self::VerticesChanged(v) => simple!("VerticesChanged", "{}", v),

            // Colors
            Self::SchemeSelected(s) => simple!("SchemeSelected", "{:?}", s),
            Self::CustomColorChanged(i, c) => simple!("CustomColorChanged", "{}, {}", i, c),
            Self::AddCustomColor => simple!("AddCustomColor"),
            Self::RemoveCustomColor(i) => simple!("RemoveCustomColor", "{}", i),

            // Gradient
            Self::GradientTypeSelected(t) => simple!("GradientTypeSelected", "{:?}", t),
            Self::GradientAngleChanged(a) => simple!("GradientAngleChanged", "{:.0}", a),
            Self::AnimateGradientToggled(b) => simple!("AnimateGradientToggled", "{}", b),
            Self::GradientSpeedChanged(v) => simple!("GradientSpeedChanged", "{:.1}", v),
            Self::GradientDirectionSelected(d) => {
                simple!("GradientDirectionSelected", "{:?}", d)
            }

            // Effects
            Self::GlowToggled(b) => simple!("GlowToggled", "{}", b),
            Self::DropShadowToggled(b) => simple!("DropShadowToggled", "{}", b),

            // Presets
            Self::ApplyMotionPreset(p) => simple!("ApplyMotionPreset", "{:?}", p),
            Self::ApplyShowcasePreset(p) => simple!("ApplyShowcasePreset", "{:?}", p),
            Self::HoverPreset(p) => simple!("HoverPreset", "{:?}", p),

            // Code & Export
            Self::CopyCode => simple!("CopyCode"),
            Self::CodeCopiedReset(g) => simple!("CodeCopiedReset", "{}", g),
            Self::ExportSvg => simple!("ExportSvg"),
            Self::ExportFinished(r) => simple!("ExportFinished", "{:?}", r),

            // Color dialog
            Self::OpenColorDialog => simple!("OpenColorDialog"),
            Self::CloseColorDialog => simple!("CloseColorDialog"),
            Self::DialogColorChanged(i, c) => simple!("DialogColorChanged", "{}, {}", i, c),
            Self::DialogAddColor => simple!("DialogAddColor"),
            Self::DialogRemoveColor(i) => simple!("DialogRemoveColor", "{}", i),
            Self::DialogSwatchPicked(c) => simple!("DialogSwatchPicked", "{}", c),
            Self::DialogCopyCss => simple!("DialogCopyCss"),
            Self::DialogCopiedReset(g) => simple!("DialogCopiedReset", "{}", g),
            Self::ApplyColorDialog => simple!("ApplyColorDialog"),

            // Scene
            Self::SceneZoomed(d) => simple!("SceneZoomed", "{:.1}", d),
            Self::SceneAutoRotateToggled(b) => simple!("SceneAutoRotateToggled", "{}", b),

            // Settings
            Self::ToggleDarkMode(b) => simple!("ToggleDarkMode", "{}", b),
            Self::LanguageChanged(l) => simple!("LanguageChanged", "{:?}", l),
            Self::ToggleReduceMotion(b) => simple!("ToggleReduceMotion", "{}", b),
            Self::ResetShowcase => simple!("ResetShowcase"),
            Self::SaveShowcase => simple!("SaveShowcase"),
            Self::SaveSettings => simple!("SaveSettings"),

            // Toast
            Self::HideToast(g) => simple!("HideToast", "{}", g),
        }
    }
}
