//! Internationalization (i18n) support for Morphblob
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a stored language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavShowcase,
    NavExamples,
    NavScene,
    NavSettings,

    // Showcase
    ShowcaseTitle,
    ShowcaseSubtitle,
    PreviewPause,
    PreviewResume,
    PreviewHint,

    // Blob settings
    SectionBlob,
    LabelSize,
    LabelIntensity,
    LabelSpeed,
    LabelVertices,

    // Colors
    SectionColors,
    LabelColorScheme,
    CustomColorsTitle,
    AddColor,
    RemoveColor,
    AdvancedColors,

    // Gradient
    SectionGradient,
    LabelGradientType,
    GradientLinear,
    GradientRadial,
    LabelAnimateGradient,
    LabelRotationSpeed,
    LabelDirection,
    DirectionClockwise,
    DirectionCounterClockwise,
    LabelAngle,
    QuickDirections,
    RadialHint,

    // Effects
    SectionEffects,
    LabelGlow,
    LabelDropShadow,

    // Motion presets
    SectionMotionPresets,
    MotionSubtle,
    MotionNormal,
    MotionDynamic,
    MotionExtreme,
    MotionStatic,
    MotionGradientSpin,
    MotionFastSpin,

    // Showcase presets
    SectionPresets,
    PresetStatic,
    PresetStaticDesc,
    PresetRainbowSpin,
    PresetRainbowSpinDesc,
    PresetFastNeon,
    PresetFastNeonDesc,
    PresetSlowSunset,
    PresetSlowSunsetDesc,

    // Code & export
    SectionCode,
    CopyCode,
    Copied,
    ExportSvg,
    ExportDialogTitle,
    ExportSuccess,
    ExportFailed,

    // Color dialog
    ColorDialogTitle,
    ColorDialogPalette,
    ColorDialogSwatches,
    ColorDialogPreview,
    ColorDialogCopyCss,
    ColorDialogApply,
    ColorDialogCancel,

    // Examples
    ExamplesTitle,
    ExamplesSubtitle,
    ExampleDefault,
    ExampleSunset,
    ExampleOcean,
    SimpleBlobTitle,

    // Scene
    SceneTitle,
    SceneSubtitle,
    SceneHint,
    SceneAutoRotate,

    // Settings
    SettingsTitle,
    SettingsDisplay,
    SettingsDarkMode,
    SettingsDarkModeDesc,
    SettingsLanguage,
    SettingsLanguageDesc,
    SettingsReduceMotion,
    SettingsReduceMotionDesc,
    SettingsShowcase,
    SettingsResetShowcase,
    SettingsResetShowcaseDesc,
    SettingsSave,
    SettingsSaved,
    SettingsSaveFailed,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations
        .get(&key)
        .or_else(|| en::translations().get(&key))
        .copied()
        .unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), *language);
        }
        assert_eq!(Language::from_code("fr"), Language::English);
    }

    #[test]
    fn lookups_resolve_in_both_languages() {
        let en = Locale::new(Language::English);
        let zh = Locale::new(Language::Chinese);
        assert_eq!(en.get(Key::AppName), "Morphblob");
        assert_eq!(en.get(Key::NavScene), "Scene");
        assert_ne!(zh.get(Key::NavSettings), "???");
        assert_ne!(zh.get(Key::NavSettings), en.get(Key::NavSettings));
    }
}
