//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Morphblob");

    // Navigation
    m.insert(Key::NavShowcase, "Showcase");
    m.insert(Key::NavExamples, "Examples");
    m.insert(Key::NavScene, "Scene");
    m.insert(Key::NavSettings, "Settings");

    // Showcase
    m.insert(Key::ShowcaseTitle, "Blob Showcase");
    m.insert(Key::ShowcaseSubtitle, "Shape a morphing blob, then copy or export it");
    m.insert(Key::PreviewPause, "Pause");
    m.insert(Key::PreviewResume, "Resume");
    m.insert(Key::PreviewHint, "Press Space to pause or resume");

    // Blob settings
    m.insert(Key::SectionBlob, "Blob Settings");
    m.insert(Key::LabelSize, "Size");
    m.insert(Key::LabelIntensity, "Morph Intensity");
    m.insert(Key::LabelSpeed, "Animation Speed");
    m.insert(Key::LabelVertices, "Vertices");

    // Colors
    m.insert(Key::SectionColors, "Colors");
    m.insert(Key::LabelColorScheme, "Color Scheme");
    m.insert(Key::CustomColorsTitle, "Custom Colors");
    m.insert(Key::AddColor, "+ Add Color");
    m.insert(Key::RemoveColor, "Remove");
    m.insert(Key::AdvancedColors, "Advanced Color Picker");

    // Gradient
    m.insert(Key::SectionGradient, "Gradient");
    m.insert(Key::LabelGradientType, "Gradient Type");
    m.insert(Key::GradientLinear, "Linear");
    m.insert(Key::GradientRadial, "Radial");
    m.insert(Key::LabelAnimateGradient, "Animate Gradient");
    m.insert(Key::LabelRotationSpeed, "Rotation Speed");
    m.insert(Key::LabelDirection, "Direction");
    m.insert(Key::DirectionClockwise, "↻ Clockwise");
    m.insert(Key::DirectionCounterClockwise, "↺ Counterclockwise");
    m.insert(Key::LabelAngle, "Angle");
    m.insert(Key::QuickDirections, "Quick Directions");
    m.insert(Key::RadialHint, "Radial gradients spread from the center outwards");

    // Effects
    m.insert(Key::SectionEffects, "Effects");
    m.insert(Key::LabelGlow, "Glow");
    m.insert(Key::LabelDropShadow, "Drop Shadow");

    // Motion presets
    m.insert(Key::SectionMotionPresets, "Motion Presets");
    m.insert(Key::MotionSubtle, "Subtle");
    m.insert(Key::MotionNormal, "Normal");
    m.insert(Key::MotionDynamic, "Dynamic");
    m.insert(Key::MotionExtreme, "Extreme");
    m.insert(Key::MotionStatic, "Static");
    m.insert(Key::MotionGradientSpin, "Gradient Spin");
    m.insert(Key::MotionFastSpin, "Fast Spin");

    // Showcase presets
    m.insert(Key::SectionPresets, "Animation Presets");
    m.insert(Key::PresetStatic, "Static");
    m.insert(Key::PresetStaticDesc, "Gentle morph, fixed gradient");
    m.insert(Key::PresetRainbowSpin, "Rainbow Spin");
    m.insert(Key::PresetRainbowSpinDesc, "Rainbow gradient turning clockwise");
    m.insert(Key::PresetFastNeon, "Fast Neon");
    m.insert(Key::PresetFastNeonDesc, "Strong morph with a fast reverse spin");
    m.insert(Key::PresetSlowSunset, "Slow Sunset");
    m.insert(Key::PresetSlowSunsetDesc, "Warm colors drifting slowly");

    // Code & export
    m.insert(Key::SectionCode, "Generated Code");
    m.insert(Key::CopyCode, "Copy");
    m.insert(Key::Copied, "Copied!");
    m.insert(Key::ExportSvg, "Export SVG");
    m.insert(Key::ExportDialogTitle, "Export blob as SVG");
    m.insert(Key::ExportSuccess, "SVG exported");
    m.insert(Key::ExportFailed, "Export failed");

    // Color dialog
    m.insert(Key::ColorDialogTitle, "Color Picker");
    m.insert(Key::ColorDialogPalette, "Palette");
    m.insert(Key::ColorDialogSwatches, "Swatches");
    m.insert(Key::ColorDialogPreview, "Preview");
    m.insert(Key::ColorDialogCopyCss, "Copy CSS");
    m.insert(Key::ColorDialogApply, "Apply");
    m.insert(Key::ColorDialogCancel, "Cancel");

    // Examples
    m.insert(Key::ExamplesTitle, "Examples");
    m.insert(Key::ExamplesSubtitle, "A few configurations to start from");
    m.insert(Key::ExampleDefault, "Default");
    m.insert(Key::ExampleSunset, "Sunset, calm");
    m.insert(Key::ExampleOcean, "Ocean, subtle");
    m.insert(Key::SimpleBlobTitle, "Simple Blob");

    // Scene
    m.insert(Key::SceneTitle, "Mesh Blob");
    m.insert(Key::SceneSubtitle, "Displaced spheres under three lights");
    m.insert(Key::SceneHint, "Drag to rotate, scroll to zoom");
    m.insert(Key::SceneAutoRotate, "Auto-rotate");

    // Settings
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsDisplay, "Display");
    m.insert(Key::SettingsDarkMode, "Dark Mode");
    m.insert(Key::SettingsDarkModeDesc, "Use the dark color theme");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(Key::SettingsLanguageDesc, "Interface language");
    m.insert(Key::SettingsReduceMotion, "Reduce Motion");
    m.insert(Key::SettingsReduceMotionDesc, "Freeze every blob on its current frame");
    m.insert(Key::SettingsShowcase, "Showcase");
    m.insert(Key::SettingsResetShowcase, "Reset Showcase");
    m.insert(Key::SettingsResetShowcaseDesc, "Restore the default blob and colors");
    m.insert(Key::SettingsSave, "Save");
    m.insert(Key::SettingsSaved, "Settings saved");
    m.insert(Key::SettingsSaveFailed, "Failed to save settings");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
