//! Preset configurations
//!
//! Motion presets tweak intensity/speed (and optionally gradient spin);
//! showcase presets replace the whole configuration.

use super::config::BlobConfig;
use super::gradient::{GradientDirection, GradientType};
use super::palette::{self, ColorScheme};

/// Motion-only presets for common use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreset {
    Subtle,
    Normal,
    Dynamic,
    Extreme,
    Static,
    GradientSpin,
    FastSpin,
}

impl MotionPreset {
    pub fn all() -> &'static [MotionPreset] {
        &[
            Self::Subtle,
            Self::Normal,
            Self::Dynamic,
            Self::Extreme,
            Self::Static,
            Self::GradientSpin,
            Self::FastSpin,
        ]
    }

    /// Apply this preset on top of `config`
    pub fn apply(&self, config: BlobConfig) -> BlobConfig {
        match self {
            Self::Subtle => config.intensity(0.3).speed(0.8),
            Self::Normal => config.intensity(0.5).speed(1.0),
            Self::Dynamic => config.intensity(1.0).speed(1.5),
            Self::Extreme => config.intensity(2.0).speed(2.0),
            Self::Static => config.intensity(0.0).speed(0.0),
            Self::GradientSpin => config
                .intensity(0.5)
                .speed(1.0)
                .animate_gradient(true)
                .gradient_speed(1.0),
            Self::FastSpin => config
                .intensity(0.8)
                .speed(1.2)
                .animate_gradient(true)
                .gradient_speed(2.0),
        }
    }
}

/// Quick linear gradient directions
pub const GRADIENT_DIRECTIONS: &[(&str, f32)] = &[
    ("Top to Bottom", 180.0),
    ("Left to Right", 90.0),
    ("Diagonal ↘", 135.0),
    ("Diagonal ↙", 45.0),
    ("Bottom to Top", 0.0),
    ("Right to Left", 270.0),
];

/// Full-configuration presets shown in the showcase gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcasePreset {
    Static,
    RainbowSpin,
    FastNeon,
    SlowSunset,
}

impl ShowcasePreset {
    pub fn all() -> &'static [ShowcasePreset] {
        &[
            Self::Static,
            Self::RainbowSpin,
            Self::FastNeon,
            Self::SlowSunset,
        ]
    }

    pub fn scheme(&self) -> ColorScheme {
        match self {
            Self::Static => ColorScheme::Purple,
            Self::RainbowSpin => ColorScheme::Rainbow,
            Self::FastNeon => ColorScheme::Neon,
            Self::SlowSunset => ColorScheme::Sunset,
        }
    }

    /// Configuration applied to the preview when the card is clicked;
    /// the glow and drop shadow toggles of `current` are kept
    pub fn apply(&self, current: BlobConfig) -> BlobConfig {
        let base = BlobConfig::default()
            .gradient_type(GradientType::Linear)
            .glow(current.glow)
            .drop_shadow(current.drop_shadow);
        let colors = self.scheme().colors(&[]);
        match self {
            Self::Static => base
                .size(150.0)
                .intensity(0.2)
                .speed(0.8)
                .vertices(24)
                .colors(colors.as_slice())
                .gradient_angle(45.0)
                .animate_gradient(false),
            Self::RainbowSpin => base
                .size(200.0)
                .intensity(0.5)
                .speed(1.0)
                .vertices(24)
                .colors(colors.as_slice())
                .gradient_angle(0.0)
                .animate_gradient(true)
                .gradient_speed(1.0)
                .gradient_direction(GradientDirection::Clockwise),
            Self::FastNeon => base
                .size(250.0)
                .intensity(1.2)
                .speed(1.5)
                .vertices(32)
                .colors(colors.as_slice())
                .gradient_angle(90.0)
                .animate_gradient(true)
                .gradient_speed(2.0)
                .gradient_direction(GradientDirection::CounterClockwise),
            Self::SlowSunset => base
                .size(180.0)
                .intensity(0.8)
                .speed(0.6)
                .vertices(36)
                .colors(colors.as_slice())
                .gradient_angle(135.0)
                .animate_gradient(true)
                .gradient_speed(0.5)
                .gradient_direction(GradientDirection::Clockwise),
        }
    }

    /// Configuration of the small live thumbnail on the card
    pub fn thumbnail(&self) -> BlobConfig {
        let colors = self.scheme().colors(&[]);
        let base = BlobConfig::default().size(80.0).colors(colors.as_slice());
        match self {
            Self::Static => base.intensity(0.2).speed(0.8).gradient_angle(45.0),
            Self::RainbowSpin => base
                .intensity(0.5)
                .speed(1.0)
                .animate_gradient(true)
                .gradient_speed(1.0),
            Self::FastNeon => base
                .intensity(1.2)
                .speed(1.5)
                .animate_gradient(true)
                .gradient_speed(2.0)
                .gradient_direction(GradientDirection::CounterClockwise),
            Self::SlowSunset => base
                .intensity(0.8)
                .speed(0.6)
                .animate_gradient(true)
                .gradient_speed(0.5),
        }
    }
}

/// Blobs shown on the examples page
pub fn example_blobs() -> Vec<BlobConfig> {
    vec![
        BlobConfig::default(),
        BlobConfig::default()
            .size(250.0)
            .colors(palette::SUNSET)
            .intensity(0.3)
            .speed(1.2),
        MotionPreset::Subtle.apply(BlobConfig::default().size(180.0).colors(palette::OCEAN)),
    ]
}

/// The single large blob on the examples page
pub fn simple_blob() -> BlobConfig {
    BlobConfig::default().size(300.0).colors(palette::PURPLE).speed(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_preset_freezes_motion() {
        let config = MotionPreset::Static.apply(BlobConfig::default());
        assert_eq!((config.intensity, config.speed), (0.0, 0.0));
    }

    #[test]
    fn spin_presets_enable_gradient_animation() {
        for preset in [MotionPreset::GradientSpin, MotionPreset::FastSpin] {
            assert!(preset.apply(BlobConfig::default()).animate_gradient);
        }
        assert!(!MotionPreset::Dynamic.apply(BlobConfig::default()).animate_gradient);
    }

    #[test]
    fn fast_neon_spins_counterclockwise() {
        let config = ShowcasePreset::FastNeon.apply(BlobConfig::default());
        assert_eq!(config.gradient_direction, GradientDirection::CounterClockwise);
        assert_eq!(config.vertices, 32);
        assert_eq!(config.colors, palette::to_owned(palette::NEON));
    }

    #[test]
    fn showcase_presets_keep_effect_toggles() {
        let current = BlobConfig::default().glow(false).drop_shadow(false).size(320.0);
        for preset in ShowcasePreset::all() {
            let config = preset.apply(current.clone());
            assert!(!config.glow, "{:?} should leave glow off", preset);
            assert!(!config.drop_shadow, "{:?} should leave the shadow off", preset);
            assert_ne!(config.size, 320.0);
        }

        let config = ShowcasePreset::Static.apply(BlobConfig::default().glow(true));
        assert!(config.glow);
    }

    #[test]
    fn thumbnails_are_small() {
        for preset in ShowcasePreset::all() {
            assert_eq!(preset.thumbnail().size, 80.0);
        }
    }

    #[test]
    fn examples_page_has_three_blobs() {
        let blobs = example_blobs();
        assert_eq!(blobs.len(), 3);
        assert_eq!(blobs[2].intensity, 0.3);
        assert_eq!(blobs[2].speed, 0.8);
    }

    #[test]
    fn direction_presets_cover_compass() {
        let angles: Vec<f32> = GRADIENT_DIRECTIONS.iter().map(|(_, a)| *a).collect();
        for expected in [0.0, 90.0, 180.0, 270.0] {
            assert!(angles.contains(&expected));
        }
    }
}
