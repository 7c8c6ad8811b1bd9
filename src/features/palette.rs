//! Color palettes for blob gradients
//!
//! Colors stay as the strings the user typed; parsing only happens when a
//! renderer needs numeric channels.

use serde::{Deserialize, Serialize};

/// Fewest colors a custom palette may hold
pub const MIN_CUSTOM_COLORS: usize = 2;
/// Most colors the inline custom editor allows
pub const MAX_CUSTOM_COLORS: usize = 6;
/// Most colors the advanced color dialog allows
pub const MAX_DIALOG_COLORS: usize = 8;
/// Color appended by "add color"
pub const NEW_COLOR: &str = "#ffffff";

pub const PURPLE: &[&str] = &["#6366f1", "#8b5cf6", "#ec4899"];
pub const OCEAN: &[&str] = &["#06b6d4", "#0891b2", "#0e7490"];
pub const SUNSET: &[&str] = &["#f59e0b", "#f97316", "#ef4444"];
pub const FOREST: &[&str] = &["#10b981", "#059669", "#047857"];
pub const ROSE: &[&str] = &["#ec4899", "#be185d", "#9f1239"];
pub const MONOCHROME: &[&str] = &["#374151", "#6b7280", "#9ca3af"];
pub const RAINBOW: &[&str] = &[
    "#ff0000", "#ff8000", "#ffff00", "#80ff00", "#00ff00", "#00ff80", "#00ffff", "#0080ff",
    "#0000ff", "#8000ff", "#ff00ff", "#ff0080",
];
pub const NEON: &[&str] = &["#ff006e", "#8338ec", "#3a86ff", "#06ffa5"];

/// Swatches offered by the advanced color dialog
pub const SWATCHES: &[&str] = &[
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd",
    "#00d2d3", "#ff9f43", "#10ac84", "#ee5a24", "#0abde3", "#006ba6", "#f38ba8", "#a8e6cf",
    "#ffd93d", "#6c5ce7",
];

/// Named color scheme selectable in the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Purple,
    Ocean,
    Sunset,
    Forest,
    Rose,
    Monochrome,
    Rainbow,
    Neon,
    Custom,
}

impl ColorScheme {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Purple,
            Self::Ocean,
            Self::Sunset,
            Self::Forest,
            Self::Rose,
            Self::Monochrome,
            Self::Rainbow,
            Self::Neon,
            Self::Custom,
        ]
    }

    /// Preset colors, `None` for the custom scheme
    pub fn preset(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Purple => Some(PURPLE),
            Self::Ocean => Some(OCEAN),
            Self::Sunset => Some(SUNSET),
            Self::Forest => Some(FOREST),
            Self::Rose => Some(ROSE),
            Self::Monochrome => Some(MONOCHROME),
            Self::Rainbow => Some(RAINBOW),
            Self::Neon => Some(NEON),
            Self::Custom => None,
        }
    }

    /// Identifier used in generated code (`palette::OCEAN`)
    pub fn const_name(&self) -> &'static str {
        match self {
            Self::Purple => "PURPLE",
            Self::Ocean => "OCEAN",
            Self::Sunset => "SUNSET",
            Self::Forest => "FOREST",
            Self::Rose => "ROSE",
            Self::Monochrome => "MONOCHROME",
            Self::Rainbow => "RAINBOW",
            Self::Neon => "NEON",
            Self::Custom => "CUSTOM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Purple => "Purple Gradient",
            Self::Ocean => "Ocean Blue",
            Self::Sunset => "Sunset Orange",
            Self::Forest => "Forest Green",
            Self::Rose => "Rose Pink",
            Self::Monochrome => "Monochrome",
            Self::Rainbow => "Rainbow",
            Self::Neon => "Neon",
            Self::Custom => "Custom Colors",
        }
    }

    /// Colors for this scheme, falling back to `custom` for [`ColorScheme::Custom`]
    pub fn colors(&self, custom: &[String]) -> Vec<String> {
        match self.preset() {
            Some(preset) => to_owned(preset),
            None => custom.to_vec(),
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

pub fn to_owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

/// Replace an empty palette with the purple preset
pub fn or_default(colors: Vec<String>) -> Vec<String> {
    if colors.is_empty() {
        to_owned(PURPLE)
    } else {
        colors
    }
}

/// Editable palette with a size window, used by the custom editor and the dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPalette {
    colors: Vec<String>,
    #[serde(skip, default = "default_max")]
    max: usize,
}

fn default_max() -> usize {
    MAX_CUSTOM_COLORS
}

impl Default for CustomPalette {
    fn default() -> Self {
        Self::new(to_owned(PURPLE), MAX_CUSTOM_COLORS)
    }
}

impl CustomPalette {
    /// Create a palette capped at `max` colors
    pub fn new(colors: Vec<String>, max: usize) -> Self {
        let mut colors = colors;
        colors.truncate(max);
        while colors.len() < MIN_CUSTOM_COLORS {
            colors.push(NEW_COLOR.to_string());
        }
        Self { colors, max }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn can_add(&self) -> bool {
        self.colors.len() < self.max
    }

    pub fn can_remove(&self) -> bool {
        self.colors.len() > MIN_CUSTOM_COLORS
    }

    /// Append `color`; ignored when full
    pub fn push(&mut self, color: impl Into<String>) -> bool {
        if self.can_add() {
            self.colors.push(color.into());
            true
        } else {
            false
        }
    }

    /// Remove the color at `index`; ignored at the minimum size
    pub fn remove(&mut self, index: usize) -> bool {
        if self.can_remove() && index < self.colors.len() {
            self.colors.remove(index);
            true
        } else {
            false
        }
    }

    /// Overwrite the color at `index`
    pub fn set(&mut self, index: usize, color: impl Into<String>) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color.into();
        }
    }

    /// CSS declaration for the palette at 45°
    pub fn css(&self) -> String {
        format!(
            "background: linear-gradient(45deg, {});",
            self.colors.join(", ")
        )
    }
}

/// RGBA color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn lerp(&self, other: &Rgba, t: f32) -> Rgba {
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
pub fn parse_hex(value: &str) -> Option<Rgba> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    let short = |c: char| {
        c.to_digit(16)
            .map(|v| (v * 17) as f32 / 255.0)
    };

    match hex.len() {
        3 | 4 => {
            let mut chars = hex.chars().map(short);
            let r = chars.next()??;
            let g = chars.next()??;
            let b = chars.next()??;
            let a = match chars.next() {
                Some(a) => a?,
                None => 1.0,
            };
            Some(Rgba::new(r, g, b, a))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 {
                channel(&hex[6..8])?
            } else {
                1.0
            };
            Some(Rgba::new(r, g, b, a))
        }
        _ => None,
    }
}

/// Resample `stops` (offset, color) to at most `max` evenly spaced stops
pub fn resample(stops: &[(f32, Rgba)], max: usize) -> Vec<(f32, Rgba)> {
    if stops.len() <= max || max < 2 {
        return stops.to_vec();
    }

    (0..max)
        .map(|i| {
            let t = i as f32 / (max - 1) as f32;
            (t, color_at(stops, t))
        })
        .collect()
}

/// Interpolated color at `t` along sorted stops
pub fn color_at(stops: &[(f32, Rgba)], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::new(0.0, 0.0, 0.0, 0.0);
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.0 {
            let span = (b.0 - a.0).max(f32::EPSILON);
            return a.1.lerp(&b.1, (t - a.0) / span);
        }
    }
    stops[stops.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#ff0000"), Some(Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_hex("#fff"), Some(Rgba::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(parse_hex("#00000000"), Some(Rgba::new(0.0, 0.0, 0.0, 0.0)));
        assert_eq!(parse_hex(" #000 "), Some(Rgba::new(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "red", "#12", "#gggggg", "123456", "#12345", "#ééé"] {
            assert_eq!(parse_hex(bad), None, "{:?} should not parse", bad);
        }
    }

    #[test]
    fn empty_palette_falls_back_to_purple() {
        assert_eq!(or_default(Vec::new()), to_owned(PURPLE));
        let custom = vec!["#123456".to_string(), "#abcdef".to_string()];
        assert_eq!(or_default(custom.clone()), custom);
    }

    #[test]
    fn custom_scheme_uses_custom_colors() {
        let custom = vec!["#000".to_string(), "#fff".to_string()];
        assert_eq!(ColorScheme::Custom.colors(&custom), custom);
        assert_eq!(ColorScheme::Ocean.colors(&custom), to_owned(OCEAN));
    }

    mod custom_palette {
        use super::*;

        #[test]
        fn respects_size_window() {
            let mut palette = CustomPalette::default();
            assert_eq!(palette.len(), 3);
            assert!(palette.push(NEW_COLOR));
            assert!(palette.push(NEW_COLOR));
            assert_eq!(palette.len(), MAX_CUSTOM_COLORS - 1);
            assert!(palette.push(NEW_COLOR));
            assert!(!palette.push(NEW_COLOR), "should stop at the maximum");

            let mut palette = CustomPalette::default();
            assert!(palette.remove(0));
            assert!(!palette.remove(0), "should keep at least two colors");
            assert_eq!(palette.len(), MIN_CUSTOM_COLORS);
        }

        #[test]
        fn dialog_capacity_is_larger() {
            let mut palette = CustomPalette::new(to_owned(PURPLE), MAX_DIALOG_COLORS);
            while palette.push(NEW_COLOR) {}
            assert_eq!(palette.len(), MAX_DIALOG_COLORS);
            // Narrowing back truncates
            let narrowed = CustomPalette::new(palette.colors().to_vec(), MAX_CUSTOM_COLORS);
            assert_eq!(narrowed.len(), MAX_CUSTOM_COLORS);
        }

        #[test]
        fn css_lists_colors() {
            let palette = CustomPalette::new(to_owned(&["#000", "#fff"]), MAX_CUSTOM_COLORS);
            assert_eq!(palette.css(), "background: linear-gradient(45deg, #000, #fff);");
        }

        #[test]
        fn pads_short_palettes() {
            let palette = CustomPalette::new(vec!["#000".to_string()], MAX_CUSTOM_COLORS);
            assert_eq!(palette.colors(), &["#000".to_string(), NEW_COLOR.to_string()]);
        }
    }

    #[test]
    fn resample_limits_stop_count() {
        let stops: Vec<(f32, Rgba)> = RAINBOW
            .iter()
            .zip(crate::features::gradient::stop_offsets(RAINBOW.len()))
            .filter_map(|(c, o)| parse_hex(c).map(|rgba| (o, rgba)))
            .collect();
        let resampled = resample(&stops, 8);
        assert_eq!(resampled.len(), 8);
        assert_eq!(resampled[0].1, stops[0].1);
        assert_eq!(resampled[7].1, stops[11].1);
    }
}
