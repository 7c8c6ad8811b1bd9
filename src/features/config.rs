//! Blob configuration surface
//!
//! Everything a single blob needs to render: geometry, motion, palette,
//! gradient and effects. Values are stored as given; the outline generator
//! clamps the vertex count, and negative speeds or intensities are accepted.

use serde::{Deserialize, Serialize};

use super::gradient::{GradientDirection, GradientKind, GradientType};
use super::outline::{Point, ShapeConfig, clamp_vertex_count};
use super::palette::{self, ColorScheme};

/// Per-blob configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    /// Edge length of the square render area in pixels
    pub size: f32,
    /// Gradient colors in order
    pub colors: Vec<String>,
    /// Animation speed multiplier (0 freezes the outline)
    pub speed: f32,
    /// Morph intensity (0 = circle, 1 = subtle, 2 = moderate, 3+ = extreme)
    pub intensity: f32,
    /// Outline sample count
    pub vertices: u32,
    pub glow: bool,
    pub drop_shadow: bool,
    /// Linear gradient angle in degrees
    pub gradient_angle: f32,
    pub gradient_type: GradientType,
    pub animate_gradient: bool,
    pub gradient_speed: f32,
    pub gradient_direction: GradientDirection,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            colors: palette::to_owned(palette::PURPLE),
            speed: 1.0,
            intensity: 0.5,
            vertices: 24,
            glow: true,
            drop_shadow: true,
            gradient_angle: 45.0,
            gradient_type: GradientType::Linear,
            animate_gradient: false,
            gradient_speed: 1.0,
            gradient_direction: GradientDirection::Clockwise,
        }
    }
}

impl BlobConfig {
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn colors<S: AsRef<str>>(mut self, colors: &[S]) -> Self {
        self.colors = colors.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn vertices(mut self, vertices: u32) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    pub fn drop_shadow(mut self, drop_shadow: bool) -> Self {
        self.drop_shadow = drop_shadow;
        self
    }

    pub fn gradient_angle(mut self, angle: f32) -> Self {
        self.gradient_angle = angle;
        self
    }

    pub fn gradient_type(mut self, gradient_type: GradientType) -> Self {
        self.gradient_type = gradient_type;
        self
    }

    pub fn animate_gradient(mut self, animate: bool) -> Self {
        self.animate_gradient = animate;
        self
    }

    pub fn gradient_speed(mut self, speed: f32) -> Self {
        self.gradient_speed = speed;
        self
    }

    pub fn gradient_direction(mut self, direction: GradientDirection) -> Self {
        self.gradient_direction = direction;
        self
    }

    /// Shape parameters for the outline generator
    pub fn shape(&self) -> ShapeConfig {
        ShapeConfig::new(self.size / 2.0, self.vertices, self.intensity)
    }

    /// Center of the render area
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Static gradient kind (no animation applied)
    pub fn gradient_kind(&self) -> GradientKind {
        self.gradient_type.with_angle(self.gradient_angle)
    }

    /// Whether the gradient angle follows the animation clock
    pub fn rotates_gradient(&self) -> bool {
        self.animate_gradient && self.gradient_type == GradientType::Linear
    }

    /// Colors to render, never empty
    pub fn resolved_colors(&self) -> Vec<String> {
        palette::or_default(self.colors.clone())
    }

    /// Rust snippet that rebuilds this configuration
    pub fn to_code(&self, scheme: ColorScheme) -> String {
        let colors = match scheme {
            ColorScheme::Custom => format!(
                "&[{}]",
                self.colors
                    .iter()
                    .map(|c| format!("{:?}", c))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            preset => format!("palette::{}", preset.const_name()),
        };
        let gradient_type = match self.gradient_type {
            GradientType::Linear => "GradientType::Linear",
            GradientType::Radial => "GradientType::Radial",
        };
        let direction = match self.gradient_direction {
            GradientDirection::Clockwise => "GradientDirection::Clockwise",
            GradientDirection::CounterClockwise => "GradientDirection::CounterClockwise",
        };

        format!(
            "BlobConfig::default()\n    \
             .size({:.1})\n    \
             .colors({})\n    \
             .intensity({:.1})\n    \
             .speed({:.1})\n    \
             .vertices({})\n    \
             .gradient_angle({:.1})\n    \
             .gradient_type({})\n    \
             .animate_gradient({})\n    \
             .gradient_speed({:.1})\n    \
             .gradient_direction({})\n    \
             .glow({})\n    \
             .drop_shadow({})",
            self.size,
            colors,
            self.intensity,
            self.speed,
            clamp_vertex_count(self.vertices),
            self.gradient_angle,
            gradient_type,
            self.animate_gradient,
            self.gradient_speed,
            direction,
            self.glow,
            self.drop_shadow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let config = BlobConfig::default();
        assert_eq!(config.size, 200.0);
        assert_eq!(config.vertices, 24);
        assert_eq!(config.gradient_angle, 45.0);
        assert_eq!(config.colors, palette::to_owned(palette::PURPLE));
        assert!(config.glow && config.drop_shadow);
        assert!(!config.animate_gradient);
    }

    #[test]
    fn shape_uses_half_size_as_radius() {
        let shape = BlobConfig::default().size(300.0).shape();
        assert_eq!(shape.base_radius, 150.0);
        assert_eq!(BlobConfig::default().size(300.0).center(), Point::new(150.0, 150.0));
    }

    #[test]
    fn radial_never_rotates() {
        let config = BlobConfig::default()
            .animate_gradient(true)
            .gradient_type(GradientType::Radial);
        assert!(!config.rotates_gradient());
        assert_eq!(config.gradient_kind(), GradientKind::Radial);
    }

    #[test]
    fn empty_colors_resolve_to_purple() {
        let config = BlobConfig::default().colors::<&str>(&[]);
        assert_eq!(config.resolved_colors(), palette::to_owned(palette::PURPLE));
    }

    #[test]
    fn permissive_motion_values_are_kept() {
        let config = BlobConfig::default().speed(-2.0).intensity(-1.0);
        assert_eq!(config.speed, -2.0);
        assert_eq!(config.intensity, -1.0);
    }

    #[test]
    fn generated_code_names_preset() {
        let code = BlobConfig::default().to_code(ColorScheme::Ocean);
        assert!(code.contains(".colors(palette::OCEAN)"));
        assert!(code.contains(".vertices(24)"));
        assert!(code.contains("GradientDirection::Clockwise"));
    }

    #[test]
    fn generated_code_inlines_custom_colors() {
        let code = BlobConfig::default()
            .colors(&["#000000", "#ffffff"])
            .vertices(99)
            .to_code(ColorScheme::Custom);
        assert!(code.contains(r##".colors(&["#000000", "#ffffff"])"##), "{}", code);
        assert!(code.contains(".vertices(48)"));
    }

    #[test]
    fn deserializes_partial_json() {
        let config: BlobConfig =
            serde_json::from_str(r#"{"size": 120.0, "gradient_type": "radial"}"#).unwrap();
        assert_eq!(config.size, 120.0);
        assert_eq!(config.gradient_type, GradientType::Radial);
        assert_eq!(config.vertices, 24);
    }
}
