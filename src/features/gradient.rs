//! Gradient endpoint math
//!
//! Converts an angle (or the radial variant) into percentage coordinates
//! centered at 50%, the form SVG gradient elements and the canvas
//! renderer both consume.

use serde::{Deserialize, Serialize};

/// Base gradient rotation in degrees per unit of animation time
const DEGREES_PER_TIME_UNIT: f32 = 30.0;

/// Gradient kind as a tagged variant; the angle only exists for linear fills
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    Linear { angle_degrees: f32 },
    Radial,
}

/// Gradient type as exposed on the configuration surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

impl GradientType {
    pub fn all() -> Vec<Self> {
        vec![Self::Linear, Self::Radial]
    }

    /// Resolve into a [`GradientKind`] using `angle_degrees` for linear fills
    pub fn with_angle(self, angle_degrees: f32) -> GradientKind {
        match self {
            Self::Linear => GradientKind::Linear { angle_degrees },
            Self::Radial => GradientKind::Radial,
        }
    }
}

/// Rotation direction for animated gradients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl GradientDirection {
    /// +1 for clockwise, -1 for counterclockwise
    pub fn sign(&self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Gradient endpoints in percent of the bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCoords {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Radius for radial gradients
    pub r: Option<f32>,
}

impl GradientCoords {
    /// Map start and end into absolute positions inside a `width × height` box
    pub fn to_points(&self, width: f32, height: f32) -> ((f32, f32), (f32, f32)) {
        (
            (self.x1 / 100.0 * width, self.y1 / 100.0 * height),
            (self.x2 / 100.0 * width, self.y2 / 100.0 * height),
        )
    }
}

/// Endpoint coordinates for a gradient kind
pub fn coords(kind: GradientKind) -> GradientCoords {
    match kind {
        GradientKind::Radial => GradientCoords {
            x1: 50.0,
            y1: 50.0,
            x2: 50.0,
            y2: 50.0,
            r: Some(50.0),
        },
        GradientKind::Linear { angle_degrees } => {
            let radians = angle_degrees.to_radians();
            let (sin, cos) = radians.sin_cos();
            GradientCoords {
                x1: 50.0 - 50.0 * cos,
                y1: 50.0 - 50.0 * sin,
                x2: 50.0 + 50.0 * cos,
                y2: 50.0 + 50.0 * sin,
                r: None,
            }
        }
    }
}

/// Angle after `time` units of rotation
pub fn animated_angle(
    base_degrees: f32,
    time: f32,
    gradient_speed: f32,
    direction: GradientDirection,
) -> f32 {
    base_degrees + time * gradient_speed * DEGREES_PER_TIME_UNIT * direction.sign()
}

/// Stop offsets in `[0, 1]` for `count` evenly spread colors
pub fn stop_offsets(count: usize) -> Vec<f32> {
    let denominator = count.saturating_sub(1).max(1) as f32;
    (0..count).map(|i| i as f32 / denominator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn coords_approx(a: GradientCoords, b: GradientCoords) -> bool {
        approx(a.x1, b.x1) && approx(a.y1, b.y1) && approx(a.x2, b.x2) && approx(a.y2, b.y2)
    }

    #[test]
    fn angle_zero_runs_left_to_right() {
        let c = coords(GradientKind::Linear { angle_degrees: 0.0 });
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (0.0, 50.0, 100.0, 50.0));
        assert_eq!(c.r, None);
    }

    #[test]
    fn angle_ninety_runs_top_to_bottom() {
        let c = coords(GradientKind::Linear { angle_degrees: 90.0 });
        assert!(approx(c.x1, 50.0) && approx(c.y1, 0.0));
        assert!(approx(c.x2, 50.0) && approx(c.y2, 100.0));
    }

    #[test]
    fn linear_is_periodic() {
        for angle in [0.0, 17.5, 45.0, 135.0, 270.0, -90.0] {
            let a = coords(GradientKind::Linear { angle_degrees: angle });
            let b = coords(GradientKind::Linear {
                angle_degrees: angle + 360.0,
            });
            assert!(coords_approx(a, b), "angle {} not periodic", angle);
        }
    }

    #[test]
    fn radial_ignores_angle() {
        let expected = coords(GradientKind::Radial);
        for angle in [0.0, 45.0, 200.0, -15.0] {
            let kind = GradientType::Radial.with_angle(angle);
            assert_eq!(coords(kind), expected);
        }
        assert_eq!(expected.r, Some(50.0));
        assert_eq!((expected.x1, expected.y1), (50.0, 50.0));
    }

    mod animation {
        use super::*;

        #[test]
        fn clockwise_advances_thirty_degrees_per_unit() {
            let angle = animated_angle(45.0, 1.0, 1.0, GradientDirection::Clockwise);
            assert!(approx(angle, 75.0));
        }

        #[test]
        fn counterclockwise_reverses() {
            let angle = animated_angle(45.0, 1.0, 1.0, GradientDirection::CounterClockwise);
            assert!(approx(angle, 15.0));
        }

        #[test]
        fn speed_scales_rotation() {
            let angle = animated_angle(0.0, 2.0, 0.5, GradientDirection::Clockwise);
            assert!(approx(angle, 30.0));
        }
    }

    #[test]
    fn stop_offsets_spread_evenly() {
        assert_eq!(stop_offsets(3), vec![0.0, 0.5, 1.0]);
        assert_eq!(stop_offsets(1), vec![0.0]);
        assert!(stop_offsets(0).is_empty());
    }

    #[test]
    fn to_points_scales_percentages() {
        let c = coords(GradientKind::Linear { angle_degrees: 0.0 });
        assert_eq!(c.to_points(200.0, 100.0), ((0.0, 50.0), (200.0, 50.0)));
    }
}
