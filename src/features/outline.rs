//! Procedural blob outline
//!
//! Samples a circle perturbed by three layered sinusoids and turns the
//! samples into a closed chain of cubic Bézier segments.
//!
//! ## Noise layers
//!
//! | Layer | Angular frequency | Phase speed | Amplitude |
//! |-------|-------------------|-------------|-----------|
//! | 1 | ×3 | ×1.0 | base |
//! | 2 | ×5 | ×1.5 | base × 0.5 |
//! | 3 | ×7 | ×0.8 | base × 0.25 |
//!
//! `base = morph_intensity * 0.03`, layer 2 uses cosine, the others sine.

use std::f32::consts::TAU;
use std::fmt::Write as _;

/// Smallest vertex count the generator will sample
pub const MIN_VERTICES: u32 = 12;
/// Largest vertex count the generator will sample
pub const MAX_VERTICES: u32 = 48;

/// Control point tension for the cubic smoothing pass
const TENSION: f32 = 0.15;
/// Noise amplitude per unit of morph intensity
const NOISE_SCALE: f32 = 0.03;
/// Minimum margin reserved for glow and shadow bleed
const MIN_PADDING: f32 = 20.0;
/// Margin as a fraction of the base radius
const PADDING_RATIO: f32 = 0.1;

/// A point in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Shape parameters for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    /// Outer radius including the glow margin
    pub base_radius: f32,
    /// Requested sample count, clamped to [12, 48] when sampling
    pub vertex_count: u32,
    /// Amplitude of the radius perturbation (0 = perfect circle)
    pub morph_intensity: f32,
}

impl ShapeConfig {
    pub fn new(base_radius: f32, vertex_count: u32, morph_intensity: f32) -> Self {
        Self {
            base_radius,
            vertex_count,
            morph_intensity,
        }
    }

    /// Radius of the unperturbed circle after the glow margin is removed
    pub fn inner_radius(&self) -> f32 {
        let padding = MIN_PADDING.max(self.base_radius * PADDING_RATIO);
        self.base_radius - padding
    }
}

/// One cubic Bézier segment ending at `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control_a: Point,
    pub control_b: Point,
    pub to: Point,
}

/// Closed smooth outline ready for a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDescription {
    /// Sampled points; the last sample duplicates the first
    pub samples: Vec<Point>,
    /// One segment per consecutive sample pair
    pub segments: Vec<CubicSegment>,
}

impl CurveDescription {
    /// Start of the path
    pub fn start(&self) -> Point {
        self.samples.first().copied().unwrap_or_default()
    }

    /// SVG path data: `M x y C c1x c1y c2x c2y x y ... Z`
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::with_capacity(self.segments.len() * 48 + 16);
        let start = self.start();
        let _ = write!(data, "M {} {}", start.x, start.y);
        for segment in &self.segments {
            let _ = write!(
                data,
                " C {} {} {} {} {} {}",
                segment.control_a.x,
                segment.control_a.y,
                segment.control_b.x,
                segment.control_b.y,
                segment.to.x,
                segment.to.y
            );
        }
        data.push_str(" Z");
        data
    }
}

/// Clamp a requested vertex count into the supported range
pub fn clamp_vertex_count(requested: u32) -> u32 {
    requested.clamp(MIN_VERTICES, MAX_VERTICES)
}

/// Radius multiplier `1 + Σ noise` at a given angle and time
pub fn radius_multiplier(angle: f32, time: f32, morph_intensity: f32) -> f32 {
    let base_noise = morph_intensity * NOISE_SCALE;

    let noise1 = (angle * 3.0 + time).sin() * base_noise;
    let noise2 = (angle * 5.0 + time * 1.5).cos() * (base_noise * 0.5);
    let noise3 = (angle * 7.0 + time * 0.8).sin() * (base_noise * 0.25);

    1.0 + noise1 + noise2 + noise3
}

/// Sample the perturbed circle (vertex_count + 1 points, closed)
pub fn sample(center: Point, shape: &ShapeConfig, time: f32) -> Vec<Point> {
    let radius = shape.inner_radius();
    let points = clamp_vertex_count(shape.vertex_count);
    let angle_step = TAU / points as f32;

    (0..=points)
        .map(|i| {
            // Reuse angle 0 for the closing sample so the loop closes exactly
            let angle = if i == points { 0.0 } else { i as f32 * angle_step };
            let current = radius * radius_multiplier(angle, time, shape.morph_intensity);
            Point::new(
                center.x + angle.cos() * current,
                center.y + angle.sin() * current,
            )
        })
        .collect()
}

/// Build cubic segments through `samples` using neighbour-derived tangents
pub fn smooth(samples: &[Point]) -> Vec<CubicSegment> {
    let n = samples.len();
    if n < 2 {
        return Vec::new();
    }

    (0..n - 1)
        .map(|i| {
            let current = samples[i];
            let next = samples[(i + 1) % n];
            let next_next = samples[(i + 2) % n];
            let prev = samples[(i + n - 1) % n];

            CubicSegment {
                control_a: current + (next - prev) * TENSION,
                control_b: next - (next_next - current) * TENSION,
                to: next,
            }
        })
        .collect()
}

/// Generate the full outline for one frame
pub fn generate(center: Point, shape: &ShapeConfig, time: f32) -> CurveDescription {
    let samples = sample(center, shape, time);
    let segments = smooth(&samples);
    CurveDescription { samples, segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);

    fn distance(a: Point, b: Point) -> f32 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    mod vertex_clamping {
        use super::*;

        #[test]
        fn below_range_clamps_to_minimum() {
            for requested in [0, 1, 5, 11] {
                let shape = ShapeConfig::new(100.0, requested, 0.5);
                let samples = sample(CENTER, &shape, 0.0);
                assert_eq!(
                    samples.len(),
                    MIN_VERTICES as usize + 1,
                    "vertex count {} should clamp to {}",
                    requested,
                    MIN_VERTICES
                );
            }
        }

        #[test]
        fn above_range_clamps_to_maximum() {
            for requested in [49, 64, 1000, u32::MAX] {
                let shape = ShapeConfig::new(100.0, requested, 0.5);
                assert_eq!(sample(CENTER, &shape, 1.0).len(), MAX_VERTICES as usize + 1);
            }
        }

        #[test]
        fn in_range_is_untouched() {
            assert_eq!(clamp_vertex_count(12), 12);
            assert_eq!(clamp_vertex_count(30), 30);
            assert_eq!(clamp_vertex_count(48), 48);
        }
    }

    mod circle {
        use super::*;

        #[test]
        fn zero_intensity_multiplier_is_one() {
            for i in 0..64 {
                let angle = i as f32 * 0.1;
                for time in [0.0, 0.5, 3.7, 120.0] {
                    assert_eq!(radius_multiplier(angle, time, 0.0), 1.0);
                }
            }
        }

        #[test]
        fn radius_100_keeps_20px_padding() {
            // max(20, 100 * 0.1) = 20 wins over the proportional margin
            let shape = ShapeConfig::new(100.0, 24, 0.0);
            assert!((shape.inner_radius() - 80.0).abs() < 1e-4);

            let samples = sample(CENTER, &shape, 0.0);
            assert_eq!(samples.len(), 25);
            for p in &samples {
                let d = distance(*p, CENTER);
                assert!((d - 80.0).abs() < 1e-3, "sample at distance {}", d);
            }
        }

        #[test]
        fn large_radius_uses_proportional_padding() {
            let shape = ShapeConfig::new(400.0, 24, 0.0);
            assert!((shape.inner_radius() - 360.0).abs() < 1e-4);
        }

        #[test]
        fn nonzero_intensity_perturbs() {
            let shape = ShapeConfig::new(100.0, 24, 2.0);
            let samples = sample(CENTER, &shape, 0.7);
            let off_circle = samples
                .iter()
                .any(|p| (distance(*p, CENTER) - 80.0).abs() > 0.1);
            assert!(off_circle, "intensity 2 should move samples off the circle");
        }
    }

    mod closure {
        use super::*;

        #[test]
        fn first_and_last_sample_coincide() {
            for (intensity, time, vertices) in [(0.0, 0.0, 24), (1.5, 2.3, 13), (3.0, 99.0, 48)] {
                let shape = ShapeConfig::new(150.0, vertices, intensity);
                let curve = generate(CENTER, &shape, time);
                let (first, last) = (curve.start(), curve.samples[curve.samples.len() - 1]);
                assert!(distance(first, last) < 1e-3);
                assert_eq!(curve.samples.first(), curve.samples.last());
            }
        }

        #[test]
        fn one_segment_per_sample_pair() {
            let shape = ShapeConfig::new(100.0, 24, 0.5);
            let curve = generate(CENTER, &shape, 0.0);
            assert_eq!(curve.segments.len(), curve.samples.len() - 1);
            assert_eq!(curve.segments.last().map(|s| s.to), curve.samples.last().copied());
        }

        #[test]
        fn svg_path_data_is_closed() {
            let shape = ShapeConfig::new(100.0, 12, 0.0);
            let data = generate(CENTER, &shape, 0.0).to_svg_path_data();
            assert!(data.starts_with("M 180 100"), "got {}", data);
            assert!(data.ends_with(" Z"));
            assert_eq!(data.matches(" C ").count(), 12);
        }
    }

    #[test]
    fn control_points_follow_neighbours() {
        let samples = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
        ];
        let segments = smooth(&samples);
        let close = |a: Point, b: Point| distance(a, b) < 1e-5;
        // prev of sample 0 wraps to the last sample (0, 0)
        assert!(close(segments[0].control_a, Point::new(1.5, 0.0)));
        assert!(close(segments[0].control_b, Point::new(8.5, -1.5)));
        assert_eq!(segments[0].to, Point::new(10.0, 0.0));
    }

    #[test]
    fn degenerate_input_produces_no_segments() {
        assert!(smooth(&[]).is_empty());
        assert!(smooth(&[Point::new(1.0, 1.0)]).is_empty());
    }
}
