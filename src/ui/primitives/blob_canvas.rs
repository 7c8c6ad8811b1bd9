//! Morphing blob primitive
//!
//! Draws one [`BlobFrame`] with its gradient fill, glow and drop shadow.
//!
//! # Design
//!
//! The curve lives in the frame's `size × size` box, which the canvas scales
//! to fit its bounds with a margin for the shadow and glow. Colors and effects
//! come from the current configuration. Linear gradients map straight to a
//! canvas gradient; radial ones are approximated with concentric copies of
//! the outline since the canvas has no radial fill.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};

use crate::features::gradient::{self, GradientKind};
use crate::features::outline::{self, CurveDescription};
use crate::features::palette::{self, Rgba};
use crate::features::{BlobConfig, BlobFrame};

/// Canvas gradients accept at most eight stops
const MAX_CANVAS_STOPS: usize = 8;

/// Space around the blob box for glow and shadow, as a fraction of its size
const EFFECT_MARGIN: f32 = 0.1;

/// Blur deviation of the glow in blob pixels
const GLOW_DEVIATION: f32 = 3.0;

/// Rings used to approximate a radial fill
const RADIAL_RINGS: usize = 24;

/// (offset y, blur deviation, opacity) for the two stacked shadows
const SHADOW_LAYERS: [(f32, f32, f32); 2] = [(10.0, 4.0, 0.04), (4.0, 1.5, 0.1)];

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Gradient stops for `colors`; unparseable entries are skipped
pub fn gradient_stops(colors: &[String]) -> Vec<(f32, Rgba)> {
    colors
        .iter()
        .zip(gradient::stop_offsets(colors.len()))
        .filter_map(|(color, offset)| palette::parse_hex(color).map(|rgba| (offset, rgba)))
        .collect()
}

/// Maps blob-space points into canvas space
#[derive(Debug, Clone, Copy)]
struct Viewport {
    origin: Point,
    scale: f32,
}

impl Viewport {
    fn fit(bounds: Rectangle, blob_size: f32) -> Self {
        let outer = blob_size * (1.0 + 2.0 * EFFECT_MARGIN);
        let scale = bounds.width.min(bounds.height) / outer.max(1.0);
        let drawn = blob_size * scale;
        Self {
            origin: Point::new(
                (bounds.width - drawn) / 2.0,
                (bounds.height - drawn) / 2.0,
            ),
            scale,
        }
    }

    fn map(&self, point: outline::Point) -> Point {
        Point::new(
            self.origin.x + point.x * self.scale,
            self.origin.y + point.y * self.scale,
        )
    }
}

/// Closed Bézier path of `curve`, scaled by `factor` about `center` first
fn outline_path(
    curve: &CurveDescription,
    viewport: Viewport,
    center: outline::Point,
    factor: f32,
) -> Path {
    let scaled = |p: outline::Point| {
        viewport.map(outline::Point::new(
            center.x + (p.x - center.x) * factor,
            center.y + (p.y - center.y) * factor,
        ))
    };

    Path::new(|builder| {
        builder.move_to(scaled(curve.start()));
        for segment in &curve.segments {
            builder.bezier_curve_to(
                scaled(segment.control_a),
                scaled(segment.control_b),
                scaled(segment.to),
            );
        }
        builder.close();
    })
}

/// Canvas program for one blob frame
#[derive(Debug, Clone, Copy)]
pub struct BlobCanvas<'a> {
    pub frame: &'a BlobFrame,
    pub config: &'a BlobConfig,
}

impl<'a> BlobCanvas<'a> {
    pub fn new(frame: &'a BlobFrame, config: &'a BlobConfig) -> Self {
        Self { frame, config }
    }

    /// Center of the box the frame's curve was generated in
    fn center(&self) -> outline::Point {
        outline::Point::new(self.frame.size / 2.0, self.frame.size / 2.0)
    }

    fn draw_shadow(&self, frame: &mut Frame, viewport: Viewport) {
        for (dy, deviation, opacity) in SHADOW_LAYERS {
            let offset = Viewport {
                origin: Point::new(viewport.origin.x, viewport.origin.y + dy * viewport.scale),
                ..viewport
            };
            let path = outline_path(&self.frame.curve, offset, self.center(), 1.0);
            let color = Color::from_rgba(0.0, 0.0, 0.0, opacity);
            frame.fill(&path, color);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(deviation * 2.0 * viewport.scale)
                    .with_color(Color { a: opacity * 0.5, ..color }),
            );
        }
    }

    fn draw_glow(&self, frame: &mut Frame, path: &Path, stops: &[(f32, Rgba)], scale: f32) {
        let base = to_color(palette::color_at(stops, 0.5));
        for layer in (1..=4).rev() {
            frame.stroke(
                path,
                Stroke::default()
                    .with_width(GLOW_DEVIATION * layer as f32 * scale)
                    .with_color(Color { a: 0.1 * base.a, ..base }),
            );
        }
    }

    fn draw_fill(&self, frame: &mut Frame, path: &Path, stops: &[(f32, Rgba)], viewport: Viewport) {
        match self.frame.gradient {
            GradientKind::Linear { .. } => {
                let coords = gradient::coords(self.frame.gradient);
                let box_size = self.frame.size;
                let ((x1, y1), (x2, y2)) = coords.to_points(box_size, box_size);
                let start = viewport.map(outline::Point::new(x1, y1));
                let end = viewport.map(outline::Point::new(x2, y2));

                let linear = palette::resample(stops, MAX_CANVAS_STOPS).into_iter().fold(
                    canvas::gradient::Linear::new(start, end),
                    |linear, (offset, rgba)| linear.add_stop(offset, to_color(rgba)),
                );
                frame.fill(path, canvas::Gradient::Linear(linear));
            }
            GradientKind::Radial => {
                // Outermost ring carries the last stop, the center the first
                let center = self.center();
                for ring in 0..RADIAL_RINGS {
                    let t = 1.0 - ring as f32 / RADIAL_RINGS as f32;
                    let ring_path = outline_path(&self.frame.curve, viewport, center, t);
                    frame.fill(&ring_path, to_color(palette::color_at(stops, t)));
                }
            }
        }
    }
}

impl<Message> Program<Message> for BlobCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = Viewport::fit(bounds, self.frame.size);
        let stops = gradient_stops(&self.config.resolved_colors());

        if stops.is_empty() || self.frame.curve.segments.is_empty() {
            return vec![frame.into_geometry()];
        }

        if self.config.drop_shadow {
            self.draw_shadow(&mut frame, viewport);
        }

        let path = outline_path(&self.frame.curve, viewport, self.center(), 1.0);
        if self.config.glow {
            self.draw_glow(&mut frame, &path, &stops, viewport.scale);
        }
        self.draw_fill(&mut frame, &path, &stops, viewport);

        vec![frame.into_geometry()]
    }
}

/// Blob canvas sized to `size` pixels, effects margin included
pub fn view<'a, Message: 'a>(
    frame: &'a BlobFrame,
    config: &'a BlobConfig,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(BlobCanvas::new(frame, config))
        .width(size)
        .height(size)
        .into()
}

/// Pixel size that shows `config` at its natural scale with effect margins
pub fn natural_size(config: &BlobConfig) -> f32 {
    config.size * (1.0 + 2.0 * EFFECT_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_colors_are_skipped() {
        let colors = vec![
            "#ff0000".to_string(),
            "not-a-color".to_string(),
            "#0000ff".to_string(),
        ];
        let stops = gradient_stops(&colors);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[1].0, 1.0, "offsets keep the original positions");
    }

    #[test]
    fn viewport_centers_blob_with_margin() {
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(240.0, 240.0));
        let viewport = Viewport::fit(bounds, 200.0);
        assert!((viewport.scale - 1.0).abs() < 1e-4);
        let top_left = viewport.map(outline::Point::new(0.0, 0.0));
        assert!((top_left.x - 20.0).abs() < 1e-4);
        assert!((top_left.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn natural_size_includes_margin() {
        let config = BlobConfig::default();
        assert!((natural_size(&config) - 240.0).abs() < 1e-3);
    }
}
