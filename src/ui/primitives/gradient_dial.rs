//! Gradient direction dial
//!
//! A ring with an arrow pointing along the gradient. Clicking or dragging
//! inside the ring picks a new angle (snapped to 5°) when a callback is set;
//! without one the dial only displays, which is how the spinning variant is
//! shown while the gradient animates.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

/// Angle step for picks on the dial
const SNAP_DEGREES: f32 = 5.0;

/// Angle in degrees of `point` around `center`, 0 pointing right and
/// increasing clockwise (screen space)
pub fn angle_at(center: Point, point: Point) -> f32 {
    let degrees = (point.y - center.y).atan2(point.x - center.x).to_degrees();
    let snapped = (degrees / SNAP_DEGREES).round() * SNAP_DEGREES;
    snapped.rem_euclid(360.0)
}

#[derive(Debug, Default)]
pub struct DialState {
    dragging: bool,
}

pub struct GradientDial<Message> {
    pub angle_degrees: f32,
    pub on_change: Option<fn(f32) -> Message>,
}

impl<Message> GradientDial<Message> {
    fn pick(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<canvas::Action<Message>> {
        let on_change = self.on_change?;
        let position = cursor.position_in(bounds)?;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        Some(canvas::Action::publish(on_change(angle_at(center, position))).and_capture())
    }
}

impl<Message> Program<Message> for GradientDial<Message> {
    type State = DialState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let action = self.pick(bounds, cursor)?;
                state.dragging = true;
                Some(action)
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                self.pick(bounds, cursor)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.dragging = false;
                None
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 2.0;

        frame.fill(&Path::circle(center, radius), theme::surface_container(theme));
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(1.5)
                .with_color(theme::border_color(theme)),
        );

        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        let tip = Point::new(center.x + cos * radius * 0.75, center.y + sin * radius * 0.75);
        let tail = Point::new(center.x - cos * radius * 0.75, center.y - sin * radius * 0.75);

        frame.stroke(
            &Path::line(tail, tip),
            Stroke::default()
                .with_width(2.0)
                .with_color(Color { a: 0.9, ..theme::ACCENT }),
        );
        frame.fill(&Path::circle(tip, 4.0), theme::ACCENT);
        frame.fill(&Path::circle(center, 2.0), theme::text_muted(theme));

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_change.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Dial of `size` pixels; pass `None` for a display-only dial
pub fn view<'a, Message: 'a>(
    angle_degrees: f32,
    on_change: Option<fn(f32) -> Message>,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(GradientDial {
        angle_degrees,
        on_change,
    })
    .width(size)
    .height(size)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_is_zero_and_down_is_ninety() {
        let center = Point::new(50.0, 50.0);
        assert_eq!(angle_at(center, Point::new(90.0, 50.0)), 0.0);
        assert_eq!(angle_at(center, Point::new(50.0, 90.0)), 90.0);
        assert_eq!(angle_at(center, Point::new(10.0, 50.0)), 180.0);
        assert_eq!(angle_at(center, Point::new(50.0, 10.0)), 270.0);
    }

    #[test]
    fn picks_snap_to_five_degrees() {
        let center = Point::new(0.0, 0.0);
        let angle = angle_at(center, Point::new(100.0, 12.0));
        assert_eq!(angle % SNAP_DEGREES, 0.0, "{}", angle);
    }
}
