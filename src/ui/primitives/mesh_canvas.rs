//! 3D mesh scene primitive
//!
//! Paints the projected faces of every mesh blob over a diagonal backdrop
//! and turns drags and wheel scrolls into orbit messages.

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program};
use iced::{Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use crate::features::mesh::{self, Lighting, MeshBlob, MeshGeometry, OrbitCamera};
use crate::ui::primitives::blob_canvas::to_color;
use crate::ui::theme;

/// Pixels per wheel "line" for trackpads reporting pixel deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Drag tracking between cursor events
#[derive(Debug, Default)]
pub struct DragState {
    last: Option<Point>,
}

/// Canvas program for the mesh scene
pub struct MeshCanvas<'a, Message> {
    pub blobs: &'a [MeshBlob],
    pub geometry: &'a MeshGeometry,
    pub camera: &'a OrbitCamera,
    pub lighting: &'a Lighting,
    pub on_drag: fn(f32, f32) -> Message,
    pub on_zoom: fn(f32) -> Message,
}

impl<Message> MeshCanvas<'_, Message> {
    fn draw_backdrop(&self, frame: &mut Frame, bounds: Rectangle) {
        let [start, middle, end] = theme::SCENE_BACKDROP;
        let backdrop = canvas::gradient::Linear::new(
            Point::ORIGIN,
            Point::new(bounds.width, bounds.height),
        )
        .add_stop(0.0, start)
        .add_stop(0.5, middle)
        .add_stop(1.0, end);

        frame.fill(
            &Path::rectangle(Point::ORIGIN, bounds.size()),
            canvas::Gradient::Linear(backdrop),
        );
    }
}

impl<Message> Program<Message> for MeshCanvas<'_, Message> {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.last = Some(position);
                Some(canvas::Action::capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.last.take().map(|_| canvas::Action::capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let last = state.last?;
                let position = cursor.position_from(bounds.position())?;
                state.last = Some(position);
                let (dx, dy) = (position.x - last.x, position.y - last.y);
                Some(canvas::Action::publish((self.on_drag)(dx, dy)).and_capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                Some(canvas::Action::publish((self.on_zoom)(lines)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_backdrop(&mut frame, bounds);

        let faces = mesh::project_scene(
            self.blobs,
            self.geometry,
            self.camera,
            self.lighting,
            bounds.width,
            bounds.height,
        );

        for face in &faces {
            let [a, b, c] = face.points;
            let triangle = Path::new(|builder| {
                builder.move_to(Point::new(a.0, a.1));
                builder.line_to(Point::new(b.0, b.1));
                builder.line_to(Point::new(c.0, c.1));
                builder.close();
            });
            frame.fill(&triangle, to_color(face.color));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.last.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Full-size mesh scene canvas
pub fn view<'a, Message: 'a>(canvas: MeshCanvas<'a, Message>) -> Element<'a, Message> {
    iced::widget::Canvas::new(canvas)
        .width(Fill)
        .height(Fill)
        .into()
}
