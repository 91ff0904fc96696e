// SPDX-License-Identifier: MPL-2.0
//! Showcase logo drawn on a Canvas and rotated about its center.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Number of petals around the hub; odd so every orientation looks distinct.
const PETALS: usize = 3;

pub struct RotatingLogo {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    accent: Color,
    size: f32,
}

impl RotatingLogo {
    /// Creates a logo rotated by `rotation` radians.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color: palette::PRIMARY_500,
            accent: palette::PRIMARY_700,
            size: sizing::LOGO_SIZE,
        }
    }

    /// Creates a Canvas widget from this logo.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for RotatingLogo {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(self.rotation);

                    let ring = Path::circle(Point::ORIGIN, radius);
                    frame.stroke(
                        &ring,
                        Stroke::default().with_width(3.0).with_color(Color {
                            a: 0.35,
                            ..self.color
                        }),
                    );

                    for petal in 0..PETALS {
                        #[allow(clippy::cast_precision_loss)] // PETALS is tiny
                        let angle = petal as f32 * 2.0 * PI / PETALS as f32 - PI / 2.0;
                        frame.fill(&petal_path(radius, angle), self.color);
                    }

                    frame.fill(&Path::circle(Point::ORIGIN, radius * 0.22), self.accent);
                    frame.fill(
                        &Path::circle(Point::new(0.0, -radius * 0.08), radius * 0.07),
                        palette::WHITE,
                    );
                });
            });

        vec![geometry]
    }
}

/// Kite-shaped petal pointing from the hub toward `angle`.
fn petal_path(radius: f32, angle: f32) -> Path {
    let along = Vector::new(angle.cos(), angle.sin());
    let across = Vector::new(-along.y, along.x);
    let at = |distance: f32, offset: f32| {
        Point::new(
            along.x * distance + across.x * offset,
            along.y * distance + across.y * offset,
        )
    };

    Path::new(|builder| {
        builder.move_to(at(radius * 0.18, 0.0));
        builder.line_to(at(radius * 0.55, radius * 0.22));
        builder.line_to(at(radius * 0.9, 0.0));
        builder.line_to(at(radius * 0.55, -radius * 0.22));
        builder.close();
    })
}
