use crate::{LineString, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    /// Radius of the circle drawn for a point.
    pub radius: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            stroke: "black".to_string(),
            fill: "transparent".to_string(),
            stroke_width: 2.,
            radius: 2.,
        }
    }
}

/// A drawing surface provided by a rendering backend.
pub trait Drawing {
    fn draw_circle(&mut self, center: &Point, radius: f64, fill: &str);

    fn draw_line_string(&mut self, points: &[Point], style: &Style);

    fn draw_polygon(&mut self, rings: &[LineString], style: &Style);
}

pub trait Draw {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style);
}

impl Draw for Point {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        drawing.draw_circle(self, style.radius, &style.fill);
    }
}
