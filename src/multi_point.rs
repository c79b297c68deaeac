use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::Point;
use std::iter::FromIterator;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl<P: Into<Point>> From<Vec<P>> for MultiPoint {
    fn from(points: Vec<P>) -> Self {
        points.into_iter().collect()
    }
}

impl<P: Into<Point>> FromIterator<P> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = P>>(points: I) -> Self {
        MultiPoint::new(points.into_iter().map(|p| p.into()).collect())
    }
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        MultiPoint { points }
    }

    pub fn from_coordinates(coords: &[Position]) -> Result<Self, GeometryError> {
        let points = coords
            .iter()
            .map(|c| Point::from_coordinates(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiPoint::new(points))
    }

    pub fn coordinates(&self) -> Vec<Position> {
        self.points.iter().map(Point::coordinates).collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Round every point to `digits`.
    pub fn filter(&self, digits: i32) -> MultiPoint {
        self.points.iter().map(|p| p.round(digits)).collect()
    }
}

impl HasBBox for MultiPoint {
    fn bbox(&self) -> BBox {
        self.points.iter().collect()
    }
}

impl ToWkt for MultiPoint {
    fn keyword(&self) -> &'static str {
        "MULTIPOINT"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.points, |out, p| p.write_coords(out, digits));
        }
    }
}

impl MapPoints for MultiPoint {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        MultiPoint::new(self.points.iter().map(|p| f(p)).collect())
    }
}

impl Draw for MultiPoint {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        for point in &self.points {
            point.draw(drawing, style);
        }
    }
}
