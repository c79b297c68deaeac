use crate::algorithms::{point_in_polygon, simplify};
use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::Point;
use std::iter::FromIterator;

/// An ordered sequence of points, used both as an open polyline and as a
/// polygon ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    coords: Vec<Point>,
}

impl<P: Into<Point>> From<Vec<P>> for LineString {
    fn from(coords: Vec<P>) -> Self {
        coords.into_iter().collect()
    }
}

impl<P: Into<Point>> FromIterator<P> for LineString {
    fn from_iter<I: IntoIterator<Item = P>>(coords: I) -> Self {
        LineString::new(coords.into_iter().map(|p| p.into()).collect())
    }
}

impl LineString {
    pub fn new(coords: Vec<Point>) -> Self {
        LineString { coords }
    }

    pub fn from_coordinates(coords: &[Position]) -> Result<Self, GeometryError> {
        let coords = coords
            .iter()
            .map(|c| Point::from_coordinates(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LineString::new(coords))
    }

    pub fn coordinates(&self) -> Vec<Position> {
        self.coords.iter().map(Point::coordinates).collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.coords
    }

    /// The point at `index`; negative indices count back from the end.
    pub fn point(&self, index: isize) -> Result<Point, GeometryError> {
        let len = self.coords.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize)
        };
        position
            .and_then(|i| self.coords.get(i).copied())
            .ok_or(GeometryError::Index { index, len })
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        !self.coords.is_empty() && self.coords.first() == self.coords.last()
    }

    pub fn is_valid(&self) -> bool {
        self.coords.len() >= 2
    }

    /// Consecutive segments, without joining the last point to the first.
    pub fn segs(&self) -> impl Iterator<Item = [Point; 2]> + '_ {
        self.coords.windows(2).map(|c| [c[0], c[1]])
    }

    pub fn length(&self) -> f64 {
        self.segs().map(|[a, b]| a.distance(b)).sum()
    }

    /// Signed area of the ring, positive when it winds counter-clockwise.
    pub fn area(&self) -> f64 {
        let first = match self.coords.first() {
            Some(&p) => p,
            None => return 0.,
        };
        let twice: f64 = self.coords[1..]
            .windows(2)
            .map(|c| (c[0] - first).cross(c[1] - first))
            .sum();
        twice / 2.
    }

    /// Round every point to `digits` and drop points equal to the one before.
    pub fn filter(&self, digits: i32) -> LineString {
        let mut filtered: Vec<Point> = Vec::with_capacity(self.coords.len());
        for point in &self.coords {
            let rounded = point.round(digits);
            if filtered.last() != Some(&rounded) {
                filtered.push(rounded);
            }
        }
        LineString::new(filtered)
    }

    /// Douglas-Peucker simplification; `None` when a closed line collapses.
    pub fn simplify(&self, threshold: f64) -> Option<LineString> {
        simplify(&self.coords, threshold).map(LineString::new)
    }

    /// The distance to the nearest vertex and its index.
    pub fn distance_point_point_list(&self, point: &Point) -> Option<(f64, usize)> {
        let mut nearest: Option<(f64, usize)> = None;
        for (index, p) in self.coords.iter().enumerate() {
            let dist = point.distance(*p);
            match nearest {
                Some((best, _)) if best <= dist => (),
                _ => nearest = Some((dist, index)),
            }
        }
        nearest
    }

    /// The distance from `point` to the polyline, with the closest point on it.
    pub fn distance_point_line_string(&self, point: &Point) -> Option<(f64, Point)> {
        let first = *self.coords.first()?;
        let mut nearest = (point.distance(first), first);
        for [a, b] in self.segs() {
            let projected = point.proj_point_on_line(a, b);
            if let (Ok(u), Ok(dist)) = (projected, point.distance_point_line(a, b)) {
                let dist = dist.abs();
                if u > 0. && u < 1. && dist < nearest.0 {
                    nearest = (dist, a + (b - a) * u);
                }
            }
            let dist = point.distance(b);
            if dist < nearest.0 {
                nearest = (dist, b);
            }
        }
        Some(nearest)
    }

    pub fn point_in_polygon(&self, point: &Point) -> bool {
        point_in_polygon(point, &self.coords)
    }

    /// The parenthesised coordinates, or `EMPTY` for a line without points.
    pub(crate) fn write_coords(&self, out: &mut String, digits: Option<i32>) {
        if self.coords.is_empty() {
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.coords, |out, p| p.write_coords(out, digits));
        }
    }
}

impl HasBBox for LineString {
    fn bbox(&self) -> BBox {
        self.coords.iter().collect()
    }
}

impl ToWkt for LineString {
    fn keyword(&self) -> &'static str {
        "LINESTRING"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            self.write_coords(out, digits);
        }
    }
}

impl MapPoints for LineString {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        LineString::new(self.coords.iter().map(|p| f(p)).collect())
    }
}

impl Draw for LineString {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        drawing.draw_line_string(&self.coords, style);
    }
}
