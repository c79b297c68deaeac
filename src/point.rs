use crate::bbox::{BBox, HasBBox};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::to_wkt::ToWkt;
use crate::utils::write_number;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A position in the plane with an optional third ordinate.
///
/// The vector operations (`+`, `-`, `*`, `dot`, `cross`, ...) are 2D only;
/// their results never carry a `z`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

/// Where two segments cross, with the parameter along each of them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentIntersection {
    pub point: Point,
    pub u: f64,
    pub v: f64,
}

impl From<(f64, f64)> for Point {
    fn from(coord: (f64, f64)) -> Self {
        Point::new(coord.0, coord.1)
    }
}

impl From<[f64; 2]> for Point {
    fn from(coord: [f64; 2]) -> Self {
        Point::new(coord[0], coord[1])
    }
}

impl From<[f64; 3]> for Point {
    fn from(coord: [f64; 3]) -> Self {
        Point::new_3d(coord[0], coord[1], coord[2])
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeometryError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        Point::from_coordinates(coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_coords(&mut out, None);
        f.write_str(&out)
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, z: None }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z: Some(z) }
    }

    /// Build from a GeoJSON position, `[x, y]` or `[x, y, z]`.
    pub fn from_coordinates(coords: &[f64]) -> Result<Self, GeometryError> {
        match *coords {
            [x, y] => Ok(Point::new(x, y)),
            [x, y, z] => Ok(Point::new_3d(x, y, z)),
            _ => Err(GeometryError::construction(format!(
                "a position needs 2 or 3 numbers, got {}",
                coords.len()
            ))),
        }
    }

    pub fn coordinates(&self) -> Position {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }

    /// Round x and y to `digits` decimal digits.
    pub fn round(&self, digits: i32) -> Point {
        Point {
            x: crate::utils::round_to(self.x, digits),
            y: crate::utils::round_to(self.y, digits),
            z: self.z,
        }
    }

    pub fn proj_2d(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The vector from `a` to `b`.
    pub fn diff(a: Point, b: Point) -> Point {
        b - a
    }

    /// Cross product of the vector self x rhs
    pub fn cross(&self, rhs: Point) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Dot product of the vector self . rhs
    pub fn dot(&self, rhs: Point) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Signed distance from self to the line through `a` and `b`.
    ///
    /// Positive when self lies left of the directed line a->b, negative
    /// when it lies right.
    pub fn distance_point_line(&self, a: Point, b: Point) -> Result<f64, GeometryError> {
        let ab = b - a;
        let length = ab.length();
        if length == 0. {
            return Err(GeometryError::DegenerateInput);
        }
        Ok(ab.cross(*self - a) / length)
    }

    /// Return `u` such that the foot of the perpendicular from self is
    /// `a + u * (b - a)`. The foot lies on the segment iff `0 <= u <= 1`.
    pub fn proj_point_on_line(&self, a: Point, b: Point) -> Result<f64, GeometryError> {
        let ab = b - a;
        let squared = ab.dot(ab);
        if squared == 0. {
            return Err(GeometryError::DegenerateInput);
        }
        Ok(ab.dot(*self - a) / squared)
    }

    /**
     * Intersect segments `a` and `b`.
     *
     * Both parameters must lie in `[0, 1)`, so a crossing exactly at a shared
     * endpoint is reported once when scanning consecutive edges. Parallel
     * segments never intersect, even when they overlap.
     */
    pub fn inter_seg_seg(a: [Point; 2], b: [Point; 2]) -> Option<SegmentIntersection> {
        if a[0].x.max(a[1].x) < b[0].x.min(b[1].x)
            || b[0].x.max(b[1].x) < a[0].x.min(a[1].x)
            || a[0].y.max(a[1].y) < b[0].y.min(b[1].y)
            || b[0].y.max(b[1].y) < a[0].y.min(a[1].y)
        {
            return None;
        }

        let va = a[1] - a[0];
        let vb = b[1] - b[0];
        let ab = b[0] - a[0];
        let va_x_vb = va.cross(vb);
        if va_x_vb == 0. {
            return None;
        }
        let u = ab.cross(vb) / va_x_vb;
        let v = ab.cross(va) / va_x_vb;
        if (0. ..1.).contains(&u) && (0. ..1.).contains(&v) {
            Some(SegmentIntersection {
                point: a[0] + va * u,
                u,
                v,
            })
        } else {
            None
        }
    }

    pub(crate) fn write_coords(&self, out: &mut String, digits: Option<i32>) {
        write_number(out, self.x, digits);
        out.push(' ');
        write_number(out, self.y, digits);
        if let Some(z) = self.z {
            out.push(' ');
            write_number(out, z, None);
        }
    }
}

impl HasBBox for Point {
    fn bbox(&self) -> BBox {
        let mut bbox = BBox::new();
        bbox.bound(self);
        bbox
    }
}

impl ToWkt for Point {
    fn keyword(&self) -> &'static str {
        "POINT"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        out.push('(');
        self.write_coords(out, digits);
        out.push(')');
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> [Point; 2] {
        [a.into(), b.into()]
    }

    #[test]
    fn test_vector_algebra() {
        let a = Point::new(1., 2.);
        let b = Point::new(4., 6.);
        assert_eq!(Point::diff(a, b), Point::new(3., 4.));
        assert_eq!(a + b, Point::new(5., 8.));
        assert_eq!(a * 2., Point::new(2., 4.));
        assert_eq!(Point::diff(a, b).length(), 5.);
        assert_eq!(a.distance(b), 5.);
        assert_eq!(Point::new(1., 0.).cross(Point::new(0., 3.)), 3.);
        assert_eq!(Point::new(15., 20.).dot(Point::new(20., 15.)), 600.);
        assert_eq!(Point::new(1., 0.).dot(Point::new(0., 1.)), 0.);
    }

    #[test]
    fn test_vector_ops_drop_z() {
        let a = Point::new_3d(1., 1., 9.);
        assert_eq!((a + a).z, None);
        assert_eq!(a.proj_2d(), Point::new(1., 1.));
    }

    #[test]
    fn test_distance_point_line() {
        let a = Point::new(0., 0.);
        let right = Point::new(1., 0.)
            .distance_point_line(a, Point::new(1., 1.))
            .unwrap();
        assert!((right + 0.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            Point::new(1., 0.).distance_point_line(a, Point::new(0., 2.)),
            Ok(-1.)
        );
        assert_eq!(
            Point::new(-1., 0.).distance_point_line(a, Point::new(0., 2.)),
            Ok(1.)
        );
        assert_eq!(
            Point::new(-1., 0.).distance_point_line(a, a),
            Err(GeometryError::DegenerateInput)
        );
    }

    #[test]
    fn test_proj_point_on_line() {
        let a = Point::new(0., 0.);
        assert_eq!(
            Point::new(1., 1.).proj_point_on_line(a, Point::new(0., 2.)),
            Ok(0.5)
        );
        assert_eq!(
            Point::new(1., 0.).proj_point_on_line(a, Point::new(0., 2.)),
            Ok(0.)
        );
        assert_eq!(
            Point::new(1., 0.).proj_point_on_line(a, a),
            Err(GeometryError::DegenerateInput)
        );
    }

    #[test]
    fn test_inter_seg_seg() {
        let isxn = Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((0., -5.), (10., 5.)))
            .expect("Segments should cross");
        assert_eq!(isxn.point, Point::new(5., 0.));
        assert_eq!(isxn.u, 0.5);
        assert_eq!(isxn.v, 0.5);

        let isxn = Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((0., 0.), (10., 5.)))
            .expect("Segments share their start");
        assert_eq!(isxn.point, Point::new(0., 0.));
        assert_eq!((isxn.u, isxn.v), (0., 0.));

        // Disjoint ranges.
        assert_eq!(
            Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((0., -5.), (10., -5.))),
            None
        );
        // The lines cross beyond the end of segment a.
        assert_eq!(
            Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((0., -5.), (20., 0.))),
            None
        );
    }

    #[test]
    fn test_inter_seg_seg_half_open() {
        // Meeting at the end of a (u == 1) is not an intersection.
        assert_eq!(
            Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((10., 0.), (10., 10.))),
            None
        );
    }

    #[test]
    fn test_inter_seg_seg_collinear_overlap() {
        assert_eq!(
            Point::inter_seg_seg(seg((0., 0.), (10., 0.)), seg((5., 0.), (15., 0.))),
            None
        );
    }

    #[test]
    fn test_from_coordinates() {
        assert_eq!(Point::from_coordinates(&[15., 20.]), Ok(Point::new(15., 20.)));
        assert_eq!(
            Point::try_from(&[15., 20., 30.][..]),
            Ok(Point::new_3d(15., 20., 30.))
        );
        assert!(matches!(
            Point::from_coordinates(&[1.]),
            Err(GeometryError::Construction(_))
        ));
        assert!(Point::from_coordinates(&[1., 2., 3., 4.]).is_err());
    }

    #[test]
    fn test_wkt() {
        assert_eq!(Point::new(15., 20.).wkt(), "POINT(15 20)");
        assert_eq!(Point::new_3d(15., 20., 99.).wkt(), "POINT(15 20 99)");
        assert_eq!(Point::new(1.23456, 2.).wkt_digits(2), "POINT(1.23 2)");
        assert_eq!(Point::new(15.5, -0.25).to_string(), "15.5 -0.25");
    }

    #[test]
    fn test_wkt_digits_large_values() {
        let point = Point::new(1e300, 0.5);
        let text = point.wkt_digits(10);
        assert!(!text.contains("inf") && !text.contains("NaN"));
        assert_eq!(Point::from_wkt(&text), Ok(point));
        assert_eq!(Point::new(0.1, 2.).wkt_digits(20), "POINT(0.1 2)");
    }
}
