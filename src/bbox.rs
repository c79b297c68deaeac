use crate::errors::GeometryError;
use crate::transform::Reproject;
use crate::{LineString, Point, Polygon};
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

pub trait HasBBox {
    fn bbox(&self) -> BBox;
}

/// A bounding box grown by accumulating points.
///
/// A box is either undetermined (no point seen yet) or has both a `min`
/// and a `max` corner. Only `bound` and `union` change it, so it never
/// shrinks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BBox {
    min: Option<Point>,
    max: Option<Point>,
}

impl BBox {
    pub fn new() -> Self {
        BBox::default()
    }

    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let mut bbox = BBox::new();
        bbox.bound(&p1).bound(&p2);
        bbox
    }

    pub fn is_undetermined(&self) -> bool {
        self.min.is_none()
    }

    pub fn min(&self) -> Option<Point> {
        self.min
    }

    pub fn max(&self) -> Option<Point> {
        self.max
    }

    fn corners(&self) -> Option<(Point, Point)> {
        Some((self.min?, self.max?))
    }

    /// Grow the box so that it contains `point`.
    pub fn bound(&mut self, point: &Point) -> &mut Self {
        let point = point.proj_2d();
        match self.corners() {
            None => {
                self.min = Some(point);
                self.max = Some(point);
            }
            Some((min, max)) => {
                self.min = Some(Point::new(min.x.min(point.x), min.y.min(point.y)));
                self.max = Some(Point::new(max.x.max(point.x), max.y.max(point.y)));
            }
        }
        self
    }

    pub fn union(&mut self, other: &BBox) -> &mut Self {
        if let Some((min, max)) = other.corners() {
            self.bound(&min).bound(&max);
        }
        self
    }

    /// Length of the diagonal.
    pub fn size(&self) -> Option<f64> {
        let (min, max) = self.corners()?;
        Some(min.distance(max))
    }

    pub fn area(&self) -> Option<f64> {
        let (min, max) = self.corners()?;
        Some((max.x - min.x) * (max.y - min.y))
    }

    /// West and south edges are inside, east and north edges are not, so
    /// adjacent boxes never share a point.
    pub fn point_in_bbox(&self, point: &Point) -> bool {
        match self.corners() {
            None => false,
            Some((min, max)) => {
                point.x >= min.x && point.y >= min.y && point.x < max.x && point.y < max.y
            }
        }
    }

    /// Minimum distance between the points of the two boxes.
    pub fn mindist(&self, other: &BBox) -> Option<f64> {
        let (min, max) = self.corners()?;
        let (other_min, other_max) = other.corners()?;
        let x_intersects = max.x >= other_min.x && min.x <= other_max.x;
        let y_intersects = max.y >= other_min.y && min.y <= other_max.y;

        let dist = match (x_intersects, y_intersects) {
            (true, true) => 0.,
            (true, false) => (max.y - other_min.y).abs().min((other_max.y - min.y).abs()),
            (false, true) => (max.x - other_min.x).abs().min((other_max.x - min.x).abs()),
            (false, false) => {
                if min.x < other_min.x {
                    if min.y < other_min.y {
                        // other is NE of self
                        max.distance(other_min)
                    } else {
                        // other is SE of self
                        ((other_min.x - max.x).powi(2) + (min.y - other_max.y).powi(2)).sqrt()
                    }
                } else if min.y < other_min.y {
                    // other is NW of self
                    ((other_max.x - min.x).powi(2) + (max.y - other_min.y).powi(2)).sqrt()
                } else {
                    // other is SW of self
                    min.distance(other_max)
                }
            }
        };
        Some(dist)
    }

    /// Area of the intersection divided by the larger of the two areas.
    ///
    /// Returns 0 when the boxes are disjoint, when either is undetermined,
    /// or when both are degenerate (zero area).
    pub fn inters(&self, other: &BBox) -> f64 {
        let ((min, max), (other_min, other_max)) = match (self.corners(), other.corners()) {
            (Some(a), Some(b)) => (a, b),
            _ => return 0.,
        };
        let x_min = min.x.max(other_min.x);
        let y_min = min.y.max(other_min.y);
        let x_max = max.x.min(other_max.x);
        let y_max = max.y.min(other_max.y);
        if x_max < x_min || y_max < y_min {
            return 0.;
        }
        let largest = ((max.x - min.x) * (max.y - min.y))
            .max((other_max.x - other_min.x) * (other_max.y - other_min.y));
        if largest == 0. {
            return 0.;
        }
        (x_max - x_min) * (y_max - y_min) / largest
    }

    /// Corner `index`: 0 => SW, 1 => SE, 2 => NE, 3 => NW.
    pub fn corner(&self, index: usize) -> Result<Point, GeometryError> {
        let out_of_range = |len| GeometryError::Index {
            index: index as isize,
            len,
        };
        let (min, max) = self.corners().ok_or_else(|| out_of_range(0))?;
        match index {
            0 => Ok(min),
            1 => Ok(Point::new(max.x, min.y)),
            2 => Ok(max),
            3 => Ok(Point::new(min.x, max.y)),
            _ => Err(out_of_range(4)),
        }
    }

    /// The south, east, north and west edges, in that order.
    pub fn edges(&self) -> Option<[[Point; 2]; 4]> {
        let (min, max) = self.corners()?;
        let se = Point::new(max.x, min.y);
        let nw = Point::new(min.x, max.y);
        Some([[min, se], [se, max], [max, nw], [nw, min]])
    }

    /// The box as a closed ring SW -> NW -> NE -> SE -> SW.
    pub fn as_polygon(&self) -> Option<Polygon> {
        let (min, max) = self.corners()?;
        let ring = LineString::new(vec![
            min,
            Point::new(min.x, max.y),
            max,
            Point::new(max.x, min.y),
            min,
        ]);
        Some(Polygon::new(vec![ring]))
    }

    /// `[x_min, y_min, x_max, y_max]`
    pub fn as_array(&self) -> Option<[f64; 4]> {
        let (min, max) = self.corners()?;
        Some([min.x, min.y, max.x, max.y])
    }

    pub fn chg_coord_sys<R: Reproject + ?Sized>(
        &self,
        reproject: &R,
        src: &str,
        dest: &str,
    ) -> BBox {
        match self.corners() {
            None => *self,
            Some((min, max)) => BBox::from_corners(
                reproject.reproject_point(src, dest, min),
                reproject.reproject_point(src, dest, max),
            ),
        }
    }
}

impl<'a> FromIterator<&'a Point> for BBox {
    fn from_iter<I: IntoIterator<Item = &'a Point>>(points: I) -> Self {
        points.into_iter().fold(BBox::new(), |mut bbox, point| {
            bbox.bound(point);
            bbox
        })
    }
}

impl FromIterator<BBox> for BBox {
    fn from_iter<I: IntoIterator<Item = BBox>>(boxes: I) -> Self {
        boxes.into_iter().fold(BBox::new(), |mut bbox, other| {
            bbox.union(&other);
            bbox
        })
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.corners() {
            None => write!(f, "[]"),
            Some((min, max)) => write!(f, "[{},{}]", min, max),
        }
    }
}

/// Parse `"x,y"` or `"x_min,y_min,x_max,y_max"`.
impl FromStr for BBox {
    type Err = GeometryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let numbers = text
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    let message = format!("{:?} is not a number in bbox {:?}", part, text);
                    GeometryError::construction(message)
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        match *numbers.as_slice() {
            [x, y] => Ok(BBox::from_corners(Point::new(x, y), Point::new(x, y))),
            [x_min, y_min, x_max, y_max] => Ok(BBox::from_corners(
                Point::new(x_min, y_min),
                Point::new(x_max, y_max),
            )),
            _ => Err(GeometryError::construction(format!(
                "bbox {:?} needs 2 or 4 numbers",
                text
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    fn bbox(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> BBox {
        BBox::from_corners(Point::new(x_min, y_min), Point::new(x_max, y_max))
    }

    fn assert_mindist(a: BBox, b: BBox, expected: f64) {
        let forward = a.mindist(&b).unwrap();
        let backward = b.mindist(&a).unwrap();
        assert!((forward - expected).abs() < 1e-9, "{} != {}", forward, expected);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_bound() {
        let mut bbox = BBox::new();
        assert!(bbox.is_undetermined());
        assert_eq!(bbox.size(), None);
        assert_eq!(bbox.area(), None);
        bbox.bound(&Point::new(0., 0.)).bound(&Point::new(10., 10.));
        assert_eq!(bbox.min(), Some(Point::new(0., 0.)));
        assert_eq!(bbox.max(), Some(Point::new(10., 10.)));
        assert!((bbox.size().unwrap() - 10. * SQRT_2).abs() < 1e-12);
        assert_eq!(bbox.area(), Some(100.));
    }

    #[test]
    fn test_bound_never_shrinks() {
        let points = [(3., 4.), (-1., 2.), (0., 0.), (5., -7.), (2., 2.)];
        let mut bbox = BBox::new();
        let mut previous: Option<[f64; 4]> = None;
        for &p in points.iter() {
            bbox.bound(&p.into());
            let current = bbox.as_array().unwrap();
            if let Some(prev) = previous {
                assert!(current[0] <= prev[0] && current[1] <= prev[1]);
                assert!(current[2] >= prev[2] && current[3] >= prev[3]);
            }
            previous = Some(current);
        }
        assert_eq!(bbox.as_array(), Some([-1., -7., 5., 4.]));
    }

    #[test]
    fn test_union() {
        let a = bbox(0., 0., 1., 1.);
        let mut b = a;
        b.union(&BBox::new());
        assert_eq!(b, a);
        let mut c = BBox::new();
        c.union(&a);
        assert_eq!(c, a);
        c.union(&bbox(5., -1., 6., 0.5));
        assert_eq!(c.as_array(), Some([0., -1., 6., 1.]));
    }

    #[test]
    fn test_bound_drops_z() {
        let mut bbox = BBox::new();
        bbox.bound(&Point::new_3d(1., 2., 3.));
        assert_eq!(bbox.min(), Some(Point::new(1., 2.)));
    }

    #[test]
    fn test_point_in_bbox() {
        let b = bbox(0., 0., 10., 10.);
        assert!(b.point_in_bbox(&Point::new(5., 5.)));
        assert!(b.point_in_bbox(&Point::new(0., 5.)));
        assert!(b.point_in_bbox(&Point::new(5., 0.)));
        assert!(b.point_in_bbox(&Point::new(0., 0.)));
        assert!(!b.point_in_bbox(&Point::new(10., 5.)));
        assert!(!b.point_in_bbox(&Point::new(5., 10.)));
        assert!(!BBox::new().point_in_bbox(&Point::new(0., 0.)));
    }

    #[test]
    fn test_mindist() {
        let r0 = bbox(0., 0., 100., 100.);
        assert_mindist(r0, bbox(30., 30., 200., 200.), 0.);
        assert_mindist(r0, bbox(130., 70., 200., 200.), 30.);
        assert_mindist(r0, bbox(70., -100., 200., -50.), 50.);
        assert_mindist(r0, bbox(170., 170., 200., 250.), 70. * SQRT_2);
        assert_mindist(r0, bbox(101., 101., 200., 250.), SQRT_2);
        assert_mindist(r0, bbox(101., -100., 101., -1.), SQRT_2);
        assert_mindist(r0, bbox(-101., -170., -1., -1.), SQRT_2);
        assert_mindist(r0, bbox(-170., 101., -1., 170.), SQRT_2);
    }

    #[test]
    fn test_mindist_touching_and_side_by_side() {
        assert_mindist(bbox(0., 0., 10., 10.), bbox(10., 10., 20., 20.), 0.);
        assert_mindist(bbox(0., 0., 10., 10.), bbox(20., 0., 30., 10.), 10.);
        assert_eq!(bbox(0., 0., 1., 1.).mindist(&BBox::new()), None);
    }

    #[test]
    fn test_inters() {
        let b = bbox(0., 0., 10., 10.);
        assert_eq!(b.inters(&bbox(5., 5., 15., 15.)), 0.25);
        assert_eq!(b.inters(&bbox(0., 0., 5., 5.)), 0.25);
        assert_eq!(bbox(0., 0., 5., 5.).inters(&b), 0.25);
        assert_eq!(b.inters(&b), 1.);
        assert_eq!(b.inters(&bbox(20., 0., 30., 10.)), 0.);
        assert_eq!(b.inters(&bbox(10., 0., 20., 10.)), 0.);
        assert_eq!(b.inters(&BBox::new()), 0.);
        let p = BBox::from_corners(Point::new(1., 1.), Point::new(1., 1.));
        assert_eq!(p.inters(&p), 0.);
    }

    #[test]
    fn test_corners_and_edges() {
        let b = bbox(0., 0., 2., 1.);
        assert_eq!(b.corner(0), Ok(Point::new(0., 0.)));
        assert_eq!(b.corner(1), Ok(Point::new(2., 0.)));
        assert_eq!(b.corner(2), Ok(Point::new(2., 1.)));
        assert_eq!(b.corner(3), Ok(Point::new(0., 1.)));
        assert_eq!(b.corner(4), Err(GeometryError::Index { index: 4, len: 4 }));
        assert_eq!(BBox::new().corner(0), Err(GeometryError::Index { index: 0, len: 0 }));

        let edges = b.edges().unwrap();
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge[0], b.corner(i).unwrap());
            assert_eq!(edge[1], b.corner((i + 1) % 4).unwrap());
        }
        assert!(BBox::new().edges().is_none());
    }

    #[test]
    fn test_as_polygon() {
        let polygon = bbox(0., 0., 2., 1.).as_polygon().unwrap();
        assert_eq!(
            polygon.rings()[0].points(),
            &[
                Point::new(0., 0.),
                Point::new(0., 1.),
                Point::new(2., 1.),
                Point::new(2., 0.),
                Point::new(0., 0.),
            ][..]
        );
        assert!(polygon.is_valid());
        assert_eq!(polygon.area(), -2.);
        assert!(BBox::new().as_polygon().is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0,0,10,10".parse::<BBox>(), Ok(bbox(0., 0., 10., 10.)));
        assert_eq!("10, 10, 0, 0".parse::<BBox>(), Ok(bbox(0., 0., 10., 10.)));
        assert_eq!("3,4".parse::<BBox>(), Ok(bbox(3., 4., 3., 4.)));
        assert!(matches!(
            "1,2,3".parse::<BBox>(),
            Err(GeometryError::Construction(_))
        ));
        assert!("a,b".parse::<BBox>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BBox::new().to_string(), "[]");
        assert_eq!(bbox(0., 0., 10., 10.).to_string(), "[0 0,10 10]");
    }

    #[test]
    fn test_chg_coord_sys() {
        let double = |_: &str, _: &str, x: f64, y: f64| (2. * x, 2. * y);
        let b = bbox(1., 1., 2., 3.).chg_coord_sys(&double, "a", "b");
        assert_eq!(b, bbox(2., 2., 4., 6.));
        assert!(BBox::new().chg_coord_sys(&double, "a", "b").is_undetermined());
    }
}
