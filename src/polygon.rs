use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::{LineString, Point};

/// A surface bounded by an exterior ring (ring 0) and optional holes.
///
/// Rings are not validated on construction; see [`Polygon::is_valid`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
}

/// Geometries made of polygons, which can be tested for intersection.
pub trait Areal {
    fn polygons(&self) -> &[Polygon];
}

impl<L: Into<LineString>> From<Vec<L>> for Polygon {
    fn from(rings: Vec<L>) -> Self {
        Polygon::new(rings.into_iter().map(|r| r.into()).collect())
    }
}

impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Self {
        Polygon { rings }
    }

    pub fn from_coordinates(rings: &[Vec<Position>]) -> Result<Self, GeometryError> {
        let rings = rings
            .iter()
            .map(|r| LineString::from_coordinates(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(rings))
    }

    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        self.rings.iter().map(LineString::coordinates).collect()
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn with_hole(&self, hole: LineString) -> Polygon {
        let mut rings = self.rings.clone();
        rings.push(hole);
        Polygon::new(rings)
    }

    /// Signed area: the sum of the ring areas, so holes wound against the
    /// exterior are subtracted.
    pub fn area(&self) -> f64 {
        self.rings.iter().map(LineString::area).sum()
    }

    /// |exterior| minus |hole| for every hole, whatever the winding.
    pub fn area_no_direction(&self) -> f64 {
        match self.rings.split_first() {
            None => 0.,
            Some((exterior, holes)) => {
                exterior.area().abs() - holes.iter().map(|h| h.area().abs()).sum::<f64>()
            }
        }
    }

    pub fn point_in_polygon(&self, point: &Point) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring.point_in_polygon(point))
            .count()
            % 2
            == 1
    }

    pub fn is_valid(&self) -> bool {
        !self.rings.is_empty() && self.rings.iter().all(|r| r.is_valid() && r.len() >= 4)
    }

    /// Filter every ring, dropping the ones left with fewer than 4 points.
    pub fn filter(&self, digits: i32) -> Polygon {
        Polygon::new(
            self.rings
                .iter()
                .map(|r| r.filter(digits))
                .filter(|r| r.len() >= 4)
                .collect(),
        )
    }

    /// The segments of every ring, exterior first.
    pub fn segs(&self) -> impl Iterator<Item = [Point; 2]> + '_ {
        self.rings.iter().flat_map(|r| r.segs())
    }

    fn vertices(&self) -> impl Iterator<Item = &Point> {
        self.rings.iter().flat_map(|r| r.points())
    }

    /// Whether this polygon meets any polygon of `other`.
    pub fn inters<A: Areal + ?Sized>(&self, other: &A) -> bool {
        other.polygons().iter().any(|p| self.inters_polygon(p))
    }

    /**
     * Polygons whose boxes share no area are disjoint. Otherwise they
     * intersect when a vertex of one lies inside the other, or when two of
     * their segments cross.
     *
     * NB: The box test runs first, so polygons touching only along an edge
     * or at a corner are reported as disjoint.
     */
    fn inters_polygon(&self, other: &Polygon) -> bool {
        if self.bbox().inters(&other.bbox()) == 0. {
            log::debug!("bbox prefilter rejects polygon intersection");
            return false;
        }
        if other.vertices().any(|pt| self.point_in_polygon(pt)) {
            return true;
        }
        if self.vertices().any(|pt| other.point_in_polygon(pt)) {
            return true;
        }
        self.segs()
            .any(|a| other.segs().any(|b| Point::inter_seg_seg(a, b).is_some()))
    }

    pub(crate) fn write_rings(&self, out: &mut String, digits: Option<i32>) {
        if self.rings.is_empty() {
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.rings, |out, r| r.write_coords(out, digits));
        }
    }
}

impl Areal for Polygon {
    fn polygons(&self) -> &[Polygon] {
        std::slice::from_ref(self)
    }
}

impl HasBBox for Polygon {
    /// The box of the exterior ring.
    fn bbox(&self) -> BBox {
        self.exterior().map(|r| r.bbox()).unwrap_or_default()
    }
}

impl ToWkt for Polygon {
    fn keyword(&self) -> &'static str {
        "POLYGON"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            self.write_rings(out, digits);
        }
    }
}

impl MapPoints for Polygon {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        Polygon::new(self.rings.iter().map(|r| r.map_points(f)).collect())
    }
}

impl Draw for Polygon {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        drawing.draw_polygon(&self.rings, style);
    }
}
