use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::polygon::Areal;
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::{Point, Polygon};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        MultiPolygon::new(polygons)
    }
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons }
    }

    pub fn from_coordinates(polygons: &[Vec<Vec<Position>>]) -> Result<Self, GeometryError> {
        let polygons = polygons
            .iter()
            .map(|p| Polygon::from_coordinates(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiPolygon::new(polygons))
    }

    pub fn coordinates(&self) -> Vec<Vec<Vec<Position>>> {
        self.polygons.iter().map(Polygon::coordinates).collect()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Sum of the signed polygon areas.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    pub fn filter(&self, digits: i32) -> MultiPolygon {
        MultiPolygon::new(self.polygons.iter().map(|p| p.filter(digits)).collect())
    }

    pub fn point_in_polygon(&self, point: &Point) -> bool {
        self.polygons.iter().any(|p| p.point_in_polygon(point))
    }

    /// Whether any polygon here meets any polygon of `other`.
    pub fn inters<A: Areal + ?Sized>(&self, other: &A) -> bool {
        self.polygons.iter().any(|p| p.inters(other))
    }
}

impl Areal for MultiPolygon {
    fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl HasBBox for MultiPolygon {
    fn bbox(&self) -> BBox {
        self.polygons.iter().map(|p| p.bbox()).collect()
    }
}

impl ToWkt for MultiPolygon {
    fn keyword(&self) -> &'static str {
        "MULTIPOLYGON"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.polygons, |out, p| p.write_rings(out, digits));
        }
    }
}

impl MapPoints for MultiPolygon {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        MultiPolygon::new(self.polygons.iter().map(|p| p.map_points(f)).collect())
    }
}

impl Draw for MultiPolygon {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        for polygon in &self.polygons {
            polygon.draw(drawing, style);
        }
    }
}
