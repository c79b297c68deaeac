use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::{Geometry, Point};
use std::iter::FromIterator;

/// A heterogeneous list of geometries, possibly nested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl<G: Into<Geometry>> From<Vec<G>> for GeometryCollection {
    fn from(geometries: Vec<G>) -> Self {
        geometries.into_iter().collect()
    }
}

impl<G: Into<Geometry>> FromIterator<G> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = G>>(geometries: I) -> Self {
        GeometryCollection::new(geometries.into_iter().map(|g| g.into()).collect())
    }
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection { geometries }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn filter(&self, digits: i32) -> GeometryCollection {
        self.geometries.iter().map(|g| g.filter(digits)).collect()
    }
}

impl HasBBox for GeometryCollection {
    fn bbox(&self) -> BBox {
        self.geometries.iter().map(|g| g.bbox()).collect()
    }
}

impl ToWkt for GeometryCollection {
    fn keyword(&self) -> &'static str {
        "GEOMETRYCOLLECTION"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.geometries, |out, g| g.write_wkt(out, digits));
        }
    }
}

impl MapPoints for GeometryCollection {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        GeometryCollection::new(self.geometries.iter().map(|g| g.map_points(f)).collect())
    }
}

impl Draw for GeometryCollection {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        for geometry in &self.geometries {
            geometry.draw(drawing, style);
        }
    }
}
