use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::Position;
use crate::to_wkt::{ToWkt, EMPTY};
use crate::transform::MapPoints;
use crate::utils::write_list;
use crate::{LineString, Point};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl<L: Into<LineString>> From<Vec<L>> for MultiLineString {
    fn from(lines: Vec<L>) -> Self {
        MultiLineString::new(lines.into_iter().map(|l| l.into()).collect())
    }
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        MultiLineString { lines }
    }

    pub fn from_coordinates(lines: &[Vec<Position>]) -> Result<Self, GeometryError> {
        let lines = lines
            .iter()
            .map(|l| LineString::from_coordinates(l))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiLineString::new(lines))
    }

    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        self.lines.iter().map(LineString::coordinates).collect()
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn length(&self) -> f64 {
        self.lines.iter().map(LineString::length).sum()
    }

    pub fn filter(&self, digits: i32) -> MultiLineString {
        MultiLineString::new(self.lines.iter().map(|l| l.filter(digits)).collect())
    }
}

impl HasBBox for MultiLineString {
    fn bbox(&self) -> BBox {
        self.lines.iter().map(|l| l.bbox()).collect()
    }
}

impl ToWkt for MultiLineString {
    fn keyword(&self) -> &'static str {
        "MULTILINESTRING"
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        if self.is_empty() {
            out.push_str(" ");
            out.push_str(EMPTY);
        } else {
            write_list(out, &self.lines, |out, l| l.write_coords(out, digits));
        }
    }
}

impl MapPoints for MultiLineString {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        MultiLineString::new(self.lines.iter().map(|l| l.map_points(f)).collect())
    }
}

impl Draw for MultiLineString {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        for line in &self.lines {
            line.draw(drawing, style);
        }
    }
}
