//! Direct WKT to GeoJSON conversion for bulk loads.
//!
//! [`convert`] walks the text once with a byte cursor and emits the nested
//! coordinate arrays without building any [`Geometry`](crate::Geometry).
//! With no shift its output equals `Geometry::from_wkt(text)?.geojson()`.

use crate::errors::GeometryError;
use crate::geojson::{GeoJson, Position};

/// Longitude offset applied to every first ordinate, used to draw shapes on
/// the other side of the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntimeridianShift {
    None,
    /// +360
    East,
    /// -360
    West,
}

impl Default for AntimeridianShift {
    fn default() -> Self {
        AntimeridianShift::None
    }
}

impl AntimeridianShift {
    pub fn offset(self) -> f64 {
        match self {
            AntimeridianShift::None => 0.,
            AntimeridianShift::East => 360.,
            AntimeridianShift::West => -360.,
        }
    }
}

pub fn convert(wkt: &str, shift: AntimeridianShift) -> Result<GeoJson, GeometryError> {
    let mut cursor = Cursor {
        text: wkt,
        pos: 0,
        shift: shift.offset(),
    };
    let geojson = cursor.geometry()?;
    cursor.skip_whitespace();
    if cursor.pos < wkt.len() {
        return Err(cursor.error("unexpected trailing text"));
    }
    log::trace!("converted {} of {} bytes", geojson.type_name(), wkt.len());
    Ok(geojson)
}

fn is_number_byte(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.' || c == b'-' || c == b'+' || c == b'e' || c == b'E'
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    shift: f64,
}

impl<'a> Cursor<'a> {
    fn error(&self, message: &str) -> GeometryError {
        GeometryError::parse(message, &self.text[self.pos..])
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        let found = self.peek() == Some(byte);
        if found {
            self.pos += 1;
        }
        found
    }

    fn expect(&mut self, byte: u8) -> Result<(), GeometryError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    /// The run of letters at the cursor.
    fn word(&mut self) -> &'a str {
        self.skip_whitespace();
        let start = self.pos;
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    fn empty(&mut self) -> bool {
        let start = self.pos;
        if self.word().eq_ignore_ascii_case("EMPTY") {
            return true;
        }
        self.pos = start;
        false
    }

    fn number(&mut self) -> Result<f64, GeometryError> {
        self.skip_whitespace();
        let start = self.pos;
        let bytes = self.text.as_bytes();
        let mut end = start;
        while end < bytes.len() && is_number_byte(bytes[end]) {
            end += 1;
        }
        let number = self.text[start..end]
            .parse::<f64>()
            .map_err(|_| self.error("expected a number"))?;
        self.pos = end;
        Ok(number)
    }

    fn position(&mut self) -> Result<Position, GeometryError> {
        let mut x = self.number()?;
        if self.shift != 0. {
            x += self.shift;
        }
        let y = self.number()?;
        match self.peek() {
            Some(c) if is_number_byte(c) => Ok(vec![x, y, self.number()?]),
            _ => Ok(vec![x, y]),
        }
    }

    /// A MULTIPOINT element, `(x y)` or `x y`.
    fn bare_or_wrapped_position(&mut self) -> Result<Position, GeometryError> {
        if self.eat(b'(') {
            let position = self.position()?;
            self.expect(b')')?;
            Ok(position)
        } else {
            self.position()
        }
    }

    fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, GeometryError>,
    ) -> Result<Vec<T>, GeometryError> {
        if self.empty() {
            return Ok(Vec::new());
        }
        self.expect(b'(')?;
        let mut items = vec![item(self)?];
        while self.eat(b',') {
            items.push(item(self)?);
        }
        self.expect(b')')?;
        Ok(items)
    }

    fn positions(&mut self) -> Result<Vec<Position>, GeometryError> {
        self.list(Cursor::position)
    }

    fn rings(&mut self) -> Result<Vec<Vec<Position>>, GeometryError> {
        self.list(Cursor::positions)
    }

    fn geometry(&mut self) -> Result<GeoJson, GeometryError> {
        self.skip_whitespace();
        let start = self.pos;
        let keyword = self.word().to_ascii_uppercase();
        Ok(match keyword.as_str() {
            "POINT" => {
                self.expect(b'(')?;
                let coordinates = self.position()?;
                self.expect(b')')?;
                GeoJson::Point { coordinates }
            }
            "LINESTRING" => GeoJson::LineString {
                coordinates: self.positions()?,
            },
            "POLYGON" => GeoJson::Polygon {
                coordinates: self.rings()?,
            },
            "MULTIPOINT" => GeoJson::MultiPoint {
                coordinates: self.list(Cursor::bare_or_wrapped_position)?,
            },
            "MULTILINESTRING" => GeoJson::MultiLineString {
                coordinates: self.rings()?,
            },
            "MULTIPOLYGON" => GeoJson::MultiPolygon {
                coordinates: self.list(Cursor::rings)?,
            },
            "GEOMETRYCOLLECTION" => GeoJson::GeometryCollection {
                geometries: self.list(Cursor::geometry)?,
            },
            _ => {
                self.pos = start;
                return Err(self.error("unknown geometry type"));
            }
        })
    }
}
