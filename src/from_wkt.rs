use crate::errors::GeometryError;
use crate::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use std::convert::TryFrom;
use std::str::FromStr;
use wkt::types;
use wkt::types::Coord;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

fn is_number_char(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.' || c == b'-' || c == b'+' || c == b'e' || c == b'E'
}

/// Recursive-descent WKT reader over a byte position in `text`.
///
/// Tokens are lexed on demand; nothing before `pos` is ever re-read.
struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser { text, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn error(&self, message: impl Into<String>) -> GeometryError {
        GeometryError::parse(message, self.remainder())
    }

    /// The next token and the position just past it, without consuming it.
    fn lex(&mut self) -> Result<Option<(Token<'a>, usize)>, GeometryError> {
        self.skip_whitespace();
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let first = match bytes.get(start) {
            None => return Ok(None),
            Some(&c) => c,
        };
        let token = match first {
            b'(' => (Token::LeftParen, start + 1),
            b')' => (Token::RightParen, start + 1),
            b',' => (Token::Comma, start + 1),
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
                    end += 1;
                }
                (Token::Word(&self.text[start..end]), end)
            }
            c if is_number_char(c) => {
                let mut end = start;
                while end < bytes.len() && is_number_char(bytes[end]) {
                    end += 1;
                }
                let number = self.text[start..end]
                    .parse::<f64>()
                    .map_err(|_| self.error("invalid number"))?;
                (Token::Number(number), end)
            }
            _ => return Err(self.error("unexpected character")),
        };
        Ok(Some(token))
    }

    fn peek(&mut self) -> Result<Option<Token<'a>>, GeometryError> {
        Ok(self.lex()?.map(|(token, _)| token))
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, GeometryError> {
        Ok(self.lex()?.map(|(token, end)| {
            self.pos = end;
            token
        }))
    }

    fn expect(&mut self, expected: Token<'static>, what: &str) -> Result<(), GeometryError> {
        match self.peek()? {
            Some(token) if token == expected => {
                self.next_token()?;
                Ok(())
            }
            _ => Err(self.error(format!("expected {}", what))),
        }
    }

    fn number(&mut self) -> Result<f64, GeometryError> {
        match self.peek()? {
            Some(Token::Number(n)) => {
                self.next_token()?;
                Ok(n)
            }
            _ => Err(self.error("expected a number")),
        }
    }

    fn is_next_word(&mut self, word: &str) -> Result<bool, GeometryError> {
        Ok(match self.peek()? {
            Some(Token::Word(w)) => w.eq_ignore_ascii_case(word),
            _ => false,
        })
    }

    /// Consume the EMPTY marker if it comes next.
    fn empty(&mut self) -> Result<bool, GeometryError> {
        let empty = self.is_next_word("EMPTY")?;
        if empty {
            self.next_token()?;
        }
        Ok(empty)
    }

    /// Consume `keyword` if present. Any other word but EMPTY is an error.
    fn optional_keyword(&mut self, keyword: &str) -> Result<(), GeometryError> {
        match self.peek()? {
            Some(Token::Word(w)) if w.eq_ignore_ascii_case(keyword) => {
                self.next_token()?;
                Ok(())
            }
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("EMPTY") => Ok(()),
            Some(Token::Word(_)) => Err(self.error(format!("expected {}", keyword))),
            _ => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<(), GeometryError> {
        self.skip_whitespace();
        if self.pos < self.text.len() {
            return Err(self.error("unexpected trailing text"));
        }
        Ok(())
    }

    /// `"(" item {"," item} ")"`
    fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, GeometryError>,
    ) -> Result<Vec<T>, GeometryError> {
        self.expect(Token::LeftParen, "'('")?;
        let mut items = vec![item(self)?];
        loop {
            match self.peek()? {
                Some(Token::Comma) => {
                    self.next_token()?;
                    items.push(item(self)?);
                }
                Some(Token::RightParen) => {
                    self.next_token()?;
                    return Ok(items);
                }
                _ => return Err(self.error("expected ',' or ')'")),
            }
        }
    }

    /// `NUM NUM [NUM]`
    fn coords(&mut self) -> Result<Point, GeometryError> {
        let x = self.number()?;
        let y = self.number()?;
        match self.peek()? {
            Some(Token::Number(z)) => {
                self.next_token()?;
                Ok(Point::new_3d(x, y, z))
            }
            _ => Ok(Point::new(x, y)),
        }
    }

    fn point_list(&mut self) -> Result<Vec<Point>, GeometryError> {
        self.list(Parser::coords)
    }

    /// Rings or lines, each of which may be EMPTY.
    fn rings(&mut self) -> Result<Vec<LineString>, GeometryError> {
        self.list(Parser::line_string)
    }

    /// `"(" NUM NUM [NUM] ")"`
    fn point(&mut self) -> Result<Point, GeometryError> {
        if self.is_next_word("EMPTY")? {
            return Err(self.error("empty points are not supported"));
        }
        self.expect(Token::LeftParen, "'('")?;
        let point = self.coords()?;
        self.expect(Token::RightParen, "')'")?;
        Ok(point)
    }

    /// A point with or without its parentheses.
    fn bare_or_wrapped_point(&mut self) -> Result<Point, GeometryError> {
        if let Some(Token::Number(_)) = self.peek()? {
            self.coords()
        } else {
            self.point()
        }
    }

    /// The bare form is only allowed without the keyword.
    fn point_text(&mut self) -> Result<Point, GeometryError> {
        if self.is_next_word("POINT")? {
            self.next_token()?;
            return self.point();
        }
        self.bare_or_wrapped_point()
    }

    fn line_string(&mut self) -> Result<LineString, GeometryError> {
        if self.empty()? {
            return Ok(LineString::default());
        }
        self.point_list().map(LineString::new)
    }

    fn polygon(&mut self) -> Result<Polygon, GeometryError> {
        if self.empty()? {
            return Ok(Polygon::default());
        }
        self.rings().map(Polygon::new)
    }

    /// Elements may be written `(x y)` or `x y`.
    fn multi_point(&mut self) -> Result<MultiPoint, GeometryError> {
        if self.empty()? {
            return Ok(MultiPoint::default());
        }
        self.list(Parser::bare_or_wrapped_point).map(MultiPoint::new)
    }

    fn multi_line_string(&mut self) -> Result<MultiLineString, GeometryError> {
        if self.empty()? {
            return Ok(MultiLineString::default());
        }
        self.rings().map(MultiLineString::new)
    }

    fn multi_polygon(&mut self) -> Result<MultiPolygon, GeometryError> {
        if self.empty()? {
            return Ok(MultiPolygon::default());
        }
        self.list(Parser::polygon).map(MultiPolygon::new)
    }

    fn geometry_collection(&mut self) -> Result<GeometryCollection, GeometryError> {
        if self.empty()? {
            return Ok(GeometryCollection::default());
        }
        self.list(Parser::geometry).map(GeometryCollection::new)
    }

    /// A keyword followed by the matching body.
    fn geometry(&mut self) -> Result<Geometry, GeometryError> {
        let keyword = match self.peek()? {
            Some(Token::Word(w)) => w.to_ascii_uppercase(),
            _ => return Err(self.error("expected a geometry keyword")),
        };
        let start = self.pos;
        self.next_token()?;
        log::trace!("parsing {} at byte {}", keyword, start);
        Ok(match keyword.as_str() {
            "POINT" => self.point()?.into(),
            "LINESTRING" => self.line_string()?.into(),
            "POLYGON" => self.polygon()?.into(),
            "MULTIPOINT" => self.multi_point()?.into(),
            "MULTILINESTRING" => self.multi_line_string()?.into(),
            "MULTIPOLYGON" => self.multi_polygon()?.into(),
            "GEOMETRYCOLLECTION" => self.geometry_collection()?.into(),
            _ => {
                self.pos = start;
                return Err(self.error("unknown geometry type"));
            }
        })
    }
}

/// Parse one complete text with `body`, after an optional `keyword`.
fn parse_tagged<'a, T>(
    text: &'a str,
    keyword: &str,
    body: impl FnOnce(&mut Parser<'a>) -> Result<T, GeometryError>,
) -> Result<T, GeometryError> {
    let mut parser = Parser::new(text);
    parser.optional_keyword(keyword)?;
    let value = body(&mut parser)?;
    parser.finish()?;
    Ok(value)
}

impl Geometry {
    /// Parse any WKT geometry, dispatching on its leading keyword.
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        let mut parser = Parser::new(text);
        let geometry = parser.geometry()?;
        parser.finish()?;
        log::debug!("parsed {} from WKT", geometry.type_name());
        Ok(geometry)
    }
}

impl Point {
    /// Accepts `POINT(x y)`, `(x y)` or a bare `x y`.
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        let mut parser = Parser::new(text);
        let point = parser.point_text()?;
        parser.finish()?;
        Ok(point)
    }
}

impl LineString {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "LINESTRING", Parser::line_string)
    }
}

impl Polygon {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "POLYGON", Parser::polygon)
    }
}

impl MultiPoint {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "MULTIPOINT", Parser::multi_point)
    }
}

impl MultiLineString {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "MULTILINESTRING", Parser::multi_line_string)
    }
}

impl MultiPolygon {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "MULTIPOLYGON", Parser::multi_polygon)
    }
}

impl GeometryCollection {
    pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
        parse_tagged(text, "GEOMETRYCOLLECTION", Parser::geometry_collection)
    }
}

macro_rules! from_str_via_wkt {
    ($($kind:ident),*) => {
        $(
            impl FromStr for $kind {
                type Err = GeometryError;

                fn from_str(text: &str) -> Result<Self, Self::Err> {
                    $kind::from_wkt(text)
                }
            }
        )*
    };
}

from_str_via_wkt!(
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

// Conversions from geometries already parsed by the `wkt` crate.

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Point {
            x: coord.x,
            y: coord.y,
            z: coord.z,
        }
    }
}

fn point_from_wkt(point: types::Point<f64>) -> Option<Point> {
    point.0.map(Point::from)
}

fn line_string_from_wkt(line_string: types::LineString<f64>) -> LineString {
    line_string.0.into_iter().map(Point::from).collect()
}

fn polygon_from_wkt(polygon: types::Polygon<f64>) -> Polygon {
    Polygon::new(polygon.0.into_iter().map(line_string_from_wkt).collect())
}

fn empty_point() -> GeometryError {
    GeometryError::construction("empty wkt points have no coordinates")
}

impl TryFrom<wkt::Geometry<f64>> for Geometry {
    type Error = GeometryError;

    fn try_from(geometry: wkt::Geometry<f64>) -> Result<Self, Self::Error> {
        Ok(match geometry {
            wkt::Geometry::Point(p) => point_from_wkt(p).ok_or_else(empty_point)?.into(),
            wkt::Geometry::LineString(ls) => line_string_from_wkt(ls).into(),
            wkt::Geometry::Polygon(p) => polygon_from_wkt(p).into(),
            wkt::Geometry::MultiPoint(mp) => mp
                .0
                .into_iter()
                .map(point_from_wkt)
                .collect::<Option<MultiPoint>>()
                .ok_or_else(empty_point)?
                .into(),
            wkt::Geometry::MultiLineString(mls) => {
                MultiLineString::new(mls.0.into_iter().map(line_string_from_wkt).collect()).into()
            }
            wkt::Geometry::MultiPolygon(mp) => {
                MultiPolygon::new(mp.0.into_iter().map(polygon_from_wkt).collect()).into()
            }
            wkt::Geometry::GeometryCollection(gc) => GeometryCollection::new(
                gc.0.into_iter()
                    .map(Geometry::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToWkt;

    fn parse_with_wkt_crate(text: &str) -> Geometry {
        let mut items = wkt::Wkt::from_str(text).unwrap().items;
        assert_eq!(items.len(), 1);
        Geometry::try_from(items.remove(0)).unwrap()
    }

    fn assert_parse_error(text: &str, remainder: &str) {
        match Geometry::from_wkt(text) {
            Err(GeometryError::Parse { remainder: r, .. }) => assert_eq!(r, remainder),
            other => panic!("Expected a parse error for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn check_point() {
        assert_eq!(
            Geometry::from_wkt("POINT(15 20)").unwrap(),
            Geometry::Point(Point::new(15., 20.))
        );
        assert_eq!(Point::from_wkt("POINT (3 4)"), Ok(Point::new(3., 4.)));
        assert_eq!(Point::from_wkt("15 20"), Ok(Point::new(15., 20.)));
        assert_eq!(Point::from_wkt("(15 20 30)"), Ok(Point::new_3d(15., 20., 30.)));
        assert_eq!(Point::from_wkt("point(1e2 -2.5E-1)"), Ok(Point::new(100., -0.25)));
    }

    #[test]
    fn check_keyword_optional() {
        let line = LineString::from_wkt("LINESTRING(0 0,1 1)").unwrap();
        assert_eq!(LineString::from_wkt("(0 0,1 1)"), Ok(line.clone()));
        assert_eq!(LineString::from_wkt("  linestring ( 0 0 , 1 1 ) "), Ok(line));
        assert!(matches!(
            LineString::from_wkt("POLYGON((0 0,1 1))"),
            Err(GeometryError::Parse { .. })
        ));
    }

    #[test]
    fn check_multipoint_forms() {
        let expected = MultiPoint::from(vec![(2., 3.), (7., 8.)]);
        assert_eq!(MultiPoint::from_wkt("MULTIPOINT((2 3), (7 8))"), Ok(expected.clone()));
        assert_eq!(MultiPoint::from_wkt("MULTIPOINT(2 3,7 8)"), Ok(expected.clone()));
        assert_eq!(MultiPoint::from_wkt("MULTIPOINT((2 3),7 8)"), Ok(expected));
    }

    #[test]
    fn check_empty() {
        for text in &[
            "LINESTRING EMPTY",
            "POLYGON EMPTY",
            "MULTIPOINT EMPTY",
            "MULTILINESTRING EMPTY",
            "MULTIPOLYGON EMPTY",
            "GEOMETRYCOLLECTION EMPTY",
        ] {
            assert_eq!(&Geometry::from_wkt(text).unwrap().wkt(), text);
        }
        assert_eq!(
            GeometryCollection::from_wkt("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING EMPTY)")
                .unwrap()
                .len(),
            2
        );
        assert!(Geometry::from_wkt("POINT EMPTY").is_err());
    }

    #[test]
    fn check_nested_empty() {
        let polygons = MultiPolygon::from_wkt("MULTIPOLYGON(EMPTY,((0 0,1 0,1 1,0 0)))").unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons.wkt(), "MULTIPOLYGON(EMPTY,((0 0,1 0,1 1,0 0)))");
        let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,1 1,0 0),EMPTY)").unwrap();
        assert_eq!(polygon.holes(), &[LineString::default()]);
        assert!(MultiPoint::from_wkt("MULTIPOINT(EMPTY)").is_err());
    }

    #[test]
    fn check_keyword_needs_parens() {
        assert_parse_error("POINT 15 20", "15 20");
        assert_parse_error("GEOMETRYCOLLECTION(POINT 1 2)", "1 2)");
        assert_eq!(Point::from_wkt("15 20"), Ok(Point::new(15., 20.)));
        assert!(matches!(
            Point::from_wkt("POINT 15 20"),
            Err(GeometryError::Parse { .. })
        ));
    }

    #[test]
    fn check_collection() {
        let text = "GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))";
        let collection = GeometryCollection::from_wkt(text).unwrap();
        assert_eq!(collection.geometries()[0], Geometry::Point(Point::new(4., 6.)));
        assert_eq!(collection.wkt(), text);
        assert_eq!(text.parse::<Geometry>(), Ok(Geometry::from(collection)));
    }

    #[test]
    fn check_errors_name_remainder() {
        assert_parse_error("POINT(15 20", "");
        assert_parse_error("LINESTRING(0 0,1 1) junk", "junk");
        assert_parse_error("LINESTRING(0 0;1 1)", ";1 1)");
        assert_parse_error("CIRCLE(0 0,1)", "CIRCLE(0 0,1)");
        assert_parse_error("POLYGON((0 0,1 x))", "x))");
        assert_parse_error("POINT(1..2 3)", "1..2 3)");
        assert_parse_error("", "");
    }

    #[test]
    fn check_matches_wkt_crate() {
        for text in &[
            "POINT(1.0 1.0)",
            "LINESTRING(1 1,2 3,4 8, -6 3)",
            "POLYGON((-5 -5, -5 5, 5 5, 5 -5, -5 -5),(0 0, 3 0, 3 3, 0 3, 0 0))",
            "MULTIPOINT((2 3), (7 8))",
            "MULTILINESTRING((1 1, 5 5), (1 3, 3 1))",
            "MULTIPOLYGON(((1 1, 1 -1, -1 -1, -1 1, 1 1)),((1 1, 3 1, 3 3, 1 3, 1 1)))",
            "GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))",
        ] {
            assert_eq!(Geometry::from_wkt(text).unwrap(), parse_with_wkt_crate(text));
        }
    }

    #[test]
    fn check_wkt_crate_empty_point() {
        let mut items = wkt::Wkt::<f64>::from_str("POINT EMPTY").unwrap().items;
        assert!(matches!(
            Geometry::try_from(items.remove(0)),
            Err(GeometryError::Construction(_))
        ));
    }
}
