use crate::bbox::{BBox, HasBBox};
use crate::draw::{Draw, Drawing, Style};
use crate::errors::GeometryError;
use crate::geojson::GeoJson;
use crate::to_wkt::ToWkt;
use crate::transform::MapPoints;
use crate::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use serde_json::Value;

/// Any of the seven geometry kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! geometry_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(geometry: $variant) -> Self {
                    Geometry::$variant(geometry)
                }
            }
        )*
    };
}

geometry_from!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

impl Geometry {
    /// The GeoJSON type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    pub fn from_geojson(geojson: &GeoJson) -> Result<Self, GeometryError> {
        Ok(match geojson {
            GeoJson::Point { coordinates } => Point::from_coordinates(coordinates)?.into(),
            GeoJson::LineString { coordinates } => {
                LineString::from_coordinates(coordinates)?.into()
            }
            GeoJson::Polygon { coordinates } => Polygon::from_coordinates(coordinates)?.into(),
            GeoJson::MultiPoint { coordinates } => {
                MultiPoint::from_coordinates(coordinates)?.into()
            }
            GeoJson::MultiLineString { coordinates } => {
                MultiLineString::from_coordinates(coordinates)?.into()
            }
            GeoJson::MultiPolygon { coordinates } => {
                MultiPolygon::from_coordinates(coordinates)?.into()
            }
            GeoJson::GeometryCollection { geometries } => GeometryCollection::new(
                geometries
                    .iter()
                    .map(Geometry::from_geojson)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
        })
    }

    /// Build from a decoded JSON object such as `{"type": "Point", "coordinates": [1, 2]}`.
    pub fn from_geojson_value(value: Value) -> Result<Self, GeometryError> {
        Geometry::from_geojson(&GeoJson::from_value(value)?)
    }

    pub fn geojson(&self) -> GeoJson {
        match self {
            Geometry::Point(g) => GeoJson::Point {
                coordinates: g.coordinates(),
            },
            Geometry::LineString(g) => GeoJson::LineString {
                coordinates: g.coordinates(),
            },
            Geometry::Polygon(g) => GeoJson::Polygon {
                coordinates: g.coordinates(),
            },
            Geometry::MultiPoint(g) => GeoJson::MultiPoint {
                coordinates: g.coordinates(),
            },
            Geometry::MultiLineString(g) => GeoJson::MultiLineString {
                coordinates: g.coordinates(),
            },
            Geometry::MultiPolygon(g) => GeoJson::MultiPolygon {
                coordinates: g.coordinates(),
            },
            Geometry::GeometryCollection(g) => GeoJson::GeometryCollection {
                geometries: g.geometries().iter().map(Geometry::geojson).collect(),
            },
        }
    }

    /// Round to `digits` and drop repeated points, element by element.
    pub fn filter(&self, digits: i32) -> Geometry {
        match self {
            Geometry::Point(g) => g.round(digits).into(),
            Geometry::LineString(g) => g.filter(digits).into(),
            Geometry::Polygon(g) => g.filter(digits).into(),
            Geometry::MultiPoint(g) => g.filter(digits).into(),
            Geometry::MultiLineString(g) => g.filter(digits).into(),
            Geometry::MultiPolygon(g) => g.filter(digits).into(),
            Geometry::GeometryCollection(g) => g.filter(digits).into(),
        }
    }
}

impl HasBBox for Geometry {
    fn bbox(&self) -> BBox {
        match self {
            Geometry::Point(g) => g.bbox(),
            Geometry::LineString(g) => g.bbox(),
            Geometry::Polygon(g) => g.bbox(),
            Geometry::MultiPoint(g) => g.bbox(),
            Geometry::MultiLineString(g) => g.bbox(),
            Geometry::MultiPolygon(g) => g.bbox(),
            Geometry::GeometryCollection(g) => g.bbox(),
        }
    }
}

impl ToWkt for Geometry {
    fn keyword(&self) -> &'static str {
        match self {
            Geometry::Point(g) => g.keyword(),
            Geometry::LineString(g) => g.keyword(),
            Geometry::Polygon(g) => g.keyword(),
            Geometry::MultiPoint(g) => g.keyword(),
            Geometry::MultiLineString(g) => g.keyword(),
            Geometry::MultiPolygon(g) => g.keyword(),
            Geometry::GeometryCollection(g) => g.keyword(),
        }
    }

    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>) {
        match self {
            Geometry::Point(g) => g.write_wkt_body(out, digits),
            Geometry::LineString(g) => g.write_wkt_body(out, digits),
            Geometry::Polygon(g) => g.write_wkt_body(out, digits),
            Geometry::MultiPoint(g) => g.write_wkt_body(out, digits),
            Geometry::MultiLineString(g) => g.write_wkt_body(out, digits),
            Geometry::MultiPolygon(g) => g.write_wkt_body(out, digits),
            Geometry::GeometryCollection(g) => g.write_wkt_body(out, digits),
        }
    }
}

impl MapPoints for Geometry {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        match self {
            Geometry::Point(g) => g.map_points(f).into(),
            Geometry::LineString(g) => g.map_points(f).into(),
            Geometry::Polygon(g) => g.map_points(f).into(),
            Geometry::MultiPoint(g) => g.map_points(f).into(),
            Geometry::MultiLineString(g) => g.map_points(f).into(),
            Geometry::MultiPolygon(g) => g.map_points(f).into(),
            Geometry::GeometryCollection(g) => g.map_points(f).into(),
        }
    }
}

impl Draw for Geometry {
    fn draw<D: Drawing + ?Sized>(&self, drawing: &mut D, style: &Style) {
        match self {
            Geometry::Point(g) => g.draw(drawing, style),
            Geometry::LineString(g) => g.draw(drawing, style),
            Geometry::Polygon(g) => g.draw(drawing, style),
            Geometry::MultiPoint(g) => g.draw(drawing, style),
            Geometry::MultiLineString(g) => g.draw(drawing, style),
            Geometry::MultiPolygon(g) => g.draw(drawing, style),
            Geometry::GeometryCollection(g) => g.draw(drawing, style),
        }
    }
}
