mod bbox;
mod from_wkt;
mod geometry;
mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod to_wkt;
mod utils;

pub mod algorithms;
pub mod config;
pub mod draw;
pub mod errors;
pub mod geojson;
pub mod transform;
pub mod wkt2geojson;

pub use bbox::{BBox, HasBBox};
pub use config::Config;
pub use errors::GeometryError;
pub use geojson::GeoJson;
pub use geometry::Geometry;
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{Point, SegmentIntersection};
pub use polygon::{Areal, Polygon};
pub use to_wkt::ToWkt;
pub use transform::{MapPoints, Reproject};
