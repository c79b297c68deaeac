use crate::errors::GeometryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A GeoJSON position, `[x, y]` or `[x, y, z]`.
pub type Position = Vec<f64>;

/// The structural GeoJSON form of a geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPoint { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<GeoJson> },
}

impl GeoJson {
    pub fn type_name(&self) -> &'static str {
        match self {
            GeoJson::Point { .. } => "Point",
            GeoJson::LineString { .. } => "LineString",
            GeoJson::Polygon { .. } => "Polygon",
            GeoJson::MultiPoint { .. } => "MultiPoint",
            GeoJson::MultiLineString { .. } => "MultiLineString",
            GeoJson::MultiPolygon { .. } => "MultiPolygon",
            GeoJson::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    pub fn from_value(value: Value) -> Result<Self, GeometryError> {
        serde_json::from_value(value).map_err(|e| GeometryError::construction(e.to_string()))
    }

    pub fn to_value(&self) -> Result<Value, GeometryError> {
        serde_json::to_value(self).map_err(|e| GeometryError::construction(e.to_string()))
    }
}

impl FromStr for GeoJson {
    type Err = GeometryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(text).map_err(|e| GeometryError::construction(e.to_string()))
    }
}

impl fmt::Display for GeoJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
