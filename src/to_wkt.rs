use crate::config::Config;

/// Text serialization shared by every geometry variant.
pub trait ToWkt {
    /// The uppercase WKT type keyword.
    fn keyword(&self) -> &'static str;

    /// Write the parenthesized coordinate text that follows the keyword.
    fn write_wkt_body(&self, out: &mut String, digits: Option<i32>);

    fn write_wkt(&self, out: &mut String, digits: Option<i32>) {
        out.push_str(self.keyword());
        self.write_wkt_body(out, digits);
    }

    /// WKT at full precision.
    fn wkt(&self) -> String {
        self.wkt_with(&Config::default(), None)
    }

    fn wkt_digits(&self, digits: i32) -> String {
        self.wkt_with(&Config::default(), Some(digits))
    }

    /// WKT rounded to `digits`, falling back to the configured precision.
    fn wkt_with(&self, config: &Config, digits: Option<i32>) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out, config.resolve(digits));
        out
    }
}

/// Marker for an empty geometry, or an empty element nested in one.
pub(crate) const EMPTY: &str = "EMPTY";

macro_rules! display_as_wkt {
    ($($kind:ty),*) => {
        $(
            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.wkt())
                }
            }
        )*
    };
}

// A bare Point displays as its coordinates, see `point.rs`.
display_as_wkt!(
    crate::Geometry,
    crate::LineString,
    crate::Polygon,
    crate::MultiPoint,
    crate::MultiLineString,
    crate::MultiPolygon,
    crate::GeometryCollection
);
