mod point_in_polygon;
mod simplify;

pub use point_in_polygon::point_in_polygon;
pub use simplify::simplify;
