use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use geom2d::{BBox, LineString, Point, ToWkt};

//// Utility functions

/// A closed star-shaped ring with `n` spikes, wound counter-clockwise.
pub(crate) fn make_star(n: usize, inner: f64, outer: f64) -> LineString {
    let mut coords: Vec<Point> = (0..2 * n)
        .map(|i| {
            let angle = PI * i as f64 / n as f64;
            let radius = if i % 2 == 0 { outer } else { inner };
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    LineString::new(coords)
}

pub(crate) fn get_random_points(bbox: BBox, n: usize, seed: u64) -> Vec<Point> {
    let [x_min, y_min, x_max, y_max] = bbox.as_array().unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Point::new(
            rng.gen_range(x_min, x_max),
            rng.gen_range(y_min, y_max),
        ));
    }

    results
}

/// WKT texts of random-walk polygons, `n` vertices each.
pub(crate) fn get_random_polygon_wkts(count: usize, n: usize, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut coords: Vec<Point> = (0..n)
                .map(|i| {
                    let angle = 2. * PI * i as f64 / n as f64;
                    let radius = rng.gen_range(0.5, 1.);
                    Point::new(radius * angle.cos() * 90., radius * angle.sin() * 45.)
                })
                .collect();
            coords.push(coords[0]);
            geom2d::Polygon::new(vec![LineString::new(coords)]).wkt()
        })
        .collect()
}
