use crate::Point;

/// An external coordinate-reprojection service.
pub trait Reproject {
    fn reproject(&self, src: &str, dest: &str, x: f64, y: f64) -> (f64, f64);

    /// Reproject x and y, keeping the third ordinate as is.
    fn reproject_point(&self, src: &str, dest: &str, point: Point) -> Point {
        let (x, y) = self.reproject(src, dest, point.x, point.y);
        Point { x, y, z: point.z }
    }
}

impl<F> Reproject for F
where
    F: Fn(&str, &str, f64, f64) -> (f64, f64),
{
    fn reproject(&self, src: &str, dest: &str, x: f64, y: f64) -> (f64, f64) {
        self(src, dest, x, y)
    }
}

/// Rebuild a geometry with every point passed through `f`, keeping its shape.
pub trait MapPoints: Sized {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self;

    /// A copy with the third ordinate dropped from every point.
    fn proj_2d(&self) -> Self {
        self.map_points(&mut |p| p.proj_2d())
    }

    /// A copy expressed in coordinate system `dest`.
    fn chg_coord_sys<R: Reproject + ?Sized>(&self, reproject: &R, src: &str, dest: &str) -> Self {
        self.map_points(&mut |p| reproject.reproject_point(src, dest, *p))
    }
}

impl MapPoints for Point {
    fn map_points<F: FnMut(&Point) -> Point>(&self, f: &mut F) -> Self {
        f(self)
    }
}
