use crate::Point;

/// Even-odd (PNPOLY) test of `point` against the ring `coords`.
///
/// The ring does not need to be closed: the last point is joined back to
/// the first.
pub fn point_in_polygon(point: &Point, coords: &[Point]) -> bool {
    let mut inside = false;
    let mut j = match coords.len() {
        0 => return false,
        n => n - 1,
    };
    for (i, start) in coords.iter().enumerate() {
        let end = coords[j];
        let straddles =
            (start.y <= point.y && point.y < end.y) || (end.y <= point.y && point.y < start.y);
        if straddles
            && point.x - start.x < (end.x - start.x) * (point.y - start.y) / (end.y - start.y)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
