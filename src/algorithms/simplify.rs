use crate::Point;

/// Douglas-Peucker simplification of a polyline.
///
/// Open lines are split at the point farthest from the chord joining their
/// ends. Closed lines (first point equal to last) are split at the point
/// farthest from the first point, and vanish entirely (`None`) when every
/// point is within `threshold` of it.
///
/// NB: The closed branch deviates from the textbook algorithm, which would
/// measure against a chord and never drop the whole ring.
pub fn simplify(coords: &[Point], threshold: f64) -> Option<Vec<Point>> {
    if coords.len() < 3 {
        return Some(coords.to_vec());
    }
    let first = coords[0];
    let last = coords[coords.len() - 1];
    let closed = first == last;

    let mut dist_max = 0.;
    let mut farthest = None;
    for (index, point) in coords.iter().enumerate().take(coords.len() - 1).skip(1) {
        let dist = if closed {
            point.distance(first)
        } else {
            chord_distance(point, first, last)
        };
        if dist > dist_max {
            dist_max = dist;
            farthest = Some(index);
        }
    }

    let farthest = match farthest {
        Some(index) if dist_max >= threshold => index,
        _ if closed => {
            log::debug!(
                "closed line of {} points collapses under threshold {}",
                coords.len(),
                threshold
            );
            return None;
        }
        _ => return Some(vec![first, last]),
    };

    let mut simplified = simplify(&coords[..=farthest], threshold)?;
    let tail = simplify(&coords[farthest..], threshold)?;
    simplified.extend_from_slice(&tail[1..]);
    Some(simplified)
}

fn chord_distance(point: &Point, first: Point, last: Point) -> f64 {
    match point.distance_point_line(first, last) {
        Ok(dist) => dist.abs(),
        // The ends differ only in z.
        Err(_) => point.distance(first),
    }
}
