use super::types::Point;

/// Convex hull in counter-clockwise order (monotone chain).
///
/// Points closer than `1e-12` count as one; points lying on a hull edge are
/// not kept. `None` when fewer than three hull vertices remain.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if sorted.len() < 3 {
        return None;
    }
    let mut hull = chain(sorted.iter());
    hull.extend(chain(sorted.iter().rev()));
    (hull.len() >= 3).then_some(hull)
}

/// One side of the hull; the closing point is left to the other side.
fn chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut side: Vec<Point> = Vec::new();
    for p in points {
        while let [.., a, b] = side[..] {
            if cross(&a, &b, p) > 0.0 {
                break;
            }
            side.pop();
        }
        side.push(*p);
    }
    side.pop();
    side
}

/// Vertex centroid (mean of the points).
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point::from(sum / points.len() as f64))
}

#[inline]
fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
