//! Flip- and reversal-aware Hausdorff distance between canonical curves.

use kurbo::Point;

use crate::normalize::CanonicalCurve;
use crate::piece::EdgeType;

/// Directed Hausdorff distance: the worst nearest-neighbor distance from a
/// point of `a` to the point set `b`.
pub fn directed_hausdorff(a: &[Point], b: &[Point]) -> f64 {
    a.iter()
        .map(|&p| {
            b.iter()
                .map(|&q| p.distance_squared(q))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
        .sqrt()
}

/// Symmetric Hausdorff distance: max of the two directed distances.
pub fn hausdorff(a: &[Point], b: &[Point]) -> f64 {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

/// Distance between two canonical edge curves, accounting for the mating
/// transform and unknown traversal direction.
///
/// A tab and its mating blank are mirror-complementary, so for a tab/blank
/// pair the second curve is mirrored in x before comparison. The symmetric
/// Hausdorff distance is then taken both with the second curve as-is and
/// with its point order reversed, keeping the smaller value, since upstream
/// extraction does not guarantee consistent winding between pieces.
///
/// Returns `None` for empty curves (degenerate input, skip the pair).
pub fn edge_distance(
    curve1: &CanonicalCurve,
    curve2: &CanonicalCurve,
    type1: EdgeType,
    type2: EdgeType,
) -> Option<f64> {
    let a = curve1.points();
    if a.is_empty() || curve2.points().is_empty() {
        return None;
    }

    let mates = matches!(
        (type1, type2),
        (EdgeType::Tab, EdgeType::Blank) | (EdgeType::Blank, EdgeType::Tab)
    );
    let b: Vec<Point> = if mates {
        curve2.points().iter().map(|p| mirror_x(*p)).collect()
    } else {
        curve2.points().to_vec()
    };

    let forward = hausdorff(a, &b);
    let reversed: Vec<Point> = b.iter().rev().copied().collect();
    let backward = hausdorff(a, &reversed);

    Some(forward.min(backward))
}

fn mirror_x(p: Point) -> Point {
    Point::new(-p.x, p.y)
}
