//! Splitting a closed contour into 4 edge arcs at its corners.

use kurbo::Point;

use crate::error::MatchError;

/// Partition a closed contour into 4 arcs bounded by the given corners.
///
/// Each corner is snapped to its nearest contour point, then the contour is
/// cut into contiguous arcs between consecutive corner indices (cyclic,
/// following corner order). Both bounding points belong to each arc, so the
/// arcs laid end to end with shared boundary points walk the contour exactly
/// once around.
///
/// Two adjacent corners snapping to the same contour point produce a
/// length-1 arc. That arc is kept (callers flag it degenerate and skip it);
/// only a contour too short to cut, or all four corners collapsing onto one
/// point, is an extraction failure.
pub fn split_edges(
    id: &str,
    contour: &[Point],
    corners: &[Point; 4],
) -> Result<[Vec<Point>; 4], MatchError> {
    if contour.len() < 4 {
        return Err(MatchError::ContourTooShort {
            id: id.to_string(),
            len: contour.len(),
        });
    }

    let indices: [usize; 4] = std::array::from_fn(|i| nearest_index(corners[i], contour));

    let first = indices[0];
    if indices.iter().all(|&idx| idx == first) {
        return Err(MatchError::CornersCollapsed { id: id.to_string() });
    }

    Ok(std::array::from_fn(|i| {
        arc_between(contour, indices[i], indices[(i + 1) % 4])
    }))
}

/// Index of the contour point closest to `point` (first index on ties).
fn nearest_index(point: Point, contour: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &candidate) in contour.iter().enumerate() {
        let dist = point.distance_squared(candidate);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Contour slice from `start` to `end` inclusive, wrapping past the end of
/// the point list when `end` is numerically behind `start`.
fn arc_between(contour: &[Point], start: usize, end: usize) -> Vec<Point> {
    if end == start {
        vec![contour[start]]
    } else if end > start {
        contour[start..=end].to_vec()
    } else {
        let mut arc = contour[start..].to_vec();
        arc.extend_from_slice(&contour[..=end]);
        arc
    }
}
