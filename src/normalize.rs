//! Canonical edge curves: fixed sample count, centered, unit-scaled.

use kurbo::{Point, Vec2};

use crate::error::MatchError;

/// Radii below this are not rescaled (the curve is effectively a point).
const MIN_SCALE_RADIUS: f64 = 1e-6;

/// Arc lengths below this count as zero (coincident points only).
const MIN_ARC_LENGTH: f64 = 1e-9;

/// An edge curve in canonical form: exactly `N` points sampled evenly by
/// arc length, centroid at the origin, farthest point at distance 1.
///
/// Canonical curves from any two edges share a point count, so they can be
/// compared point set against point set regardless of source resolution.
/// The form is invariant to position and scale but deliberately not to
/// rotation, mirroring, or traversal direction; the comparator handles
/// those.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalCurve {
    points: Vec<Point>,
}

impl CanonicalCurve {
    /// Resample, center, and scale one raw edge arc.
    ///
    /// Degenerate arcs (fewer than 2 points, or all points coincident) are
    /// reported as errors for the caller to skip, never panics.
    pub fn from_arc(arc: &[Point], samples: usize) -> Result<Self, MatchError> {
        debug_assert!(samples >= 2, "canonical curves need at least 2 samples");
        if arc.len() < 2 {
            return Err(MatchError::DegenerateEdge("fewer than 2 points"));
        }

        // Cumulative arc length at each input point.
        let mut cumulative = Vec::with_capacity(arc.len());
        cumulative.push(0.0);
        let mut total = 0.0;
        for pair in arc.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }
        if total < MIN_ARC_LENGTH {
            return Err(MatchError::DegenerateEdge("zero arc length"));
        }

        // Linear interpolation at evenly spaced arc-length stations.
        let mut points = Vec::with_capacity(samples);
        let mut segment = 0;
        for i in 0..samples {
            let station = total * i as f64 / (samples - 1) as f64;
            while segment + 2 < cumulative.len() && cumulative[segment + 1] < station {
                segment += 1;
            }
            let seg_len = cumulative[segment + 1] - cumulative[segment];
            let t = if seg_len > 0.0 {
                ((station - cumulative[segment]) / seg_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            points.push(arc[segment].lerp(arc[segment + 1], t));
        }

        // Center on the centroid.
        let centroid: Vec2 =
            points.iter().fold(Vec2::ZERO, |sum, p| sum + p.to_vec2()) / samples as f64;
        for p in &mut points {
            *p -= centroid;
        }

        // Unit scale by the farthest radius. Near-point curves stay
        // centered but unscaled instead of dividing by almost zero.
        let max_radius = points
            .iter()
            .map(|p| p.to_vec2().hypot())
            .fold(0.0, f64::max);
        if max_radius > MIN_SCALE_RADIUS {
            for p in &mut points {
                *p = (p.to_vec2() / max_radius).to_point();
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn fixed_count_centered_unit_scaled() {
        let arc = polyline(&[(0.0, 0.0), (40.0, 0.0), (40.0, 30.0)]);
        let curve = CanonicalCurve::from_arc(&arc, 100).unwrap();
        assert_eq!(curve.points().len(), 100);

        let centroid = curve
            .points()
            .iter()
            .fold(Vec2::ZERO, |sum, p| sum + p.to_vec2())
            / 100.0;
        assert!(centroid.hypot() < 1e-9, "centroid should be the origin");

        let max_radius = curve
            .points()
            .iter()
            .map(|p| p.to_vec2().hypot())
            .fold(0.0, f64::max);
        assert!((max_radius - 1.0).abs() < 1e-9, "max radius should be 1");
    }

    #[test]
    fn idempotent_up_to_tolerance() {
        // Resampling a polyline cuts its corners slightly, so the second
        // pass shifts points a little; it must stay well under a percent
        // of the unit scale.
        let arc = polyline(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, -5.0)]);
        let once = CanonicalCurve::from_arc(&arc, 100).unwrap();
        let twice = CanonicalCurve::from_arc(once.points(), 100).unwrap();
        for (a, b) in once.points().iter().zip(twice.points()) {
            assert!(
                a.distance(*b) < 1e-2,
                "renormalizing moved a point by {}",
                a.distance(*b)
            );
        }
    }

    #[test]
    fn single_point_arc_is_degenerate() {
        let arc = polyline(&[(3.0, 4.0)]);
        assert!(matches!(
            CanonicalCurve::from_arc(&arc, 100),
            Err(MatchError::DegenerateEdge(_))
        ));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let arc = polyline(&[(3.0, 4.0), (3.0, 4.0), (3.0, 4.0)]);
        assert!(matches!(
            CanonicalCurve::from_arc(&arc, 100),
            Err(MatchError::DegenerateEdge(_))
        ));
    }

    #[test]
    fn resampling_is_invariant_to_input_density() {
        // Same straight segment described with 2 and with 11 points.
        let sparse = polyline(&[(0.0, 0.0), (100.0, 0.0)]);
        let dense: Vec<Point> = (0..=10).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
        let a = CanonicalCurve::from_arc(&sparse, 50).unwrap();
        let b = CanonicalCurve::from_arc(&dense, 50).unwrap();
        for (p, q) in a.points().iter().zip(b.points()) {
            assert!(p.distance(*q) < 1e-9);
        }
    }
}
