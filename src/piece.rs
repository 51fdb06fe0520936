//! Piece data model: validated input records and prepared (cached) edges.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::extract;
use crate::normalize::CanonicalCurve;

/// Physical edge feature: a protrusion, an indentation, or a flat border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Tab,
    Blank,
    Flat,
}

/// The four edge positions, in the fixed cyclic order the contour is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeName {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeName {
    pub const ALL: [EdgeName; 4] = [
        EdgeName::Top,
        EdgeName::Right,
        EdgeName::Bottom,
        EdgeName::Left,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeName::Top => "top",
            EdgeName::Right => "right",
            EdgeName::Bottom => "bottom",
            EdgeName::Left => "left",
        }
    }
}

impl std::fmt::Display for EdgeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One puzzle piece as delivered by upstream detection.
///
/// The piece exclusively owns its contour and corners; edge curves are
/// derived views computed once during preparation and never mutated.
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: String,
    /// Closed contour, consistent winding. The last point connects back
    /// to the first implicitly.
    pub contour: Vec<Point>,
    /// Corner positions, one per edge boundary. Not necessarily contour
    /// members; each is snapped to its nearest contour point on extraction.
    pub corners: [Point; 4],
    /// Edge-type labels in the same cyclic order as [`EdgeName::ALL`].
    pub edge_types: [EdgeType; 4],
}

impl Piece {
    /// Validate and build a piece. Rejects contours with fewer than 4 points
    /// so malformed upstream data stops at the boundary instead of reaching
    /// the geometry pipeline.
    pub fn new(
        id: impl Into<String>,
        contour: Vec<Point>,
        corners: [Point; 4],
        edge_types: [EdgeType; 4],
    ) -> Result<Self, MatchError> {
        let id = id.into();
        if contour.len() < 4 {
            return Err(MatchError::ContourTooShort {
                id,
                len: contour.len(),
            });
        }
        Ok(Self {
            id,
            contour,
            corners,
            edge_types,
        })
    }
}

/// Wire-format piece record (what the CLI reads from JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: String,
    pub corners: Vec<(f64, f64)>,
    pub contour: Vec<(f64, f64)>,
    /// Edge-type labels in top/right/bottom/left order.
    pub edges: Vec<EdgeType>,
}

impl TryFrom<PieceRecord> for Piece {
    type Error = MatchError;

    fn try_from(record: PieceRecord) -> Result<Self, MatchError> {
        let corners: [Point; 4] = match record
            .corners
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect::<Vec<_>>()
            .try_into()
        {
            Ok(corners) => corners,
            Err(_) => {
                return Err(MatchError::InvalidPiece(format!(
                    "piece {}: expected 4 corners, got {}",
                    record.id,
                    record.corners.len()
                )))
            }
        };
        let edge_types: [EdgeType; 4] = match record.edges.as_slice().try_into() {
            Ok(types) => types,
            Err(_) => {
                return Err(MatchError::InvalidPiece(format!(
                    "piece {}: expected 4 edge labels, got {}",
                    record.id,
                    record.edges.len()
                )))
            }
        };
        let contour = record
            .contour
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        Piece::new(record.id, contour, corners, edge_types)
    }
}

/// One derived edge: a contiguous arc of the parent contour plus its
/// canonical form. `canonical` is `None` when the arc was degenerate
/// (fewer than 2 points or near-zero length); such edges are skipped by
/// matching rather than treated as fatal.
#[derive(Debug, Clone)]
pub struct PreparedEdge {
    pub name: EdgeName,
    pub kind: EdgeType,
    pub arc: Vec<Point>,
    pub canonical: Option<CanonicalCurve>,
}

/// A piece after preprocessing: the 4 edge arcs split out of the contour
/// and resampled into canonical curves, cached for the whole run.
#[derive(Debug, Clone)]
pub struct PreparedPiece {
    pub id: String,
    pub edges: [PreparedEdge; 4],
}

impl PreparedPiece {
    /// Split the contour at the corners and canonicalize each arc.
    ///
    /// Fails only when no edges can be extracted at all (contour too short,
    /// corners collapsed onto one contour point). Individual degenerate
    /// arcs survive as edges with `canonical: None`.
    pub fn prepare(piece: &Piece, sample_points: usize) -> Result<Self, MatchError> {
        let arcs = extract::split_edges(&piece.id, &piece.contour, &piece.corners)?;

        let edges = std::array::from_fn(|i| {
            let arc = arcs[i].clone();
            let canonical = CanonicalCurve::from_arc(&arc, sample_points).ok();
            PreparedEdge {
                name: EdgeName::ALL[i],
                kind: piece.edge_types[i],
                arc,
                canonical,
            }
        });

        Ok(Self {
            id: piece.id.clone(),
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour() -> Vec<Point> {
        let mut points = Vec::new();
        for i in 0..10 {
            points.push(Point::new(i as f64 * 10.0, 0.0));
        }
        for i in 0..10 {
            points.push(Point::new(100.0, i as f64 * 10.0));
        }
        for i in 0..10 {
            points.push(Point::new(100.0 - i as f64 * 10.0, 100.0));
        }
        for i in 0..10 {
            points.push(Point::new(0.0, 100.0 - i as f64 * 10.0));
        }
        points
    }

    #[test]
    fn rejects_short_contour() {
        let contour = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let corners = [Point::ZERO; 4];
        let result = Piece::new("p", contour, corners, [EdgeType::Flat; 4]);
        assert!(matches!(result, Err(MatchError::ContourTooShort { .. })));
    }

    #[test]
    fn record_rejects_wrong_corner_count() {
        let record = PieceRecord {
            id: "p".into(),
            corners: vec![(0.0, 0.0), (1.0, 0.0)],
            contour: vec![(0.0, 0.0); 8],
            edges: vec![EdgeType::Flat; 4],
        };
        assert!(matches!(
            Piece::try_from(record),
            Err(MatchError::InvalidPiece(_))
        ));
    }

    #[test]
    fn prepare_caches_four_canonical_edges() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let piece = Piece::new("p", square_contour(), corners, [EdgeType::Flat; 4]).unwrap();
        let prepared = PreparedPiece::prepare(&piece, 50).unwrap();
        assert_eq!(prepared.edges.len(), 4);
        for edge in &prepared.edges {
            let canonical = edge.canonical.as_ref().expect("edge should canonicalize");
            assert_eq!(canonical.points().len(), 50);
        }
    }
}
