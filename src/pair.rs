//! Scoring all edge combinations of one piece pair.

use crate::config::MatchConfig;
use crate::distance::edge_distance;
use crate::piece::PreparedPiece;
use crate::Match;

/// Evaluate all 4x4 ordered edge combinations of two pieces.
///
/// Incompatible type pairs and degenerate edges are skipped; the rest are
/// scored and kept when the distance beats the threshold. Pure: same pieces
/// and config always give the same list, which is what makes pair tasks
/// safe to farm out to any number of workers.
pub fn match_pair(
    piece1: &PreparedPiece,
    piece2: &PreparedPiece,
    config: &MatchConfig,
) -> Vec<Match> {
    let mut matches = Vec::new();

    for edge1 in &piece1.edges {
        for edge2 in &piece2.edges {
            if !config.rules.is_compatible(edge1.kind, edge2.kind) {
                continue;
            }
            let (Some(curve1), Some(curve2)) = (&edge1.canonical, &edge2.canonical) else {
                continue;
            };
            let Some(distance) = edge_distance(curve1, curve2, edge1.kind, edge2.kind) else {
                continue;
            };
            if distance < config.distance_threshold {
                let confidence = (1.0 - distance / config.distance_threshold).clamp(0.0, 1.0);
                matches.push(Match {
                    piece1_id: piece1.id.clone(),
                    piece2_id: piece2.id.clone(),
                    piece1_edge: edge1.name,
                    piece2_edge: edge2.name,
                    distance,
                    confidence,
                });
            }
        }
    }

    matches
}
