//! jigmatch: edge-matching engine for scanned jigsaw puzzle pieces.
//!
//! Takes pieces described by a closed contour, 4 corner positions, and 4
//! edge-type labels (tab/blank/flat), and ranks every geometrically
//! plausible edge pairing across the whole population for a downstream
//! assembly solver.
//!
//! # Example
//!
//! ```no_run
//! use jigmatch::{find_matches, MatchConfig, Piece};
//!
//! # fn pieces_from_upstream() -> Vec<Piece> { vec![] }
//! let pieces = pieces_from_upstream();
//! let report = find_matches(&pieces, &MatchConfig::default())?;
//! // report.matches is ranked best-first
//! # Ok::<(), jigmatch::MatchError>(())
//! ```

#![forbid(unsafe_code)]

pub mod compat;
pub mod distance;
pub mod extract;
pub mod normalize;
pub mod pair;

mod config;
mod error;
mod piece;

pub use compat::CompatibilityRules;
pub use config::MatchConfig;
pub use error::MatchError;
pub use normalize::CanonicalCurve;
pub use piece::{EdgeName, EdgeType, Piece, PieceRecord, PreparedEdge, PreparedPiece};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One scored candidate pairing of two piece edges.
///
/// Produced fresh each run, never mutated afterwards; only filtered,
/// ranked, and serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub piece1_id: String,
    pub piece2_id: String,
    pub piece1_edge: EdgeName,
    pub piece2_edge: EdgeName,
    /// Symmetric Hausdorff distance between the canonical curves. 0 is an
    /// exact geometric match.
    pub distance: f64,
    /// `1 - distance/threshold`, clamped to [0, 1]. Ranks best-first.
    pub confidence: f64,
}

/// What a run attempted and what it skipped, so callers can tell a clean
/// run with few matches from a run degraded by bad input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub pieces_total: usize,
    pub pieces_excluded: usize,
    pub pairs_evaluated: usize,
    pub matches_found: usize,
    pub warnings: Vec<String>,
}

/// The ranked match list plus the run summary.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// All matches, sorted by descending confidence. Ties keep the order
    /// their generating pairs were produced in, so output is deterministic.
    pub matches: Vec<Match>,
    pub summary: RunSummary,
}

/// Full pipeline: piece collection → ranked match list.
///
/// Preprocessing (edge extraction + canonicalization) runs once per piece
/// up front; a piece that cannot be split into edges is excluded with a
/// warning rather than failing the run. Every unordered piece pair is then
/// evaluated on a worker pool. Pair tasks read only immutable prepared
/// data, so they run in parallel without locks, and any single pair's
/// failure degrades to "no match for this pair".
pub fn find_matches(pieces: &[Piece], config: &MatchConfig) -> Result<MatchReport, MatchError> {
    let t_start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // ── Prepare ───────────────────────────────────────────
    let mut prepared: Vec<PreparedPiece> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match PreparedPiece::prepare(piece, config.sample_points) {
            Ok(p) => {
                for edge in &p.edges {
                    if edge.canonical.is_none() {
                        warnings.push(format!(
                            "piece {}: {} edge is degenerate, skipped",
                            p.id, edge.name
                        ));
                    }
                }
                prepared.push(p);
            }
            Err(err) => warnings.push(format!("piece {} excluded: {}", piece.id, err)),
        }
    }
    let excluded = pieces.len() - prepared.len();
    for warning in &warnings {
        eprintln!("  Warn        {}", warning);
    }
    eprintln!("  Prepare     {} pieces ({} excluded)", prepared.len(), excluded);

    // ── Pair evaluation ───────────────────────────────────
    let pairs: Vec<(usize, usize)> = (0..prepared.len())
        .flat_map(|i| (i + 1..prepared.len()).map(move |j| (i, j)))
        .collect();
    eprintln!(
        "  Pairs       {} combinations over {} pieces",
        pairs.len(),
        prepared.len()
    );

    // num_threads(0) lets rayon size the pool from the CPU count.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let per_pair: Vec<Vec<Match>> = pool.install(|| {
        pairs
            .par_iter()
            .map(|&(i, j)| pair::match_pair(&prepared[i], &prepared[j], config))
            .collect()
    });

    // ── Rank ──────────────────────────────────────────────
    // The parallel collect preserves pair order, and sort_by is stable, so
    // equal confidences keep their generation order.
    let mut matches: Vec<Match> = per_pair.into_iter().flatten().collect();
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let summary = RunSummary {
        pieces_total: pieces.len(),
        pieces_excluded: excluded,
        pairs_evaluated: pairs.len(),
        matches_found: matches.len(),
        warnings,
    };
    eprintln!(
        "  Matches     {} above threshold {:.3}  ({}ms)",
        matches.len(),
        config.distance_threshold,
        t_start.elapsed().as_millis()
    );

    Ok(MatchReport { matches, summary })
}
