use thiserror::Error;

/// Errors that can occur while preparing pieces or running a match.
///
/// Per-edge and per-pair problems never surface here during a run; they
/// degrade to a skipped combination plus a warning in the run summary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatchError {
    #[error("piece {id}: contour has {len} points, need at least 4")]
    ContourTooShort { id: String, len: usize },

    #[error("piece {id}: all corners map to a single contour point")]
    CornersCollapsed { id: String },

    #[error("degenerate edge: {0}")]
    DegenerateEdge(&'static str),

    #[error("invalid piece record: {0}")]
    InvalidPiece(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
