use crate::compat::CompatibilityRules;

/// All matching parameters in one struct.
/// Pure inputs: nothing here is mutated at runtime, so a run with the same
/// pieces and the same config always produces the same ranked list.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Maximum Hausdorff distance for a valid match. Matches at exactly this
    /// distance are dropped; confidence reaches 0 there. Lower = stricter.
    pub distance_threshold: f64,
    /// Number of points every edge is resampled to before comparison.
    /// All canonical curves share this count.
    pub sample_points: usize,
    /// Worker threads for the pair-evaluation phase. 0 = one per CPU core.
    pub workers: usize,
    /// Which edge-type pairs are worth comparing geometrically.
    pub rules: CompatibilityRules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 0.15,
            sample_points: 100,
            workers: 0,
            rules: CompatibilityRules::standard(),
        }
    }
}
