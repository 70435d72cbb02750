//! Search tuning parameters.

/// Parameters bounding the route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs in any candidate route. The per-query
    /// networks are small, so four legs already covers every sensible
    /// transfer pattern.
    pub max_segments: usize,

    /// Hours added to accumulated travel time at each mode change,
    /// covering transshipment and handling.
    pub mode_change_hours: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_segments: 4,
            mode_change_hours: 2.0,
        }
    }
}
