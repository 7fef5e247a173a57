//! Output types returned to API consumers

use silbe_core::AttributedString;

/// Rich output of one wrap invocation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output<A> {
    /// Rebuilt attributed string with per-run text replaced
    pub attributed: AttributedString<A>,
    /// All syllables across all runs, in processing order
    pub syllables: Vec<String>,
    /// Processing metadata
    pub metadata: Metadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of runs processed
    pub runs_processed: usize,
    /// Number of syllables emitted
    pub syllables_emitted: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}
