// Deterministic CV analysis engine.
// Implements: signal extraction, scoring, optimized-CV rendering, suggestion selection.
// Handlers reach the engine through the CvAnalyzer trait, never the internals directly.

pub mod advice;
pub mod engine;
pub mod handlers;
pub mod lexicon;
pub mod reformatter;
pub mod scoring;
pub mod signals;

/// CV text length bounds enforced by the JSON endpoints, in characters.
pub const MIN_CV_TEXT_CHARS: usize = 50;
pub const MAX_CV_TEXT_CHARS: usize = 50_000;
