// Skill-gap analysis.
// Implements: catalog-driven gap detection, priority banding, JD match scoring.

pub mod catalog;
pub mod detector;
pub mod handlers;
