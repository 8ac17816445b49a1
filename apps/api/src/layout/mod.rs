// Layout Rule Set: the declarative per-template table, its resolution against
// a document, shared field formatting, and the font metrics used to measure
// text on fixed-size pages.

pub mod font_metrics;
pub mod format;
pub mod plan;
pub mod rules;

// Re-export the public API consumed by the renderers.
pub use plan::{LayoutPlan, PlannedBlock};
pub use rules::{Emphasis, SectionKind, SectionRule};
#[cfg(test)]
pub use rules::rules_for;
