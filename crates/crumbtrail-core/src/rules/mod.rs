pub mod invariants;

pub use invariants::{check_taxonomy, has_containment_cycle, Violation};
