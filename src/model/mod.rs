pub mod domain;
pub mod profile;
pub mod record;

pub use domain::Domain;
pub use record::{Condition, InclusionExclusion, RawRecord, UnifiedRecord};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
