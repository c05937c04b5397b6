//! Stale task definition selection and deregistration.

pub mod active;
pub mod candidates;
pub mod errors;
pub mod handler;
pub mod retention;
pub mod types;

#[cfg(test)]
pub(crate) mod fakes;

pub use active::compute_active_set;
pub use candidates::list_candidates;
pub use errors::PruneError;
pub use handler::run_prune;
pub use retention::apply_retention;
pub use types::{
    DEREGISTER_CONCURRENCY, KEEP_LATEST_PER_FAMILY, PruneOptions, PruneProgress, PruneReporter,
    PruneSummary,
};
