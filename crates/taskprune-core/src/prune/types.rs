use crate::arn::TaskDefinitionArn;

/// Newest revisions per family that are never deregistered.
pub const KEEP_LATEST_PER_FAMILY: usize = 5;

/// Upper bound on simultaneously outstanding deregistration calls.
pub const DEREGISTER_CONCURRENCY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    /// When false the run stops after reporting; nothing is deregistered.
    pub mark_inactive: bool,
    /// Any value above zero reports the full removal list.
    pub verbose: u8,
    pub keep_latest_per_family: usize,
    pub max_in_flight: usize,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            mark_inactive: false,
            verbose: 0,
            keep_latest_per_family: KEEP_LATEST_PER_FAMILY,
            max_in_flight: DEREGISTER_CONCURRENCY,
        }
    }
}

/// Outcome of a run that completed without error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub candidates: usize,
    pub active: usize,
    pub after_active_filter: usize,
    pub removal: Vec<TaskDefinitionArn>,
    pub deregistered: usize,
    pub dry_run: bool,
}

/// Progress emitted by [`crate::prune::run_prune`], in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneProgress<'a> {
    Considering { candidates: usize },
    InUse { active: &'a [TaskDefinitionArn] },
    AfterActiveFilter { remaining: usize },
    RetentionPolicy { keep: usize },
    AfterRetention { remaining: usize },
    /// Only emitted in verbose mode.
    RemovalList { arns: &'a [TaskDefinitionArn] },
    DryRun { count: usize },
    MarkingInactive { count: usize },
    Deregistered { arn: &'a TaskDefinitionArn },
}

/// Receives progress from a prune run. Calls are sequential.
pub trait PruneReporter {
    fn report(&mut self, progress: PruneProgress<'_>);
}

impl<F> PruneReporter for F
where
    F: FnMut(PruneProgress<'_>),
{
    fn report(&mut self, progress: PruneProgress<'_>) {
        self(progress)
    }
}
