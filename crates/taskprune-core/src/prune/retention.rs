use std::collections::HashMap;

use tracing::debug;

use crate::arn::TaskDefinitionArn;
use crate::prune::errors::PruneError;

/// Drop the last `keep` candidates of every family.
///
/// Candidates are grouped by family in order of first appearance and keep
/// their relative order inside a group, so "last" means "newest" only if the
/// input is ascending per family. Any malformed identifier fails the whole
/// call.
pub fn apply_retention(
    candidates: &[TaskDefinitionArn],
    keep: usize,
) -> Result<Vec<TaskDefinitionArn>, PruneError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut families: Vec<Vec<&TaskDefinitionArn>> = Vec::new();

    for arn in candidates {
        let family = arn.family()?;
        let slot = *index.entry(family).or_insert_with(|| {
            families.push(Vec::new());
            families.len() - 1
        });
        families[slot].push(arn);
    }

    debug!(
        event = "core.prune.retention_grouped",
        families = families.len(),
        keep = keep
    );

    Ok(families
        .into_iter()
        .flat_map(|members| {
            let removable = members.len().saturating_sub(keep);
            members.into_iter().take(removable).cloned()
        })
        .collect())
}
