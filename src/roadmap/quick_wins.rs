//! @acp:module "Quick-Win Selector"
//! @acp:summary "Low-effort, unblocked, high-value recommendations"
//! @acp:domain roadmap
//! @acp:layer logic

use std::collections::HashSet;

use crate::config::QuickWinConfig;
use crate::model::{Dependency, Effort, Recommendation};

/// @acp:summary "Select quick wins"
///
/// Candidates are low effort, have no recorded dependency of their own,
/// and are either urgent (`critical`/`high`) or carry at least
/// `min_benefits` benefits. Sorted by priority (stable), truncated to
/// `limit`.
pub fn select_quick_wins(
    recs: &[Recommendation],
    dependencies: &[Dependency],
    config: &QuickWinConfig,
) -> Vec<Recommendation> {
    let blocked: HashSet<&str> = dependencies
        .iter()
        .filter(|d| !d.depends_on.is_empty())
        .map(|d| d.recommendation_id.as_str())
        .collect();

    let mut candidates: Vec<&Recommendation> = recs
        .iter()
        .filter(|rec| rec.effort == Effort::Low)
        .filter(|rec| !blocked.contains(rec.id.as_str()))
        .filter(|rec| rec.priority.is_urgent() || rec.benefits.len() >= config.min_benefits)
        .collect();

    candidates.sort_by_key(|rec| rec.priority.rank());
    candidates.truncate(config.limit);

    candidates.into_iter().cloned().collect()
}
