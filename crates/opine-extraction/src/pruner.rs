//! Prune superseded ancestors, stopword patterns, and irrelevant patterns.
//!
//! Operates on the accumulated combined list only. Every mark is computed
//! against the deduplicated pre-removal set and applied in one batch.

use opine_core::types::collections::FxHashSet;

use crate::lineage::{LineageGraph, PatternId};
use crate::pattern::Pattern;
use crate::vocabulary::Vocabulary;

/// Per-reason counts of marked patterns. A pattern may count under several reasons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Distinct patterns in the working set after deduplication.
    pub working_set: usize,
    /// Ancestors superseded by a descendant.
    pub redundant: usize,
    /// Patterns with a stopword on either side.
    pub stopword: usize,
    /// Patterns with no feature word on either side.
    pub irrelevant: usize,
}

/// Result of a pruning pass.
#[derive(Debug, Clone, Default)]
pub struct PruneOutcome {
    /// Surviving nodes, one per distinct pattern, in first-occurrence order.
    pub survivors: Vec<PatternId>,
    pub stats: PruneStats,
}

/// Vocabulary-aware pruner.
pub struct Pruner<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Pruner<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn prune(&self, lineage: &LineageGraph, combined: &[PatternId]) -> PruneOutcome {
        let working = dedup_first(lineage, combined);
        let present: FxHashSet<&Pattern> = working.iter().map(|&id| lineage.pattern(id)).collect();

        let mut redundant: FxHashSet<&Pattern> = FxHashSet::default();
        let mut stopword: FxHashSet<&Pattern> = FxHashSet::default();
        let mut irrelevant: FxHashSet<&Pattern> = FxHashSet::default();

        for &id in &working {
            let pattern = lineage.pattern(id);

            if let (Some(mother), Some(father)) = (lineage.mother(id), lineage.father(id)) {
                let mother_pattern = lineage.pattern(mother);
                let father_pattern = lineage.pattern(father);
                if present.contains(mother_pattern)
                    && !mother_pattern.relation.is_conjunctive()
                    && !father_pattern.relation.is_conjunctive()
                {
                    redundant.insert(mother_pattern);
                    redundant.insert(father_pattern);
                }
            }

            if self.vocabulary.is_stopword(&pattern.head)
                || self.vocabulary.is_stopword(&pattern.modifier)
            {
                stopword.insert(pattern);
            }

            if !self.vocabulary.is_feature(&pattern.head)
                && !self.vocabulary.is_feature(&pattern.modifier)
            {
                irrelevant.insert(pattern);
            }
        }

        let stats = PruneStats {
            working_set: working.len(),
            // A father may equal a combined pattern by value; only marks present
            // in the working set count.
            redundant: redundant.iter().filter(|p| present.contains(*p)).count(),
            stopword: stopword.len(),
            irrelevant: irrelevant.len(),
        };

        let survivors = working
            .into_iter()
            .filter(|&id| {
                let pattern = lineage.pattern(id);
                !redundant.contains(pattern)
                    && !stopword.contains(pattern)
                    && !irrelevant.contains(pattern)
            })
            .collect();

        PruneOutcome { survivors, stats }
    }
}

/// Keep the first node carrying each distinct pattern.
fn dedup_first(lineage: &LineageGraph, ids: &[PatternId]) -> Vec<PatternId> {
    let mut seen: FxHashSet<&Pattern> = FxHashSet::default();
    ids.iter()
        .copied()
        .filter(|&id| seen.insert(lineage.pattern(id)))
        .collect()
}
