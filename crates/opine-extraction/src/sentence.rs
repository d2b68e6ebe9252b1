//! Per-sentence driver: extraction → combination rounds → pruning.

use opine_core::models::DependencyTriple;
use tracing::debug;

use crate::builder::PatternBuilder;
use crate::combiner::Combiner;
use crate::lineage::LineageGraph;
use crate::pattern_set::PatternSet;
use crate::pruner::{PruneStats, Pruner};
use crate::vocabulary::Vocabulary;

/// Surviving patterns of one sentence plus extraction counts.
#[derive(Debug, Clone, Default)]
pub struct SentenceOutcome {
    pub patterns: PatternSet,
    pub primary_count: usize,
    /// Length of the accumulated combined list, duplicates included.
    pub combined_count: usize,
    pub prune: PruneStats,
}

/// Runs the extraction core over one sentence at a time. Pure: no oracle access.
pub struct SentenceProcessor<'a> {
    pruner: Pruner<'a>,
}

impl<'a> SentenceProcessor<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            pruner: Pruner::new(vocabulary),
        }
    }

    pub fn process(&self, triples: &[DependencyTriple]) -> SentenceOutcome {
        let mut lineage = LineageGraph::new();

        let primaries = PatternBuilder::extract_primary(triples, &mut lineage);
        let rounds = Combiner::run_rounds(&mut lineage, &primaries);
        let combined = rounds.accumulated();
        let pruned = self.pruner.prune(&lineage, &combined);

        let patterns: PatternSet = pruned
            .survivors
            .iter()
            .map(|&id| lineage.pattern(id).clone())
            .collect();

        debug!(
            triples = triples.len(),
            primary_count = primaries.len(),
            combined_count = combined.len(),
            survivor_count = patterns.len(),
            "sentence processed"
        );

        SentenceOutcome {
            patterns,
            primary_count: primaries.len(),
            combined_count: combined.len(),
            prune: pruned.stats,
        }
    }
}
