//! Multi-hop combination of patterns that share a token.
//!
//! A seed merges with the first pool member that shares exactly one token with
//! it (same word, same sentence position) and whose relation pair appears in
//! the combination table. The merged pattern links the two non-shared tokens:
//! the seed's becomes the head, the partner's the modifier.

use opine_core::constants::COMBINATION_ROUNDS;
use tracing::debug;

use crate::lineage::{Anchor, LineageGraph, PatternId};
use crate::pattern::Pattern;
use crate::taxonomy::RelationKind;

/// Directional combination table: (seed relation, partner relation) → result.
/// Pairs not listed never merge.
pub fn combination_result(seed: RelationKind, partner: RelationKind) -> Option<RelationKind> {
    use RelationKind::*;

    let result = match (seed, partner) {
        // "X is Y", "X looks Y"
        (Nsubj, Acomp) | (Nsubj, Xcomp) => Amod,
        // "X works Y", "X is charged Y"
        (Nsubj, Advmod) | (Nsubjpass, Advmod) => Advmod,
        // "X has Y"
        (Nsubj, Dobj) => Dobj,
        // "X is Y and Z" when the copula is not the head
        (Nsubj, ConjAnd) => Amod,
        // compound noun inherits its modifier
        (Nn, Amod) => Amod,
        // "has excellent Y"
        (Dobj, Amod) => Amod,
        // coordination propagates along the seed's relation
        (Dobj, ConjAnd) => Dobj,
        (Amod, ConjAnd) => Amod,
        (Acomp, ConjAnd) => Acomp,
        (Advmod, ConjAnd) => Advmod,
        (ConjAnd, ConjAnd) => ConjAnd,
        // coordinated aspect shares a modifier
        (ConjAnd, Amod) => Amod,
        _ => return None,
    };
    Some(result)
}

/// Output of the compounding rounds for one sentence.
#[derive(Debug, Clone, Default)]
pub struct CombinationRounds {
    /// Patterns produced by each round, in round order.
    pub rounds: Vec<Vec<PatternId>>,
}

impl CombinationRounds {
    /// All rounds appended into one list, duplicates included.
    pub fn accumulated(&self) -> Vec<PatternId> {
        self.rounds.iter().flatten().copied().collect()
    }

    /// Patterns produced by the 1-based `round`; empty past the last round.
    pub fn round(&self, round: usize) -> &[PatternId] {
        round
            .checked_sub(1)
            .and_then(|i| self.rounds.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Merges patterns into higher-order patterns while recording ancestry.
pub struct Combiner;

impl Combiner {
    /// Merge `seed` with the first qualifying member of `pool`.
    pub fn try_combine(
        lineage: &mut LineageGraph,
        seed: PatternId,
        pool: &[PatternId],
    ) -> Option<PatternId> {
        let (pattern, head_index, modifier_index, father) = pool
            .iter()
            .copied()
            .filter(|&candidate| candidate != seed)
            .find_map(|candidate| {
                Self::merge(lineage, seed, candidate)
                    .map(|(pattern, head, modifier)| (pattern, head, modifier, candidate))
            })?;

        Some(lineage.add_combined(pattern, head_index, modifier_index, seed, father))
    }

    /// Apply `try_combine` to every seed against `primaries`, keeping successes.
    pub fn extract_combined(
        lineage: &mut LineageGraph,
        seeds: &[PatternId],
        primaries: &[PatternId],
    ) -> Vec<PatternId> {
        seeds
            .iter()
            .filter_map(|&seed| Self::try_combine(lineage, seed, primaries))
            .collect()
    }

    /// Run the compounding rounds:
    /// round 1 = combine(primary, primary),
    /// round 2 = combine(round 1, primary),
    /// round 3 = combine(round 1 ∪ round 2, primary).
    pub fn run_rounds(lineage: &mut LineageGraph, primaries: &[PatternId]) -> CombinationRounds {
        let mut rounds = Vec::with_capacity(COMBINATION_ROUNDS);
        let mut accumulated: Vec<PatternId> = Vec::new();

        for round in 1..=COMBINATION_ROUNDS {
            let seeds: &[PatternId] = if round == 1 { primaries } else { &accumulated };
            let produced = Self::extract_combined(lineage, seeds, primaries);
            debug!(round, seeds = seeds.len(), produced = produced.len(), "combination round");
            accumulated.extend_from_slice(&produced);
            rounds.push(produced);
        }

        CombinationRounds { rounds }
    }

    /// The merged pattern and its anchors, if `seed` and `partner` combine.
    fn merge(
        lineage: &LineageGraph,
        seed: PatternId,
        partner: PatternId,
    ) -> Option<(Pattern, u32, u32)> {
        let seed_node = lineage.node(seed);
        let partner_node = lineage.node(partner);
        let relation =
            combination_result(seed_node.pattern.relation, partner_node.pattern.relation)?;
        let (head, modifier) = non_shared(seed_node.anchors(), partner_node.anchors())?;

        let pattern = Pattern::new(head.word, head.tag, modifier.word, modifier.tag, relation);
        Some((pattern, head.index, modifier.index))
    }
}

/// The non-shared anchors of two patterns that share exactly one token.
fn non_shared<'a>(
    seed: [Anchor<'a>; 2],
    partner: [Anchor<'a>; 2],
) -> Option<(Anchor<'a>, Anchor<'a>)> {
    let mut shared = None;
    for (i, s) in seed.iter().enumerate() {
        for (j, p) in partner.iter().enumerate() {
            if s.same_token(p) {
                if shared.is_some() {
                    return None;
                }
                shared = Some((i, j));
            }
        }
    }
    let (i, j) = shared?;
    Some((seed[1 - i], partner[1 - j]))
}
