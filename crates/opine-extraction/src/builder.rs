//! Primary pattern extraction from single dependency triples.

use opine_core::models::DependencyTriple;

use crate::lineage::{LineageGraph, PatternId};
use crate::pattern::Pattern;
use crate::taxonomy::RelationKind;

/// Converts dependency triples into primary patterns.
pub struct PatternBuilder;

impl PatternBuilder {
    /// Build a pattern from `triple` iff its relation is recognized and primary.
    /// The governor becomes the head, the dependent the modifier.
    pub fn try_extract(triple: &DependencyTriple) -> Option<Pattern> {
        let relation = RelationKind::from_label(&triple.relation);
        if !relation.is_primary() {
            return None;
        }
        Some(Pattern::new(
            triple.governor.word.clone(),
            triple.governor.tag.clone(),
            triple.dependent.word.clone(),
            triple.dependent.tag.clone(),
            relation,
        ))
    }

    /// Extract one primary node per qualifying triple, in triple order.
    /// Identical triples yield identical patterns; they are not deduplicated here.
    pub fn extract_primary(
        triples: &[DependencyTriple],
        lineage: &mut LineageGraph,
    ) -> Vec<PatternId> {
        triples
            .iter()
            .filter_map(|triple| {
                Self::try_extract(triple).map(|pattern| {
                    lineage.add_primary(pattern, triple.governor.index, triple.dependent.index)
                })
            })
            .collect()
    }
}
