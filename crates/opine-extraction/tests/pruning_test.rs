//! Redundant-ancestor pruning and the conjunction exception.

use opine_extraction::{LineageGraph, Pattern, PatternId, Pruner, RelationKind, Vocabulary};

fn add_primary(
    lineage: &mut LineageGraph,
    head: &str,
    modifier: &str,
    rel: RelationKind,
) -> PatternId {
    lineage.add_primary(Pattern::new(head, "NN", modifier, "JJ", rel), 1, 2)
}

fn pattern_of(lineage: &LineageGraph, ids: &[PatternId]) -> Vec<Pattern> {
    ids.iter().map(|&id| lineage.pattern(id).clone()).collect()
}

#[test]
fn descendant_supersedes_its_ancestors() {
    let mut lineage = LineageGraph::new();
    let p1 = add_primary(&mut lineage, "has", "camera", RelationKind::Nsubj);
    let p2 = add_primary(&mut lineage, "has", "quality", RelationKind::Dobj);
    let p3 = add_primary(&mut lineage, "quality", "excellent", RelationKind::Amod);
    let c1 = lineage.add_combined(
        Pattern::new("camera", "NN", "quality", "NN", RelationKind::Dobj),
        2,
        5,
        p1,
        p2,
    );
    let c2 = lineage.add_combined(
        Pattern::new("camera", "NN", "excellent", "JJ", RelationKind::Amod),
        2,
        4,
        c1,
        p3,
    );

    let vocabulary = Vocabulary::new(Vec::<String>::new(), ["camera"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[c1, c2]);

    assert_eq!(outcome.survivors, vec![c2]);
    assert_eq!(outcome.stats.redundant, 1);
}

#[test]
fn conjunctive_mother_keeps_every_ancestor() {
    // conj_and(screen, keyboard) + conj_and(screen, case) -> (keyboard, case) [ConjAnd]
    // then (keyboard, case) + amod(case, solid) -> (keyboard, solid)
    let mut lineage = LineageGraph::new();
    let a = add_primary(&mut lineage, "screen", "keyboard", RelationKind::ConjAnd);
    let b = add_primary(&mut lineage, "screen", "case", RelationKind::ConjAnd);
    let m = add_primary(&mut lineage, "case", "solid", RelationKind::Amod);
    let conj = lineage.add_combined(
        Pattern::new("keyboard", "NN", "case", "NN", RelationKind::ConjAnd),
        3,
        5,
        a,
        b,
    );
    let child = lineage.add_combined(
        Pattern::new("keyboard", "NN", "solid", "JJ", RelationKind::Amod),
        3,
        6,
        conj,
        m,
    );

    let vocabulary = Vocabulary::new(Vec::<String>::new(), ["keyboard"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[conj, child]);

    assert_eq!(outcome.survivors, vec![conj, child]);
    assert_eq!(outcome.stats.redundant, 0);
}

#[test]
fn conjunctive_father_also_keeps_the_mother() {
    let mut lineage = LineageGraph::new();
    let p1 = add_primary(&mut lineage, "has", "screen", RelationKind::Nsubj);
    let p2 = add_primary(&mut lineage, "has", "bright", RelationKind::Dobj);
    let conj = add_primary(&mut lineage, "bright", "sharp", RelationKind::ConjAnd);
    let mother = lineage.add_combined(
        Pattern::new("screen", "NN", "bright", "JJ", RelationKind::Dobj),
        1,
        3,
        p1,
        p2,
    );
    let child = lineage.add_combined(
        Pattern::new("screen", "NN", "sharp", "JJ", RelationKind::Dobj),
        1,
        5,
        mother,
        conj,
    );

    let vocabulary = Vocabulary::new(Vec::<String>::new(), ["screen"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[mother, child]);
    assert_eq!(
        pattern_of(&lineage, &outcome.survivors),
        pattern_of(&lineage, &[mother, child])
    );
}

#[test]
fn ancestor_removal_needs_the_mother_in_the_working_set() {
    let mut lineage = LineageGraph::new();
    let p1 = add_primary(&mut lineage, "is", "screen", RelationKind::Nsubj);
    let p2 = add_primary(&mut lineage, "is", "poor", RelationKind::Acomp);
    let c = lineage.add_combined(
        Pattern::new("screen", "NN", "poor", "JJ", RelationKind::Amod),
        2,
        4,
        p1,
        p2,
    );

    let vocabulary = Vocabulary::new(Vec::<String>::new(), ["screen"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[c]);
    assert_eq!(outcome.survivors, vec![c]);
}

#[test]
fn stopword_on_either_side_removes_the_pattern() {
    let mut lineage = LineageGraph::new();
    let p1 = add_primary(&mut lineage, "has", "screen", RelationKind::Nsubj);
    let p2 = add_primary(&mut lineage, "has", "it", RelationKind::Dobj);
    let c = lineage.add_combined(
        Pattern::new("screen", "NN", "it", "PRP", RelationKind::Dobj),
        1,
        3,
        p1,
        p2,
    );

    let vocabulary = Vocabulary::new(["it"], ["screen"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[c]);
    assert!(outcome.survivors.is_empty());
    assert_eq!(outcome.stats.stopword, 1);
}

#[test]
fn combined_pattern_equal_to_a_father_is_removed_and_counted() {
    let mut lineage = LineageGraph::new();
    let p1 = add_primary(&mut lineage, "has", "camera", RelationKind::Nsubj);
    let p2 = add_primary(&mut lineage, "has", "quality", RelationKind::Dobj);
    let p3 = add_primary(&mut lineage, "quality", "excellent", RelationKind::Amod);
    let q1 = add_primary(&mut lineage, "quality", "seems", RelationKind::Nsubj);
    let q2 = add_primary(&mut lineage, "seems", "excellent", RelationKind::Acomp);
    let c1 = lineage.add_combined(
        Pattern::new("camera", "NN", "quality", "NN", RelationKind::Dobj),
        2,
        5,
        p1,
        p2,
    );
    // Same value as the father p3, reached through a different path.
    let twin = lineage.add_combined(
        Pattern::new("quality", "NN", "excellent", "JJ", RelationKind::Amod),
        5,
        4,
        q1,
        q2,
    );
    let c2 = lineage.add_combined(
        Pattern::new("camera", "NN", "excellent", "JJ", RelationKind::Amod),
        2,
        4,
        c1,
        p3,
    );

    let vocabulary = Vocabulary::new(Vec::<String>::new(), ["camera", "quality"]);
    let outcome = Pruner::new(&vocabulary).prune(&lineage, &[c1, twin, c2]);

    assert_eq!(outcome.survivors, vec![c2]);
    assert_eq!(outcome.stats.working_set, 3);
    assert_eq!(outcome.stats.redundant, 2);
}
