//! Overall sentiment formula, merging, and the empty-corpus error.

use opine_core::errors::SentimentError;
use opine_core::models::SentimentClass;
use opine_sentiment::SentimentAggregate;
use proptest::prelude::*;

#[test]
fn overall_is_mean_of_offset_scores() {
    let aggregate: SentimentAggregate = [
        SentimentClass::Positive,
        SentimentClass::Negative,
        SentimentClass::VeryPositive,
    ]
    .into_iter()
    .collect();

    // (3 + 1 + 4) / 3
    assert!((aggregate.overall().unwrap() - 8.0 / 3.0).abs() < 1e-12);
}

#[test]
fn single_neutral_sentence_is_two() {
    let mut aggregate = SentimentAggregate::new();
    aggregate.record(SentimentClass::Neutral);
    assert_eq!(aggregate.overall().unwrap(), 2.0);
}

#[test]
fn empty_corpus_errors() {
    let aggregate = SentimentAggregate::new();
    assert!(aggregate.is_empty());
    assert_eq!(aggregate.overall(), Err(SentimentError::EmptyCorpus));
}

#[test]
fn run_aggregates_add_up() {
    let first: SentimentAggregate = [SentimentClass::VeryNegative].into_iter().collect();
    let second: SentimentAggregate = [SentimentClass::VeryPositive, SentimentClass::Positive]
        .into_iter()
        .collect();

    let mut total = first;
    total += second;
    assert_eq!(total, first + second);
    assert_eq!(total.sentence_count(), 3);
    assert_eq!(total.sum(), 7.0);

    let summed: SentimentAggregate = [first, second].into_iter().sum();
    assert_eq!(summed, total);
}

#[test]
fn aggregate_serializes_as_sum_and_count() {
    let aggregate: SentimentAggregate = [SentimentClass::Positive].into_iter().collect();
    let json = serde_json::to_value(aggregate).unwrap();
    assert_eq!(json["sum"], 3.0);
    assert_eq!(json["sentence_count"], 1);
}

fn class_strategy() -> impl Strategy<Value = SentimentClass> {
    (0usize..5).prop_map(|i| SentimentClass::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn overall_stays_within_score_range(classes in prop::collection::vec(class_strategy(), 1..50)) {
        let aggregate: SentimentAggregate = classes.iter().copied().collect();
        let overall = aggregate.overall().unwrap();
        prop_assert!((0.0..=4.0).contains(&overall));
        prop_assert_eq!(aggregate.sentence_count(), classes.len());
    }

    #[test]
    fn merge_is_order_independent(
        left in prop::collection::vec(class_strategy(), 0..20),
        right in prop::collection::vec(class_strategy(), 0..20),
    ) {
        let a: SentimentAggregate = left.iter().copied().collect();
        let b: SentimentAggregate = right.iter().copied().collect();
        let ab = a + b;
        let ba = b + a;
        prop_assert_eq!(ab.sentence_count(), ba.sentence_count());
        prop_assert!((ab.sum() - ba.sum()).abs() < 1e-9);
    }
}
