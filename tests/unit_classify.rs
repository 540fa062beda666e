// Unit tests for the impossibility check and pairwise classification.
//
// Covers the reference scenarios, the >= delta boundary, vacuous possibility
// for empty keywords, and partition completeness for stores of every small
// size.

use coexist::analysis::classify::{any_pair_exceeds, ExclusivitySimulator};
use coexist::analysis::distance::SpatiotemporalDistance;
use coexist::analysis::KeywordPair;
use coexist::occurrence::Occurrence;

fn scenario_store() -> ExclusivitySimulator {
    let mut sim = ExclusivitySimulator::new(1.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("B", [(0.0, 0.0, 0.0, 10.0)]);
    sim.add_keyword_occurrences("C", [(1.0, 0.0, 0.0, 1.0)]);
    sim.add_keyword_occurrences("D", Vec::<Occurrence>::new());
    sim
}

// ============================================================
// Reference scenarios
// ============================================================

#[test]
fn time_gap_makes_pair_impossible() {
    let sim = scenario_store();
    // 0 + 1.0 * 10 = 10 >= 5
    assert!(sim.is_impossible_combination("A", "B"));
}

#[test]
fn nearby_pair_is_possible() {
    let sim = scenario_store();
    // 1 + 1.0 * 1 = 2 < 5
    assert!(!sim.is_impossible_combination("A", "C"));
}

#[test]
fn four_keyword_partition() {
    let result = scenario_store().infer_all_possibilities();

    // B and C: 1 + 1.0 * 9 = 10 >= 5, so B-C is impossible as well as A-B
    assert_eq!(
        result.impossible,
        vec![KeywordPair::new("A", "B"), KeywordPair::new("B", "C")]
    );
    assert_eq!(result.possible.len(), 4);
    for (a, b) in [("A", "C"), ("A", "D"), ("B", "D"), ("C", "D")] {
        assert!(result.is_possible(a, b), "({a}, {b}) should be possible");
        assert!(result.is_possible(b, a), "lookup should ignore order");
    }
}

#[test]
fn zero_alpha_ignores_huge_time_gap() {
    let mut sim = ExclusivitySimulator::new(0.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("E", [(10.0, 0.0, 0.0, 1000.0)]);
    assert!(sim.is_impossible_combination("A", "E"));

    // Same time gap, no spatial gap: possible once time is ignored
    sim.add_keyword_occurrences("F", [(0.0, 0.0, 0.0, 1000.0)]);
    assert!(!sim.is_impossible_combination("A", "F"));
}

// ============================================================
// Boundary and edge cases
// ============================================================

#[test]
fn exactly_delta_is_impossible() {
    let mut sim = ExclusivitySimulator::new(1.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    // 3-4-5 triangle, no time gap: distance is exactly 5
    sim.add_keyword_occurrences("B", [(3.0, 4.0, 0.0, 0.0)]);
    assert!(sim.is_impossible_combination("A", "B"));
}

#[test]
fn just_below_delta_is_possible() {
    let mut sim = ExclusivitySimulator::new(1.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("B", [(0.0, 0.0, 0.0, 4.999)]);
    assert!(!sim.is_impossible_combination("A", "B"));
}

#[test]
fn one_far_pair_among_many_is_enough() {
    let mut sim = ExclusivitySimulator::new(1.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0), (0.1, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences(
        "B",
        [(0.2, 0.0, 0.0, 0.0), (0.0, 0.3, 0.0, 0.0), (0.0, 0.0, 0.0, 50.0)],
    );
    assert!(sim.is_impossible_combination("A", "B"));
}

#[test]
fn empty_keyword_is_possible_with_everything() {
    let sim = scenario_store();
    for other in ["A", "B", "C"] {
        assert!(!sim.is_impossible_combination("D", other));
        assert!(!sim.is_impossible_combination(other, "D"));
    }
}

#[test]
fn zero_delta_makes_any_occurrence_pair_impossible() {
    let mut sim = ExclusivitySimulator::new(1.0, 0.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("B", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("C", Vec::<Occurrence>::new());
    let result = sim.infer_all_possibilities();
    assert!(result.is_impossible("A", "B"));
    assert!(result.is_possible("A", "C"));
}

#[test]
fn unknown_keyword_is_possible() {
    let sim = scenario_store();
    assert!(!sim.is_impossible_combination("A", "nope"));
    assert!(!sim.is_impossible_combination("nope", "also-nope"));
}

#[test]
fn cross_product_helper_handles_empty_sides() {
    let metric = SpatiotemporalDistance::default();
    let one = [Occurrence::new(0.0, 0.0, 0.0, 0.0)];
    assert!(!any_pair_exceeds(&metric, 5.0, &[], &one));
    assert!(!any_pair_exceeds(&metric, 5.0, &one, &[]));
    assert!(!any_pair_exceeds(&metric, 5.0, &[], &[]));
}

// ============================================================
// Partition completeness
// ============================================================

#[test]
fn partition_covers_all_pairs_exactly_once() {
    for n in 0..8usize {
        let mut sim = ExclusivitySimulator::new(1.0, 5.0);
        for i in 0..n {
            // Alternate near and far timestamps so both buckets get entries
            let t = if i % 2 == 0 { 0.0 } else { 20.0 };
            sim.add_keyword_occurrences(&format!("k{i}"), [(i as f64 * 0.1, 0.0, 0.0, t)]);
        }
        let result = sim.infer_all_possibilities();

        assert_eq!(result.total_pairs(), n * n.saturating_sub(1) / 2, "n = {n}");

        let mut seen = std::collections::HashSet::new();
        for pair in result.possible.iter().chain(&result.impossible) {
            assert_ne!(pair.first, pair.second, "self-pair generated");
            let key = if pair.first < pair.second {
                (pair.first.clone(), pair.second.clone())
            } else {
                (pair.second.clone(), pair.first.clone())
            };
            assert!(seen.insert(key), "duplicate pair {pair:?}");
        }
    }
}

#[test]
fn overwritten_keyword_uses_latest_occurrences() {
    let mut sim = ExclusivitySimulator::new(1.0, 5.0);
    sim.add_keyword_occurrences("A", [(0.0, 0.0, 0.0, 0.0)]);
    sim.add_keyword_occurrences("B", [(0.0, 0.0, 0.0, 100.0)]);
    assert!(sim.is_impossible_combination("A", "B"));

    sim.add_keyword_occurrences("B", [(0.0, 0.0, 0.0, 1.0)]);
    assert!(!sim.is_impossible_combination("A", "B"));
    assert_eq!(sim.infer_all_possibilities().total_pairs(), 1);
}
