use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::collections::HashSet;
use subgraph_patterns::{
    brute_force::brute_force_search,
    builder::GraphBuilder,
    combinatorics::arrangements,
    matching::is_embedding,
    pruned::pruned_search,
    random::{random_combination, random_matrix},
    AdjacencyMatrix, Assignment, MatchMode,
};

fn matrix(rows: &[&[i32]]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn scenario_data() -> AdjacencyMatrix {
    matrix(&[
        &[0, 1, 1, 0, 0, 0, 0],
        &[1, 0, 0, 1, 1, 0, 0],
        &[1, 0, 0, 0, 1, 0, 1],
        &[0, 1, 0, 0, 1, 1, 1],
        &[0, 1, 1, 1, 0, 0, 1],
        &[0, 0, 0, 1, 0, 0, 1],
        &[0, 0, 1, 1, 1, 1, 0],
    ])
}

fn scenario_pattern() -> AdjacencyMatrix {
    matrix(&[
        &[0, 1, 1, 0, 0, 0, 0],
        &[1, 0, 0, 1, 1, 0, 0],
        &[1, 0, 0, 1, 0, 1, 0],
        &[0, 1, 1, 0, 1, 1, 0],
        &[0, 1, 0, 1, 0, 1, 1],
        &[0, 0, 1, 1, 1, 0, 1],
        &[0, 0, 0, 0, 1, 1, 0],
    ])
}

#[rstest]
#[case(MatchMode::Soft)]
#[case(MatchMode::Strict)]
fn seven_vertex_graph_maps_onto_itself_twice(#[case] mode: MatchMode) {
    let data = scenario_data();
    let pattern = scenario_pattern();
    let expected: HashSet<Assignment> = [
        Assignment::from([0, 1, 2, 4, 3, 6, 5]),
        Assignment::from([0, 2, 1, 4, 6, 3, 5]),
    ]
    .into_iter()
    .collect();

    assert_eq!(brute_force_search(&data, &pattern, mode).unwrap(), expected);
    assert_eq!(pruned_search(&data, &pattern, mode).unwrap(), expected);
}

#[rstest]
#[case(MatchMode::Soft, 11)]
#[case(MatchMode::Strict, 23)]
#[case(MatchMode::Soft, 37)]
#[case(MatchMode::Strict, 41)]
fn resolvers_agree_on_random_instances(#[case] mode: MatchMode, #[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..40 {
        let n = rng.gen_range(1..8);
        let m = rng.gen_range(0..=n.min(5));
        let density = rng.gen_range(0.0..=1.0);
        // A narrow label range makes accidental matches likely
        let data = random_matrix(n, -1, 2, density, &mut rng).unwrap();
        let pattern = random_matrix(m, -1, 2, density, &mut rng).unwrap();

        // Every injective map, filtered by the cell rule alone
        let mut exhaustive: HashSet<Assignment> = HashSet::new();
        arrangements(n, m, |a| {
            if is_embedding(&data, &pattern, a, mode) {
                exhaustive.insert(Assignment::from(a));
            }
        })
        .unwrap();

        let brute = brute_force_search(&data, &pattern, mode).unwrap();
        let pruned = pruned_search(&data, &pattern, mode).unwrap();
        assert_eq!(brute, exhaustive, "n={} m={}\n{}\n{}", n, m, data, pattern);
        assert_eq!(pruned, exhaustive, "n={} m={}\n{}\n{}", n, m, data, pattern);
    }
}

#[rstest]
#[case(MatchMode::Soft)]
#[case(MatchMode::Strict)]
fn planted_patterns_are_recovered(#[case] mode: MatchMode) {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let n = rng.gen_range(6..10);
        let m = rng.gen_range(2..5);
        let base = random_matrix(n, -5, 5, 0.4, &mut rng).unwrap();
        let pattern = random_matrix(m, -5, 5, 0.6, &mut rng).unwrap();

        let mut builder = GraphBuilder::new(base);
        let mut planted = Vec::new();
        for _ in 0..30 {
            let assignment = random_combination(n, m, &mut rng).unwrap();
            if builder.put_pattern(&pattern, assignment.as_slice()).unwrap() {
                planted.push(assignment);
            }
        }
        assert!(!planted.is_empty());

        let data = builder.into_matrix();
        let found = pruned_search(&data, &pattern, mode).unwrap();
        for assignment in &planted {
            assert!(found.contains(assignment), "missing {}", assignment);
        }
        assert_eq!(found, brute_force_search(&data, &pattern, mode).unwrap());
    }
}

#[test]
fn failed_stamping_keeps_builder_unchanged() {
    let mut rng = StdRng::seed_from_u64(99);
    let pattern = random_matrix(4, 1, 9, 1.0, &mut rng).unwrap();
    let mut builder = GraphBuilder::new(AdjacencyMatrix::new(6));
    assert!(builder.put_pattern(&pattern, &[0, 1, 2, 3]).unwrap());

    // Rotating the same vertices moves non-zero labels onto claimed cells
    let mut rejected = 0;
    for assignment in [[1, 2, 3, 0], [3, 2, 1, 0], [0, 1, 3, 2]] {
        let before = builder.matrix().clone();
        let claimed_before = builder.claimed_count();
        if !builder.put_pattern(&pattern, &assignment).unwrap() {
            rejected += 1;
            assert_eq!(builder.matrix(), &before);
            assert_eq!(builder.claimed_count(), claimed_before);
        }
    }
    assert!(rejected > 0);
}

#[test]
fn isolated_pattern_vertex_is_unconstrained_in_soft_mode() {
    // Pattern vertex 2 has no edges at all
    let pattern = matrix(&[&[0, 4, 0], &[0, 0, 0], &[0, 0, 0]]);
    let data = matrix(&[
        &[0, 4, 0, 0],
        &[0, 0, 1, 0],
        &[2, 0, 0, 3],
        &[0, 0, 0, 0],
    ]);

    let soft = pruned_search(&data, &pattern, MatchMode::Soft).unwrap();
    // vertex 2 can land on either remaining data vertex, whatever its edges
    let expected: HashSet<Assignment> =
        [Assignment::from([0, 1, 2]), Assignment::from([0, 1, 3])]
            .into_iter()
            .collect();
    assert_eq!(soft, expected);
    assert_eq!(brute_force_search(&data, &pattern, MatchMode::Soft).unwrap(), soft);

    // Strict mode demands the absence of edges too: vertex 2 is adjacent to 1 and 0
    let strict = pruned_search(&data, &pattern, MatchMode::Strict).unwrap();
    assert_eq!(
        strict,
        [Assignment::from([0, 1, 3])].into_iter().collect::<HashSet<_>>()
    );
    assert_eq!(brute_force_search(&data, &pattern, MatchMode::Strict).unwrap(), strict);
}

#[rstest]
#[case(MatchMode::Soft)]
#[case(MatchMode::Strict)]
fn edgeless_instance_yields_every_injection(#[case] mode: MatchMode) {
    let data = AdjacencyMatrix::new(4);
    let pattern = AdjacencyMatrix::new(3);
    // P(4, 3) = 24
    assert_eq!(pruned_search(&data, &pattern, mode).unwrap().len(), 24);
    assert_eq!(brute_force_search(&data, &pattern, mode).unwrap().len(), 24);
}

#[test]
fn oversized_pattern_is_rejected_by_both() {
    let data = AdjacencyMatrix::new(2);
    let pattern = AdjacencyMatrix::new(3);
    assert!(brute_force_search(&data, &pattern, MatchMode::Soft).is_err());
    assert!(pruned_search(&data, &pattern, MatchMode::Soft).is_err());
}
