//! Behavioural tests shared by every bundled coloring strategy.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use test_strategy::Arbitrary;

use super::*;
use crate::{
    fixtures::Fixture,
    generate::{CompleteGraphGenerator, GnpRandomGraphGenerator},
    test_utils::suite_proptest_config,
    validate::ColoringValidator,
};

fn color_count_of<'g, A: ColoringAlgorithm<'g, usize>>(graph: &'g Graph<usize>) -> usize {
    A::new(graph).coloring().color_count()
}

fn assert_valid<'g, A: ColoringAlgorithm<'g, usize>>(graph: &'g Graph<usize>) {
    let algorithm = A::new(graph);
    ColoringValidator::new(graph, algorithm.coloring())
        .check_all()
        .unwrap_or_else(|violation| panic!("{} produced {violation}", A::NAME));
}

#[rstest]
#[case::sample_5(Fixture::Sample5, 3)]
#[case::mycielski_3(Fixture::Mycielski3, 4)]
#[case::mycielski_4(Fixture::Mycielski4, 5)]
#[case::greedy_adversarial_7(Fixture::GreedyAdversarial7, 4)]
fn greedy_pinned_results(#[case] fixture: Fixture, #[case] expected: usize) {
    let graph = fixture.build().expect("fixture must build");
    assert_eq!(color_count_of::<GreedyColoring<'_, usize>>(&graph), expected);
}

#[rstest]
#[case::sample_5(Fixture::Sample5, 3)]
#[case::mycielski_3(Fixture::Mycielski3, 4)]
#[case::mycielski_4(Fixture::Mycielski4, 5)]
#[case::greedy_adversarial_7(Fixture::GreedyAdversarial7, 4)]
fn largest_degree_first_pinned_results(#[case] fixture: Fixture, #[case] expected: usize) {
    let graph = fixture.build().expect("fixture must build");
    assert_eq!(
        color_count_of::<LargestDegreeFirstColoring<'_, usize>>(&graph),
        expected
    );
}

#[rstest]
#[case::sample_5(Fixture::Sample5, 3)]
#[case::mycielski_3(Fixture::Mycielski3, 4)]
#[case::mycielski_4(Fixture::Mycielski4, 5)]
#[case::greedy_adversarial_7(Fixture::GreedyAdversarial7, 4)]
fn dsatur_pinned_results(#[case] fixture: Fixture, #[case] expected: usize) {
    let graph = fixture.build().expect("fixture must build");
    assert_eq!(
        color_count_of::<SaturationDegreeColoring<'_, usize>>(&graph),
        expected
    );
}

#[rstest]
fn backtracking_reaches_chromatic_number(
    #[values(
        Fixture::Sample5,
        Fixture::Mycielski3,
        Fixture::Mycielski4,
        Fixture::GreedyAdversarial7
    )]
    fixture: Fixture,
) {
    let graph = fixture.build().expect("fixture must build");
    assert_eq!(
        color_count_of::<BacktrackingColoring<'_, usize>>(&graph),
        fixture.chromatic_number()
    );
}

#[test]
fn complete_graph_needs_one_color_per_vertex() {
    let graph = CompleteGraphGenerator::new(20)
        .generate()
        .expect("generation must succeed");
    assert_eq!(color_count_of::<GreedyColoring<'_, usize>>(&graph), 20);
    assert_eq!(
        color_count_of::<LargestDegreeFirstColoring<'_, usize>>(&graph),
        20
    );
    assert_eq!(
        color_count_of::<SaturationDegreeColoring<'_, usize>>(&graph),
        20
    );
    assert_eq!(color_count_of::<BacktrackingColoring<'_, usize>>(&graph), 20);
}

#[test]
fn greedy_follows_insertion_order() {
    let graph = crate::fixtures::greedy_adversarial_7().expect("fixture must build");
    let greedy = GreedyColoring::new(&graph);
    let colors: Vec<_> = (1..=7)
        .map(|vertex| greedy.coloring().color_of(vertex))
        .collect();
    assert_eq!(
        colors,
        [0, 1, 2, 1, 0, 2, 3].map(Some).to_vec()
    );
}

#[test]
fn coloring_is_memoised() {
    let graph = crate::fixtures::mycielski_3().expect("fixture must build");
    let dsatur = SaturationDegreeColoring::new(&graph);
    let first: *const Coloring<usize> = dsatur.coloring();
    let second: *const Coloring<usize> = dsatur.coloring();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(dsatur.graph(), &graph));
}

#[test]
fn algorithms_color_generic_vertex_identifiers() {
    let mut graph = Graph::new();
    graph.add_vertices(['a', 'b', 'c']);
    graph.add_edge('a', 'b').expect("edge must insert");
    graph.add_edge('b', 'c').expect("edge must insert");
    graph.add_edge('c', 'a').expect("edge must insert");
    let exact = BacktrackingColoring::new(&graph);
    assert_eq!(exact.coloring().color_count(), 3);
    ColoringValidator::new(&graph, exact.coloring())
        .check_all()
        .expect("triangle coloring is proper");
}

#[test]
fn edgeless_graph_uses_one_color() {
    let mut graph = Graph::new();
    graph.add_vertices(0..6_usize);
    assert_eq!(color_count_of::<GreedyColoring<'_, usize>>(&graph), 1);
    assert_eq!(color_count_of::<BacktrackingColoring<'_, usize>>(&graph), 1);
}

#[test]
fn empty_graph_uses_no_colors() {
    let graph: Graph<usize> = Graph::new();
    assert_eq!(color_count_of::<SaturationDegreeColoring<'_, usize>>(&graph), 0);
    assert_eq!(color_count_of::<BacktrackingColoring<'_, usize>>(&graph), 0);
}

#[derive(Clone, Copy, Debug, Arbitrary)]
struct GnpCase {
    #[strategy(0_usize..24)]
    order: usize,
    #[strategy(0.0_f64..=1.0)]
    probability: f64,
    seed: u64,
}

impl GnpCase {
    fn graph(self) -> Graph<usize> {
        GnpRandomGraphGenerator::new(self.order, self.probability)
            .expect("probability drawn from [0, 1]")
            .generate(&mut SmallRng::seed_from_u64(self.seed))
            .expect("generation must succeed")
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn bundled_algorithms_produce_proper_colorings(case in any::<GnpCase>()) {
        let graph = case.graph();
        assert_valid::<GreedyColoring<'_, usize>>(&graph);
        assert_valid::<LargestDegreeFirstColoring<'_, usize>>(&graph);
        assert_valid::<SaturationDegreeColoring<'_, usize>>(&graph);
        assert_valid::<BacktrackingColoring<'_, usize>>(&graph);
    }

    #[test]
    fn exact_coloring_never_exceeds_heuristics(case in any::<GnpCase>()) {
        let graph = case.graph();
        let exact = color_count_of::<BacktrackingColoring<'_, usize>>(&graph);
        prop_assert!(exact <= color_count_of::<GreedyColoring<'_, usize>>(&graph));
        prop_assert!(exact <= color_count_of::<SaturationDegreeColoring<'_, usize>>(&graph));
        prop_assert!(exact <= color_count_of::<LargestDegreeFirstColoring<'_, usize>>(&graph));
    }
}
