use rstest::{fixture, rstest};

use super::*;
use crate::{
    error::ColoringInvariantCode,
    fixtures::{self, Fixture},
};

#[fixture]
fn path() -> Graph<usize> {
    let mut graph = Graph::new();
    graph.add_vertices([1, 2, 3]);
    graph.add_edge(1, 2).expect("edge must insert");
    graph.add_edge(2, 3).expect("edge must insert");
    graph
}

#[rstest]
fn proper_coloring_passes_every_invariant(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 0)]);
    ColoringValidator::new(&path, &coloring)
        .with_expected_colors(2)
        .check_all()
        .expect("coloring is proper");
}

#[test]
fn witness_coloring_of_adversarial_fixture_is_proper() {
    let graph = fixtures::greedy_adversarial_7().expect("fixture must build");
    let coloring =
        Coloring::from_assignments([(1, 0), (2, 1), (3, 2), (4, 2), (5, 2), (6, 0), (7, 1)]);
    ColoringValidator::new(&graph, &coloring)
        .with_expected_colors(Fixture::GreedyAdversarial7.chromatic_number())
        .check_all()
        .expect("witness coloring is proper");
}

#[rstest]
#[case::conflict(
    Coloring::from_assignments([(1, 0), (2, 0), (3, 1)]),
    ColoringInvariantCode::ConflictingEdge
)]
#[case::uncolored(
    Coloring::from_assignments([(1, 0), (2, 1)]),
    ColoringInvariantCode::UncoloredVertex
)]
#[case::unknown(
    Coloring::from_assignments([(1, 0), (2, 1), (3, 0), (9, 2)]),
    ColoringInvariantCode::UnknownVertex
)]
#[case::out_of_range(
    Coloring::from_assignments([(1, 0), (2, 3), (3, 0)]),
    ColoringInvariantCode::ColorOutOfRange
)]
fn check_all_reports_first_violation(
    path: Graph<usize>,
    #[case] coloring: Coloring<usize>,
    #[case] expected: ColoringInvariantCode,
) {
    let err = ColoringValidator::new(&path, &coloring)
        .check_all()
        .expect_err("invariant must fail");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn expected_count_mismatch_is_reported(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 2)]);
    let err = ColoringValidator::new(&path, &coloring)
        .with_expected_colors(2)
        .check_all()
        .expect_err("three colors used, two expected");
    assert_eq!(
        err,
        ColoringInvariantViolation::UnexpectedColorCount {
            expected: 2,
            actual: 3,
        }
    );
}

#[rstest]
fn expected_count_is_skipped_when_unset(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 2)]);
    ColoringValidator::new(&path, &coloring)
        .with_expected_colors_opt(None)
        .check_all()
        .expect("validity does not depend on the count");
}

#[rstest]
fn unknown_vertex_is_reported_by_domain_check(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 0), (9, 1)]);
    let err = ColoringValidator::new(&path, &coloring)
        .check(ColoringInvariant::Domain)
        .expect_err("vertex 9 is not in the graph");
    assert_eq!(
        err,
        ColoringInvariantViolation::UnknownVertex {
            vertex: "9".to_owned(),
        }
    );
}

#[rstest]
fn conflicting_edge_names_endpoints_and_color(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 1), (2, 0), (3, 0)]);
    let err = ColoringValidator::new(&path, &coloring)
        .check(ColoringInvariant::ProperColoring)
        .expect_err("edge 2-3 conflicts");
    assert_eq!(
        err,
        ColoringInvariantViolation::ConflictingEdge {
            first: "2".to_owned(),
            second: "3".to_owned(),
            color: 0,
        }
    );
}

#[rstest]
fn collect_all_gathers_every_violation(path: Graph<usize>) {
    // Vertex 3 is uncolored, both colored vertices are out of range and edge
    // 1-2 is monochromatic.
    let coloring = Coloring::from_assignments([(1, 5), (2, 5)]);
    let codes: Vec<_> = ColoringValidator::new(&path, &coloring)
        .with_expected_colors(2)
        .collect_all()
        .into_iter()
        .map(|violation| violation.code())
        .collect();
    assert_eq!(
        codes,
        vec![
            ColoringInvariantCode::UnexpectedColorCount,
            ColoringInvariantCode::UncoloredVertex,
            ColoringInvariantCode::ColorOutOfRange,
            ColoringInvariantCode::ColorOutOfRange,
            ColoringInvariantCode::ConflictingEdge,
        ]
    );
}

#[rstest]
fn collect_many_respects_selection(path: Graph<usize>) {
    let coloring = Coloring::from_assignments([(1, 0), (2, 0)]);
    let violations = ColoringValidator::new(&path, &coloring)
        .collect_many([ColoringInvariant::ProperColoring]);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code(), ColoringInvariantCode::ConflictingEdge);
}

#[test]
fn self_loop_never_admits_proper_coloring() {
    let mut graph = Graph::with_self_loops();
    graph.add_vertex('a');
    graph.add_edge('a', 'a').expect("loops accepted");
    let coloring = Coloring::from_assignments([('a', 0)]);
    let err = ColoringValidator::new(&graph, &coloring)
        .check_all()
        .expect_err("loop endpoint shares its own color");
    assert_eq!(err.code(), ColoringInvariantCode::ConflictingEdge);
}

#[test]
fn empty_coloring_of_empty_graph_is_valid() {
    let graph: Graph<usize> = Graph::new();
    let coloring = Coloring::from_assignments([]);
    ColoringValidator::new(&graph, &coloring)
        .with_expected_colors(0)
        .check_all()
        .expect("nothing to violate");
}

#[test]
fn invariants_are_listed_in_evaluation_order() {
    let names: Vec<_> = ColoringInvariant::all()
        .into_iter()
        .map(ColoringInvariant::name)
        .collect();
    assert_eq!(
        names,
        [
            "color_budget",
            "expected_count",
            "domain",
            "color_range",
            "proper_coloring"
        ]
    );
}

#[test]
fn color_budget_counts_graph_vertices() {
    let mut graph = Graph::new();
    graph.add_vertices([1, 2]);
    let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 2)]);
    let err = ColoringValidator::new(&graph, &coloring)
        .check(ColoringInvariant::ColorBudget)
        .expect_err("three colors on two vertices");
    assert_eq!(
        err,
        ColoringInvariantViolation::ColorBudgetExceeded {
            colors: 3,
            vertices: 2,
        }
    );
}
