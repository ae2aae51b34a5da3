//! Run several searchers on one problem and tabulate the results.
//!
//! Every searcher gets the same [`SearchPolicy`]. Rows come back in the
//! order the searchers were given, so the table is stable across runs.

use std::fmt::Write as _;

use cairn_search::informed::{astar_search, greedy_best_first_graph_search};
use cairn_search::uninformed::{
    breadth_first_graph_search, breadth_first_tree_search, depth_first_graph_search,
    iterative_deepening_search, uniform_cost_search,
};
use cairn_search::{Problem, SearchPolicy, SearchResult};
use serde::Serialize;
use tracing::info;

/// Signature shared by the named strategies.
pub type SearchFn<P> =
    fn(&P, &SearchPolicy) -> SearchResult<<P as Problem>::State, <P as Problem>::Action>;

/// A strategy paired with the name it is reported under.
pub struct NamedSearcher<P: Problem> {
    pub name: &'static str,
    pub run: SearchFn<P>,
}

impl<P: Problem> Clone for NamedSearcher<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Problem> Copy for NamedSearcher<P> {}

/// Expansion cap applied to the tree search in [`standard_searchers`].
///
/// Tree search keeps every generated node, so on cyclic spaces it is held
/// to this cap even when the shared policy allows more.
pub const TREE_SEARCH_MAX_EXPANSIONS: u64 = 50_000;

/// Breadth-first tree search with `max_expansions` clamped to
/// [`TREE_SEARCH_MAX_EXPANSIONS`].
pub fn budgeted_breadth_first_tree_search<P: Problem>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    let capped = SearchPolicy {
        max_expansions: policy.max_expansions.min(TREE_SEARCH_MAX_EXPANSIONS),
        ..policy.clone()
    };
    breadth_first_tree_search(problem, &capped)
}

/// Budgeted breadth-first tree search, then breadth-first, depth-first,
/// uniform-cost, iterative deepening, greedy and A*, all as graph searches
/// except iterative deepening.
#[must_use]
pub fn standard_searchers<P: Problem>() -> Vec<NamedSearcher<P>> {
    vec![
        NamedSearcher {
            name: "breadth_first_tree_search",
            run: budgeted_breadth_first_tree_search::<P>,
        },
        NamedSearcher {
            name: "breadth_first_graph_search",
            run: breadth_first_graph_search::<P>,
        },
        NamedSearcher {
            name: "depth_first_graph_search",
            run: depth_first_graph_search::<P>,
        },
        NamedSearcher {
            name: "uniform_cost_search",
            run: uniform_cost_search::<P>,
        },
        NamedSearcher {
            name: "iterative_deepening_search",
            run: iterative_deepening_search::<P>,
        },
        NamedSearcher {
            name: "greedy_best_first_graph_search",
            run: greedy_best_first_graph_search::<P>,
        },
        NamedSearcher {
            name: "astar_search",
            run: astar_search::<P>,
        },
    ]
}

/// One line of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub algorithm: String,
    pub termination: String,
    /// Actions of the solution, rendered with `Debug`.
    pub solution: Option<Vec<String>>,
    pub path_cost: Option<f64>,
    pub expansions: u64,
    pub generated: u64,
}

/// Run each searcher on `problem` and collect one row per searcher.
pub fn compare_searchers<P: Problem>(
    problem: &P,
    searchers: &[NamedSearcher<P>],
    policy: &SearchPolicy,
) -> Vec<ComparisonRow> {
    searchers
        .iter()
        .map(|searcher| {
            let result = (searcher.run)(problem, policy);
            let row = ComparisonRow {
                algorithm: searcher.name.to_string(),
                termination: result.termination.label().to_string(),
                solution: result
                    .solution()
                    .map(|actions| actions.iter().map(|a| format!("{a:?}")).collect()),
                path_cost: result.path_cost(),
                expansions: result.stats.expansions,
                generated: result.stats.generated,
            };
            info!(
                algorithm = searcher.name,
                termination = row.termination.as_str(),
                expansions = row.expansions,
                "searcher finished"
            );
            row
        })
        .collect()
}

/// Fixed-width text table: one header line, then one line per row.
#[must_use]
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.algorithm.len())
        .chain(std::iter::once("algorithm".len()))
        .max()
        .unwrap_or(0);
    let mut out = format!(
        "{:<width$}  {:<26}  {:>6}  {:>10}  {:>10}  {:>9}\n",
        "algorithm", "termination", "length", "cost", "expansions", "generated"
    );
    for row in rows {
        let length = row
            .solution
            .as_ref()
            .map_or_else(|| "-".to_string(), |s| s.len().to_string());
        let cost = row.path_cost.map_or_else(|| "-".to_string(), |c| format!("{c:.1}"));
        let _ = writeln!(
            out,
            "{:<width$}  {:<26}  {:>6}  {:>10}  {:>10}  {:>9}",
            row.algorithm, row.termination, length, cost, row.expansions, row.generated
        );
    }
    out
}

/// Pretty JSON array of the rows.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn rows_to_json(rows: &[ComparisonRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphProblem, UndirectedGraph};
    use crate::romania::romania;
    use cairn_search::Termination;

    fn rows() -> Vec<ComparisonRow> {
        let graph = romania();
        let problem = GraphProblem::new(&graph, "arad", "bucharest").unwrap();
        compare_searchers(&problem, &standard_searchers(), &SearchPolicy::default())
    }

    #[test]
    fn every_searcher_reaches_bucharest() {
        let rows = rows();
        assert_eq!(rows.len(), 7);
        for row in &rows {
            assert_eq!(row.termination, "goal_reached", "{}", row.algorithm);
            let last = row.solution.as_ref().and_then(|s| s.last().cloned());
            assert_eq!(last.as_deref(), Some("\"bucharest\""), "{}", row.algorithm);
        }
    }

    #[test]
    fn rows_keep_searcher_order_and_costs() {
        let rows = rows();
        let names: Vec<&str> = rows.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names[0], "breadth_first_tree_search");
        assert_eq!(names[1], "breadth_first_graph_search");
        assert_eq!(names[6], "astar_search");
        assert_eq!(rows[3].path_cost, Some(418.0));
        assert_eq!(rows[5].path_cost, Some(450.0));
        assert_eq!(rows[6].path_cost, Some(418.0));
    }

    #[test]
    fn tree_and_graph_breadth_first_agree_on_length() {
        let rows = rows();
        let tree = rows[0].solution.as_ref().map(Vec::len);
        let graph = rows[1].solution.as_ref().map(Vec::len);
        assert_eq!(tree, Some(3));
        assert_eq!(tree, graph);
        // Without duplicate detection the tree search generates more nodes.
        assert!(rows[0].generated >= rows[1].generated);
    }

    #[test]
    fn tree_search_cap_overrides_a_larger_policy() {
        // The `a b c` triangle branches forever and never reaches the
        // separate `y - z` edge.
        let mut graph = UndirectedGraph::new();
        graph.connect("a", "b", 1.0);
        graph.connect("b", "c", 1.0);
        graph.connect("c", "a", 1.0);
        graph.connect("y", "z", 1.0);
        let problem = GraphProblem::new(&graph, "a", "z").unwrap();
        let result = budgeted_breadth_first_tree_search(&problem, &SearchPolicy::default());
        assert_eq!(result.termination, Termination::ExpansionBudgetExceeded);
        assert_eq!(result.stats.expansions, TREE_SEARCH_MAX_EXPANSIONS);

        let tight = SearchPolicy {
            max_expansions: 10,
            ..SearchPolicy::default()
        };
        let result = budgeted_breadth_first_tree_search(&problem, &tight);
        assert_eq!(result.stats.expansions, 10);
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let rows = rows();
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[1].starts_with("breadth_first_tree_search"));
        assert!(lines[7].starts_with("astar_search"));
        assert!(lines[7].contains("418.0"));
    }

    #[test]
    fn json_lists_rows() {
        let json = rows_to_json(&rows()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(7));
        assert_eq!(value[6]["algorithm"], "astar_search");
        assert_eq!(value[6]["path_cost"], 418.0);
    }

    #[test]
    fn failing_searcher_reports_budget() {
        let graph = romania();
        let problem = GraphProblem::new(&graph, "arad", "bucharest").unwrap();
        let policy = SearchPolicy {
            max_expansions: 1,
            ..SearchPolicy::default()
        };
        let rows = compare_searchers(&problem, &standard_searchers()[..1], &policy);
        assert_eq!(rows[0].termination, "expansion_budget_exceeded");
        assert_eq!(rows[0].solution, None);
        assert_eq!(rows[0].path_cost, None);
    }
}
