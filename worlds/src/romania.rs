//! The road map of Romania, with city locations for the straight-line
//! heuristic.

use crate::graph::UndirectedGraph;

const ROADS: &[(&str, &str, f64)] = &[
    ("arad", "zerind", 75.0),
    ("arad", "sibiu", 140.0),
    ("arad", "timisoara", 118.0),
    ("bucharest", "urziceni", 85.0),
    ("bucharest", "pitesti", 101.0),
    ("bucharest", "giurgiu", 90.0),
    ("bucharest", "fagaras", 211.0),
    ("craiova", "dobreta", 120.0),
    ("craiova", "rimnicuvilcea", 146.0),
    ("craiova", "pitesti", 138.0),
    ("dobreta", "mehadia", 75.0),
    ("eforie", "hirsova", 86.0),
    ("fagaras", "sibiu", 99.0),
    ("hirsova", "urziceni", 98.0),
    ("iasi", "vaslui", 92.0),
    ("iasi", "neamt", 87.0),
    ("lugoj", "timisoara", 111.0),
    ("lugoj", "mehadia", 70.0),
    ("oradea", "zerind", 71.0),
    ("oradea", "sibiu", 151.0),
    ("pitesti", "rimnicuvilcea", 97.0),
    ("rimnicuvilcea", "sibiu", 80.0),
    ("urziceni", "vaslui", 142.0),
];

const LOCATIONS: &[(&str, f64, f64)] = &[
    ("arad", 91.0, 492.0),
    ("bucharest", 400.0, 327.0),
    ("craiova", 253.0, 288.0),
    ("dobreta", 165.0, 299.0),
    ("eforie", 562.0, 293.0),
    ("fagaras", 305.0, 449.0),
    ("giurgiu", 375.0, 270.0),
    ("hirsova", 534.0, 350.0),
    ("iasi", 473.0, 506.0),
    ("lugoj", 165.0, 379.0),
    ("mehadia", 168.0, 339.0),
    ("neamt", 406.0, 537.0),
    ("oradea", 131.0, 571.0),
    ("pitesti", 320.0, 368.0),
    ("rimnicuvilcea", 233.0, 410.0),
    ("sibiu", 207.0, 457.0),
    ("timisoara", 94.0, 410.0),
    ("urziceni", 456.0, 350.0),
    ("vaslui", 509.0, 444.0),
    ("zerind", 108.0, 531.0),
];

/// Twenty cities, twenty-three roads.
#[must_use]
pub fn romania() -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for &(a, b, distance) in ROADS {
        graph.connect(a, b, distance);
    }
    for &(city, x, y) in LOCATIONS {
        graph.locate(city, x, y);
    }
    graph
}
