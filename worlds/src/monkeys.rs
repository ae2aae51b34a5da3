//! Monkey and bananas for the GPS planner.

use cairn_planner::{FactState, Schema};

/// Planner input: start facts, goals, and schemas in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningProblem {
    pub initial: FactState,
    pub goals: Vec<String>,
    pub schemas: Vec<Schema>,
}

/// A hungry monkey at the door, holding a ball, with a chair it can push
/// under the bananas.
#[must_use]
pub fn monkeys() -> PlanningProblem {
    PlanningProblem {
        initial: FactState::new(&["at door", "on floor", "has ball", "hungry", "chair at door"]),
        goals: vec!["not hungry".to_string()],
        schemas: vec![
            Schema::new(
                "climb on chair",
                &["chair at middle room", "at middle room", "on floor"],
                &["at bananas", "on chair"],
                &["at middle room", "on floor"],
            ),
            Schema::new(
                "push chair from door to middle room",
                &["chair at door", "at door"],
                &["chair at middle room", "at middle room"],
                &["chair at door", "at door"],
            ),
            Schema::new(
                "walk from door to middle room",
                &["at door", "on floor"],
                &["at middle room"],
                &["at door"],
            ),
            Schema::new(
                "grasp bananas",
                &["at bananas", "empty handed"],
                &["has bananas"],
                &["empty handed"],
            ),
            Schema::new("drop ball", &["has ball"], &["empty handed"], &["has ball"]),
            Schema::new(
                "eat bananas",
                &["has bananas"],
                &["empty handed", "not hungry"],
                &["has bananas", "hungry"],
            ),
        ],
    }
}
