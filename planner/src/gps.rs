//! The General Problem Solver.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::facts::{FactState, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpsConfig {
    /// Deepest subgoal nesting before giving up with `DepthExceeded`.
    pub max_depth: usize,
    /// Fail with `GoalCycle` as soon as a goal reappears among its own
    /// ancestors instead of waiting for the depth guard.
    pub detect_goal_cycles: bool,
}

impl Default for GpsConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            detect_goal_cycles: false,
        }
    }
}

/// Why planning failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanFailure {
    #[error("no action adds goal {goal:?}")]
    NoApplicableAction { goal: String },
    #[error("precondition {fact:?} of {action:?} was undone by a later subgoal")]
    PreconditionClobbered { action: String, fact: String },
    #[error("goal {goal:?} was undone while achieving a later goal")]
    GoalClobbered { goal: String },
    #[error("subgoal nesting exceeded depth {depth}")]
    DepthExceeded { depth: usize },
    #[error("goal {goal:?} depends on itself")]
    GoalCycle { goal: String },
}

/// A successful plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Action names in execution order.
    pub actions: Vec<String>,
    /// Facts after executing every action from the initial state.
    pub final_state: FactState,
}

/// Plan from `initial` to a state where every goal holds.
///
/// # Errors
///
/// Returns a [`PlanFailure`] when a goal has no schema that adds it, when a
/// committed schema's preconditions or an earlier goal are undone before
/// they are used, or when the subgoal stack grows past
/// `config.max_depth`.
pub fn gps(
    initial: &FactState,
    goals: &[String],
    schemas: &[Schema],
    config: &GpsConfig,
) -> Result<Plan, PlanFailure> {
    let mut planner = Planner {
        schemas,
        config,
        actions: Vec::new(),
        stack: Vec::new(),
    };
    let state = planner.achieve_all(initial.clone(), goals)?;
    if let Some(goal) = goals.iter().find(|g| !state.contains(g)) {
        return Err(PlanFailure::GoalClobbered { goal: goal.clone() });
    }
    debug!(steps = planner.actions.len(), "plan found");
    Ok(Plan {
        actions: planner.actions,
        final_state: state,
    })
}

struct Planner<'a> {
    schemas: &'a [Schema],
    config: &'a GpsConfig,
    actions: Vec<String>,
    /// Goals currently being worked on, outermost first.
    stack: Vec<String>,
}

impl Planner<'_> {
    fn achieve_all(
        &mut self,
        mut state: FactState,
        goals: &[String],
    ) -> Result<FactState, PlanFailure> {
        for goal in goals {
            state = self.achieve(state, goal)?;
        }
        Ok(state)
    }

    fn achieve(&mut self, state: FactState, goal: &str) -> Result<FactState, PlanFailure> {
        let depth = self.stack.len();
        debug!(depth, goal, "achieving");
        if state.contains(goal) {
            return Ok(state);
        }
        if self.config.detect_goal_cycles && self.stack.iter().any(|g| g == goal) {
            return Err(PlanFailure::GoalCycle {
                goal: goal.to_string(),
            });
        }
        if depth >= self.config.max_depth {
            return Err(PlanFailure::DepthExceeded { depth });
        }
        let schema = self
            .schemas
            .iter()
            .find(|s| s.adds(goal))
            .ok_or_else(|| PlanFailure::NoApplicableAction {
                goal: goal.to_string(),
            })?;

        self.stack.push(goal.to_string());
        let achieved = self.achieve_all(state, &schema.preconditions);
        self.stack.pop();
        let state = achieved?;

        if let Some(fact) = schema.preconditions.iter().find(|p| !state.contains(p)) {
            return Err(PlanFailure::PreconditionClobbered {
                action: schema.action.clone(),
                fact: fact.clone(),
            });
        }
        debug!(depth, action = schema.action.as_str(), "applying");
        self.actions.push(schema.action.clone());
        Ok(state.apply(schema))
    }
}
