//! GPS plans are executable and honest about their failures.

use cairn_planner::{gps, FactState, GpsConfig, PlanFailure};
use cairn_worlds::monkeys;
use lock_tests::init_tracing;

fn goals(facts: &[&str]) -> Vec<String> {
    facts.iter().map(|f| (*f).to_string()).collect()
}

#[test]
fn monkey_plan_is_exact_and_executable() {
    init_tracing();
    let problem = monkeys();
    let plan = gps(&problem.initial, &problem.goals, &problem.schemas, &GpsConfig::default()).unwrap();
    assert_eq!(
        plan.actions,
        goals(&[
            "push chair from door to middle room",
            "climb on chair",
            "drop ball",
            "grasp bananas",
            "eat bananas",
        ])
    );

    let mut state: FactState = problem.initial.clone();
    for action in &plan.actions {
        let schema = problem
            .schemas
            .iter()
            .find(|s| &s.action == action)
            .unwrap();
        for fact in &schema.preconditions {
            assert!(state.contains(fact), "{action}: missing {fact}");
        }
        state = state.apply(schema);
    }
    assert_eq!(state, plan.final_state);
    assert!(problem.goals.iter().all(|g| state.contains(g)));
}

#[test]
fn goal_order_can_clobber_an_earlier_goal() {
    let problem = monkeys();
    let result = gps(
        &problem.initial,
        &goals(&["has ball", "not hungry"]),
        &problem.schemas,
        &GpsConfig::default(),
    );
    assert_eq!(
        result,
        Err(PlanFailure::GoalClobbered {
            goal: "has ball".to_string()
        })
    );
}

#[test]
fn unreachable_goal_names_the_missing_fact() {
    let problem = monkeys();
    let result = gps(
        &problem.initial,
        &goals(&["not hungry", "has ball"]),
        &problem.schemas,
        &GpsConfig::default(),
    );
    let err = result.unwrap_err();
    assert_eq!(
        err,
        PlanFailure::NoApplicableAction {
            goal: "has ball".to_string()
        }
    );
    assert_eq!(err.to_string(), r#"no action adds goal "has ball""#);
}
