//! Fact states and action schemas.

use serde::{Deserialize, Serialize};

/// An action with STRIPS-style precondition, add, and delete lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub action: String,
    pub preconditions: Vec<String>,
    pub add: Vec<String>,
    pub delete: Vec<String>,
}

impl Schema {
    #[must_use]
    pub fn new(action: &str, preconditions: &[&str], add: &[&str], delete: &[&str]) -> Self {
        let owned = |facts: &[&str]| facts.iter().map(|f| (*f).to_string()).collect();
        Self {
            action: action.to_string(),
            preconditions: owned(preconditions),
            add: owned(add),
            delete: owned(delete),
        }
    }

    #[must_use]
    pub fn adds(&self, fact: &str) -> bool {
        self.add.iter().any(|f| f == fact)
    }
}

/// A set of facts kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactState {
    facts: Vec<String>,
}

impl FactState {
    #[must_use]
    pub fn new(facts: &[&str]) -> Self {
        facts.iter().copied().collect()
    }

    #[must_use]
    pub fn contains(&self, fact: &str) -> bool {
        self.facts.iter().any(|f| f == fact)
    }

    pub fn insert(&mut self, fact: &str) {
        if !self.contains(fact) {
            self.facts.push(fact.to_string());
        }
    }

    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Apply `schema` in one step: drop its delete list, then append its
    /// add list.
    #[must_use]
    pub fn apply(mut self, schema: &Schema) -> Self {
        self.facts.retain(|f| !schema.delete.contains(f));
        for fact in &schema.add {
            self.insert(fact);
        }
        self
    }
}

impl<'a> FromIterator<&'a str> for FactState {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut state = Self::default();
        for fact in iter {
            state.insert(fact);
        }
        state
    }
}
