//! Missionaries and cannibals.
//!
//! Everyone starts on the left bank with the boat. The boat carries one or
//! two people, and cannibals may never outnumber missionaries on a bank
//! where at least one missionary stands.

use cairn_search::problem::Problem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Head counts per bank, indexed by [`Side`], plus the boat position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiverState {
    pub missionaries: [u8; 2],
    pub cannibals: [u8; 2],
    pub boat: Side,
}

impl RiverState {
    /// No bank has missionaries outnumbered.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        (0..2).all(|bank| {
            self.missionaries[bank] == 0 || self.missionaries[bank] >= self.cannibals[bank]
        })
    }
}

/// Passengers for one crossing, in the boat's direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    pub missionaries: u8,
    pub cannibals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Missionaries {
    /// Missionaries, and also cannibals, in the party.
    pub party: u8,
    pub boat_capacity: u8,
}

impl Default for Missionaries {
    fn default() -> Self {
        Self {
            party: 3,
            boat_capacity: 2,
        }
    }
}

impl Missionaries {
    /// The state after `crossing`, if the boat side has the passengers.
    /// The result may be unsafe.
    fn cross(state: &RiverState, crossing: &Crossing) -> Option<RiverState> {
        let from = state.boat.index();
        let to = state.boat.other().index();
        let mut next = *state;
        next.missionaries[from] = state.missionaries[from].checked_sub(crossing.missionaries)?;
        next.cannibals[from] = state.cannibals[from].checked_sub(crossing.cannibals)?;
        next.missionaries[to] += crossing.missionaries;
        next.cannibals[to] += crossing.cannibals;
        next.boat = state.boat.other();
        Some(next)
    }
}

impl Problem for Missionaries {
    type State = RiverState;
    type Action = Crossing;

    fn initial_state(&self) -> RiverState {
        RiverState {
            missionaries: [self.party, 0],
            cannibals: [self.party, 0],
            boat: Side::Left,
        }
    }

    fn actions(&self, state: &RiverState) -> Vec<Crossing> {
        let mut crossings = Vec::new();
        for missionaries in 0..=self.boat_capacity {
            for cannibals in 0..=self.boat_capacity - missionaries {
                if missionaries + cannibals == 0 {
                    continue;
                }
                let crossing = Crossing {
                    missionaries,
                    cannibals,
                };
                if Self::cross(state, &crossing).is_some_and(|next| next.is_safe()) {
                    crossings.push(crossing);
                }
            }
        }
        crossings
    }

    fn result(&self, state: &RiverState, action: &Crossing) -> RiverState {
        Self::cross(state, action).unwrap_or(*state)
    }

    fn goal_test(&self, state: &RiverState) -> bool {
        state.missionaries == [0, self.party]
            && state.cannibals == [0, self.party]
            && state.boat == Side::Right
    }
}
