//! Typed CSP construction errors.
//!
//! These are raised while a [`crate::model::Csp`] is being built. Solving
//! never fails with an error: an unsatisfiable problem is reported through
//! [`crate::outcome::CspTermination::Unsatisfiable`].

use crate::model::VarId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CspError {
    /// A variable with this name already exists.
    #[error("duplicate variable name: {name}")]
    DuplicateVariable { name: String },
    /// A constraint referenced a variable id from another model.
    #[error("unknown variable id {var:?}")]
    UnknownVariable { var: VarId },
    /// No variable has this name.
    #[error("unknown variable name: {name}")]
    UnknownName { name: String },
    /// A binary constraint was given the same variable twice.
    #[error("constraint relates variable {name} to itself")]
    SelfConstraint { name: String },
}
