//! First-class invariants for connect-K sessions.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked after each move in debug
//! builds.

/// A property of a session that every transition must preserve.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, reported when it fails.
    fn description() -> &'static str;
}

/// A failed invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Statement of the property that no longer holds.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failure of the invariant described by `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, reporting every failure at once.
pub trait InvariantSet<S> {
    /// Checks each member and returns all that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod snapshot_chain;
pub mod step_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use snapshot_chain::SnapshotChainInvariant;
pub use step_bounds::StepBoundsInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    StepBoundsInvariant,
    SnapshotChainInvariant,
    AlternatingTurnInvariant,
);
