//! # Per-Pool Outcomes
//!
//! Each candidate pool's check settles into a [`CheckOutcome`]. The final
//! answer is a pure reduction over those outcomes, independent of how the
//! checks were scheduled.

use shared_types::Pool;

use super::errors::EligibilityError;

/// Settled outcome of one independent check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome<T> {
    /// The check completed with a value.
    Fulfilled(T),
    /// The check failed.
    Rejected(EligibilityError),
}

impl<T> From<Result<T, EligibilityError>> for CheckOutcome<T> {
    fn from(result: Result<T, EligibilityError>) -> Self {
        match result {
            Ok(value) => CheckOutcome::Fulfilled(value),
            Err(err) => CheckOutcome::Rejected(err),
        }
    }
}

/// Keep the pools whose outcome is `Fulfilled(true)`, in input order.
///
/// Rejected outcomes count as "not active". Outcomes beyond the end of
/// `candidates` (or vice versa) are ignored.
pub fn collect_active(candidates: &[Pool], outcomes: &[CheckOutcome<bool>]) -> Vec<Pool> {
    candidates
        .iter()
        .zip(outcomes)
        .filter_map(|(pool, outcome)| match outcome {
            CheckOutcome::Fulfilled(true) => Some(pool.clone()),
            CheckOutcome::Fulfilled(false) | CheckOutcome::Rejected(_) => None,
        })
        .collect()
}
