//! Domain error type shared by every `bq-*` crate.
//!
//! Every variant is recoverable: the operation that returned it left all
//! gate state untouched, so the caller may report it and carry on.

use thiserror::Error;

use crate::{GroupId, PriorityClass};

/// Rejection reasons for the gate's mutating operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardingError {
    #[error("priority class {0} is outside 0-6")]
    InvalidClass(i64),

    #[error(
        "group {} is {group_class}; all members of a group must share one class (got {requested})",
        .group.0
    )]
    GroupClassMismatch {
        group:       GroupId,
        group_class: PriorityClass,
        requested:   PriorityClass,
    },

    #[error("gate capacity must be positive (got {0})")]
    NotPositive(i64),
}

/// Shorthand result type for gate operations.
pub type BoardingResult<T> = Result<T, BoardingError>;
