//! Error type for collaborator adapters and configuration.
//!
//! The decision engine itself never fails: an infeasible request yields
//! `None`. Errors only come from building directories, mutating the
//! inventory, or rejecting a configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("team {team} belongs to department {existing}, cannot also belong to {requested}")]
    TeamDepartmentConflict {
        team: String,
        existing: String,
        requested: String,
    },

    #[error("duplicate employee id: {0}")]
    DuplicateEmployee(String),

    #[error("duplicate seat id: {0}")]
    DuplicateSeat(String),

    #[error("unknown seat: {0}")]
    UnknownSeat(String),

    #[error("seat {0} is already occupied")]
    SeatAlreadyOccupied(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
