use thiserror::Error;

use super::model::EnvironmentId;

/// Failures reported by the environment-mutating collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("no active environment")]
    NoActiveEnvironment,
    #[error("unknown environment {0}")]
    UnknownEnvironment(EnvironmentId),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutesMenuError {
    #[error("add route failed: {0}")]
    AddRoute(#[source] ServiceError),
}
