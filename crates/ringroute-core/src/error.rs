//! Error types for network validation and route planning

use thiserror::Error;

/// Malformed network declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("circle name must not be empty")]
    EmptyCircleName,

    #[error("circle {0} has no stops")]
    EmptyCircle(String),

    #[error("empty stop label in {0}")]
    EmptyStopLabel(String),

    #[error("intersection references undeclared circle {0}")]
    UnknownCircle(String),

    #[error("intersection between {first} and {second} lists no common stops")]
    NoCommonStops { first: String, second: String },
}

/// Why a route could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("stop {0} is not part of any circle or intersection")]
    UnknownStop(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}
