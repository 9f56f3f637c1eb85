use thiserror::Error;

/// Returned when a string does not name one of the dashboard tabs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown dashboard tab: {0}")]
pub struct ParseTabError(pub String);
