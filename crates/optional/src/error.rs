use thiserror::Error;

/// Returned by [`Optional::or_else_throw`](crate::Optional::or_else_throw)
/// when there is nothing to extract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no value present")]
pub struct NoValueError;
