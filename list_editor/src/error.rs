//! Error type for the fallible edges of the list editor: argument parsing in
//! strict mode and policy names coming from configuration or the command line.
//! The list operations themselves cannot fail.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// An argument was not a complete decimal `i32`.
    #[error("invalid integer value: {raw:?}")]
    InvalidValue { raw: String },
    /// A single-node policy name that is neither `remove` nor `keep`.
    #[error("unknown single-node policy: {0:?} (expected \"remove\" or \"keep\")")]
    UnknownPolicy(String),
}
