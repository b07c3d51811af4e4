//! Build errors for history containers.

use thiserror::Error;

/// Errors that can occur when building a history container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial value not specified. Call .initial(value) before .build()")]
    MissingInitialState,

    #[error("Reducer not specified. Call .reducer(f) before .build_reducer()")]
    MissingReducer,
}
