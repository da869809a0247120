//! Error types used by result cells and tasks.
//!
//! This module defines two error enums:
//!
//! - [`CellError`] — misuse of a [`ResultCell`](crate::ResultCell) itself
//!   (currently only double resolution).
//! - [`TaskError`] — a captured computation failure, stored in the cell and
//!   delivered to every reader exactly like a successful value.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. Bounded waits that run out of time are **not** errors;
//! they report [`WaitStatus::TimedOut`](crate::WaitStatus).

use thiserror::Error;

/// # Errors produced by a result cell.
///
/// These represent contract violations on the cell itself, independent of
/// whatever computation feeds it.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CellError {
    /// The cell already holds a value or a failure; a cell is resolved at
    /// most once and the stored outcome is immutable afterwards.
    #[error("cell already resolved; the stored outcome is immutable")]
    DoubleResolve,
}

impl CellError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskcell::CellError;
    ///
    /// assert_eq!(CellError::DoubleResolve.as_label(), "cell_double_resolve");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CellError::DoubleResolve => "cell_double_resolve",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CellError::DoubleResolve => "cell resolved twice".to_string(),
        }
    }
}

/// # Captured computation failures.
///
/// When a computation fails, the failure is stored in the task's cell and
/// re-delivered verbatim to every subsequent reader, exactly like a
/// successful value. The enum is `Clone` because each reader receives its
/// own copy.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum TaskError {
    /// The computation returned an error.
    #[error("computation failed: {message}")]
    Failed {
        /// The underlying error message.
        message: String,
    },

    /// The computation panicked; the panic payload text is preserved.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic payload, downcast to text where possible.
        message: String,
    },

    /// The producing side was dropped before the computation ran.
    ///
    /// Raised only by packaged jobs: a [`PackagedJob`](crate::PackagedJob)
    /// that is dropped un-run resolves its cell with this failure so readers
    /// never block forever.
    #[error("computation discarded before it ran")]
    Discarded,
}

impl TaskError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskcell::TaskError;
    ///
    /// let err = TaskError::Failed { message: "boom".into() };
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Failed { .. } => "task_failed",
            TaskError::Panicked { .. } => "task_panicked",
            TaskError::Discarded => "task_discarded",
        }
    }

    /// Returns a human-readable message with details about the failure.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Failed { message } => format!("error: {message}"),
            TaskError::Panicked { message } => format!("panic: {message}"),
            TaskError::Discarded => "discarded before running".to_string(),
        }
    }

    /// Indicates whether the failure came from a panic inside the
    /// computation rather than an error it returned.
    ///
    /// # Example
    /// ```
    /// use taskcell::TaskError;
    ///
    /// let panicked = TaskError::Panicked { message: "boom".into() };
    /// assert!(panicked.is_panic());
    ///
    /// let failed = TaskError::Failed { message: "nope".into() };
    /// assert!(!failed.is_panic());
    /// ```
    pub fn is_panic(&self) -> bool {
        matches!(self, TaskError::Panicked { .. })
    }
}
