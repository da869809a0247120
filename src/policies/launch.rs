//! # Launch policies for spawned computations.
//!
//! [`LaunchPolicy`] determines when the closure handed to a task starts running.
//!
//! - [`LaunchPolicy::Immediate`] the job starts on a dedicated worker thread right away.
//! - [`LaunchPolicy::Deferred`] the job is parked and runs on the first demanding thread.
//! - [`LaunchPolicy::Auto`] the library picks one of the two at spawn time (default).
//!
//! ## Choosing the right policy
//!
//! **Parallel work** (overlap with the caller):
//! ```text
//! LaunchPolicy::Immediate       → Job runs concurrently on its own thread
//! ```
//!
//! **Lazy work** (may never be needed):
//! ```text
//! LaunchPolicy::Deferred        → Job runs only when a result is demanded,
//!                                 on the demanding thread; nothing is spent
//!                                 on work nobody asks for
//! ```
//!
//! **No preference**:
//! ```text
//! LaunchPolicy::Auto            → The library commits to one of the above
//!                                 once, at spawn (default)
//! ```
//!
//! ## Auto resolution
//! `Auto` is resolved exactly once, when the task is spawned; from then on
//! the task behaves exactly like the committed mode. `Task::policy()` keeps
//! reporting `Auto`: the coin flip is a scheduling decision, not part of the
//! task's identity.

use rand::Rng;

/// Policy controlling when a spawned computation starts running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// Start immediately on a dedicated worker thread.
    Immediate,
    /// Park the job; run it on the first thread that demands the result.
    ///
    /// With nobody demanding, the job never runs. Bounded waits on an
    /// undemanded deferred task report `WaitStatus::Deferred` instead of
    /// blocking on work that never starts.
    Deferred,
    /// Let the library choose between the two at spawn time (default).
    Auto,
}

impl Default for LaunchPolicy {
    /// Returns [`LaunchPolicy::Auto`].
    fn default() -> Self {
        LaunchPolicy::Auto
    }
}

/// Concrete execution mode once `Auto` has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LaunchMode {
    /// Run on a dedicated worker thread, starting now.
    Eager,
    /// Park the job until the first demand.
    Lazy,
}

impl LaunchPolicy {
    /// Stable machine-readable label (for logs).
    pub fn as_label(&self) -> &'static str {
        match self {
            LaunchPolicy::Immediate => "immediate",
            LaunchPolicy::Deferred => "deferred",
            LaunchPolicy::Auto => "auto",
        }
    }

    /// Commits this policy to a concrete [`LaunchMode`].
    ///
    /// Fixed policies map to their mode; `Auto` flips a fair coin. Called
    /// once per spawn, so a task never changes its mind later.
    pub(crate) fn commit(self) -> LaunchMode {
        match self {
            LaunchPolicy::Immediate => LaunchMode::Eager,
            LaunchPolicy::Deferred => LaunchMode::Lazy,
            LaunchPolicy::Auto => {
                if rand::rng().random_bool(0.5) {
                    LaunchMode::Eager
                } else {
                    LaunchMode::Lazy
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(LaunchPolicy::default(), LaunchPolicy::Auto);
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(LaunchPolicy::Immediate.as_label(), "immediate");
        assert_eq!(LaunchPolicy::Deferred.as_label(), "deferred");
        assert_eq!(LaunchPolicy::Auto.as_label(), "auto");
    }

    #[test]
    fn test_fixed_policies_commit_to_their_mode() {
        assert_eq!(LaunchPolicy::Immediate.commit(), LaunchMode::Eager);
        assert_eq!(LaunchPolicy::Deferred.commit(), LaunchMode::Lazy);
    }

    #[test]
    fn test_auto_eventually_commits_both_ways() {
        let modes: Vec<LaunchMode> = (0..256).map(|_| LaunchPolicy::Auto.commit()).collect();
        assert!(modes.contains(&LaunchMode::Eager));
        assert!(modes.contains(&LaunchMode::Lazy));
    }
}
