//! Mutation lifecycle state machine.
//!
//! One instance per form submission flow: `Idle → Pending → {Succeeded |
//! Failed}`, with the terminal states collapsing back to `Idle` on the next
//! interaction. The machine is a plain object so any UI binding can drive
//! it; the leptos wrapper in the frontend is one such binding. There is no
//! automatic retry and no dedup — every retry is a fresh user-initiated
//! submit, and submitting the same valid payload twice after completion
//! yields two independent lifecycles by design.

/// State of one in-flight (or settled) submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed {
        reason: String,
    },
}

/// Attempted to start a submit while one is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitRejected;

impl core::fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "a submission is already pending")
    }
}

/// The lifecycle machine. Owned exclusively by the form instance that
/// created it; dropped when the form unmounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationLifecycle {
    state: MutationState,
}

impl MutationLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MutationState {
        &self.state
    }

    /// Whether the submit control should be disabled.
    pub fn is_pending(&self) -> bool {
        self.state == MutationState::Pending
    }

    /// The retained failure reason, shown until the next submit.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            MutationState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// `Idle → Pending`. Also accepts the settled terminal states, which
    /// collapse on this next interaction. A pending machine rejects.
    pub fn begin(&mut self) -> Result<(), SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected);
        }
        self.state = MutationState::Pending;
        Ok(())
    }

    /// `Pending → Succeeded`. Completing an aborted (non-pending) machine
    /// is a no-op: the form may have been reset while the request was in
    /// flight.
    pub fn succeed(&mut self) {
        if self.is_pending() {
            self.state = MutationState::Succeeded;
        }
    }

    /// `Pending → Failed(reason)`.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.is_pending() {
            self.state = MutationState::Failed {
                reason: reason.into(),
            };
        }
    }

    /// Collapse a terminal state back to `Idle`; pending machines are left
    /// untouched. The failure reason is discarded here, so callers keep it
    /// around for display only as long as the state itself does.
    pub fn settle(&mut self) {
        if !self.is_pending() {
            self.state = MutationState::Idle;
        }
    }
}

#[cfg(test)]
mod tests;
