//! Per-fetch lifecycle: `Idle -> Pending -> {Succeeded, Failed}`.
//!
//! Both end states are terminal. There is no cancellation edge; a new fetch
//! starts from a fresh [`FetchState::Idle`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Carries the error description shown to the user.
    Failed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot {action} a fetch that is {from}")]
pub struct TransitionError {
    pub from: FetchState,
    pub action: &'static str,
}

impl FetchState {
    /// `Idle -> Pending`.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.step("begin", |s| matches!(s, FetchState::Idle), FetchState::Pending)
    }

    /// `Pending -> Succeeded`.
    pub fn succeed(&mut self) -> Result<(), TransitionError> {
        self.step("complete", |s| matches!(s, FetchState::Pending), FetchState::Succeeded)
    }

    /// `Pending -> Failed`.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        self.step("fail", |s| matches!(s, FetchState::Pending), FetchState::Failed(reason.into()))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Succeeded | FetchState::Failed(_))
    }

    fn step(
        &mut self,
        action: &'static str,
        allowed: impl Fn(&FetchState) -> bool,
        next: FetchState,
    ) -> Result<(), TransitionError> {
        if !allowed(self) {
            return Err(TransitionError {
                from: self.clone(),
                action,
            });
        }
        tracing::debug!(from = %self, to = %next, "fetch state");
        *self = next;
        Ok(())
    }
}

impl std::fmt::Display for FetchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchState::Idle => write!(f, "idle"),
            FetchState::Pending => write!(f, "pending"),
            FetchState::Succeeded => write!(f, "succeeded"),
            FetchState::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}
