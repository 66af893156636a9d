//! Step counter for the simulation.
//!
//! The step number is the only temporal state in the model. It starts at 0
//! and advances once at the start of every tick, so the first tick run is
//! step 1.

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Step counter would overflow.
    #[error("step counter overflow: cannot advance beyond u64::MAX")]
    StepOverflow,
}

/// Counts completed simulation steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepClock {
    step: u64,
}

impl StepClock {
    /// A clock at step 0.
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// The current step number.
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Advance by one step and return the new step number.
    pub const fn advance(&mut self) -> Result<u64, ClockError> {
        match self.step.checked_add(1) {
            Some(next) => {
                self.step = next;
                Ok(next)
            }
            None => Err(ClockError::StepOverflow),
        }
    }

    /// Back to step 0.
    pub const fn reset(&mut self) {
        self.step = 0;
    }
}
