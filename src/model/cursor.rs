//! Navigation over a build order's ordered steps.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepCursorError {
    #[error("Step index {index} is out of bounds for a sequence of {len} steps")]
    OutOfBounds { index: usize, len: usize },
}

/// Where the cursor sits within its sequence.
///
/// A single-step sequence is reported as `Start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPosition {
    Start,
    Middle,
    End,
}

/// Bounded cursor over a sequence of `len` steps.
///
/// The index always stays within `[0, len - 1]`. Moving past either end is a no-op,
/// there is no wraparound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    /// Creates a cursor at the first step, or `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }

        Some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves to the next step unless already at the last one.
    pub fn advance(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Moves to the previous step unless already at the first one.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Moves directly to step `index`, leaving the cursor untouched when out of bounds.
    pub fn jump_to(&mut self, index: usize) -> Result<(), StepCursorError> {
        if index >= self.len {
            return Err(StepCursorError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        self.index = index;

        Ok(())
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.len - 1
    }

    pub fn position(&self) -> CursorPosition {
        if self.is_at_start() {
            CursorPosition::Start
        } else if self.is_at_end() {
            CursorPosition::End
        } else {
            CursorPosition::Middle
        }
    }

    /// Human readable progress, e.g. `Step 3 of 12`
    pub fn label(&self) -> String {
        format!("Step {} of {}", self.index + 1, self.len)
    }
}

/// Formats an in-game timestamp as `m:ss`
pub fn format_step_time(minutes: i32, seconds: i32) -> String {
    format!("{}:{:02}", minutes, seconds)
}
