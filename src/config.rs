//! Construction parameters for `SlotVec`.

use alloc::string::String;

use crate::error::SlotVecError;

/// Configuration for a `SlotVec`.
///
/// Fixed at construction. The label is purely diagnostic and takes no part
/// in comparisons or invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVecConfig {
    /// Number of slots allocated up front, and the capacity a disposed
    /// container grows back to on its next insertion.
    ///
    /// Default: 8. Must be non-zero.
    pub initial_capacity: usize,

    /// Diagnostic name of the container.
    pub label: Option<String>,
}

impl SlotVecConfig {
    /// Default number of slots allocated at construction.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Create a config with default capacity and no label.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            label: None,
        }
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Checks that the parameters describe a usable container.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::InvalidConfiguration` if `initial_capacity` is 0.
    pub fn validate(&self) -> Result<(), SlotVecError> {
        if self.initial_capacity == 0 {
            return Err(SlotVecError::InvalidConfiguration {
                parameter: "initial_capacity",
                value: self.initial_capacity,
            });
        }
        Ok(())
    }
}

impl Default for SlotVecConfig {
    fn default() -> Self {
        Self::new()
    }
}
