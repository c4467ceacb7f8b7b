use thiserror::Error;

/// Error types for `SlotVec` operations
///
/// Every operation that returns one of these leaves the container exactly as
/// it was before the call.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SlotVecError {
    /// Index is not a live slot
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Insert position is past the end of the vector
    #[error("Insert position out of bounds: index {index} is greater than vector length {length}")]
    InsertOutOfBounds {
        /// Requested insert position
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// No live slot matched the requested value
    #[error("Value not found in the vector")]
    ValueNotFound,
    /// The allocator could not provide the requested number of slots
    #[error("Allocation failed: could not reserve storage for {requested} slots")]
    AllocationFailed {
        /// Total number of slots that were requested
        requested: usize,
    },
    /// Doubling the capacity would overflow `usize`
    #[error("Capacity overflow: cannot grow beyond {capacity} slots")]
    CapacityOverflow {
        /// Capacity at the time of the failed growth
        capacity: usize,
    },
    /// Invalid parameter in a `SlotVecConfig`
    #[error("Invalid SlotVec configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was rejected
        value: usize,
    },
}
