//! Logging shims over the `log` facade.
//!
//! With the `log` feature disabled the macros expand to nothing, so call
//! sites must not rely on side effects inside the arguments.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::debug!(target: "slotvec", $($arg)+);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::trace!(target: "slotvec", $($arg)+);
        }
    };
}

pub(crate) use debug;
pub(crate) use trace;
