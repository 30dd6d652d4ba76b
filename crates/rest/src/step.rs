//! Named steps.
//!
//! Wrapping work in [`step`] groups its log output under a `step` span and
//! records how it ended. The work itself is untouched; scenarios read the
//! same with or without it.

use std::fmt::Display;

use tracing::{debug, info_span, warn};

/// Runs `work` as a named step and returns its result unchanged.
pub fn step<T, E, F>(name: &str, work: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let span = info_span!("step", step = name);
    let _entered = span.enter();

    debug!("Step started");
    let result = work();
    match &result {
        Ok(_) => debug!("Step passed"),
        Err(e) => warn!(error = %e, "Step failed"),
    }

    result
}
