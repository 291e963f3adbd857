// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic hooks.
//!
//! With the `tracing` feature enabled, rollbacks of partially completed bulk
//! operations are reported as `trace`-level events. Without it the hooks
//! expand to nothing.

/// Reports that `$op` reached `$reached` live elements and is restoring the
/// vector to `$restored`.
#[cfg(feature = "tracing")]
macro_rules! trace_rollback {
    ($op:expr, $reached:expr, $restored:expr) => {
        tracing::trace!(
            op = $op,
            reached = $reached,
            restored = $restored,
            "rolling back partial append"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_rollback {
    ($op:expr, $reached:expr, $restored:expr) => {{
        let _ = (&$op, &$reached, &$restored);
    }};
}

pub(crate) use trace_rollback;
