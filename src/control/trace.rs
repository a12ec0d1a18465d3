//! Step accounting for the evaluator loops.
//!
//! With the `tracing` feature enabled every resolved chain emits a single
//! `trace!` event carrying the number of thunks it invoked. Without the
//! feature the counter is a zero-sized no-op.

#[derive(Debug, Default)]
pub(crate) struct StepCounter {
    #[cfg(feature = "tracing")]
    steps: u64,
}

impl StepCounter {
    #[inline]
    #[allow(clippy::unused_self)]
    pub(crate) fn record(&mut self) {
        #[cfg(feature = "tracing")]
        {
            self.steps += 1;
        }
    }

    #[inline]
    #[allow(clippy::unused_self)]
    pub(crate) fn finish(&self, kind: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind, steps = self.steps, "tail call chain resolved");
        #[cfg(not(feature = "tracing"))]
        let _ = kind;
    }
}
