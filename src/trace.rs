//! Step-by-step records of the tour builders.
//!
//! Each recorded step owns a snapshot of the working matrix as it was when
//! the step was taken, so a renderer can draw one frame per step without
//! replaying the algorithm.

use std::fmt::Debug;

use derivative::Derivative;

/// Number of steps a trace keeps unless the caller asks for another cap.
/// Steps past the cap are still computed and counted.
pub const MAX_RECORDED_STEPS: usize = 200;

/// The result of an instrumented tour builder.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "S: Clone"),
    Debug(bound = "S: Debug"),
    Default(bound = ""),
    PartialEq(bound = "S: PartialEq"),
    Eq(bound = "S: Eq")
)]
pub struct Trace<S> {
    /// The finished circuit or trail.
    pub sequence: Vec<usize>,
    /// The recorded steps, in order.  Never longer than the cap.
    pub steps: Vec<S>,
    /// The number of steps taken, including any past the cap.
    pub total_steps: usize,
}

impl<S> Trace<S> {
    /// Returns true if the builder did not run because its precondition
    /// failed.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty() && self.total_steps == 0
    }

    /// Returns true if some steps were taken but not recorded.
    pub fn is_truncated(&self) -> bool {
        self.total_steps > self.steps.len()
    }
}

/// Collects step snapshots up to a cap.
///
/// A disabled recorder never builds a snapshot, which lets the silent
/// builders share a loop with the instrumented ones.
pub(crate) struct StepRecorder<S> {
    steps: Vec<S>,
    total: usize,
    cap: usize,
    enabled: bool,
}

impl<S> StepRecorder<S> {
    pub fn new(cap: usize) -> Self {
        Self {
            steps: Vec::with_capacity(cap.min(MAX_RECORDED_STEPS)),
            total: 0,
            cap,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            steps: Vec::new(),
            total: 0,
            cap: 0,
            enabled: false,
        }
    }

    /// Counts one step, building and keeping its snapshot only while the
    /// recorder is enabled and under its cap.
    pub fn record(&mut self, snapshot: impl FnOnce() -> S) {
        if self.enabled && self.steps.len() < self.cap {
            self.steps.push(snapshot());
        }
        self.total += 1;
    }

    pub fn finish(self, sequence: Vec<usize>) -> Trace<S> {
        Trace {
            sequence,
            steps: self.steps,
            total_steps: self.total,
        }
    }
}
