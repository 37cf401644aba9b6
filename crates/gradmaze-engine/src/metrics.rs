//! Per-step performance metrics for the environment driver.
//!
//! [`StepMetrics`] captures timing data for a single step together with
//! the running episode return, for profiling and training-loop telemetry.

use std::time::Duration;

/// Timing metrics collected during a single step.
///
/// All durations are in microseconds. The driver overwrites these fields
/// after each successful `step()` call and clears them on reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent inside the engine's `step`, in microseconds.
    pub engine_us: u64,
    /// Time spent in the reward shaper, in microseconds.
    pub shaping_us: u64,
    /// Engine-reported step count after this step.
    pub step_count: u32,
    /// Sum of shaped rewards since the last reset, this step included.
    pub episode_return: f64,
}

/// Saturating conversion of a duration to whole microseconds.
pub(crate) fn as_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.engine_us, 0);
        assert_eq!(m.shaping_us, 0);
        assert_eq!(m.step_count, 0);
        assert_eq!(m.episode_return, 0.0);
    }

    #[test]
    fn micros_conversion() {
        assert_eq!(as_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(as_micros(Duration::from_nanos(999)), 0);
        assert_eq!(as_micros(Duration::MAX), u64::MAX);
    }
}
