//! Counters collected while a simulation runs.

/// Aggregate counters for one run.
///
/// Updated after every tick; reset by
/// [`Simulation::reset`](crate::Simulation::reset). Wall-clock time is
/// informational and excluded from [`SimulationReport::digest`](crate::SimulationReport::digest).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of ticks executed so far.
    pub ticks_executed: u64,
    /// Instructions consumed across all cars.
    pub instructions_executed: u64,
    /// Forward moves absorbed at the field boundary.
    pub moves_blocked: u64,
    /// Collision pairs detected (each pair logs two events).
    pub collision_pairs: u64,
    /// Wall-clock time spent inside ticks, in microseconds.
    pub total_us: u64,
}
