//! Benchmark profiles for the gridcar simulator.
//!
//! - [`reference_profile`]: 64x64 field, 32 cars, programs up to 256 steps
//! - [`stress_profile`]: 512x512 field, 1024 cars, programs up to 1024 steps
//! - [`crowded_profile`]: 8x8 field, 64 cars, collisions in the first ticks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridcar_engine::Simulation;
use gridcar_test_utils::random_simulation;

/// Build the reference profile: a sparse field where most cars finish
/// their programs.
pub fn reference_profile(seed: u64) -> Simulation {
    random_simulation(64, 64, 32, 256, seed)
}

/// Build the stress profile: same density as [`reference_profile`] at
/// 32x the car count.
pub fn stress_profile(seed: u64) -> Simulation {
    random_simulation(512, 512, 1024, 1024, seed)
}

/// Build a profile dominated by collision resolution.
pub fn crowded_profile(seed: u64) -> Simulation {
    random_simulation(8, 8, 64, 64, seed)
}
