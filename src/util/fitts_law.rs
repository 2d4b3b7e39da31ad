//! Hit probability model based on Fitts' law.
//!
//! A movement of `relative_dist` circle diameters finished within
//! `movement_time` seconds has an index of performance that relates its
//! difficulty to the player's throughput.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erf;

/// Index of performance in bits per second.
pub fn index_of_performance(relative_dist: f64, movement_time: f64) -> f64 {
    (relative_dist + 1.0).log2() / movement_time
}

/// Probability to hit a target `dist` diameters away within `movement_time`
/// seconds given a `throughput` in bits per second.
pub fn hit_probability(dist: f64, movement_time: f64, throughput: f64) -> f64 {
    if dist <= 0.0 || movement_time * throughput > 100.0 {
        return 1.0;
    }

    if movement_time <= 0.0 {
        return 0.0;
    }

    erf(2.066 / dist * (f64::powf(2.0, movement_time * throughput) - 1.0) / SQRT_2)
}
