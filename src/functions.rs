//! Basic functions used to evaluate and discretise a sinusoid.

use std::f64::consts::{PI, TAU};

use crate::types::*;

/// Evaluate a unit sine of a given angular frequency and phase at a given time.
pub fn sine_wave(time: Time, omega: AngularFrequency, phase: Radians) -> Sample {
    f64::sin(omega * time + phase)
}

/// Reduce a phase to its symmetric remainder modulo 2π, in `(-π, π]`.
///
/// Two phases that differ by a whole number of turns reduce to the same value. Values already in
/// `(π, 2π)` are folded too, so `3π/2` becomes `-π/2`.
pub fn normalize_phase(phase: Radians) -> Radians {
    // `%` is exact, so huge inputs keep their true residue.
    let wrapped = phase % TAU;
    if wrapped <= -PI {
        wrapped + TAU
    } else if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// The `index`-th of `count` evenly spaced instants covering `[start, stop]`.
///
/// The first instant is exactly `start` and, when `count > 1`, the last one is exactly `stop`.
pub fn sample_instant(index: usize, start: Time, stop: Time, count: PointCount) -> Time {
    if count <= 1 || index == 0 {
        return start;
    }

    let last = count - 1;
    if index >= last {
        return stop;
    }

    start + index as f64 * (stop - start) / last as f64
}
