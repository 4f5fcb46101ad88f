//! Discretisation of a continuous sinusoid over a sampling window.

use crate::functions::sample_instant;
use crate::params::{SamplePoint, SamplingWindow, SignalParameters};
use crate::signal::Signal;

/// Stateless sampler turning signal parameters into an ordered list of points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalSampler;

impl SignalSampler {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `params` at `window.point_count()` evenly spaced instants from `window.start()`
    /// to `window.stop()` inclusive.
    ///
    /// With a single point the only instant is `window.start()`.
    pub fn compute(&self, params: &SignalParameters, window: &SamplingWindow) -> Vec<SamplePoint> {
        let count = window.point_count();
        (0..count)
            .map(|i| {
                let t = sample_instant(i, window.start(), window.stop(), count);
                SamplePoint::new(t, params.evaluate(t))
            })
            .collect()
    }
}
