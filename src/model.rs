//! A sinusoidal signal model that validates its configuration and lazily samples itself to a
//! file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SignalResult;
use crate::format::{write_samples, SampleFormat};
use crate::params::{SamplePoint, SamplingWindow, SignalParameters};
use crate::sampler::SignalSampler;
use crate::types::*;

/// Sample points computed for one revision of the model configuration.
#[derive(Debug, Clone, Default)]
struct SampleCache {
    points: Option<Vec<SamplePoint>>,
    revision: u64,
}

/// Owns a signal and its sampling window, and recomputes the samples only when they are read
/// after a change.
///
/// Every setter validates before assigning, so a failed call leaves the model untouched.
#[derive(Debug, Clone, Default)]
pub struct SignalModel {
    params: SignalParameters,
    window: SamplingWindow,
    sampler: SignalSampler,
    revision: u64,
    cache: SampleCache,
    recompute_count: u64,
}

impl SignalModel {
    /// Create a model with the default signal and window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from an already validated signal and window.
    pub fn from_parts(params: SignalParameters, window: SamplingWindow) -> Self {
        Self {
            params,
            window,
            ..Self::default()
        }
    }

    /// A copy of the current signal parameters.
    pub fn parameters(&self) -> SignalParameters {
        self.params
    }

    /// A copy of the current sampling window.
    pub fn window(&self) -> SamplingWindow {
        self.window
    }

    /// Constant added to the sinusoid.
    pub fn offset(&self) -> Sample {
        self.params.offset()
    }

    /// Peak deviation from the offset.
    pub fn amplitude(&self) -> Sample {
        self.params.amplitude()
    }

    /// Angular frequency, in rad/s.
    pub fn angular_frequency(&self) -> AngularFrequency {
        self.params.angular_frequency()
    }

    /// The stored phase, reduced to `(-π, π]` (see [`SignalModel::set_phase`]).
    pub fn phase(&self) -> Radians {
        self.params.phase()
    }

    /// First sampled instant, in seconds.
    pub fn window_start(&self) -> Time {
        self.window.start()
    }

    /// Last sampled instant, in seconds.
    pub fn window_stop(&self) -> Time {
        self.window.stop()
    }

    /// Number of points written by `generate`.
    pub fn point_count(&self) -> PointCount {
        self.window.point_count()
    }

    /// Set the offset. Any value is accepted.
    pub fn set_offset(&mut self, offset: Sample) {
        self.params.set_offset(offset);
        self.touch("offset", offset);
    }

    /// Set the amplitude. Any value is accepted, negative included.
    pub fn set_amplitude(&mut self, amplitude: Sample) {
        self.params.set_amplitude(amplitude);
        self.touch("amplitude", amplitude);
    }

    /// Fails with `InvalidArgument` if `omega` is negative or not finite.
    pub fn set_angular_frequency(&mut self, omega: AngularFrequency) -> SignalResult<()> {
        self.params.set_angular_frequency(omega)?;
        self.touch("angular frequency", omega);
        Ok(())
    }

    /// Store `phase` reduced modulo 2π. Never fails.
    ///
    /// The stored value is the symmetric remainder in `(-π, π]`, so a phase that is already
    /// within `(-2π, 2π]` may still come back changed: `3π/2` is stored as `-π/2` and
    /// `π/4 + 3π` as `-3π/4`. Both describe the same signal.
    pub fn set_phase(&mut self, phase: Radians) {
        self.params.set_phase(phase);
        self.touch("phase", phase);
    }

    /// Fails with `InvalidArgument` if `start` is negative or not finite, and with `Range` if it
    /// is not strictly below the current stop.
    pub fn set_window_start(&mut self, start: Time) -> SignalResult<()> {
        self.window.set_start(start)?;
        self.touch("window start", start);
        Ok(())
    }

    /// Fails with `InvalidArgument` if `stop` is not a positive finite value, and with `Range` if
    /// it is not strictly above the current start.
    pub fn set_window_stop(&mut self, stop: Time) -> SignalResult<()> {
        self.window.set_stop(stop)?;
        self.touch("window stop", stop);
        Ok(())
    }

    /// Fails with `InvalidArgument` if `count` is zero.
    pub fn set_point_count(&mut self, count: PointCount) -> SignalResult<()> {
        self.window.set_point_count(count)?;
        self.touch("point count", count as f64);
        Ok(())
    }

    /// Whether the cached samples are stale.
    pub fn is_dirty(&self) -> bool {
        self.cache.points.is_none() || self.cache.revision != self.revision
    }

    /// Number of times the samples have been computed.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// The samples for the current configuration, recomputed first if stale.
    pub fn samples(&mut self) -> &[SamplePoint] {
        if self.is_dirty() {
            log::debug!(
                "Recomputing {} samples over [{}, {}] (revision {})",
                self.window.point_count(),
                self.window.start(),
                self.window.stop(),
                self.revision
            );
            self.cache = SampleCache {
                points: Some(self.sampler.compute(&self.params, &self.window)),
                revision: self.revision,
            };
            self.recompute_count += 1;
        }

        self.cache.points.as_deref().unwrap_or_default()
    }

    /// Write the samples to `path` as comma separated `t,value` lines, replacing any existing
    /// file. Returns the size of the written file in bytes.
    pub fn generate(&mut self, path: impl AsRef<Path>) -> SignalResult<u64> {
        self.generate_with(path, &SampleFormat::default())
    }

    /// Same as [`SignalModel::generate`] with a custom line layout.
    pub fn generate_with(
        &mut self,
        path: impl AsRef<Path>,
        format: &SampleFormat,
    ) -> SignalResult<u64> {
        let path = path.as_ref();
        let points = self.samples();

        let mut writer = BufWriter::new(File::create(path)?);
        let written = write_samples(&mut writer, points, format)?;
        writer.flush()?;

        log::info!("Wrote {} samples ({} bytes) to {}", points.len(), written, path.display());
        Ok(written)
    }

    fn touch(&mut self, what: &str, value: f64) {
        log::trace!("Set {what} to {value}");
        self.revision += 1;
    }
}
