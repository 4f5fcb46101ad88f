//! Value types describing a sinusoid and the window it is sampled over.
//!
//! The signal is `s(t) = offset + amplitude * sin(angular_frequency * t + phase)`.

use std::f64::consts::TAU;

use crate::error::{SignalError, SignalResult};
use crate::functions::{normalize_phase, sine_wave};
use crate::signal::Signal;
use crate::types::*;

/// Default offset.
pub const DEFAULT_OFFSET: Sample = 0.0;
/// Default amplitude.
pub const DEFAULT_AMPLITUDE: Sample = 1.0;
/// Default angular frequency: one turn per second.
pub const DEFAULT_ANGULAR_FREQUENCY: AngularFrequency = TAU;
/// Default phase at `t = 0`.
pub const DEFAULT_PHASE: Radians = 0.0;
/// Default start of the sampling window (s).
pub const DEFAULT_START: Time = 0.0;
/// Default end of the sampling window (s).
pub const DEFAULT_STOP: Time = 1.0;
/// Default number of sample points.
pub const DEFAULT_POINT_COUNT: PointCount = 100;

/// The four constants defining a sinusoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParameters {
    offset: Sample,
    amplitude: Sample,
    angular_frequency: AngularFrequency,
    phase: Radians,
}

impl SignalParameters {
    /// Create a validated set of parameters.
    ///
    /// Fails with [`SignalError::InvalidArgument`] when `angular_frequency` is negative or not
    /// finite. The phase is reduced with [`normalize_phase`].
    pub fn new(
        offset: Sample,
        amplitude: Sample,
        angular_frequency: AngularFrequency,
        phase: Radians,
    ) -> SignalResult<Self> {
        Ok(Self {
            offset,
            amplitude,
            angular_frequency: check_angular_frequency(angular_frequency)?,
            phase: normalize_phase(phase),
        })
    }

    /// Constant added to the sinusoid.
    pub fn offset(&self) -> Sample {
        self.offset
    }

    /// Peak deviation from the offset.
    pub fn amplitude(&self) -> Sample {
        self.amplitude
    }

    /// Angular frequency, in rad/s.
    pub fn angular_frequency(&self) -> AngularFrequency {
        self.angular_frequency
    }

    /// The phase at `t = 0`, folded into `(-π, π]`.
    pub fn phase(&self) -> Radians {
        self.phase
    }

    pub(crate) fn set_offset(&mut self, offset: Sample) {
        self.offset = offset;
    }

    pub(crate) fn set_amplitude(&mut self, amplitude: Sample) {
        self.amplitude = amplitude;
    }

    pub(crate) fn set_angular_frequency(&mut self, omega: AngularFrequency) -> SignalResult<()> {
        self.angular_frequency = check_angular_frequency(omega)?;
        Ok(())
    }

    pub(crate) fn set_phase(&mut self, phase: Radians) {
        self.phase = normalize_phase(phase);
    }

    /// Evaluate the signal at one instant.
    pub fn value_at(&self, time: Time) -> Sample {
        self.offset + self.amplitude * sine_wave(time, self.angular_frequency, self.phase)
    }
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            amplitude: DEFAULT_AMPLITUDE,
            angular_frequency: DEFAULT_ANGULAR_FREQUENCY,
            phase: DEFAULT_PHASE,
        }
    }
}

impl Signal<Time, Sample> for SignalParameters {
    fn evaluate(&self, time: Time) -> Sample {
        self.value_at(time)
    }
}

fn check_angular_frequency(omega: AngularFrequency) -> SignalResult<AngularFrequency> {
    if !omega.is_finite() || omega < 0.0 {
        return Err(SignalError::invalid(
            "angular frequency must be finite and not negative",
            omega,
        ));
    }
    Ok(omega)
}

/// The time interval and point count used to discretise a signal.
///
/// Always satisfies `0 <= start < stop` and `point_count > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingWindow {
    start: Time,
    stop: Time,
    point_count: PointCount,
}

impl SamplingWindow {
    /// Create a validated sampling window.
    pub fn new(start: Time, stop: Time, point_count: PointCount) -> SignalResult<Self> {
        let start = check_bound("window start must be finite and not negative", start)?;
        let stop = check_stop(stop)?;
        if start >= stop {
            return Err(SignalError::range(
                "window start must be below window stop",
                start,
                stop,
            ));
        }
        if point_count == 0 {
            return Err(SignalError::invalid("point count must be positive", 0.0));
        }
        Ok(Self {
            start,
            stop,
            point_count,
        })
    }

    /// First sampled instant, in seconds.
    pub fn start(&self) -> Time {
        self.start
    }

    /// Last sampled instant, in seconds.
    pub fn stop(&self) -> Time {
        self.stop
    }

    /// Number of points in the window.
    pub fn point_count(&self) -> PointCount {
        self.point_count
    }

    /// Length of the window, in seconds.
    pub fn duration(&self) -> Time {
        self.stop - self.start
    }

    pub(crate) fn set_start(&mut self, start: Time) -> SignalResult<()> {
        let start = check_bound("window start must be finite and not negative", start)?;
        if start >= self.stop {
            return Err(SignalError::range(
                "window start must be below window stop",
                start,
                self.stop,
            ));
        }
        self.start = start;
        Ok(())
    }

    pub(crate) fn set_stop(&mut self, stop: Time) -> SignalResult<()> {
        let stop = check_stop(stop)?;
        if stop <= self.start {
            return Err(SignalError::range(
                "window stop must be above window start",
                stop,
                self.start,
            ));
        }
        self.stop = stop;
        Ok(())
    }

    pub(crate) fn set_point_count(&mut self, point_count: PointCount) -> SignalResult<()> {
        if point_count == 0 {
            return Err(SignalError::invalid("point count must be positive", 0.0));
        }
        self.point_count = point_count;
        Ok(())
    }
}

impl Default for SamplingWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

fn check_bound(what: &'static str, value: Time) -> SignalResult<Time> {
    if !value.is_finite() || value < 0.0 {
        return Err(SignalError::invalid(what, value));
    }
    Ok(value)
}

fn check_stop(stop: Time) -> SignalResult<Time> {
    let stop = check_bound("window stop must be finite and not negative", stop)?;
    if stop == 0.0 {
        return Err(SignalError::invalid("window stop must be positive", stop));
    }
    Ok(stop)
}

/// One evaluated instant of a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub t: Time,
    pub value: Sample,
}

impl SamplePoint {
    /// Create a point from an instant and the signal value there.
    pub fn new(t: Time, value: Sample) -> Self {
        Self { t, value }
    }
}
