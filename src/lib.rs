//! Sinegen - sample a parametrized sinusoid over a time window and write it as delimited text.
//!
//! The signal is `s(t) = offset + amplitude * sin(angular_frequency * t + phase)`. A
//! [`SignalModel`] holds a validated configuration and recomputes its samples only when they are
//! read after a change.
//!
//! ```no_run
//! use sinegen::SignalModel;
//!
//! let mut model = SignalModel::new();
//! model.set_point_count(500)?;
//! model.set_phase(std::f64::consts::FRAC_PI_2);
//! model.generate("cosine.csv")?;
//! # Ok::<(), sinegen::SignalError>(())
//! ```

pub mod error;
pub mod format;
pub mod functions;
pub mod model;
pub mod params;
pub mod sampler;
pub mod signal;
pub mod types;

pub use error::{SignalError, SignalResult};
pub use format::{parse_samples, read_samples, write_samples, SampleFormat};
pub use model::SignalModel;
pub use params::{SamplePoint, SamplingWindow, SignalParameters};
pub use sampler::SignalSampler;
pub use signal::Signal;
