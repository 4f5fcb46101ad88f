//! Shared type definitions.

/// A type representing an instant on the time axis, in seconds.
pub type Time = f64;

/// A type representing the value of a signal at one instant.
pub type Sample = f64;

/// A type representing an angle, in radians.
pub type Radians = f64;

/// A type representing an angular frequency, in rad/s.
pub type AngularFrequency = f64;

/// A type representing the number of points in a sampling window.
pub type PointCount = usize;
