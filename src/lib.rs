//! Taper - finite signal sources, window functions, and generators
//!
//! This library provides owned, fixed-length sample sequences: caller-filled
//! buffers, spectral analysis windows, and waveform/noise generators, plus
//! the decibel and range helpers that go with them.

pub mod error;
pub mod functions;
pub mod generators;
pub mod source;
pub mod windows;

// Re-export commonly used types at the crate root
pub use error::SignalError;
pub use functions::{
    clamp, db, db_magnitude, db_relative, random, random_double, random_double_with, random_with,
};
pub use generators::{
    Generator, PinkNoiseGenerator, SineGenerator, SquareGenerator, TriangleGenerator,
    WhiteNoiseGenerator,
};
pub use source::{DEFAULT_SAMPLE_RATE, SampleBuffer, SignalSource};
pub use windows::{
    BlackmanWindow, FlattopWindow, GaussianWindow, HammingWindow, HannWindow, RectangularWindow,
    TriangularWindow,
};
