//! White noise generator.

use super::Generator;
use crate::error::SignalError;
use crate::source::{SignalSource, validate_sample_rate};
use rand::Rng;

/// A finite white noise generator.
///
/// White noise has equal power across all frequencies. Each rendered sample
/// is an independent uniform draw from `[-amplitude, amplitude]`.
///
/// The generator owns its randomness source. The default is the thread-local
/// RNG; pass a seeded RNG to `with_rng` for reproducible output.
pub struct WhiteNoiseGenerator<R: Rng = rand::rngs::ThreadRng> {
    /// Rendered samples from the most recent `generate` call
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Peak amplitude
    amplitude: f64,
    /// Random number generator
    rng: R,
}

impl WhiteNoiseGenerator<rand::rngs::ThreadRng> {
    /// Creates a white noise generator backed by the thread-local RNG.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{Generator, SignalSource, WhiteNoiseGenerator};
    ///
    /// let mut noise = WhiteNoiseGenerator::new(44100.0)?;
    /// noise.generate(512);
    /// assert!(noise.samples().iter().all(|s| s.abs() <= 1.0));
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn new(sample_rate: f64) -> Result<Self, SignalError> {
        Self::with_rng(sample_rate, rand::thread_rng())
    }
}

impl<R: Rng> WhiteNoiseGenerator<R> {
    /// Creates a white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    /// * `rng` - Random number generator to use
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{Generator, WhiteNoiseGenerator};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoiseGenerator::with_rng(44100.0, rng)?;
    /// noise.generate(512);
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn with_rng(sample_rate: f64, rng: R) -> Result<Self, SignalError> {
        Ok(Self {
            samples: Vec::new(),
            sample_rate: validate_sample_rate(sample_rate)?,
            amplitude: 1.0,
            rng,
        })
    }

    /// Sets the peak amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Returns the configured peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> Generator for WhiteNoiseGenerator<R> {
    fn generate(&mut self, length: usize) {
        let mut samples = Vec::with_capacity(length);
        for _ in 0..length {
            samples.push(self.amplitude * self.rng.gen_range(-1.0..=1.0));
        }
        self.samples = samples;
    }
}

impl<R: Rng> SignalSource for WhiteNoiseGenerator<R> {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
