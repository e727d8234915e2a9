//! Pink noise generator.

use super::Generator;
use crate::error::SignalError;
use crate::source::{SignalSource, validate_sample_rate};
use rand::Rng;

/// Number of rows in the Voss-McCartney sum.
const ROWS: usize = 16;

/// A finite pink noise generator.
///
/// Pink noise (1/f noise) has equal power per octave, so lower frequencies
/// carry more energy than in white noise. This implementation uses the
/// Voss-McCartney algorithm: sixteen uniform sources are held, row `k` is
/// redrawn every `2^(k+1)` samples, and each output is their normalized sum
/// scaled by `amplitude`.
pub struct PinkNoiseGenerator<R: Rng = rand::rngs::ThreadRng> {
    /// Rendered samples from the most recent `generate` call
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Peak amplitude applied to the normalized sum
    amplitude: f64,
    /// Random number generator
    rng: R,
    /// Held values of the Voss-McCartney rows
    rows: [f64; ROWS],
    /// Sample counter; its trailing zeros pick the rows to redraw
    counter: u32,
}

impl PinkNoiseGenerator<rand::rngs::ThreadRng> {
    /// Creates a pink noise generator backed by the thread-local RNG.
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
    /// use taper::{Generator, SignalSource, PinkNoiseGenerator};
    ///
    /// let mut noise = PinkNoiseGenerator::new(44100.0)?;
    /// noise.generate(512);
    /// assert_eq!(noise.len(), 512);
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn new(sample_rate: f64) -> Result<Self, SignalError> {
        Self::with_rng(sample_rate, rand::thread_rng())
    }
}

impl<R: Rng> PinkNoiseGenerator<R> {
    /// Creates a pink noise generator with a custom RNG.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{Generator, PinkNoiseGenerator};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = PinkNoiseGenerator::with_rng(44100.0, rng)?;
    /// noise.generate(512);
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn with_rng(sample_rate: f64, mut rng: R) -> Result<Self, SignalError> {
        let rows = [0.0; ROWS].map(|_| rng.gen_range(-1.0..=1.0));
        Ok(Self {
            samples: Vec::new(),
            sample_rate: validate_sample_rate(sample_rate)?,
            amplitude: 1.0,
            rng,
            rows,
            counter: 0,
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

    fn next_value(&mut self) -> f64 {
        // Redraw one row per trailing zero of the counter.
        let mut bit = 1;
        for row in self.rows.iter_mut() {
            if self.counter & bit != 0 {
                break;
            }
            *row = self.rng.gen_range(-1.0..=1.0);
            bit <<= 1;
        }

        self.counter = self.counter.wrapping_add(1);

        let sum: f64 = self.rows.iter().sum();
        self.amplitude * sum / ROWS as f64
    }
}

impl<R: Rng> Generator for PinkNoiseGenerator<R> {
    fn generate(&mut self, length: usize) {
        let mut samples = Vec::with_capacity(length);
        for _ in 0..length {
            samples.push(self.next_value());
        }
        self.samples = samples;
    }
}

impl<R: Rng> SignalSource for PinkNoiseGenerator<R> {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
