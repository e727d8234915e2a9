//! Triangle wave generator.

use super::Generator;
use crate::error::SignalError;
use crate::source::{SignalSource, validate_sample_rate};

/// A finite triangle wave generator.
///
/// The waveform rises linearly from `-amplitude` to `amplitude` over the
/// first half of each cycle, then falls linearly back over the second half.
pub struct TriangleGenerator {
    /// Rendered samples from the most recent `generate` call
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Frequency of the waveform in Hz
    frequency: f64,
    /// Peak amplitude
    amplitude: f64,
    /// Starting phase as a fraction of a cycle (0.0 to 1.0)
    phase: f64,
}

impl TriangleGenerator {
    /// Creates a triangle generator with default parameters.
    ///
    /// Defaults are 440 Hz, amplitude 1.0, phase 0.0.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{Generator, SignalSource, TriangleGenerator};
    ///
    /// let mut triangle = TriangleGenerator::new(44100.0)?;
    /// triangle.generate(1024);
    /// assert_eq!(triangle.len(), 1024);
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn new(sample_rate: f64) -> Result<Self, SignalError> {
        Ok(Self {
            samples: Vec::new(),
            sample_rate: validate_sample_rate(sample_rate)?,
            frequency: 440.0,
            amplitude: 1.0,
            phase: 0.0,
        })
    }

    /// Sets the frequency in Hz. Takes effect on the next `generate` call.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Returns the configured frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sets the peak amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Returns the configured peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sets the starting phase as a fraction of a cycle.
    ///
    /// Expected in [0.0, 1.0); values outside are not reduced.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    /// Returns the configured starting phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Generator for TriangleGenerator {
    fn generate(&mut self, length: usize) {
        let step = self.frequency / self.sample_rate;
        let amplitude = self.amplitude;
        let phase = self.phase;
        self.samples = (0..length)
            .map(|i| {
                let t = (i as f64 * step + phase).fract();
                if t < 0.5 {
                    // Rising: -amplitude to amplitude over the first half
                    amplitude * (4.0 * t - 1.0)
                } else {
                    // Falling: amplitude back to -amplitude over the second half
                    amplitude * (3.0 - 4.0 * t)
                }
            })
            .collect();
    }
}

impl SignalSource for TriangleGenerator {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
