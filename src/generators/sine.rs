//! Sine wave generator.

use super::Generator;
use crate::error::SignalError;
use crate::source::{SignalSource, validate_sample_rate};
use std::f64::consts::PI;

/// A finite sine wave generator.
///
/// Sample `i` is evaluated at cycle position `frequency * i / sample_rate +
/// phase`, so the rendered stretch always starts exactly `phase` cycles into
/// the waveform. Defaults are 440 Hz (concert A), amplitude 1.0, phase 0.0.
///
/// # Examples
///
/// ```
/// use taper::{Generator, SignalSource, SineGenerator};
///
/// let mut sine = SineGenerator::new(44100.0)?;
/// sine.set_frequency(1000.0);
/// sine.set_amplitude(0.5);
/// sine.generate(4096);
/// assert!(sine.samples().iter().all(|s| s.abs() <= 0.5));
/// # Ok::<(), taper::SignalError>(())
/// ```
pub struct SineGenerator {
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

impl SineGenerator {
    /// Creates a sine generator with default parameters.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
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
    /// Expected in [0.0, 1.0); values outside are not reduced, so supply the
    /// fractional part if the offset exceeds a whole cycle.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    /// Returns the configured starting phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Generator for SineGenerator {
    fn generate(&mut self, length: usize) {
        let step = self.frequency / self.sample_rate;
        let amplitude = self.amplitude;
        let phase = self.phase;
        self.samples = (0..length)
            .map(|i| amplitude * ((i as f64 * step + phase) * 2.0 * PI).sin())
            .collect();
    }
}

impl SignalSource for SineGenerator {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
