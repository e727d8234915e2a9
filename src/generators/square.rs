//! Square wave generator with adjustable duty cycle.

use super::Generator;
use crate::error::SignalError;
use crate::source::{SignalSource, validate_sample_rate};

/// A finite square wave generator.
///
/// Each cycle is `amplitude` for the first `duty_cycle` fraction of the
/// cycle and `-amplitude` for the remainder. The default duty cycle of 0.5
/// gives the classic symmetric square wave; other values produce pulse
/// trains.
pub struct SquareGenerator {
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
    /// Fraction of each cycle spent at `amplitude` (0.0 to 1.0)
    duty_cycle: f64,
}

impl SquareGenerator {
    /// Creates a square generator with default parameters.
    ///
    /// Defaults are 440 Hz, amplitude 1.0, phase 0.0, duty cycle 0.5.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{Generator, SignalSource, SquareGenerator};
    ///
    /// let mut square = SquareGenerator::new(44100.0)?;
    /// square.generate(256);
    /// assert!(square.samples().iter().all(|&s| s == 1.0 || s == -1.0));
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn new(sample_rate: f64) -> Result<Self, SignalError> {
        Ok(Self {
            samples: Vec::new(),
            sample_rate: validate_sample_rate(sample_rate)?,
            frequency: 440.0,
            amplitude: 1.0,
            phase: 0.0,
            duty_cycle: 0.5,
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

    /// Sets the fraction of each cycle spent at positive amplitude.
    ///
    /// Expected strictly between 0.0 and 1.0; 0.0 or 1.0 degenerate into a
    /// constant signal. Not validated.
    pub fn set_duty_cycle(&mut self, duty_cycle: f64) {
        self.duty_cycle = duty_cycle;
    }

    /// Returns the configured duty cycle.
    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }
}

impl Generator for SquareGenerator {
    fn generate(&mut self, length: usize) {
        let step = self.frequency / self.sample_rate;
        let amplitude = self.amplitude;
        let phase = self.phase;
        let duty = self.duty_cycle;
        self.samples = (0..length)
            .map(|i| {
                // High while the cycle position is under the duty cycle.
                let t = (i as f64 * step + phase).fract();
                if t < duty { amplitude } else { -amplitude }
            })
            .collect();
    }
}

impl SignalSource for SquareGenerator {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_defaults() {
        let square = SquareGenerator::new(44100.0).unwrap();
        assert_eq!(square.frequency(), 440.0);
        assert_eq!(square.amplitude(), 1.0);
        assert_eq!(square.phase(), 0.0);
        assert_eq!(square.duty_cycle(), 0.5);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        assert!(SquareGenerator::new(0.0).is_err());
        assert!(SquareGenerator::new(f64::NAN).is_err());
    }

    #[test]
    fn test_symmetric_cycle() {
        // 1 Hz at 8 samples per second: four high samples, four low.
        let mut square = SquareGenerator::new(8.0).unwrap();
        square.set_frequency(1.0);
        square.generate(8);
        assert_eq!(
            square.samples(),
            &[1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_quarter_duty_cycle() {
        let mut square = SquareGenerator::new(8.0).unwrap();
        square.set_frequency(1.0);
        square.set_duty_cycle(0.25);
        square.generate(8);
        assert_eq!(
            square.samples(),
            &[1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_amplitude_scaling() {
        let mut square = SquareGenerator::new(8.0).unwrap();
        square.set_frequency(1.0);
        square.set_amplitude(0.5);
        square.generate(8);
        for sample in square.samples() {
            assert!(*sample == 0.5 || *sample == -0.5);
        }
    }

    #[test]
    fn test_phase_offset_starts_low() {
        // Starting half a cycle in lands on the negative half.
        let mut square = SquareGenerator::new(8.0).unwrap();
        square.set_frequency(1.0);
        square.set_phase(0.5);
        square.generate(4);
        assert_eq!(square.samples(), &[-1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_phase_wraps_across_cycles() {
        // 440 Hz over a full second keeps the cycle position inside [0, 1).
        let mut square = SquareGenerator::new(44100.0).unwrap();
        square.generate(44100);
        for sample in square.samples() {
            assert!(*sample == 1.0 || *sample == -1.0);
        }
    }

    #[test]
    fn test_zero_frequency_is_constant() {
        let mut square = SquareGenerator::new(44100.0).unwrap();
        square.set_frequency(0.0);
        square.generate(16);
        assert!(square.samples().iter().all(|&s| s == 1.0));
    }
}
