//! General-purpose owned sample buffer.

use super::{DEFAULT_SAMPLE_RATE, SignalSource, validate_sample_rate};
use crate::error::SignalError;

/// A signal source whose samples are supplied by the caller.
///
/// `SampleBuffer` owns its sample sequence exclusively. The sequence length
/// is fixed at construction, but unlike the window functions the sample
/// *values* may be edited in place through `samples_mut`, which makes this
/// the working type for signals that a downstream consumer tapers, scales,
/// or otherwise rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Owned sample sequence; its length never changes
    samples: Vec<f64>,
    /// Sample rate in Hz, always positive
    sample_rate: f64,
}

impl SampleBuffer {
    /// Creates a buffer from samples and an explicit sample rate.
    ///
    /// # Arguments
    ///
    /// * `samples` - Sample sequence the buffer takes ownership of
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
    /// use taper::{SampleBuffer, SignalSource};
    ///
    /// let buffer = SampleBuffer::new(vec![0.0, 0.5, 1.0], 48000.0)?;
    /// assert_eq!(buffer.sample_rate(), 48000.0);
    /// assert!(SampleBuffer::new(vec![], 0.0).is_err());
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self, SignalError> {
        Ok(Self {
            samples,
            sample_rate: validate_sample_rate(sample_rate)?,
        })
    }

    /// Creates a buffer at the standard reference rate of 44100 Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{SampleBuffer, SignalSource};
    ///
    /// let buffer = SampleBuffer::from_samples(vec![0.25; 4]);
    /// assert_eq!(buffer.sample_rate(), 44100.0);
    /// ```
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self {
            samples,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Returns a mutable view of the samples for in-place editing.
    ///
    /// The view is a slice, so values can change but the length cannot.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{SampleBuffer, SignalSource};
    ///
    /// let mut buffer = SampleBuffer::from_samples(vec![1.0, 1.0]);
    /// buffer.samples_mut()[0] = -1.0;
    /// assert_eq!(buffer.samples(), &[-1.0, 1.0]);
    /// ```
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Changes the sample rate the buffer reports.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::InvalidSampleRate` if `sample_rate` is zero,
    /// negative, or NaN; the buffer is left unchanged.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), SignalError> {
        self.sample_rate = validate_sample_rate(sample_rate)?;
        Ok(())
    }
}

impl SignalSource for SampleBuffer {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        SampleBuffer::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let buffer = SampleBuffer::new(vec![0.1, 0.2], 22050.0).unwrap();
        assert_eq!(buffer.samples(), &[0.1, 0.2]);
        assert_eq!(buffer.sample_rate(), 22050.0);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        assert_eq!(
            SampleBuffer::new(vec![], 0.0),
            Err(SignalError::InvalidSampleRate { rate: 0.0 })
        );
        assert!(SampleBuffer::new(vec![], -44100.0).is_err());
        assert!(SampleBuffer::new(vec![], f64::NAN).is_err());
    }

    #[test]
    fn test_from_samples_uses_reference_rate() {
        let buffer = SampleBuffer::from_samples(vec![0.0; 3]);
        assert_eq!(buffer.sample_rate(), DEFAULT_SAMPLE_RATE);

        let buffer: SampleBuffer = vec![1.0, 2.0].into();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.sample_rate(), DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn test_in_place_mutation() {
        let mut buffer = SampleBuffer::from_samples(vec![0.0, 0.0, 0.0]);
        for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
            *sample = i as f64;
        }
        assert_eq!(buffer.samples(), &[0.0, 1.0, 2.0]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_set_sample_rate() {
        let mut buffer = SampleBuffer::from_samples(vec![0.0; 8]);
        buffer.set_sample_rate(8000.0).unwrap();
        assert_eq!(buffer.sample_rate(), 8000.0);
        assert!((buffer.duration() - 0.001).abs() < 1e-12);

        assert!(buffer.set_sample_rate(-1.0).is_err());
        // A rejected rate leaves the previous one in place.
        assert_eq!(buffer.sample_rate(), 8000.0);
    }
}
