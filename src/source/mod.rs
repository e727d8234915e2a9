//! Core signal source abstraction.
//!
//! This module provides the fundamental `SignalSource` trait shared by every
//! finite sample sequence in the library (buffers, window functions, and
//! generators alike), plus the `SampleBuffer` type for sources whose samples
//! come from the caller rather than from a formula.

mod buffer;

pub use buffer::SampleBuffer;

use crate::error::SignalError;

/// The standard reference sample rate, in Hz, used by sources that do not
/// otherwise need one (window functions in particular).
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Checks that a sample rate is usable and passes it through.
///
/// Every constructor that accepts a caller-supplied rate funnels it here, so
/// `sample_rate()` can promise a positive value for all sources.
pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<f64, SignalError> {
    if sample_rate <= 0.0 || sample_rate.is_nan() {
        return Err(SignalError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(sample_rate)
}

/// Common interface for all finite signal sources.
///
/// A signal source is an owned, fixed-length ordered sequence of real-valued
/// samples with an associated sample rate. The sequence length never changes
/// after construction; whether individual values can change is up to the
/// concrete type (window functions are fully immutable, `SampleBuffer` is
/// not).
///
/// Implementors supply `samples()` and `sample_rate()`; everything else is
/// derived. The trait is object-safe, so heterogeneous sources can be handled
/// as `&dyn SignalSource` or `Box<dyn SignalSource>`.
///
/// # Examples
///
/// ```
/// use taper::{BlackmanWindow, SignalSource};
///
/// let window = BlackmanWindow::new(128);
/// assert_eq!(window.len(), 128);
/// assert_eq!(window.sample(64)?, window.samples()[64]);
/// # Ok::<(), taper::SignalError>(())
/// ```
pub trait SignalSource {
    /// Returns a read view of the whole sample sequence.
    fn samples(&self) -> &[f64];

    /// Returns the sample rate in Hz (samples per second).
    ///
    /// Always positive; construction rejects non-positive rates.
    fn sample_rate(&self) -> f64;

    /// Returns the number of samples in the source.
    fn len(&self) -> usize {
        self.samples().len()
    }

    /// Returns `true` if the source holds zero samples.
    ///
    /// An empty source is valid and simply yields nothing to a consumer.
    fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Returns the duration of the source in seconds (`len / sample_rate`).
    fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate()
    }

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::SampleOutOfRange` when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{SampleBuffer, SignalSource};
    ///
    /// let buffer = SampleBuffer::from_samples(vec![0.25, 0.5]);
    /// assert_eq!(buffer.sample(1)?, 0.5);
    /// assert!(buffer.sample(2).is_err());
    /// # Ok::<(), taper::SignalError>(())
    /// ```
    fn sample(&self, index: usize) -> Result<f64, SignalError> {
        self.samples()
            .get(index)
            .copied()
            .ok_or(SignalError::SampleOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the arithmetic mean of the samples.
    ///
    /// An empty source yields NaN (0/0), not an error.
    fn mean(&self) -> f64 {
        let samples = self.samples();
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Returns the energy of the source: the sum of squared samples.
    ///
    /// An empty source has zero energy.
    fn energy(&self) -> f64 {
        self.samples().iter().map(|s| s * s).sum()
    }

    /// Returns the average power of the source (`energy / len`).
    ///
    /// An empty source yields NaN, not an error.
    fn power(&self) -> f64 {
        self.energy() / self.len() as f64
    }

    /// Returns the root-mean-square level of the source.
    ///
    /// An empty source yields NaN, not an error.
    fn rms(&self) -> f64 {
        self.power().sqrt()
    }
}
