//! Hamming window.

use std::f64::consts::PI;

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// A Hamming window.
///
/// Coefficients follow `0.54 - 0.46*cos(2πx)` for normalized position
/// `x = i / (length - 1)`. Unlike Hann it does not reach zero at the ends;
/// the 0.54/0.46 split cancels the first side lobe instead, trading edge
/// discontinuity for better near-lobe rejection.
#[derive(Debug, Clone)]
pub struct HammingWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl HammingWindow {
    /// Creates a Hamming window with `length` coefficients.
    ///
    /// A zero-length window is valid and empty; a one-sample window holds
    /// the peak value 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{HammingWindow, SignalSource};
    ///
    /// let window = HammingWindow::new(5);
    /// assert!((window.samples()[0] - 0.08).abs() < 1e-12);
    /// assert!((window.samples()[2] - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(length: usize) -> Self {
        if length <= 1 {
            return Self {
                samples: vec![1.0; length],
            };
        }
        let span = (length - 1) as f64;
        let samples = (0..length)
            .map(|i| {
                let x = i as f64 / span;
                0.54 - 0.46 * (2.0 * PI * x).cos()
            })
            .collect();
        Self { samples }
    }
}

impl SignalSource for HammingWindow {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        DEFAULT_SAMPLE_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_five_values() {
        let window = HammingWindow::new(5);
        let expected = [0.08, 0.54, 1.0, 0.54, 0.08];
        for (sample, want) in window.samples().iter().zip(expected) {
            assert!((sample - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_nonzero_pedestal_at_ends() {
        let window = HammingWindow::new(128);
        assert!((window.samples()[0] - 0.08).abs() < 1e-12);
        assert!((window.samples()[127] - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_edge_lengths() {
        assert!(HammingWindow::new(0).is_empty());
        assert_eq!(HammingWindow::new(1).samples(), &[1.0]);
    }
}
