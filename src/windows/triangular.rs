//! Triangular window.

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// A triangular window.
///
/// Coefficients follow `1 - abs(2x - 1)` for normalized position
/// `x = i / (length - 1)`: a linear ramp from zero up to the center and back.
/// Odd lengths place a single 1.0 at the apex; even lengths straddle it.
#[derive(Debug, Clone)]
pub struct TriangularWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl TriangularWindow {
    /// Creates a triangular window with `length` coefficients.
    ///
    /// A zero-length window is valid and empty; a one-sample window holds
    /// the peak value 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{SignalSource, TriangularWindow};
    ///
    /// let window = TriangularWindow::new(5);
    /// assert_eq!(window.samples(), &[0.0, 0.5, 1.0, 0.5, 0.0]);
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
                1.0 - (2.0 * x - 1.0).abs()
            })
            .collect();
        Self { samples }
    }
}

impl SignalSource for TriangularWindow {
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
    fn test_odd_length_has_unit_apex() {
        let window = TriangularWindow::new(5);
        assert_eq!(window.samples(), &[0.0, 0.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_even_length_straddles_apex() {
        let window = TriangularWindow::new(4);
        let expected = [0.0, 2.0 / 3.0, 2.0 / 3.0, 0.0];
        for (sample, want) in window.samples().iter().zip(expected) {
            assert!((sample - want).abs() < 1e-12);
        }
        // No interior coefficient reaches 1.0 when the apex falls between samples.
        assert!(window.samples().iter().all(|&s| s < 1.0));
    }

    #[test]
    fn test_edge_lengths() {
        assert!(TriangularWindow::new(0).is_empty());
        assert_eq!(TriangularWindow::new(1).samples(), &[1.0]);
    }
}
