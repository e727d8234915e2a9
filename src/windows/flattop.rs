//! Flat-top window.

use std::f64::consts::PI;

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// Cosine-sum terms of the flat-top window, alternating in sign.
const A: [f64; 5] = [0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368];

/// A flat-top window.
///
/// A five-term cosine sum whose main lobe is nearly flat across its top,
/// which keeps the measured amplitude of a tone almost independent of where
/// it falls between analysis bins. The usual pick for calibration and level
/// measurement rather than for resolving close components.
///
/// Unlike the rest of the family, the shape genuinely dips below zero near
/// the ends (to about -0.03), so the `[0, 1]` bound of the classic windows
/// does not apply here.
#[derive(Debug, Clone)]
pub struct FlattopWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl FlattopWindow {
    /// Creates a flat-top window with `length` coefficients.
    ///
    /// A zero-length window is valid and empty; a one-sample window holds
    /// the peak value 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{FlattopWindow, SignalSource};
    ///
    /// let window = FlattopWindow::new(65);
    /// assert!((window.samples()[32] - 1.0).abs() < 1e-6);
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
                A[0] - A[1] * (2.0 * PI * x).cos() + A[2] * (4.0 * PI * x).cos()
                    - A[3] * (6.0 * PI * x).cos()
                    + A[4] * (8.0 * PI * x).cos()
            })
            .collect();
        Self { samples }
    }
}

impl SignalSource for FlattopWindow {
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
    fn test_center_is_unity() {
        // Odd length puts a sample exactly on x = 0.5, where the terms sum to 1.
        let window = FlattopWindow::new(65);
        assert!((window.samples()[32] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ends_dip_slightly_negative() {
        let window = FlattopWindow::new(64);
        let first = window.samples()[0];
        assert!((first - (A[0] - A[1] + A[2] - A[3] + A[4])).abs() < 1e-12);
        assert!(first < 0.0);
        assert!(first > -1e-3);
    }

    #[test]
    fn test_has_negative_side_lobes() {
        let window = FlattopWindow::new(128);
        assert!(window.samples().iter().any(|&s| s < -0.01));
        // Still bounded well inside [-1, 1].
        assert!(window.samples().iter().all(|&s| s > -0.1 && s < 1.0 + 1e-9));
    }

    #[test]
    fn test_edge_lengths() {
        assert!(FlattopWindow::new(0).is_empty());
        assert_eq!(FlattopWindow::new(1).samples(), &[1.0]);
    }
}
