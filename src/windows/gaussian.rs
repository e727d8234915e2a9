//! Gaussian window.

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// Default width parameter; matches the common "alpha = 2.5" convention.
const DEFAULT_SIGMA: f64 = 0.4;

/// A Gaussian window.
///
/// Coefficients follow `exp(-((2x - 1) / sigma)^2 / 2)` for normalized
/// position `x = i / (length - 1)`, i.e. a bell curve centered on the window
/// with `sigma` expressed relative to its half-width. Smaller sigma narrows
/// the bell and drives the edge values toward zero; the curve never quite
/// reaches it.
#[derive(Debug, Clone)]
pub struct GaussianWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl GaussianWindow {
    /// Creates a Gaussian window with `length` coefficients and the default
    /// width (`sigma = 0.4`).
    ///
    /// A zero-length window is valid and empty; a one-sample window holds
    /// the peak value 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{GaussianWindow, SignalSource};
    ///
    /// let window = GaussianWindow::new(9);
    /// assert!((window.samples()[4] - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(length: usize) -> Self {
        Self::with_sigma(length, DEFAULT_SIGMA)
    }

    /// Creates a Gaussian window with an explicit width parameter.
    ///
    /// The caller is expected to pass `sigma > 0`; this is a documented
    /// precondition, not a checked one (a non-positive sigma degenerates the
    /// bell, it does not panic).
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{GaussianWindow, SignalSource};
    ///
    /// let narrow = GaussianWindow::with_sigma(65, 0.2);
    /// let wide = GaussianWindow::with_sigma(65, 0.8);
    /// assert!(narrow.samples()[0] < wide.samples()[0]);
    /// ```
    pub fn with_sigma(length: usize, sigma: f64) -> Self {
        if length <= 1 {
            return Self {
                samples: vec![1.0; length],
            };
        }
        let span = (length - 1) as f64;
        let samples = (0..length)
            .map(|i| {
                let x = i as f64 / span;
                let t = (2.0 * x - 1.0) / sigma;
                (-0.5 * t * t).exp()
            })
            .collect();
        Self { samples }
    }
}

impl SignalSource for GaussianWindow {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        DEFAULT_SAMPLE_RATE
    }
}
