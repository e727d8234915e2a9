//! Hann window.

use std::f64::consts::PI;

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// A Hann (raised-cosine) window.
///
/// Coefficients follow `0.5 - 0.5*cos(2πx)` for normalized position
/// `x = i / (length - 1)`: a single cosine lobe that reaches exactly zero at
/// both ends. A solid general-purpose taper when nothing about the signal
/// argues for anything fancier.
#[derive(Debug, Clone)]
pub struct HannWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl HannWindow {
    /// Creates a Hann window with `length` coefficients.
    ///
    /// A zero-length window is valid and empty; a one-sample window holds
    /// the peak value 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{HannWindow, SignalSource};
    ///
    /// let window = HannWindow::new(5);
    /// assert_eq!(window.samples()[0], 0.0);
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
                0.5 - 0.5 * (2.0 * PI * x).cos()
            })
            .collect();
        Self { samples }
    }
}

impl SignalSource for HannWindow {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        DEFAULT_SAMPLE_RATE
    }
}
