//! Rectangular window.

use crate::source::{DEFAULT_SAMPLE_RATE, SignalSource};

/// A rectangular (boxcar) window.
///
/// Every coefficient is exactly 1.0, so applying it is a no-op taper. Useful
/// as the identity element of the family and as the baseline when measuring
/// how much leakage the other windows remove.
#[derive(Debug, Clone)]
pub struct RectangularWindow {
    /// Window coefficients, fixed at construction
    samples: Vec<f64>,
}

impl RectangularWindow {
    /// Creates a rectangular window with `length` coefficients.
    ///
    /// # Examples
    ///
    /// ```
    /// use taper::{RectangularWindow, SignalSource};
    ///
    /// let window = RectangularWindow::new(3);
    /// assert_eq!(window.samples(), &[1.0, 1.0, 1.0]);
    /// ```
    pub fn new(length: usize) -> Self {
        Self {
            samples: vec![1.0; length],
        }
    }
}

impl SignalSource for RectangularWindow {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn sample_rate(&self) -> f64 {
        DEFAULT_SAMPLE_RATE
    }
}
