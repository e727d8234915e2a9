//! Waveform and noise generators.
//!
//! A generator is a [`SignalSource`] that renders its own samples instead of
//! receiving them from the caller. Construct one at a sample rate, adjust its
//! parameters, then call [`Generator::generate`] to fill it with a finite
//! stretch of signal:
//!
//! ```
//! use taper::{Generator, SignalSource, SineGenerator};
//!
//! let mut sine = SineGenerator::new(44100.0)?;
//! sine.set_frequency(1000.0);
//! sine.generate(1024);
//! assert_eq!(sine.len(), 1024);
//! # Ok::<(), taper::SignalError>(())
//! ```
//!
//! The periodic generators (sine, square, triangle) share frequency,
//! amplitude, and phase controls. The noise generators
//! ([`WhiteNoiseGenerator`], [`PinkNoiseGenerator`]) have only amplitude and
//! accept a caller-supplied RNG for reproducible output.

mod pink_noise;
mod sine;
mod square;
mod triangle;
mod white_noise;

pub use pink_noise::PinkNoiseGenerator;
pub use sine::SineGenerator;
pub use square::SquareGenerator;
pub use triangle::TriangleGenerator;
pub use white_noise::WhiteNoiseGenerator;

use crate::source::SignalSource;

/// Common interface for signal sources that render samples on demand.
///
/// Calling `generate` discards whatever the source held before, so the same
/// generator can be reconfigured and reused. `generate(0)` is valid and
/// leaves the source empty.
pub trait Generator: SignalSource {
    /// Renders `length` samples, replacing the previous contents.
    fn generate(&mut self, length: usize);
}
