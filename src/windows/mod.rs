//! Window functions for tapering sample buffers.
//!
//! A window function is a signal source whose values taper toward zero at the
//! ends of the sequence. Multiplying a signal buffer element-wise by a window
//! before frequency-domain analysis reduces spectral leakage; the multiply
//! itself belongs to the analysis code, which only needs the read interface
//! of `SignalSource`.
//!
//! Every variant shares one construction contract: `new(length)` computes the
//! whole coefficient sequence eagerly, a zero-length window is valid and
//! empty, and a one-sample window holds the single value 1.0 (the limit of
//! each symmetric formula at its peak). For `length >= 2`, index `i` is
//! evaluated at the normalized position `x = i / (length - 1)`, so the first
//! and last coefficients sit exactly on the formula's endpoints and the
//! sequence is symmetric.
//!
//! Coefficients are stored exactly as computed. For Blackman that leaves
//! harmless negative values on the order of -1e-16 at the ends; for the
//! flattop window the negative side lobes near the edges are a genuine part
//! of the shape.

mod blackman;
mod flattop;
mod gaussian;
mod hamming;
mod hann;
mod rectangular;
mod triangular;

pub use blackman::BlackmanWindow;
pub use flattop::FlattopWindow;
pub use gaussian::GaussianWindow;
pub use hamming::HammingWindow;
pub use hann::HannWindow;
pub use rectangular::RectangularWindow;
pub use triangular::TriangularWindow;
