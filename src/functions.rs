//! Scalar numeric helpers.
//!
//! This module provides the small utility surface used around the signal
//! sources: decibel conversion for magnitude reporting, range clamping, and
//! uniform pseudorandom sampling for synthetic noise and dithering.
//!
//! The random helpers draw from the thread-local generator by default, so
//! there is no shared mutable state to synchronize; the `*_with` variants
//! accept an explicit generator for seeded, reproducible draws.

use num_complex::Complex64;
use rand::Rng;

use crate::error::SignalError;

/// Converts a value to decibels, relative to a reference value of 1.
///
/// Computed as `20 * log10(value)`. Non-positive inputs follow `f64::log10`
/// semantics rather than raising an error: `db(0.0)` is negative infinity and
/// `db(-x)` is NaN. Callers displaying the result are expected to filter or
/// clamp such values.
///
/// # Examples
///
/// ```
/// use taper::db;
///
/// assert_eq!(db(1.0), 0.0);
/// assert!((db(10.0) - 20.0).abs() < 1e-12);
/// assert_eq!(db(0.0), f64::NEG_INFINITY);
/// ```
pub fn db(value: f64) -> f64 {
    20.0 * value.log10()
}

/// Converts the magnitude of a complex number to decibels.
///
/// The magnitude is the Euclidean norm of the (real, imaginary) pair; the
/// zero complex number therefore yields negative infinity, as with `db`.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use taper::{db, db_magnitude};
///
/// let bin = Complex64::new(3.0, 4.0);
/// assert_eq!(db_magnitude(bin), db(5.0));
/// ```
pub fn db_magnitude(value: Complex64) -> f64 {
    db(value.norm())
}

/// Converts a value to decibels, relative to a reference value.
///
/// Computed as `20 * log10(value / reference)`. A zero reference is not
/// rejected; the division yields an infinity (or NaN for `0.0 / 0.0`) and
/// the logarithm follows from there, keeping the edge-case convention
/// identical to `db`.
///
/// # Examples
///
/// ```
/// use taper::db_relative;
///
/// assert_eq!(db_relative(0.7, 0.7), 0.0);
/// assert!((db_relative(2.0, 1.0) - 6.0206).abs() < 1e-4);
/// ```
pub fn db_relative(value: f64, reference: f64) -> f64 {
    20.0 * (value / reference).log10()
}

/// Clamps a value inside a range.
///
/// Computed literally as `max(min, min(value, max))`. The caller is expected
/// to pass `min <= max`; if the bounds are inverted the result is still
/// well-defined (the expression collapses to `min`) but no longer a clamp.
/// This precondition is documented rather than checked.
///
/// # Examples
///
/// ```
/// use taper::clamp;
///
/// assert_eq!(clamp(0.0, 5.0, 10.0), 5.0);
/// assert_eq!(clamp(0.0, -5.0, 10.0), 0.0);
/// assert_eq!(clamp(0.0, 15.0, 10.0), 10.0);
/// ```
pub fn clamp(min: f64, value: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Returns a pseudorandom integer from `[from, to)`, drawn from the
/// thread-local generator.
///
/// # Errors
///
/// Returns `SignalError::EmptyRandomRange` when `to <= from`.
///
/// # Examples
///
/// ```
/// use taper::random;
///
/// let value = random(10, 20)?;
/// assert!((10..20).contains(&value));
/// assert!(random(20, 10).is_err());
/// # Ok::<(), taper::SignalError>(())
/// ```
pub fn random(from: i32, to: i32) -> Result<i32, SignalError> {
    random_with(&mut rand::thread_rng(), from, to)
}

/// Returns a pseudorandom integer from `[from, to)`, drawn from a
/// caller-supplied generator.
///
/// # Errors
///
/// Returns `SignalError::EmptyRandomRange` when `to <= from`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use taper::random_with;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let first = random_with(&mut rng, 0, 100)?;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// assert_eq!(random_with(&mut rng, 0, 100)?, first);
/// # Ok::<(), taper::SignalError>(())
/// ```
pub fn random_with<R: Rng>(rng: &mut R, from: i32, to: i32) -> Result<i32, SignalError> {
    if to <= from {
        return Err(SignalError::EmptyRandomRange { from, to });
    }
    Ok(rng.gen_range(from..to))
}

/// Returns a pseudorandom double from `[0.0, 1.0]` (both ends inclusive),
/// drawn from the thread-local generator.
///
/// # Examples
///
/// ```
/// use taper::random_double;
///
/// let value = random_double();
/// assert!((0.0..=1.0).contains(&value));
/// ```
pub fn random_double() -> f64 {
    random_double_with(&mut rand::thread_rng())
}

/// Returns a pseudorandom double from `[0.0, 1.0]` (both ends inclusive),
/// drawn from a caller-supplied generator.
pub fn random_double_with<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_db_reference_points() {
        assert_eq!(db(1.0), 0.0);
        assert!((db(10.0) - 20.0).abs() < 1e-12);
        assert!((db(100.0) - 40.0).abs() < 1e-12);
        assert!((db(0.5) + 6.0206).abs() < 1e-4);
    }

    #[test]
    fn test_db_domain_edges() {
        assert_eq!(db(0.0), f64::NEG_INFINITY);
        assert!(db(-1.0).is_nan());
    }

    #[test]
    fn test_db_magnitude() {
        assert_eq!(db_magnitude(Complex64::new(3.0, 4.0)), db(5.0));
        assert_eq!(db_magnitude(Complex64::new(1.0, 0.0)), 0.0);
        assert_eq!(db_magnitude(Complex64::new(0.0, 0.0)), f64::NEG_INFINITY);
    }

    #[test]
    fn test_db_relative() {
        assert_eq!(db_relative(0.2, 0.2), 0.0);
        assert!((db_relative(10.0, 1.0) - 20.0).abs() < 1e-12);
        // Same convention as db: degenerate inputs degrade, never error.
        assert_eq!(db_relative(1.0, 0.0), f64::INFINITY);
        assert!(db_relative(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.0, 5.0, 10.0), 5.0);
        assert_eq!(clamp(0.0, -5.0, 10.0), 0.0);
        assert_eq!(clamp(0.0, 15.0, 10.0), 10.0);
        assert_eq!(clamp(-1.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(-1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        // Documented precondition violation: result collapses to min.
        assert_eq!(clamp(10.0, 5.0, 0.0), 10.0);
        assert_eq!(clamp(10.0, 15.0, 0.0), 10.0);
    }

    #[test]
    fn test_random_stays_in_range() {
        for _ in 0..10000 {
            let value = random(-3, 7).unwrap();
            assert!((-3..7).contains(&value));
        }
    }

    #[test]
    fn test_random_single_value_range() {
        for _ in 0..100 {
            assert_eq!(random(5, 6).unwrap(), 5);
        }
    }

    #[test]
    fn test_random_rejects_empty_range() {
        assert_eq!(
            random(5, 5),
            Err(SignalError::EmptyRandomRange { from: 5, to: 5 })
        );
        assert!(random(5, 4).is_err());
    }

    #[test]
    fn test_random_with_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(
                random_with(&mut a, 0, 1000).unwrap(),
                random_with(&mut b, 0, 1000).unwrap()
            );
        }
    }

    #[test]
    fn test_random_double_stays_in_range() {
        for _ in 0..10000 {
            let value = random_double();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_random_double_varies() {
        let mut rng = StdRng::seed_from_u64(99);
        let samples: Vec<f64> = (0..100).map(|_| random_double_with(&mut rng)).collect();
        let first = samples[0];
        assert!(!samples.iter().all(|&s| s == first));
    }
}
