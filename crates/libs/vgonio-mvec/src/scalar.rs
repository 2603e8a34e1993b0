//! Scalar helpers and compile-time dimension checks.

use crate::VectorLike;
use num_traits::Float;
use std::marker::PhantomData;

/// Euclidean norm of three values, $\sqrt{x^2 + y^2 + z^2}$, computed
/// without intermediate overflow or underflow.
///
/// This is the 3-argument counterpart of [`f64::hypot`]: the components are
/// scaled by the largest magnitude before squaring. If any argument is
/// infinite the result is infinite, even when another one is NaN.
pub fn hypot3<T: Float>(x: T, y: T, z: T) -> T {
    let (x, y, z) = (x.abs(), y.abs(), z.abs());
    if x.is_infinite() || y.is_infinite() || z.is_infinite() {
        return T::infinity();
    }
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return T::nan();
    }
    let max = x.max(y).max(z);
    if max.is_zero() {
        return max;
    }
    let (x, y, z) = (x / max, y / max, z / max);
    max * (x * x + y * y + z * z).sqrt()
}

/// Post-monomorphization check that the sum-of-squares magnitude is only
/// instantiated for vectors with at least 4 components.
pub(crate) struct AssertGeneralNorm<const N: usize>;

impl<const N: usize> AssertGeneralNorm<N> {
    pub(crate) const OK: () = assert!(
        N >= 4,
        "vectors with 2 or 3 components take a multi-argument norm function"
    );
}

/// Post-monomorphization check that a vector has exactly 2 components.
pub(crate) struct AssertComplex<V>(PhantomData<V>);

impl<V: VectorLike> AssertComplex<V> {
    pub(crate) const OK: () = assert!(
        V::SIZE == 2,
        "complex multiplication requires 2-component vectors"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn hypot3_exact_triples() {
        assert_relative_eq!(hypot3(2.0f64, 3.0, 6.0), 7.0, max_relative = 1.0e-12);
        assert_relative_eq!(hypot3(1.0f32, 4.0, 8.0), 9.0);
        assert_eq!(hypot3(0.0f64, 0.0, 0.0), 0.0);
        assert_eq!(hypot3(-0.0f64, 0.0, -0.0), 0.0);
    }

    #[test]
    fn hypot3_does_not_overflow() {
        let big = f64::MAX / 2.0;
        let norm = hypot3(big, big, 0.0);
        assert!(norm.is_finite());
        assert_relative_eq!(norm, big * 2.0f64.sqrt());

        let tiny = f64::MIN_POSITIVE * 4.0;
        assert_relative_eq!(hypot3(tiny, tiny, tiny), tiny * 3.0f64.sqrt());
    }

    #[test]
    fn hypot3_non_finite() {
        assert_eq!(hypot3(f64::INFINITY, 1.0, 2.0), f64::INFINITY);
        assert_eq!(hypot3(f64::NAN, f64::NEG_INFINITY, 2.0), f64::INFINITY);
        assert!(hypot3(f64::NAN, 1.0, 2.0).is_nan());
    }

    proptest! {
        #[test]
        fn hypot3_matches_naive_norm(x in -1.0e3f64..1.0e3, y in -1.0e3f64..1.0e3, z in -1.0e3f64..1.0e3) {
            let expected = (x * x + y * y + z * z).sqrt();
            prop_assert!(approx::relative_eq!(hypot3(x, y, z), expected, max_relative = 1.0e-12));
        }

        #[test]
        fn hypot3_is_symmetric(x in -1.0e3f32..1.0e3, y in -1.0e3f32..1.0e3, z in -1.0e3f32..1.0e3) {
            let a = hypot3(x, y, z);
            prop_assert!(a >= 0.0);
            prop_assert!(approx::relative_eq!(a, hypot3(z, x, y), max_relative = 1.0e-6));
            prop_assert!(approx::relative_eq!(a, hypot3(-y, z, -x), max_relative = 1.0e-6));
        }
    }
}
