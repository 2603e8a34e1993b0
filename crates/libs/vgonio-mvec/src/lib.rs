//! # vgonio-mvec
//! Small fixed-size math vectors generic over their scalar type.
//!
//! Three vector types share one set of operators:
//!
//! - [`Vector2`] and [`Vector3`] with named fields (`x`, `y`, `z`),
//! - [`FixedVector`] with `N` components addressed only by index.
//!
//! Free functions in [`ops`] (re-exported at the crate root) work on any of
//! them through the [`VectorLike`] contract: [`dot_product`], [`magnitude`],
//! [`unit_vector`], [`cosine_between`] and [`complex_multiplication`].
//!
//! The magnitude is dispatched at compile time on the dimension of the
//! vector: 2- and 3-component vectors hand their raw components to a
//! multi-argument norm function such as [`f64::hypot`] or [`hypot3`], larger
//! vectors reduce the sum of squares with a single-argument function such as
//! [`f64::sqrt`].
//!
//! ```
//! use vgonio_mvec::{magnitude, Vector2};
//!
//! let v = Vector2::new(3.0f64, 4.0);
//! assert_eq!(magnitude(&v, f64::hypot), 5.0);
//! assert_eq!(v + Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0));
//! ```
//!
//! # Contract violations
//!
//! Indexing past the last component always panics, in debug and release
//! builds alike; use `get`/`get_mut` for a checked lookup. Normalizing a
//! zero vector with [`unit_vector`] follows the scalar's own division
//! semantics; [`try_unit_vector`] reports it as [`VectorError::Degenerate`].
//!
//! # Features
//!
//! - `serde`: serialization of all vector types.
//! - `bytemuck`: `Pod`/`Zeroable` for all vector types.
//! - `glam`: conversions from and to the matching `glam` vectors.

use std::ops::{Index, IndexMut};

/// Implements the element-wise arithmetic shared by all vector types.
///
/// The vector type must provide `iter`, `iter_mut`, `map` and `from_fn`
/// and be consumable by value into its components.
macro_rules! impl_vector_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl_vector_ops!(@arith [$($gen)*] $ty, Add);
        impl_vector_ops!(@arith [$($gen)*] $ty, Sub);
        impl_vector_ops!(@scale [$($gen)*] $ty);
        impl_vector_ops!(@misc [$($gen)*] $ty);
    };
    (@arith [$($gen:tt)*] $ty:ty, $op:ident) => {
        paste::paste! {
            impl<$($gen)*> core::ops::[<$op Assign>]<$ty> for $ty
            where
                T: core::ops::[<$op Assign>],
            {
                fn [<$op:lower _assign>](&mut self, rhs: $ty) {
                    for (lhs, rhs) in self.iter_mut().zip(rhs) {
                        core::ops::[<$op Assign>]::[<$op:lower _assign>](lhs, rhs);
                    }
                }
            }

            impl<'a, $($gen)*> core::ops::[<$op Assign>]<&'a $ty> for $ty
            where
                T: core::ops::[<$op Assign>] + Clone,
            {
                fn [<$op:lower _assign>](&mut self, rhs: &'a $ty) {
                    for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
                        core::ops::[<$op Assign>]::[<$op:lower _assign>](lhs, rhs.clone());
                    }
                }
            }

            impl<$($gen)*> core::ops::$op<$ty> for $ty
            where
                T: core::ops::[<$op Assign>],
            {
                type Output = $ty;

                fn [<$op:lower>](mut self, rhs: $ty) -> $ty {
                    core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut self, rhs);
                    self
                }
            }

            impl<'a, $($gen)*> core::ops::$op<&'a $ty> for $ty
            where
                T: core::ops::[<$op Assign>] + Clone,
            {
                type Output = $ty;

                fn [<$op:lower>](mut self, rhs: &'a $ty) -> $ty {
                    core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut self, rhs);
                    self
                }
            }

            impl<'a, $($gen)*> core::ops::$op<$ty> for &'a $ty
            where
                T: core::ops::[<$op Assign>] + Clone,
            {
                type Output = $ty;

                fn [<$op:lower>](self, rhs: $ty) -> $ty {
                    let mut lhs = self.clone();
                    core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut lhs, rhs);
                    lhs
                }
            }

            impl<'a, 'b, $($gen)*> core::ops::$op<&'b $ty> for &'a $ty
            where
                T: core::ops::[<$op Assign>] + Clone,
            {
                type Output = $ty;

                fn [<$op:lower>](self, rhs: &'b $ty) -> $ty {
                    let mut lhs = self.clone();
                    core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut lhs, rhs);
                    lhs
                }
            }
        }
    };
    (@scale [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> core::ops::MulAssign<T> for $ty
        where
            T: core::ops::MulAssign + Clone,
        {
            fn mul_assign(&mut self, rhs: T) {
                for c in self.iter_mut() {
                    *c *= rhs.clone();
                }
            }
        }

        impl<$($gen)*> core::ops::Mul<T> for $ty
        where
            T: core::ops::MulAssign + Clone,
        {
            type Output = $ty;

            fn mul(mut self, rhs: T) -> $ty {
                self *= rhs;
                self
            }
        }

        impl<'a, $($gen)*> core::ops::Mul<T> for &'a $ty
        where
            T: core::ops::MulAssign + Clone,
        {
            type Output = $ty;

            fn mul(self, rhs: T) -> $ty { self.clone() * rhs }
        }

        impl<$($gen)*> core::ops::Neg for $ty
        where
            T: core::ops::Neg<Output = T>,
        {
            type Output = $ty;

            fn neg(self) -> $ty { self.map(|c| -c) }
        }

        impl<'a, $($gen)*> core::ops::Neg for &'a $ty
        where
            T: core::ops::Neg<Output = T> + Clone,
        {
            type Output = $ty;

            fn neg(self) -> $ty { -self.clone() }
        }
    };
    (@misc [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> num_traits::Zero for $ty
        where
            T: num_traits::Zero + core::ops::AddAssign,
        {
            fn zero() -> Self { Self::from_fn(|_| T::zero()) }

            fn is_zero(&self) -> bool { self.iter().all(num_traits::Zero::is_zero) }
        }

        impl<$($gen)*> std::fmt::Display for $ty
        where
            T: std::fmt::Display,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (i, c) in self.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }

        impl<$($gen)*> approx::AbsDiffEq for $ty
        where
            T: approx::AbsDiffEq,
            T::Epsilon: Clone,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon.clone()))
            }
        }

        impl<$($gen)*> approx::RelativeEq for $ty
        where
            T: approx::RelativeEq,
            T::Epsilon: Clone,
        {
            fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(a, b)| {
                        approx::RelativeEq::relative_eq(a, b, epsilon.clone(), max_relative.clone())
                    })
            }
        }

        impl<$($gen)*> approx::UlpsEq for $ty
        where
            T: approx::UlpsEq,
            T::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 { T::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon.clone(), max_ulps))
            }
        }
    };
}

/// Implements `scalar * vector` for the primitive scalar types.
///
/// The orphan rule forbids a blanket `impl<T> Mul<Vector2<T>> for T`, so
/// every primitive is listed explicitly. The product equals `vector *
/// scalar`.
macro_rules! impl_scalar_lhs_mul {
    ($($s:ty),* $(,)?) => {
        $(
            impl core::ops::Mul<Vector2<$s>> for $s {
                type Output = Vector2<$s>;

                fn mul(self, rhs: Vector2<$s>) -> Vector2<$s> { rhs * self }
            }

            impl<'a> core::ops::Mul<&'a Vector2<$s>> for $s {
                type Output = Vector2<$s>;

                fn mul(self, rhs: &'a Vector2<$s>) -> Vector2<$s> { rhs * self }
            }

            impl core::ops::Mul<Vector3<$s>> for $s {
                type Output = Vector3<$s>;

                fn mul(self, rhs: Vector3<$s>) -> Vector3<$s> { rhs * self }
            }

            impl<'a> core::ops::Mul<&'a Vector3<$s>> for $s {
                type Output = Vector3<$s>;

                fn mul(self, rhs: &'a Vector3<$s>) -> Vector3<$s> { rhs * self }
            }

            impl<const N: usize> core::ops::Mul<FixedVector<$s, N>> for $s {
                type Output = FixedVector<$s, N>;

                fn mul(self, rhs: FixedVector<$s, N>) -> FixedVector<$s, N> { rhs * self }
            }

            impl<'a, const N: usize> core::ops::Mul<&'a FixedVector<$s, N>> for $s {
                type Output = FixedVector<$s, N>;

                fn mul(self, rhs: &'a FixedVector<$s, N>) -> FixedVector<$s, N> { rhs * self }
            }
        )*
    };
}

mod error;
mod fixed;
#[cfg(any(feature = "bytemuck", feature = "glam"))]
mod interop;
pub mod ops;
mod scalar;
mod vec2;
mod vec3;

pub use error::*;
pub use fixed::*;
pub use ops::*;
pub use scalar::hypot3;
pub use vec2::*;
pub use vec3::*;

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Scalar type of a vector, i.e. the type its components are made of.
pub type Scalar<V> = <V as Index<usize>>::Output;

/// Capability shared by all fixed-size vectors.
///
/// Components are read and written through `Index`/`IndexMut` with indices
/// in `[0, SIZE)`; out-of-range indices panic.
pub trait VectorLike: Index<usize> + IndexMut<usize> {
    /// Number of components, fixed by the type.
    const SIZE: usize;

    /// Returns the number of components; always equal to [`Self::SIZE`].
    #[inline]
    fn size(&self) -> usize { Self::SIZE }
}

#[cold]
#[track_caller]
#[inline(never)]
pub(crate) fn index_out_of_range(index: usize, size: usize) -> ! {
    panic!("index {} out of range for vector of size {}", index, size)
}
