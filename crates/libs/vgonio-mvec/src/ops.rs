//! Algorithms generic over any [`VectorLike`] type.
//!
//! The magnitude is selected at compile time by the dimension of the vector
//! and the signature of the norm function:
//!
//! | vector                                 | norm function          | marker           |
//! |----------------------------------------|------------------------|------------------|
//! | `Vector2<T>`, `FixedVector<T, 2>`      | `FnOnce(T, T) -> T`    | [`Hypot2`]       |
//! | `Vector3<T>`, `FixedVector<T, 3>`      | `FnOnce(T, T, T) -> T` | [`Hypot3`]       |
//! | `FixedVector<T, N>` with `N >= 4`      | `FnOnce(T) -> T`       | [`SumOfSquares`] |
//!
//! The 2- and 3-component paths hand the raw components to the norm
//! function, so a hypotenuse-style function such as [`f64::hypot`] or
//! [`hypot3`](crate::hypot3) avoids the overflow of squaring. The general
//! path applies the function to the sum of squares and does not.

use crate::{
    scalar::{AssertComplex, AssertGeneralNorm},
    FixedVector, Scalar, Vector2, Vector3, VectorError, VectorLike,
};
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

/// Marker selecting the 2-argument norm function.
#[derive(Debug, Clone, Copy)]
pub struct Hypot2;

/// Marker selecting the 3-argument norm function.
#[derive(Debug, Clone, Copy)]
pub struct Hypot3;

/// Marker selecting the square-root-of-sum-of-squares norm.
#[derive(Debug, Clone, Copy)]
pub struct SumOfSquares;

/// Magnitude of a vector computed with the norm function `F`.
///
/// `M` is one of [`Hypot2`], [`Hypot3`] or [`SumOfSquares`]; it is never
/// written out, the compiler infers it from the signature of `F`.
pub trait Magnitude<F, M> {
    /// Result of the norm function.
    type Norm;

    /// Applies the norm function to the vector.
    fn magnitude_with(&self, f: F) -> Self::Norm;
}

impl<T: Clone, F: FnOnce(T, T) -> T> Magnitude<F, Hypot2> for Vector2<T> {
    type Norm = T;

    fn magnitude_with(&self, f: F) -> T { f(self.x.clone(), self.y.clone()) }
}

impl<T: Clone, F: FnOnce(T, T) -> T> Magnitude<F, Hypot2> for FixedVector<T, 2> {
    type Norm = T;

    fn magnitude_with(&self, f: F) -> T { f(self[0].clone(), self[1].clone()) }
}

impl<T: Clone, F: FnOnce(T, T, T) -> T> Magnitude<F, Hypot3> for Vector3<T> {
    type Norm = T;

    fn magnitude_with(&self, f: F) -> T { f(self.x.clone(), self.y.clone(), self.z.clone()) }
}

impl<T: Clone, F: FnOnce(T, T, T) -> T> Magnitude<F, Hypot3> for FixedVector<T, 3> {
    type Norm = T;

    fn magnitude_with(&self, f: F) -> T { f(self[0].clone(), self[1].clone(), self[2].clone()) }
}

impl<T, F, const N: usize> Magnitude<F, SumOfSquares> for FixedVector<T, N>
where
    T: Zero + Clone + Mul<Output = T>,
    F: FnOnce(T) -> T,
{
    type Norm = T;

    fn magnitude_with(&self, f: F) -> T {
        let () = AssertGeneralNorm::<N>::OK;
        f(dot_product(self, self))
    }
}

/// Shorthand for the norm type produced by `V` with the function `F`.
type Norm<V, F, M> = <V as Magnitude<F, M>>::Norm;

/// Sum of the products of the components of `a` and `b`.
///
/// Defined for any dimension; the accumulator starts at the scalar's zero.
pub fn dot_product<V>(a: &V, b: &V) -> Scalar<V>
where
    V: VectorLike + ?Sized,
    Scalar<V>: Zero + Clone + Mul<Output = Scalar<V>>,
{
    (0..V::SIZE).fold(<Scalar<V> as Zero>::zero(), |acc, i| {
        acc + a[i].clone() * b[i].clone()
    })
}

/// Magnitude of `v` under the norm function `f`.
///
/// ```
/// use vgonio_mvec::{hypot3, magnitude, FixedVector, Vector2, Vector3};
///
/// assert_eq!(magnitude(&Vector2::new(3.0f64, 4.0), f64::hypot), 5.0);
/// assert!((magnitude(&Vector3::new(2.0f64, 3.0, 6.0), hypot3) - 7.0).abs() < 1e-12);
/// assert_eq!(magnitude(&FixedVector::new([1.0f64, 1.0, 1.0, 1.0]), f64::sqrt), 2.0);
/// ```
///
/// Vectors with 2 or 3 components only accept a multi-argument norm
/// function:
///
/// ```compile_fail,E0080
/// use vgonio_mvec::{magnitude, FixedVector};
///
/// let _ = magnitude(&FixedVector::new([3.0f64, 4.0, 0.0]), f64::sqrt);
/// ```
///
/// ```compile_fail,E0080
/// use vgonio_mvec::{magnitude, FixedVector};
///
/// let _ = magnitude(&FixedVector::new([3.0f64, 4.0]), f64::sqrt);
/// ```
pub fn magnitude<V, F, M>(v: &V, f: F) -> Norm<V, F, M>
where
    V: Magnitude<F, M> + ?Sized,
{
    v.magnitude_with(f)
}

/// Returns `v * (1 / magnitude(v, f))`.
///
/// A zero vector follows the scalar's division: floating-point components
/// become NaN, integer scalars panic. See [`try_unit_vector`] for the
/// checked variant.
pub fn unit_vector<V, F, M>(v: &V, f: F) -> V
where
    V: Magnitude<F, M> + Clone + Mul<Norm<V, F, M>, Output = V>,
    Norm<V, F, M>: One + Div<Output = Norm<V, F, M>>,
{
    let m = v.magnitude_with(f);
    v.clone() * (<Norm<V, F, M> as One>::one() / m)
}

/// Checked [`unit_vector`]: fails with [`VectorError::Degenerate`] instead
/// of dividing by a zero magnitude.
pub fn try_unit_vector<V, F, M>(v: &V, f: F) -> Result<V, VectorError>
where
    V: Magnitude<F, M> + Clone + Mul<Norm<V, F, M>, Output = V>,
    Norm<V, F, M>: Zero + One + Div<Output = Norm<V, F, M>>,
{
    let m = v.magnitude_with(f);
    if m.is_zero() {
        log::debug!("Rejected normalization of a zero-magnitude vector");
        return Err(VectorError::Degenerate);
    }
    Ok(v.clone() * (<Norm<V, F, M> as One>::one() / m))
}

/// Cosine of the angle between `a` and `b`, `dot(a, b) / (|a| |b|)`, with
/// both magnitudes computed by `f`.
pub fn cosine_between<V, F, M>(a: &V, b: &V, f: F) -> Scalar<V>
where
    V: VectorLike + Magnitude<F, M, Norm = Scalar<V>>,
    Scalar<V>: Zero + Clone + Mul<Output = Scalar<V>> + Div<Output = Scalar<V>>,
    F: Copy,
{
    dot_product(a, b) / (a.magnitude_with(f) * b.magnitude_with(f))
}

/// Product of two 2-component vectors read as complex numbers `x + yi`.
///
/// Returns `(a.x * b.x - a.y * b.y, a.x * b.y + b.x * a.y)`. Using this on
/// a vector type with a dimension other than 2 fails to compile.
///
/// ```
/// use vgonio_mvec::{complex_multiplication, Vector2};
///
/// let p = complex_multiplication(&Vector2::new(1, 2), &Vector2::new(3, 4));
/// assert_eq!(p, Vector2::new(-5, 10));
/// ```
///
/// ```compile_fail,E0080
/// use vgonio_mvec::{complex_multiplication, Vector3};
///
/// let _ = complex_multiplication(&Vector3::new(1, 2, 3), &Vector3::new(4, 5, 6));
/// ```
///
/// ```compile_fail,E0080
/// use vgonio_mvec::{complex_multiplication, FixedVector};
///
/// let _ = complex_multiplication(&FixedVector::new([1, 2, 3, 4]), &FixedVector::new([1, 0, 0, 0]));
/// ```
pub fn complex_multiplication<V>(a: &V, b: &V) -> V
where
    V: VectorLike + Clone,
    Scalar<V>: Clone
        + Add<Output = Scalar<V>>
        + Sub<Output = Scalar<V>>
        + Mul<Output = Scalar<V>>,
{
    let () = AssertComplex::<V>::OK;
    let re = a[0].clone() * b[0].clone() - a[1].clone() * b[1].clone();
    let im = a[0].clone() * b[1].clone() + b[0].clone() * a[1].clone();
    let mut product = a.clone();
    product[0] = re;
    product[1] = im;
    product
}
