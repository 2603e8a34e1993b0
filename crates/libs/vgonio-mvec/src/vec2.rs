use crate::{index_out_of_range, ops, FixedVector, VectorError, VectorLike};
use num_traits::Float;
use std::ops::{Index, IndexMut, MulAssign};

/// Vector with two components accessible both by name (`x`, `y`) and by
/// index (`0`, `1`).
///
/// Named and indexed access read and write the same fields. Every trait
/// implemented by the vector (`Clone`, `Copy`, `Default`, `Eq`, ...) is
/// implemented exactly when the scalar type implements it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

impl<T> Vector2<T> {
    /// Number of components.
    pub const SIZE: usize = 2;

    /// Creates a new vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Creates a vector with all components set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Creates a vector whose component `i` is `f(i)`.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let x = f(0);
        let y = f(1);
        Self { x, y }
    }

    /// Applies `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector2<U> { Vector2::new(f(self.x), f(self.y)) }

    /// Unary plus: returns the vector itself.
    #[inline]
    pub const fn pos(&self) -> &Self { self }

    /// Returns the component at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.x),
            1 => Some(&self.y),
            _ => None,
        }
    }

    /// Returns the component at `index` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            _ => None,
        }
    }

    /// Iterates over the components in index order.
    pub fn iter(&self) -> std::array::IntoIter<&T, 2> { [&self.x, &self.y].into_iter() }

    /// Iterates mutably over the components in index order.
    pub fn iter_mut(&mut self) -> std::array::IntoIter<&mut T, 2> {
        [&mut self.x, &mut self.y].into_iter()
    }

    /// Converts the vector into an array of its components.
    #[inline]
    pub fn to_array(self) -> [T; 2] { [self.x, self.y] }
}

impl<T: Float> Vector2<T> {
    /// Magnitude computed with [`Float::hypot`].
    ///
    /// Same as `magnitude(self, T::hypot)`.
    pub fn magnitude(&self) -> T { ops::magnitude(self, T::hypot) }

    /// Unit vector computed with [`Float::hypot`].
    ///
    /// Same as `unit_vector(self, T::hypot)`. A zero vector yields NaN
    /// components.
    pub fn unit_vector(&self) -> Self
    where
        T: MulAssign,
    {
        ops::unit_vector(self, T::hypot)
    }
}

impl<T> VectorLike for Vector2<T> {
    const SIZE: usize = 2;
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => index_out_of_range(index, Self::SIZE),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => index_out_of_range(index, Self::SIZE),
        }
    }
}

impl<T> IntoIterator for Vector2<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter { self.to_array().into_iter() }
}

impl<'a, T> IntoIterator for &'a Vector2<T> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 2>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Vector2<T> {
    type Item = &'a mut T;
    type IntoIter = std::array::IntoIter<&'a mut T, 2>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self { Self::new(x, y) }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self { v.to_array() }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self { Self::new(x, y) }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self { (v.x, v.y) }
}

impl<T> From<FixedVector<T, 2>> for Vector2<T> {
    fn from(v: FixedVector<T, 2>) -> Self { Self::from(v.into_array()) }
}

impl<T> From<Vector2<T>> for FixedVector<T, 2> {
    fn from(v: Vector2<T>) -> Self { FixedVector::new(v.to_array()) }
}

impl<'a, T: Clone> TryFrom<&'a [T]> for Vector2<T> {
    type Error = VectorError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        FixedVector::<T, 2>::try_from(slice).map(Self::from)
    }
}

impl_vector_ops!([T] Vector2<T>);
