use crate::{hypot3, index_out_of_range, ops, VectorError, VectorLike};
use num_traits::Float;
use std::ops::{Index, IndexMut, MulAssign};

/// Vector with `N` components stored contiguously and addressed by index.
///
/// The dimension is part of the type. `FixedVector<T, 2>` and
/// `FixedVector<T, 3>` convert losslessly into [`Vector2`](crate::Vector2)
/// and [`Vector3`](crate::Vector3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedVector<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> FixedVector<T, N> {
    /// Number of components.
    pub const SIZE: usize = N;

    /// Creates a new vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self { Self(components) }

    /// Creates a vector with all components set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self(std::array::from_fn(|_| value.clone()))
    }

    /// Creates a vector whose component `i` is `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self { Self(std::array::from_fn(f)) }

    /// Applies `f` to every component.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FixedVector<U, N> { FixedVector(self.0.map(f)) }

    /// Unary plus: returns the vector itself.
    #[inline]
    pub const fn pos(&self) -> &Self { self }

    /// Returns the component at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

    /// Returns the component at `index` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.0.get_mut(index) }

    /// Iterates over the components in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Iterates mutably over the components in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Returns the components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns a reference to the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Converts the vector into the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0 }
}

impl<T: Float> FixedVector<T, 2> {
    /// Magnitude computed with [`Float::hypot`], as for
    /// [`Vector2`](crate::Vector2).
    pub fn magnitude(&self) -> T { ops::magnitude(self, T::hypot) }

    /// Unit vector computed with [`Float::hypot`].
    pub fn unit_vector(&self) -> Self
    where
        T: MulAssign,
    {
        ops::unit_vector(self, T::hypot)
    }
}

impl<T: Float> FixedVector<T, 3> {
    /// Magnitude computed with [`hypot3`], as for
    /// [`Vector3`](crate::Vector3).
    pub fn magnitude(&self) -> T { ops::magnitude(self, hypot3) }

    /// Unit vector computed with [`hypot3`].
    pub fn unit_vector(&self) -> Self
    where
        T: MulAssign,
    {
        ops::unit_vector(self, hypot3)
    }
}

impl<T: Default, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self { Self(std::array::from_fn(|_| T::default())) }
}

impl<T, const N: usize> VectorLike for FixedVector<T, N> {
    const SIZE: usize = N;
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.0.get(index) {
            Some(c) => c,
            None => index_out_of_range(index, N),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.0.get_mut(index) {
            Some(c) => c,
            None => index_out_of_range(index, N),
        }
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(components: [T; N]) -> Self { Self(components) }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    fn from(v: FixedVector<T, N>) -> Self { v.0 }
}

impl<'a, T: Clone, const N: usize> TryFrom<&'a [T]> for FixedVector<T, N> {
    type Error = VectorError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        if slice.len() != N {
            log::debug!(
                "Rejected a slice of {} components for a {}-component vector",
                slice.len(),
                N
            );
            return Err(VectorError::LengthMismatch {
                expected: N,
                actual: slice.len(),
            });
        }
        Ok(Self::from_fn(|i| slice[i].clone()))
    }
}

impl_vector_ops!([T, const N: usize] FixedVector<T, N>);

#[cfg(feature = "serde")]
mod serialization {
    use super::FixedVector;
    use serde::{
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };
    use std::{fmt, marker::PhantomData};

    impl<T: Serialize, const N: usize> Serialize for FixedVector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for c in &self.0 {
                tuple.serialize_element(c)?;
            }
            tuple.end()
        }
    }

    struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for ComponentsVisitor<T, N> {
        type Value = FixedVector<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a sequence of {} components", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut components = Vec::with_capacity(N);
            for i in 0..N {
                match seq.next_element()? {
                    Some(c) => components.push(c),
                    None => return Err(de::Error::invalid_length(i, &self)),
                }
            }
            match <[T; N]>::try_from(components) {
                Ok(array) => Ok(FixedVector(array)),
                Err(v) => Err(de::Error::invalid_length(v.len(), &self)),
            }
        }
    }

    impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, ComponentsVisitor::<T, N>(PhantomData))
        }
    }
}
