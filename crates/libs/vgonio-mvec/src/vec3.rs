use crate::{hypot3, index_out_of_range, ops, FixedVector, VectorError, VectorLike};
use num_traits::Float;
use std::ops::{Index, IndexMut, MulAssign};

/// Vector with three components accessible both by name (`x`, `y`, `z`)
/// and by index (`0`, `1`, `2`).
///
/// See [`Vector2`](crate::Vector2) for the guarantees shared by all vector
/// types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Number of components.
    pub const SIZE: usize = 3;

    /// Creates a new vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    /// Creates a vector with all components set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value.clone(), value)
    }

    /// Creates a vector whose component `i` is `f(i)`.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Self { x, y, z }
    }

    /// Applies `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector3<U> {
        let x = f(self.x);
        let y = f(self.y);
        let z = f(self.z);
        Vector3::new(x, y, z)
    }

    /// Unary plus: returns the vector itself.
    #[inline]
    pub const fn pos(&self) -> &Self { self }

    /// Returns the component at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }

    /// Returns the component at `index` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }

    /// Iterates over the components in index order.
    pub fn iter(&self) -> std::array::IntoIter<&T, 3> { [&self.x, &self.y, &self.z].into_iter() }

    /// Iterates mutably over the components in index order.
    pub fn iter_mut(&mut self) -> std::array::IntoIter<&mut T, 3> {
        [&mut self.x, &mut self.y, &mut self.z].into_iter()
    }

    /// Converts the vector into an array of its components.
    #[inline]
    pub fn to_array(self) -> [T; 3] { [self.x, self.y, self.z] }
}

impl<T: Float> Vector3<T> {
    /// Magnitude computed with [`hypot3`].
    pub fn magnitude(&self) -> T { ops::magnitude(self, hypot3) }

    /// Unit vector computed with [`hypot3`].
    ///
    /// A zero vector yields NaN components.
    pub fn unit_vector(&self) -> Self
    where
        T: MulAssign,
    {
        ops::unit_vector(self, hypot3)
    }
}

impl<T> VectorLike for Vector3<T> {
    const SIZE: usize = 3;
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => index_out_of_range(index, Self::SIZE),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => index_out_of_range(index, Self::SIZE),
        }
    }
}

impl<T> IntoIterator for Vector3<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 3>;

    fn into_iter(self) -> Self::IntoIter { self.to_array().into_iter() }
}

impl<'a, T> IntoIterator for &'a Vector3<T> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 3>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Vector3<T> {
    type Item = &'a mut T;
    type IntoIter = std::array::IntoIter<&'a mut T, 3>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self { Self::new(x, y, z) }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self { v.to_array() }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self { Self::new(x, y, z) }
}

impl<T> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self { (v.x, v.y, v.z) }
}

impl<T> From<FixedVector<T, 3>> for Vector3<T> {
    fn from(v: FixedVector<T, 3>) -> Self { Self::from(v.into_array()) }
}

impl<T> From<Vector3<T>> for FixedVector<T, 3> {
    fn from(v: Vector3<T>) -> Self { FixedVector::new(v.to_array()) }
}

impl<'a, T: Clone> TryFrom<&'a [T]> for Vector3<T> {
    type Error = VectorError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        FixedVector::<T, 3>::try_from(slice).map(Self::from)
    }
}

impl_vector_ops!([T] Vector3<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use num_traits::Zero;
    use proptest::prelude::*;
    use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

    assert_eq_size!(Vector3<f64>, [f64; 3]);
    assert_impl_all!(Vector3<f32>: Copy, Default, PartialEq, VectorLike);
    assert_impl_all!(Vector3<u64>: Eq, std::hash::Hash);
    assert_impl_all!(Vector3<Vec<u8>>: Clone, Default);
    assert_not_impl_any!(Vector3<Vec<u8>>: Copy);
    assert_impl_all!(Vector3<std::sync::Mutex<u8>>: Default, Send, Sync);
    assert_not_impl_any!(Vector3<std::sync::Mutex<u8>>: Clone, Copy, PartialEq);

    fn vec3() -> impl Strategy<Value = Vector3<i32>> {
        (any::<i16>(), any::<i16>(), any::<i16>())
            .prop_map(|(x, y, z)| Vector3::new(x.into(), y.into(), z.into()))
    }

    #[test]
    fn vec3_indexing() {
        let v = Vector3::new(7, 8, 9);
        assert_eq!([v[0], v[1], v[2]], [7, 8, 9]);
        assert_eq!(v.get(3), None);
        assert_eq!(v.size(), 3);
        assert_eq!(Vector3::<u8>::SIZE, 3);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for vector of size 3")]
    fn vec3_index_out_of_range() {
        let v = Vector3::new(7, 8, 9);
        let _ = v[3];
    }

    #[test]
    fn vec3_indexed_writes_reach_fields() {
        let mut v = Vector3::<i64>::default();
        for i in 0..3 {
            v[i] = i as i64 + 1;
        }
        assert_eq!((v.x, v.y, v.z), (1, 2, 3));
        v.z = 30;
        assert_eq!(v[2], 30);
        *v.get_mut(0).unwrap() = 10;
        assert_eq!(v, Vector3::new(10, 2, 30));
    }

    #[test]
    fn vec3_operators() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);
        assert_eq!(a + b, Vector3::new(5, 7, 9));
        assert_eq!(b - a, Vector3::new(3, 3, 3));
        assert_eq!(a * 2, Vector3::new(2, 4, 6));
        assert_eq!(2i32 * a, a * 2);
        assert_eq!(-a, Vector3::new(-1, -2, -3));
        assert_eq!(*a.pos(), a);
        assert_eq!(&a + &b, a + b);

        let mut c = a;
        c += b;
        c -= Vector3::splat(1);
        c *= 10;
        assert_eq!(c, Vector3::new(40, 60, 80));
        assert_ne!(c, a);
    }

    #[test]
    fn vec3_conversions() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::from((1, 2, 3)), Vector3::new(1, 2, 3));
        assert_eq!(<(u8, u8, u8)>::from(Vector3::new(1, 2, 3)), (1, 2, 3));
        assert_eq!(Vector3::from(FixedVector::new([4, 5, 6])), Vector3::new(4, 5, 6));
        assert_eq!(FixedVector::from(Vector3::new(4, 5, 6)), FixedVector::new([4, 5, 6]));
        assert_eq!(
            Vector3::<i32>::try_from(&[1, 2][..]),
            Err(VectorError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(Vector3::from_fn(|i| i as u8), Vector3::new(0, 1, 2));
        assert_eq!(Vector3::new(1, 2, 3).map(|c| c * 2), Vector3::new(2, 4, 6));
        assert_eq!(Vector3::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn vec3_float_conveniences() {
        let v = Vector3::new(2.0f64, 3.0, 6.0);
        assert_relative_eq!(v.magnitude(), 7.0, max_relative = 1.0e-12);
        assert_eq!(v.magnitude(), ops::magnitude(&v, hypot3));
        assert_eq!(v.unit_vector(), ops::unit_vector(&v, hypot3));
        assert_relative_eq!(
            v.unit_vector(),
            Vector3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0),
            max_relative = 1.0e-12
        );

        let big = Vector3::splat(f64::MAX / 4.0);
        assert!(big.magnitude().is_finite());
        assert_relative_eq!(big.unit_vector().magnitude(), 1.0, max_relative = 1.0e-12);

        let f = Vector3::new(1.0f32, -2.0, 2.0);
        assert_abs_diff_eq!(f.magnitude(), 3.0, epsilon = 1.0e-6);
    }

    proptest! {
        #[test]
        fn vec3_addition_laws(a in vec3(), b in vec3(), c in vec3()) {
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!(a + (-a), Vector3::zero());
            prop_assert_eq!(-(-a), a);
            prop_assert_eq!(a + (-a) - (-a), a);
        }

        #[test]
        fn vec3_scaling_distributes(a in vec3(), b in vec3(), s in -100i32..100) {
            prop_assert_eq!((a + b) * s, a * s + b * s);
            prop_assert_eq!(s * a, a * s);
        }

        #[test]
        fn vec3_unit_vector_has_unit_length(
            x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6, z in -1.0e6f64..1.0e6
        ) {
            let v = Vector3::new(x, y, z);
            prop_assume!(v.magnitude() > 1.0e-6);
            prop_assert!(approx::relative_eq!(v.unit_vector().magnitude(), 1.0, max_relative = 1.0e-12));
        }
    }
}
