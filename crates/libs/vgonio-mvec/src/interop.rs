//! Integration with the `bytemuck` and `glam` crates.

#[cfg(feature = "bytemuck")]
mod pod {
    use crate::{FixedVector, Vector2, Vector3};

    // All components share one type, so the `repr(C)` structs have no padding.
    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector2<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector2<T> {}

    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector3<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector3<T> {}

    unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for FixedVector<T, N> {}
    unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for FixedVector<T, N> {}
}

#[cfg(feature = "glam")]
mod glam_conv {
    use crate::{FixedVector, Vector2, Vector3};

    macro_rules! impl_glam_conversions {
        (@fixed $glam:ty, $t:ty, $n:literal) => {
            impl From<$glam> for FixedVector<$t, $n> {
                fn from(v: $glam) -> Self { FixedVector::new(v.to_array()) }
            }

            impl From<FixedVector<$t, $n>> for $glam {
                fn from(v: FixedVector<$t, $n>) -> Self { <$glam>::from_array(v.into_array()) }
            }
        };
        ($($glam:ty => $named:ident<$t:ty>, $n:literal);* $(;)?) => {
            $(
                impl From<$glam> for $named<$t> {
                    fn from(v: $glam) -> Self { Self::from(v.to_array()) }
                }

                impl From<$named<$t>> for $glam {
                    fn from(v: $named<$t>) -> Self { <$glam>::from_array(v.to_array()) }
                }

                impl_glam_conversions!(@fixed $glam, $t, $n);
            )*
        };
    }

    impl_glam_conversions!(
        glam::Vec2 => Vector2<f32>, 2;
        glam::DVec2 => Vector2<f64>, 2;
        glam::IVec2 => Vector2<i32>, 2;
        glam::Vec3 => Vector3<f32>, 3;
        glam::DVec3 => Vector3<f64>, 3;
        glam::IVec3 => Vector3<i32>, 3;
    );
    impl_glam_conversions!(@fixed glam::Vec4, f32, 4);
    impl_glam_conversions!(@fixed glam::DVec4, f64, 4);
}
