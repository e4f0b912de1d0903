// src/numerics/types/ops.rs
// Operator and Display impls shared by the Vector2/3/4 family.
//
// Every arity gets the same component-wise surface, so it is generated from
// the field list instead of being written out three times.

macro_rules! impl_vector_ops {
    ($vector:ident { $( $field:ident ),+ }) => {
        impl<T: $crate::numerics::types::traits::FloatingPoint> Default for $vector<T> {
            fn default() -> Self {
                Self { $( $field: T::zero() ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Add for $vector<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $( $field: self.$field + other.$field ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Sub for $vector<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $( $field: self.$field - other.$field ),+ }
            }
        }

        // Component-wise product.
        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Mul for $vector<T> {
            type Output = Self;

            fn mul(self, other: Self) -> Self {
                Self { $( $field: self.$field * other.$field ),+ }
            }
        }

        // Component-wise quotient, IEEE semantics for zero divisors.
        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Div for $vector<T> {
            type Output = Self;

            fn div(self, other: Self) -> Self {
                Self { $( $field: self.$field / other.$field ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Mul<T> for $vector<T> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                Self { $( $field: self.$field * scalar ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Div<T> for $vector<T> {
            type Output = Self;

            fn div(self, scalar: T) -> Self {
                Self { $( $field: self.$field / scalar ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::Neg for $vector<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $( $field: -self.$field ),+ }
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::AddAssign for $vector<T> {
            fn add_assign(&mut self, other: Self) {
                $( self.$field = self.$field + other.$field; )+
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::SubAssign for $vector<T> {
            fn sub_assign(&mut self, other: Self) {
                $( self.$field = self.$field - other.$field; )+
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::MulAssign for $vector<T> {
            fn mul_assign(&mut self, other: Self) {
                $( self.$field = self.$field * other.$field; )+
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::DivAssign for $vector<T> {
            fn div_assign(&mut self, other: Self) {
                $( self.$field = self.$field / other.$field; )+
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::MulAssign<T> for $vector<T> {
            fn mul_assign(&mut self, scalar: T) {
                $( self.$field = self.$field * scalar; )+
            }
        }

        impl<T: $crate::numerics::types::traits::FloatingPoint> core::ops::DivAssign<T> for $vector<T> {
            fn div_assign(&mut self, scalar: T) {
                $( self.$field = self.$field / scalar; )+
            }
        }

        // Scalar on the left. Coherence rules out a generic `impl Mul<V<T>> for T`,
        // so each supported precision is spelled out.
        impl core::ops::Mul<$vector<f32>> for f32 {
            type Output = $vector<f32>;

            fn mul(self, vector: $vector<f32>) -> $vector<f32> {
                vector * self
            }
        }

        impl core::ops::Mul<$vector<f64>> for f64 {
            type Output = $vector<f64>;

            fn mul(self, vector: $vector<f64>) -> $vector<f64> {
                vector * self
            }
        }

        /// Renders as `(x, y, ..)`; format options such as precision apply to
        /// each component.
        impl<T: $crate::numerics::types::traits::FloatingPoint> core::fmt::Display for $vector<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("(")?;
                for (idx, component) in [$( self.$field ),+].iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    core::fmt::Display::fmt(component, f)?;
                }
                f.write_str(")")
            }
        }
    };
}

pub(crate) use impl_vector_ops;
