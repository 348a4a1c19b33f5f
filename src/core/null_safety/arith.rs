//! Checked arithmetic used by the `null_safe_*` operators.
//!
//! Every operation returns `None` instead of overflowing or dividing by zero,
//! so the operators built on top stay total.

/// Numeric types the null-safe operators accept.
pub trait NullSafeNum: Copy + PartialEq {
    const ZERO: Self;

    fn checked_add_val(self, v: Self) -> Option<Self>;
    fn checked_sub_val(self, v: Self) -> Option<Self>;
    fn checked_mul_val(self, v: Self) -> Option<Self>;
    /// `None` on a zero divisor as well as on overflow (`MIN / -1`).
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! null_safe_int {
    ($($t:ty),*) => {
        $(
            impl NullSafeNum for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }

                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }

                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }

                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_div(self, v)
                }
            }
        )*
    };
}

macro_rules! null_safe_float {
    ($($t:ty),*) => {
        $(
            impl NullSafeNum for $t {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    Some(self + v)
                }

                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    Some(self - v)
                }

                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    Some(self * v)
                }

                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    if v == 0.0 {
                        None
                    } else {
                        Some(self / v)
                    }
                }
            }
        )*
    };
}

null_safe_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
null_safe_float!(f32, f64);
