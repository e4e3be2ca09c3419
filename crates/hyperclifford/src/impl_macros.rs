/// Forwards a binary operator on owned operands (in any combination) to the
/// implementation on two references.
macro_rules! impl_forward_bin_ops_to_ref {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl $trait<$type> for $type {
            type Output = $type;

            #[track_caller]
            fn $func(self, rhs: $type) -> $type {
                $trait::$func(&self, &rhs)
            }
        }
        impl<'a> $trait<$type> for &'a $type {
            type Output = $type;

            #[track_caller]
            fn $func(self, rhs: $type) -> $type {
                $trait::$func(self, &rhs)
            }
        }
        impl<'a> $trait<&'a $type> for $type {
            type Output = $type;

            #[track_caller]
            fn $func(self, rhs: &'a $type) -> $type {
                $trait::$func(&self, rhs)
            }
        }
        impl_forward_bin_ops_to_ref! { $($remainder)* }
    };
}

/// Implements `scalar * x` for both owned and borrowed `x` by forwarding to
/// `x * scalar`.
macro_rules! impl_commuted_scalar_mul {
    (impl Mul<$type:ty> for $scalar:ty) => {
        impl std::ops::Mul<$type> for $scalar {
            type Output = $type;

            fn mul(self, rhs: $type) -> $type {
                rhs * self
            }
        }
        impl<'a> std::ops::Mul<&'a $type> for $scalar {
            type Output = $type;

            fn mul(self, rhs: &'a $type) -> $type {
                rhs * self
            }
        }
    };
}
