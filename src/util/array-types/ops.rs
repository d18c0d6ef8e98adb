use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

use crate::traits::{Semiring, Ring, Field};
use crate::types::*;
use crate::{vee, mat};

// Generates all four combinations of owned and borrowed operands.
// The body always sees both operands as references.
macro_rules! impl_binop {
    (
        [$($gen:tt)*]
        $Trait:ident::$method:ident($A:ty, $B:ty) -> $Out:ty
        { |$a:ident, $b:ident| $body:expr }
    ) => {
        impl<$($gen)*> $Trait<$B> for $A {
            type Output = $Out;

            #[inline]
            fn $method(self, $b: $B) -> $Out
            { let $a = &self; let $b = &$b; $body }
        }

        impl<'b, $($gen)*> $Trait<&'b $B> for $A {
            type Output = $Out;

            #[inline]
            fn $method(self, $b: &'b $B) -> $Out
            { let $a = &self; $body }
        }

        impl<'a, $($gen)*> $Trait<$B> for &'a $A {
            type Output = $Out;

            #[inline]
            fn $method(self, $b: $B) -> $Out
            { let $a = self; let $b = &$b; $body }
        }

        impl<'a, 'b, $($gen)*> $Trait<&'b $B> for &'a $A {
            type Output = $Out;

            #[inline]
            fn $method(self, $b: &'b $B) -> $Out
            { let $a = self; $body }
        }
    };
}

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
impl_binop!{
    [X: Semiring] Add::add(V3<X>, V3<X>) -> V3<X>
    { |a, b| vee::from_fn(|k| a[k] + b[k]) }
}

impl_binop!{
    [X: Ring] Sub::sub(V3<X>, V3<X>) -> V3<X>
    { |a, b| vee::from_fn(|k| a[k] - b[k]) }
}

impl<X: Ring> Neg for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> V3<X>
    { vee::from_fn(|k| -self[k]) }
}

impl<'a, X: Ring> Neg for &'a V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> V3<X>
    { vee::from_fn(|k| -self[k]) }
}

impl<X: Semiring> AddAssign for V3<X> {
    #[inline]
    fn add_assign(&mut self, other: V3<X>)
    { for k in 0..3 { self[k] += other[k]; } }
}

impl<'b, X: Semiring> AddAssign<&'b V3<X>> for V3<X> {
    #[inline]
    fn add_assign(&mut self, other: &'b V3<X>)
    { for k in 0..3 { self[k] += other[k]; } }
}

impl<X: Ring> SubAssign for V3<X> {
    #[inline]
    fn sub_assign(&mut self, other: V3<X>)
    { for k in 0..3 { self[k] -= other[k]; } }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

impl<X: Semiring> Mul<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, scalar: X) -> V3<X>
    { vee::from_fn(|k| self[k] * scalar) }
}

impl<'a, X: Semiring> Mul<X> for &'a V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, scalar: X) -> V3<X>
    { vee::from_fn(|k| self[k] * scalar) }
}

impl<X: Field> Div<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn div(self, scalar: X) -> V3<X>
    { vee::from_fn(|k| self[k] / scalar) }
}

impl<'a, X: Field> Div<X> for &'a V3<X> {
    type Output = V3<X>;

    #[inline]
    fn div(self, scalar: X) -> V3<X>
    { vee::from_fn(|k| self[k] / scalar) }
}

impl<X: Semiring> MulAssign<X> for V3<X> {
    #[inline]
    fn mul_assign(&mut self, scalar: X)
    { *self = *self * scalar; }
}

// scalar * vector, scalar * matrix
//
// The orphan rules prevent us from impl-ing these ops "for X" so
// we must generate a separate impl for each Semiring type.
macro_rules! impl_scalar_lhs {
    ($X:ty) => {
        impl Mul<V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, vector: V3<$X>) -> V3<$X>
            { vector * self }
        }

        impl<'a> Mul<&'a V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, vector: &'a V3<$X>) -> V3<$X>
            { vector * self }
        }

        impl Mul<M33<$X>> for $X {
            type Output = M33<$X>;

            #[inline(always)]
            fn mul(self, matrix: M33<$X>) -> M33<$X>
            { matrix * self }
        }
    };
}

each_semiring!{impl_scalar_lhs}

// ---------------------------------------------------------------------------
// matrix-matrix and matrix-scalar ops

impl_binop!{
    [X: Semiring] Add::add(M33<X>, M33<X>) -> M33<X>
    { |a, b| M3([a[0] + b[0], a[1] + b[1], a[2] + b[2]]) }
}

impl_binop!{
    [X: Ring] Sub::sub(M33<X>, M33<X>) -> M33<X>
    { |a, b| M3([a[0] - b[0], a[1] - b[1], a[2] - b[2]]) }
}

impl<X: Ring> Neg for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn neg(self) -> M33<X>
    { M3([-self[0], -self[1], -self[2]]) }
}

impl<'a, X: Ring> Neg for &'a M33<X> {
    type Output = M33<X>;

    #[inline]
    fn neg(self) -> M33<X>
    { M3([-self[0], -self[1], -self[2]]) }
}

impl<X: Semiring> Mul<X> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn mul(self, scalar: X) -> M33<X>
    { M3([self[0] * scalar, self[1] * scalar, self[2] * scalar]) }
}

impl<'a, X: Semiring> Mul<X> for &'a M33<X> {
    type Output = M33<X>;

    #[inline]
    fn mul(self, scalar: X) -> M33<X>
    { M3([self[0] * scalar, self[1] * scalar, self[2] * scalar]) }
}

impl<X: Field> Div<X> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn div(self, scalar: X) -> M33<X>
    { M3([self[0] / scalar, self[1] / scalar, self[2] / scalar]) }
}

// matrix * matrix
impl_binop!{
    [X: Semiring] Mul::mul(M33<X>, M33<X>) -> M33<X>
    { |a, b| mat::from_fn(|r, c| (0..3).map(|k| a[r][k] * b[k][c]).sum()) }
}

// matrix * column vector
impl_binop!{
    [X: Semiring] Mul::mul(M33<X>, V3<X>) -> V3<X>
    { |m, v| vee::from_fn(|r| vee::dot(&m[r], v)) }
}

// row vector * matrix
impl_binop!{
    [X: Semiring] Mul::mul(V3<X>, M33<X>) -> V3<X>
    { |v, m| vee::from_fn(|c| (0..3).map(|k| v[k] * m[k][c]).sum()) }
}
