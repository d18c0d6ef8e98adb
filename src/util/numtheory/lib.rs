/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use num_integer::Integer;
use num_traits::{PrimInt, Signed};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GcdData<X> {
    // greatest common divisor
    pub gcd: X,
    // bezout coefficients
    pub coeffs: (X, X),
    // quotients of the inputs by the GCD
    pub quotients: (X, X),
}

// NOTE:
//  The Signed bound is unavoidable for Extended GCD because the Bezout
//  coefficients can be negative.
#[allow(non_snake_case)]
#[inline(always)]
fn extended_gcd__inline<X>(a: X, b: X) -> GcdData<X>
where
    X: PrimInt + Integer + Signed,
{
    let (a_sign, a) = (a.signum(), a.abs());
    let (b_sign, b) = (b.signum(), b.abs());

    // Order is (old, current).
    let mut s = (X::one(),  X::zero()); // a coefficient
    let mut t = (X::zero(), X::one());  // b coefficient
    let mut r = (a, b); // gcd
    while r.1 != X::zero() {
        let (div, rem) = (r.0 / r.1, r.0 % r.1);
        r = (r.1, rem);
        s = (s.1, s.0 - div * s.1);
        t = (t.1, t.0 - div * t.1);
    }

    GcdData {
        gcd: r.0,
        coeffs: (a_sign * s.0, b_sign * t.0),
        quotients: (a_sign * t.1.abs(), b_sign * s.1.abs()),
    }
}

/// Compute a greatest common divisor with Bezout coefficients.
///
/// `a * coeffs.0 + b * coeffs.1 == gcd`.
pub fn extended_gcd<X>(a: X, b: X) -> GcdData<X>
where
    X: PrimInt + Integer + Signed,
{ extended_gcd__inline(a, b) }

/// Compute a (non-negative) greatest common divisor.
pub fn gcd<X>(a: X, b: X) -> X
where
    X: PrimInt + Integer + Signed,
{ extended_gcd__inline(a, b).gcd }

/// Greatest common divisor of many integers.
///
/// Zero for an empty input (or one that is all zeros).
pub fn gcd_all<X, I>(values: I) -> X
where
    X: PrimInt + Integer + Signed,
    I: IntoIterator<Item=X>,
{ values.into_iter().fold(X::zero(), |acc, x| gcd(acc, x)) }
