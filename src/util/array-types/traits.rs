// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign};
use num_traits::{Zero, One};

pub use self::semiring::Semiring;
mod semiring {
    use super::*;

    /// Trait for scalars with addition and multiplication.
    ///
    /// You get primitive floats and integers.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring
        : Sealed + Sized + Copy + Default + PartialEq + PartialOrd
        + Add<Output=Self> + Mul<Output=Self> + AddAssign
        + Zero + One + std::iter::Sum
    { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::*;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed. It doesn't include unsigned integers because
    /// a ring must be closed under negation.
    pub trait Ring
        : Semiring + Sealed
        + Sub<Output=Self> + Neg<Output=Self> + SubAssign
    { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::*;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This trait is sealed. It is just primitive, real floating point types.
    pub trait Field: Ring + Sealed + Div<Output=Self> {
        #[doc(hidden)] fn sqrt(self) -> Self;
    }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

macro_rules! impl_field {
    ($T:ty) => {
        impl Field for $T {
            #[inline(always)] fn sqrt(self) -> $T { <$T>::sqrt(self) }
        }
        impl field::Sealed for $T { }
    };
}

macro_rules! impl_ring {
    ($T:ty) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

macro_rules! impl_semiring {
    ($T:ty) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

each_field!{impl_field}
each_ring!{impl_ring}
each_semiring!{impl_semiring}
