// Expands a macro body once per listed type.
//
// Unlike a cartesian product macro, this only supports a single list,
// which is all that the impls in this crate need.
macro_rules! each_type {
    ([$($item:tt)*] $mac:ident) => {
        $( $mac!$item; )*
    };
}

// Standard "scalar type" lists that define the members of the opaque traits.
macro_rules! each_field {
    ($mac:ident) => { each_type!{[ (f32) (f64) ] $mac} };
}

macro_rules! each_ring {
    ($mac:ident) => { each_type!{[ (f32) (f64) (i8) (i16) (i32) (i64) (isize) ] $mac} };
}

macro_rules! each_semiring {
    ($mac:ident) => { each_type!{[
        (f32) (f64)
        (i8) (i16) (i32) (i64) (isize)
        (u8) (u16) (u32) (u64) (usize)
    ] $mac} };
}
