pub(crate) mod lattice;
pub(crate) mod params;
pub(crate) mod atoms;
pub(crate) mod structure;
