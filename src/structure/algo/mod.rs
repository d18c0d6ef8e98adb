pub(crate) mod fuzz;
pub(crate) mod niggli;
pub(crate) mod delaunay;
pub(crate) mod overlap;
pub(crate) mod primitive;
pub(crate) mod rotations;
pub(crate) mod symmetry_ops;

pub(crate) mod group;
