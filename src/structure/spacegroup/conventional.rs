use crate::{BadCellError, CellParams, Lattice};
use super::axes::Centering;
use super::point_group::Holohedry;

use crysym_array_types::V3;

/// Build a lattice in the standard orientation for its crystal system.
///
/// Parameters that the crystal system constrains to be equal are averaged,
/// and constrained angles are set exactly. `rhombohedral` selects
/// rhombohedral axes for trigonal cells, in which case `params` describe
/// the rhombohedral cell; otherwise trigonal cells use hexagonal axes.
pub fn conventional_lattice(
    params: &CellParams,
    holohedry: Holohedry,
    rhombohedral: bool,
) -> Result<Lattice, BadCellError>
{Ok({
    let [a, b, c] = params.lengths();
    let lattice = |rows: [[f64; 3]; 3]| Lattice::from_vectors(&[V3(rows[0]), V3(rows[1]), V3(rows[2])]);

    match holohedry {
        Holohedry::Triclinic => params.to_lattice()?,

        Holohedry::Monoclinic => {
            let (sin, cos) = params.beta.sin_cos();
            lattice([[a, 0.0, 0.0], [0.0, b, 0.0], [c * cos, 0.0, c * sin]])
        },

        Holohedry::Orthorhombic => Lattice::orthorhombic(a, b, c),

        Holohedry::Tetragonal => {
            let ab = 0.5 * (a + b);
            Lattice::orthorhombic(ab, ab, c)
        },

        Holohedry::Trigonal if rhombohedral => {
            let edge = (a + b + c) / 3.0;
            let angle = params.angles().iter().sum::<f64>() / 3.0;
            let hex_a = 2.0 * edge * (0.5 * angle).sin();
            let hex_c = edge * (3.0 * (1.0 + 2.0 * angle.cos())).sqrt();
            if !(hex_c > 0.0) {
                throw!(BadCellError { params: *params });
            }
            hexagonal(hex_a, hex_c).change_basis(&Centering::R.to_primitive())
        },

        Holohedry::Trigonal | Holohedry::Hexagonal => hexagonal(0.5 * (a + b), c),

        Holohedry::Cubic => Lattice::cubic((a + b + c) / 3.0),
    }
})}

fn hexagonal(a: f64, c: f64) -> Lattice
{
    Lattice::from_vectors(&[
        V3([a, 0.0, 0.0]),
        V3([-0.5 * a, 0.5 * a * 3f64.sqrt(), 0.0]),
        V3([0.0, 0.0, c]),
    ])
}
