use crate::FailResult;
use crate::filetypes::structure::{LabeledStructure, lattice_rows, cell_doc};
use crate::filetypes::reports::{SpaceGroupReport, ReduceReport, LatticeReport};

use crysym_structure::{Lattice, delaunay_reduce_with_limit, niggli_reduce_with_limit};
use crysym_structure::spacegroup::SymmetrySearch;
use crysym_tasks_config::{Settings, StructureDoc};

fn search(settings: &Settings) -> SymmetrySearch
{
    SymmetrySearch {
        precision: settings.symmetry_precision,
        max_iterations: settings.max_iterations,
    }
}

fn no_atoms(structure: &LabeledStructure) -> FailResult<()>
{Ok({
    if structure.atoms().is_empty() {
        bail!("the structure has no atoms");
    }
})}

/// Determine the space group of a structure.
pub fn space_group_report(structure: &LabeledStructure, settings: &Settings) -> FailResult<SpaceGroupReport>
{Ok({
    no_atoms(structure)?;
    let found = match search(settings).space_group(structure.lattice(), structure.atoms()) {
        Some(found) => found,
        None => bail!(
            "no space group found; the structure may be distorted beyond \
             symmetry-precision ({})", settings.symmetry_precision,
        ),
    };
    let setting = found.setting();
    info!("space group {} ({}), Hall symbol '{}'", setting.number(), setting.hm_symbol(), setting.hall_symbol());

    SpaceGroupReport {
        number: setting.number(),
        hall_number: setting.hall_number(),
        hall_symbol: setting.hall_symbol().to_string(),
        hm_symbol: setting.hm_symbol().to_string(),
        schoenflies: setting.schoenflies(),
        point_group: setting.point_group().symbol().to_string(),
        crystal_system: setting.holohedry(),
        centering: setting.centering(),
        origin_shift: found.origin_shift().0,
        basis_change: found.basis().into_array(),
        transformation: found.transform().into_array(),
        conventional: structure.structure_doc(found.conventional_lattice(), found.conventional_atoms()),
        asymmetric_atoms: structure.atom_docs(found.asymmetric_atoms()),
    }
})}

/// The primitive cell of a structure, in the standard setting of its space group.
pub fn primitive_report(structure: &LabeledStructure, settings: &Settings) -> FailResult<StructureDoc>
{Ok({
    no_atoms(structure)?;
    let primitive = match search(settings).primitive(structure.lattice(), structure.atoms()) {
        Some(primitive) => primitive,
        None => bail!("no space group found, so there is no standard primitive cell"),
    };
    info!("primitive cell has {} of {} atoms", primitive.num_atoms(), structure.atoms().len());
    structure.structure_doc(primitive.lattice(), primitive.atoms())
})}

/// The Niggli-reduced primitive cell of a structure.
pub fn niggli_report(structure: &LabeledStructure, settings: &Settings) -> FailResult<StructureDoc>
{Ok({
    let niggli = match search(settings).niggli(structure.lattice(), structure.atoms()) {
        Some(niggli) => niggli,
        None => bail!("lattice reduction failed; the cell may be degenerate"),
    };
    structure.structure_doc(niggli.lattice(), niggli.atoms())
})}

/// Niggli and Delaunay reductions of the lattice alone.
pub fn reduce_report(structure: &LabeledStructure, settings: &Settings) -> FailResult<ReduceReport>
{Ok({
    let lattice = structure.lattice();
    let (eps, max_iter) = (settings.symmetry_precision, settings.max_iterations);

    let niggli = match niggli_reduce_with_limit(lattice, eps, max_iter) {
        Some(niggli) => niggli,
        None => bail!(
            "Niggli reduction failed; the cell may be degenerate, or it did not \
             converge in {} iterations", max_iter,
        ),
    };
    let delaunay = match delaunay_reduce_with_limit(lattice, eps, max_iter) {
        Some(delaunay) => delaunay,
        None => bail!("Delaunay reduction failed; the cell may be degenerate"),
    };

    ReduceReport {
        niggli: lattice_report(niggli.reduced()),
        niggli_transform: niggli.transform().matrix().into_array(),
        delaunay: lattice_report(&delaunay),
    }
})}

fn lattice_report(lattice: &Lattice) -> LatticeReport
{ LatticeReport { lattice: lattice_rows(lattice), cell: cell_doc(lattice) } }
