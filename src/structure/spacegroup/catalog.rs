/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The 530 Hall settings of the 230 space groups.

use crate::{FracOp, Rot};
use crate::algo::group::generate_finite_group;
use super::axes::Centering;
use super::data::{SETTINGS, HALL_NUMBERS};
use super::hall::{HallSymbol, HallParseError};
use super::point_group::{PointGroup, LaueClass, Holohedry, RotationType};

/// A space group in a specific setting, described by its Hall symbol.
#[derive(Debug, Clone)]
pub struct Setting {
    number: u16,
    hall_number: u16,
    hall_symbol: &'static str,
    hm_symbol: &'static str,
    point_group: PointGroup,
    centering: Centering,
    centrosymmetric: bool,
    /// All operations in the conventional cell, sorted.
    operations: Vec<FracOp>,
    /// One operation per rotation, enough to generate the point group.
    generators: Vec<FracOp>,
}

lazy_static! {
    // indexed by hall number - 1
    static ref ALL_SETTINGS: Vec<Setting> = {
        SETTINGS.iter()
            .map(|&(hall, number, symbol, hm)| {
                Setting::from_hall(number, hall, symbol, hm)
                    .unwrap_or_else(|e| panic!("bug! bad built-in setting: {}", e))
            })
            .collect()
    };

    static ref CATALOG: Vec<&'static Setting> = {
        HALL_NUMBERS.iter().skip(1)
            .map(|halls| &ALL_SETTINGS[halls[0] as usize - 1])
            .collect()
    };
}

/// The default setting of each of the 230 space groups, in order.
pub fn catalog() -> &'static [&'static Setting]
{ &CATALOG }

/// The default setting of a space group.
///
/// # Panics
///
/// Panics if `number` is not in `1..=230`.
pub fn setting(number: u16) -> &'static Setting
{
    assert!(1 <= number && number <= 230, "no such space group: {}", number);
    CATALOG[number as usize - 1]
}

/// Look up any of the 530 settings by Hall number.
pub fn setting_of_hall(hall: u16) -> Option<&'static Setting>
{
    match hall {
        0 => None,
        _ => ALL_SETTINGS.get(hall as usize - 1),
    }
}

/// The Hall numbers (in `1..=530`) of every setting of a space group.
/// The first is the default setting.
pub fn hall_numbers(number: u16) -> &'static [u16]
{ HALL_NUMBERS.get(number as usize).cloned().unwrap_or(&[]) }

/// The space group number of a Hall setting.
pub fn space_group_of_hall(hall: u16) -> Option<u16>
{ setting_of_hall(hall).map(Setting::number) }

impl Setting {
    pub fn from_hall(
        number: u16,
        hall_number: u16,
        hall_symbol: &'static str,
        hm_symbol: &'static str,
    ) -> Result<Setting, HallParseError>
    {Ok({
        let symbol = HallSymbol::parse(hall_symbol)?;
        let operations = symbol.operations();

        let mut rotations: Vec<Rot> = operations.iter().map(|op| *op.rot()).collect();
        rotations.dedup();

        let point_group = PointGroup::from_rotations(&rotations)
            .unwrap_or_else(|| panic!("bug! no point group for {:?}", hall_symbol));

        let generators = choose_generators(&operations, rotations.len());
        Setting {
            number, hall_number, hall_symbol, hm_symbol,
            point_group,
            centering: symbol.centering(),
            centrosymmetric: symbol.is_centrosymmetric(),
            operations, generators,
        }
    })}

    /// Space group number, `1..=230`.
    pub fn number(&self) -> u16 { self.number }
    /// Hall number, `1..=530`.
    pub fn hall_number(&self) -> u16 { self.hall_number }
    pub fn hall_symbol(&self) -> &'static str { self.hall_symbol }
    /// Hermann-Mauguin symbol, e.g. `"F m -3 m"`.
    pub fn hm_symbol(&self) -> &'static str { self.hm_symbol }

    /// Schoenflies symbol, e.g. `"Oh^7"` for space group 227.
    ///
    /// The superscript counts the space groups of the same point group
    /// in order of number, so it is the same for every setting.
    pub fn schoenflies(&self) -> String
    {
        let index = self.number - self.point_group.first_space_group() + 1;
        format!("{}^{}", self.point_group.schoenflies(), index)
    }

    /// Position among the settings of the same space group, counted from
    /// zero in order of Hall number.
    pub fn qualifier(&self) -> u16
    {
        let first = hall_numbers(self.number).iter().min().cloned().unwrap_or(self.hall_number);
        self.hall_number - first
    }

    pub fn is_default(&self) -> bool
    { hall_numbers(self.number).first() == Some(&self.hall_number) }
    pub fn point_group(&self) -> PointGroup { self.point_group }
    pub fn laue_class(&self) -> LaueClass { self.point_group.laue_class() }
    pub fn holohedry(&self) -> Holohedry { self.point_group.holohedry() }
    pub fn centering(&self) -> Centering { self.centering }
    pub fn is_centrosymmetric(&self) -> bool { self.centrosymmetric }

    /// Every operation in the conventional cell, including centering translations.
    pub fn operations(&self) -> &[FracOp] { &self.operations }

    /// Operations that generate the point group, one per rotation, with
    /// the principal rotations first.
    pub fn generators(&self) -> &[FracOp] { &self.generators }

    /// Number of operations in the conventional cell.
    pub fn order(&self) -> usize { self.operations.len() }
}

// Pick one operation per rotation (the one with the smallest translation),
// then add them highest order first until they generate every rotation.
fn choose_generators(operations: &[FracOp], num_rotations: usize) -> Vec<FracOp>
{
    // operations are sorted, so the first of each rotation has the smallest translation
    let mut candidates: Vec<FracOp> = vec![];
    for op in operations {
        if candidates.last().map_or(true, |prev| prev.rot() != op.rot()) {
            candidates.push(*op);
        }
    }

    let symbol = |op: &FracOp| {
        RotationType::of(op.rot())
            .expect("bug! operation is not a crystallographic rotation")
            .symbol()
    };
    candidates.sort_by_key(|op| (-symbol(op).abs(), -symbol(op), *op));

    let mut generators: Vec<FracOp> = vec![];
    let mut group = vec![Rot::eye()];
    for op in candidates {
        if group.len() == num_rotations {
            break;
        }
        if group.contains(op.rot()) {
            continue;
        }
        generators.push(op);

        let mut rots: Vec<Rot> = generators.iter().map(|g| *g.rot()).collect();
        rots.push(Rot::eye());
        group = generate_finite_group(&rots, |a, b| a.then(b));
    }
    generators
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    // point groups of the space group number ranges
    const RANGES: &[(u16, u16, &str)] = &[
        (1, 1, "1"), (2, 2, "-1"), (3, 5, "2"), (6, 9, "m"), (10, 15, "2/m"),
        (16, 24, "222"), (25, 46, "mm2"), (47, 74, "mmm"), (75, 80, "4"), (81, 82, "-4"),
        (83, 88, "4/m"), (89, 98, "422"), (99, 110, "4mm"), (111, 122, "-42m"),
        (123, 142, "4/mmm"), (143, 146, "3"), (147, 148, "-3"), (149, 155, "32"),
        (156, 161, "3m"), (162, 167, "-3m"), (168, 173, "6"), (174, 174, "-6"),
        (175, 176, "6/m"), (177, 182, "622"), (183, 186, "6mm"), (187, 190, "-6m2"),
        (191, 194, "6/mmm"), (195, 199, "23"), (200, 206, "m-3"), (207, 214, "432"),
        (215, 220, "-43m"), (221, 230, "m-3m"),
    ];

    #[test]
    fn every_setting_is_consistent() {
        assert_eq!(catalog().len(), 230);
        for &(lo, hi, pg) in RANGES {
            for number in lo..=hi {
                assert_eq!(setting(number).number(), number);
                assert!(setting(number).is_default());

                for &hall in hall_numbers(number) {
                    let setting = setting_of_hall(hall).unwrap();
                    assert_eq!(setting.hall_number(), hall);
                    assert_eq!(setting.number(), number, "{}", setting.hall_symbol());
                    assert_eq!(setting.point_group().symbol(), pg, "{}", setting.hall_symbol());
                    assert_eq!(
                        setting.order(),
                        setting.point_group().order() * setting.centering().multiplicity(),
                        "{}", setting.hall_symbol(),
                    );
                    assert!(setting.generators().len() <= 3);
                    assert_eq!(setting.is_centrosymmetric(), setting.point_group().is_centrosymmetric());
                    assert_eq!(space_group_of_hall(hall), Some(number));
                }
            }
        }
    }

    #[test]
    fn non_default_settings() {
        // diamond, origin choice 1
        let fd3m = setting_of_hall(525).unwrap();
        assert_eq!(fd3m.number(), 227);
        assert_eq!(fd3m.hall_symbol(), "F 4d 2 3 -1d");
        assert_eq!(fd3m.hm_symbol(), "F d -3 m");
        assert_eq!(fd3m.schoenflies(), "Oh^7");
        assert_eq!(fd3m.order(), 192);
        assert!(!fd3m.is_default());
        assert_eq!(fd3m.qualifier(), 0);
        assert_eq!(setting(227).hall_number(), 526);
        assert_eq!(setting(227).qualifier(), 1);

        // the origin choices differ by a shift of (1/8, 1/8, 1/8)
        let ops_1: Vec<_> = fd3m.operations().iter().map(|op| *op.rot()).collect();
        let ops_2: Vec<_> = setting(227).operations().iter().map(|op| *op.rot()).collect();
        assert_eq!(
            ops_1.iter().collect::<std::collections::BTreeSet<_>>(),
            ops_2.iter().collect::<std::collections::BTreeSet<_>>(),
        );
        assert_ne!(fd3m.operations(), setting(227).operations());

        // P 1 21/c 1 and P 1 1 21/a are the same group with different axes
        let p21a = setting_of_hall(84).unwrap();
        assert_eq!(p21a.number(), 14);
        assert_eq!(p21a.hm_symbol(), "P 1 1 21/a");
        assert_eq!(p21a.qualifier(), 3);

        // rhombohedral axes
        let r3m = setting_of_hall(459).unwrap();
        assert_eq!(r3m.number(), 166);
        assert_eq!(r3m.centering(), Centering::P);
        assert_eq!(r3m.order(), 12);
        assert_eq!(setting(166).centering(), Centering::R);

        assert!(setting_of_hall(0).is_none());
        assert!(setting_of_hall(531).is_none());
    }

    #[test]
    fn schoenflies_symbols() {
        assert_eq!(setting(1).schoenflies(), "C1^1");
        assert_eq!(setting(2).schoenflies(), "Ci^1");
        assert_eq!(setting(14).schoenflies(), "C2h^5");
        assert_eq!(setting(62).schoenflies(), "D2h^16");
        assert_eq!(setting(166).schoenflies(), "D3d^5");
        assert_eq!(setting(194).schoenflies(), "D6h^4");
        assert_eq!(setting(225).schoenflies(), "Oh^5");
        assert_eq!(setting(230).schoenflies(), "Oh^10");

        for &hall in hall_numbers(15) {
            assert_eq!(setting_of_hall(hall).unwrap().schoenflies(), "C2h^6");
        }
    }

    #[test]
    fn generators_generate() {
        for setting in (1..=530).filter_map(setting_of_hall) {
            let mut rots: Vec<Rot> = setting.generators().iter().map(|op| *op.rot()).collect();
            rots.push(Rot::eye());
            let group = generate_finite_group(&rots, |a, b| a.then(b));
            assert_eq!(group.len(), setting.point_group().order(), "{}", setting.hall_symbol());
        }
    }

    #[test]
    fn hall_number_map() {
        assert_eq!(hall_numbers(1), &[1]);
        assert_eq!(hall_numbers(230), &[530]);
        assert_eq!(hall_numbers(0), &[0]);
        assert_eq!(hall_numbers(231), &[] as &[u16]);

        let total: usize = (1..=230).map(|sg| hall_numbers(sg).len()).sum();
        assert_eq!(total, 530);
        assert_eq!(space_group_of_hall(0), None);
        assert_eq!(space_group_of_hall(531), None);
    }

    #[test]
    fn special_settings() {
        let pa3 = setting(205);
        assert_eq!(pa3.hall_number(), 501);
        assert_eq!(pa3.hm_symbol(), "P a -3");
        assert_eq!(setting(225).centering(), Centering::F);
        assert_eq!(setting(225).order(), 192);
        assert_eq!(setting(166).centering(), Centering::R);
        assert_eq!(setting(166).holohedry(), Holohedry::Trigonal);
    }
}
