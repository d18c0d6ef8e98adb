//! The 32 crystallographic point groups.

use crate::Rot;

use std::collections::BTreeSet;
use std::fmt;

/// Classification of a single rotation by its determinant and trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotationType {
    MinusSix,
    MinusFour,
    MinusThree,
    Mirror,
    Inversion,
    Identity,
    Two,
    Three,
    Four,
    Six,
}

impl RotationType {
    /// Every rotation type, in the column order of the occurrence table.
    pub const ALL: [RotationType; 10] = [
        RotationType::MinusSix,
        RotationType::MinusFour,
        RotationType::MinusThree,
        RotationType::Mirror,
        RotationType::Inversion,
        RotationType::Identity,
        RotationType::Two,
        RotationType::Three,
        RotationType::Four,
        RotationType::Six,
    ];

    /// `None` for integer matrices that are not crystallographic rotations.
    pub fn of(rot: &Rot) -> Option<RotationType>
    {
        use self::RotationType::*;
        match (rot.det(), rot.trace()) {
            (1, 3) => Some(Identity),
            (1, -1) => Some(Two),
            (1, 0) => Some(Three),
            (1, 1) => Some(Four),
            (1, 2) => Some(Six),
            (-1, -3) => Some(Inversion),
            (-1, 1) => Some(Mirror),
            (-1, 0) => Some(MinusThree),
            (-1, -1) => Some(MinusFour),
            (-1, -2) => Some(MinusSix),
            _ => None,
        }
    }

    /// The Hermann-Mauguin symbol as a signed integer (`-2` for a mirror).
    pub fn symbol(self) -> i32
    {
        use self::RotationType::*;
        match self {
            MinusSix => -6,
            MinusFour => -4,
            MinusThree => -3,
            Mirror => -2,
            Inversion => -1,
            Identity => 1,
            Two => 2,
            Three => 3,
            Four => 4,
            Six => 6,
        }
    }

    pub fn is_proper(self) -> bool
    { self.symbol() > 0 }

    /// The type of `-R` for improper `R`, or `R` itself.
    pub fn proper(self) -> RotationType
    {
        use self::RotationType::*;
        match self {
            MinusSix => Three,
            MinusFour => Four,
            MinusThree => Six,
            Mirror => Two,
            Inversion => Identity,
            other => other,
        }
    }

    fn index(self) -> usize
    { self as usize }
}

/// One of the 32 crystallographic point groups.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointGroup {
    One, BarOne,
    Two, M, TwoOverM,
    TwoTwoTwo, MmTwo, Mmm,
    Four, BarFour, FourOverM, FourTwoTwo, FourMm, BarFourTwoM, FourOverMmm,
    Three, BarThree, ThreeTwo, ThreeM, BarThreeM,
    Six, BarSix, SixOverM, SixTwoTwo, SixMm, BarSixMTwo, SixOverMmm,
    TwoThree, MBarThree, FourThreeTwo, BarFourThreeM, MBarThreeM,
}

/// The centrosymmetric supergroup of a point group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaueClass {
    BarOne,
    TwoOverM,
    Mmm,
    FourOverM,
    FourOverMmm,
    BarThree,
    BarThreeM,
    SixOverM,
    SixOverMmm,
    MBarThree,
    MBarThreeM,
}

/// The point group of the lattice itself; one per crystal system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Holohedry {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

// Symbol, Schoenflies symbol, lowest space group number, and the
// occurrences of each rotation type in the order of `RotationType::ALL`:
//  -6 -4 -3 -2 -1  1  2  3  4  6
static TABLE: [(PointGroup, &str, &str, u16, [u8; 10]); 32] = {
    use self::PointGroup::*;
    [
        (One, "1", "C1", 1, [0, 0, 0, 0, 0, 1, 0, 0, 0, 0]),
        (BarOne, "-1", "Ci", 2, [0, 0, 0, 0, 1, 1, 0, 0, 0, 0]),
        (Two, "2", "C2", 3, [0, 0, 0, 0, 0, 1, 1, 0, 0, 0]),
        (M, "m", "Cs", 6, [0, 0, 0, 1, 0, 1, 0, 0, 0, 0]),
        (TwoOverM, "2/m", "C2h", 10, [0, 0, 0, 1, 1, 1, 1, 0, 0, 0]),
        (TwoTwoTwo, "222", "D2", 16, [0, 0, 0, 0, 0, 1, 3, 0, 0, 0]),
        (MmTwo, "mm2", "C2v", 25, [0, 0, 0, 2, 0, 1, 1, 0, 0, 0]),
        (Mmm, "mmm", "D2h", 47, [0, 0, 0, 3, 1, 1, 3, 0, 0, 0]),
        (Four, "4", "C4", 75, [0, 0, 0, 0, 0, 1, 1, 0, 2, 0]),
        (BarFour, "-4", "S4", 81, [0, 2, 0, 0, 0, 1, 1, 0, 0, 0]),
        (FourOverM, "4/m", "C4h", 83, [0, 2, 0, 1, 1, 1, 1, 0, 2, 0]),
        (FourTwoTwo, "422", "D4", 89, [0, 0, 0, 0, 0, 1, 5, 0, 2, 0]),
        (FourMm, "4mm", "C4v", 99, [0, 0, 0, 4, 0, 1, 1, 0, 2, 0]),
        (BarFourTwoM, "-42m", "D2d", 111, [0, 2, 0, 2, 0, 1, 3, 0, 0, 0]),
        (FourOverMmm, "4/mmm", "D4h", 123, [0, 2, 0, 5, 1, 1, 5, 0, 2, 0]),
        (Three, "3", "C3", 143, [0, 0, 0, 0, 0, 1, 0, 2, 0, 0]),
        (BarThree, "-3", "C3i", 147, [0, 0, 2, 0, 1, 1, 0, 2, 0, 0]),
        (ThreeTwo, "32", "D3", 149, [0, 0, 0, 0, 0, 1, 3, 2, 0, 0]),
        (ThreeM, "3m", "C3v", 156, [0, 0, 0, 3, 0, 1, 0, 2, 0, 0]),
        (BarThreeM, "-3m", "D3d", 162, [0, 0, 2, 3, 1, 1, 3, 2, 0, 0]),
        (Six, "6", "C6", 168, [0, 0, 0, 0, 0, 1, 1, 2, 0, 2]),
        (BarSix, "-6", "C3h", 174, [2, 0, 0, 1, 0, 1, 0, 2, 0, 0]),
        (SixOverM, "6/m", "C6h", 175, [2, 0, 2, 1, 1, 1, 1, 2, 0, 2]),
        (SixTwoTwo, "622", "D6", 177, [0, 0, 0, 0, 0, 1, 7, 2, 0, 2]),
        (SixMm, "6mm", "C6v", 183, [0, 0, 0, 6, 0, 1, 1, 2, 0, 2]),
        (BarSixMTwo, "-6m2", "D3h", 187, [2, 0, 0, 4, 0, 1, 3, 2, 0, 0]),
        (SixOverMmm, "6/mmm", "D6h", 191, [2, 0, 2, 7, 1, 1, 7, 2, 0, 2]),
        (TwoThree, "23", "T", 195, [0, 0, 0, 0, 0, 1, 3, 8, 0, 0]),
        (MBarThree, "m-3", "Th", 200, [0, 0, 8, 3, 1, 1, 3, 8, 0, 0]),
        (FourThreeTwo, "432", "O", 207, [0, 0, 0, 0, 0, 1, 9, 8, 6, 0]),
        (BarFourThreeM, "-43m", "Td", 215, [0, 6, 0, 6, 0, 1, 3, 8, 0, 0]),
        (MBarThreeM, "m-3m", "Oh", 221, [0, 6, 8, 9, 1, 1, 9, 8, 6, 0]),
    ]
};

impl PointGroup {
    /// Identify the point group formed by a set of rotations.
    ///
    /// Duplicate rotations are counted once. Returns `None` if the
    /// rotation types do not match any crystallographic point group.
    pub fn from_rotations<'a, I>(rots: I) -> Option<PointGroup>
    where I: IntoIterator<Item=&'a Rot>,
    {
        let unique: BTreeSet<&Rot> = rots.into_iter().collect();

        let mut counts = [0u8; 10];
        for rot in unique {
            let index = RotationType::of(rot)?.index();
            counts[index] = counts[index].checked_add(1)?;
        }

        TABLE.iter()
            .find(|&&(_, _, _, _, ref table_counts)| table_counts == &counts)
            .map(|&(group, _, _, _, _)| group)
    }

    fn entry(self) -> &'static (PointGroup, &'static str, &'static str, u16, [u8; 10])
    { &TABLE[self as usize] }

    /// Short Hermann-Mauguin symbol, e.g. `"4/mmm"`.
    pub fn symbol(self) -> &'static str
    { self.entry().1 }

    /// Schoenflies symbol, e.g. `"D4h"`.
    pub fn schoenflies(self) -> &'static str
    { self.entry().2 }

    /// The lowest space group number with this point group.
    ///
    /// Space groups sharing a point group are numbered consecutively.
    pub fn first_space_group(self) -> u16
    { self.entry().3 }

    pub fn from_symbol(symbol: &str) -> Option<PointGroup>
    { TABLE.iter().find(|e| e.1 == symbol).map(|e| e.0) }

    /// Number of operations.
    pub fn order(self) -> usize
    { self.entry().4.iter().map(|&x| x as usize).sum() }

    pub fn count(self, ty: RotationType) -> usize
    { self.entry().4[ty.index()] as usize }

    pub fn is_centrosymmetric(self) -> bool
    { self.count(RotationType::Inversion) > 0 }

    /// True for groups with only proper rotations, which admit
    /// structures of either handedness.
    pub fn is_enantiomorphic(self) -> bool
    { RotationType::ALL.iter().all(|&ty| ty.is_proper() || self.count(ty) == 0) }

    pub fn laue_class(self) -> LaueClass
    {
        use self::PointGroup as P;
        use self::LaueClass as L;
        match self {
            P::One | P::BarOne => L::BarOne,
            P::Two | P::M | P::TwoOverM => L::TwoOverM,
            P::TwoTwoTwo | P::MmTwo | P::Mmm => L::Mmm,
            P::Four | P::BarFour | P::FourOverM => L::FourOverM,
            P::FourTwoTwo | P::FourMm | P::BarFourTwoM | P::FourOverMmm => L::FourOverMmm,
            P::Three | P::BarThree => L::BarThree,
            P::ThreeTwo | P::ThreeM | P::BarThreeM => L::BarThreeM,
            P::Six | P::BarSix | P::SixOverM => L::SixOverM,
            P::SixTwoTwo | P::SixMm | P::BarSixMTwo | P::SixOverMmm => L::SixOverMmm,
            P::TwoThree | P::MBarThree => L::MBarThree,
            P::FourThreeTwo | P::BarFourThreeM | P::MBarThreeM => L::MBarThreeM,
        }
    }

    pub fn holohedry(self) -> Holohedry
    { self.laue_class().holohedry() }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(self.symbol()) }
}

impl LaueClass {
    pub fn holohedry(self) -> Holohedry
    {
        use self::LaueClass::*;
        match self {
            BarOne => Holohedry::Triclinic,
            TwoOverM => Holohedry::Monoclinic,
            Mmm => Holohedry::Orthorhombic,
            FourOverM | FourOverMmm => Holohedry::Tetragonal,
            BarThree | BarThreeM => Holohedry::Trigonal,
            SixOverM | SixOverMmm => Holohedry::Hexagonal,
            MBarThree | MBarThreeM => Holohedry::Cubic,
        }
    }

    /// The type of the rotations used to orient the conventional axes.
    ///
    /// Hexagonal classes are oriented by their threefold, and `m-3` by its twofolds.
    pub(crate) fn principal_rotation(self) -> Option<RotationType>
    {
        use self::LaueClass::*;
        match self {
            BarOne => None,
            TwoOverM | Mmm | MBarThree => Some(RotationType::Two),
            FourOverM | FourOverMmm | MBarThreeM => Some(RotationType::Four),
            BarThree | BarThreeM | SixOverM | SixOverMmm => Some(RotationType::Three),
        }
    }

    pub fn symbol(self) -> &'static str
    {
        use self::LaueClass::*;
        match self {
            BarOne => "-1",
            TwoOverM => "2/m",
            Mmm => "mmm",
            FourOverM => "4/m",
            FourOverMmm => "4/mmm",
            BarThree => "-3",
            BarThreeM => "-3m",
            SixOverM => "6/m",
            SixOverMmm => "6/mmm",
            MBarThree => "m-3",
            MBarThreeM => "m-3m",
        }
    }
}

impl Holohedry {
    pub fn name(self) -> &'static str
    {
        use self::Holohedry::*;
        match self {
            Triclinic => "triclinic",
            Monoclinic => "monoclinic",
            Orthorhombic => "orthorhombic",
            Tetragonal => "tetragonal",
            Trigonal => "trigonal",
            Hexagonal => "hexagonal",
            Cubic => "cubic",
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn rotation_types() {
        let four = Rot::from(&[[0, -1, 0], [1, 0, 0], [0, 0, 1]]);
        let six = Rot::from(&[[1, -1, 0], [1, 0, 0], [0, 0, 1]]);
        let mirror = Rot::from(&[[1, 0, 0], [0, 1, 0], [0, 0, -1]]);
        let shear = Rot::from(&[[1, 1, 0], [0, 1, 0], [0, 0, 1]]);
        assert_eq!(RotationType::of(&four), Some(RotationType::Four));
        assert_eq!(RotationType::of(&six), Some(RotationType::Six));
        assert_eq!(RotationType::of(&mirror), Some(RotationType::Mirror));
        assert_eq!(RotationType::of(&Rot::eye()), Some(RotationType::Identity));
        assert_eq!(RotationType::of(&shear), None);

        for &ty in &RotationType::ALL {
            assert!(ty.proper().is_proper());
        }
        assert_eq!(RotationType::Mirror.symbol(), -2);
    }

    #[test]
    fn table_is_consistent() {
        for (i, entry) in TABLE.iter().enumerate() {
            assert_eq!(entry.0 as usize, i);
            assert_eq!(PointGroup::from_symbol(entry.1), Some(entry.0));
            // group order divides 48
            assert_eq!(48 % entry.0.order(), 0, "{}", entry.1);
        }
        assert_eq!(PointGroup::MBarThreeM.order(), 48);
        assert_eq!(PointGroup::SixOverMmm.order(), 24);

        // space groups are numbered by point group
        assert_eq!(TABLE[0].0.first_space_group(), 1);
        for pair in TABLE.windows(2) {
            assert!(pair[0].3 < pair[1].3, "{}", pair[1].1);
        }
        assert_eq!(PointGroup::MBarThreeM.first_space_group(), 221);
        assert_eq!(PointGroup::BarThree.schoenflies(), "C3i");
        assert_eq!(PointGroup::BarSixMTwo.schoenflies(), "D3h");
    }

    #[test]
    fn classification() {
        let rots = vec![
            Rot::eye(),
            Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, 1]]),
            Rot::from(&[[1, 0, 0], [0, 1, 0], [0, 0, -1]]),
            Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, -1]]),
            // duplicates are ignored
            Rot::eye(),
        ];
        let group = PointGroup::from_rotations(&rots).unwrap();
        assert_eq!(group, PointGroup::TwoOverM);
        assert!(group.is_centrosymmetric());
        assert!(!group.is_enantiomorphic());
        assert_eq!(group.holohedry(), Holohedry::Monoclinic);
        assert_eq!(group.to_string(), "2/m");

        assert_eq!(PointGroup::from_rotations(&rots[..2]), Some(PointGroup::Two));
        assert!(PointGroup::Two.is_enantiomorphic());
        assert_eq!(PointGroup::from_rotations(&rots[1..2]), None);
    }

    #[test]
    fn laue_classes() {
        assert_eq!(PointGroup::BarSixMTwo.laue_class(), LaueClass::SixOverMmm);
        assert_eq!(PointGroup::BarFourThreeM.holohedry(), Holohedry::Cubic);
        assert_eq!(PointGroup::ThreeM.holohedry(), Holohedry::Trigonal);
        assert_eq!(LaueClass::SixOverM.principal_rotation(), Some(RotationType::Three));
        assert_eq!(LaueClass::BarOne.principal_rotation(), None);
    }
}
