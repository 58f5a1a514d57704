//! Atom and residue flag bitfields
//!
//! Provides bitflags for per-atom properties and for residue-type
//! classification. Selection predicates test these masks directly.

use bitflags::bitflags;

bitflags! {
    /// Per-atom property flags
    ///
    /// The hydrogen bits encode polarity as a masked pair: a bare
    /// `HYDROGEN` bit is a polar hydrogen, while the composite
    /// `NONPOLAR_H` (hydrogen + non-polar marker) is a non-polar one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AtomFlags: u32 {
        /// Atom is a carbon
        const CARBON = 0x0001;
        /// Atom is a hydrogen
        const HYDROGEN = 0x0008;
        /// Non-polar marker bit (only meaningful combined with HYDROGEN)
        const NONPOLAR = 0x1000;
        /// Non-polar hydrogen (hydrogen bound to a non-polar heavy atom)
        const NONPOLAR_H = 0x1008;
    }
}

impl AtomFlags {
    /// Check if this atom is a polar hydrogen
    #[inline]
    pub fn is_polar_hydrogen(&self) -> bool {
        *self & AtomFlags::NONPOLAR_H == AtomFlags::HYDROGEN
    }

    /// Check if this atom is a non-polar hydrogen
    #[inline]
    pub fn is_nonpolar_hydrogen(&self) -> bool {
        self.contains(AtomFlags::NONPOLAR_H)
    }
}

bitflags! {
    /// Residue-type classification flags
    ///
    /// Stamped on a residue when the model is built; selection
    /// classification keywords test individual bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResidueFlags: u32 {
        /// Amino acid residue
        const PROTEIN = 0x0001;
        /// Basic (positively charged) side chain
        const BASIC = 0x0002;
        /// Acidic (negatively charged) side chain
        const ACIDIC = 0x0004;
        /// Polar uncharged side chain
        const POLAR = 0x0008;
        /// Non-polar side chain
        const NONPOLAR = 0x0010;
        /// Aromatic side chain
        const AROMATIC = 0x0020;
        /// Nucleotide residue
        const NUCLEIC = 0x0100;
        /// Purine base
        const PURINE = 0x0200;
        /// Pyrimidine base
        const PYRIMIDINE = 0x0400;
        /// Water molecule
        const WATER = 0x0800;
    }
}

impl ResidueFlags {
    /// Check if the residue carries a charge (acidic or basic side chain)
    #[inline]
    pub fn is_charged(&self) -> bool {
        self.intersects(ResidueFlags::ACIDIC | ResidueFlags::BASIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrogen_polarity() {
        let polar = AtomFlags::HYDROGEN;
        assert!(polar.is_polar_hydrogen());
        assert!(!polar.is_nonpolar_hydrogen());

        let nonpolar = AtomFlags::NONPOLAR_H;
        assert!(!nonpolar.is_polar_hydrogen());
        assert!(nonpolar.is_nonpolar_hydrogen());

        let heavy = AtomFlags::CARBON;
        assert!(!heavy.is_polar_hydrogen());
        assert!(!heavy.is_nonpolar_hydrogen());
    }

    #[test]
    fn test_nonpolar_h_is_composite() {
        assert_eq!(
            AtomFlags::NONPOLAR_H,
            AtomFlags::HYDROGEN | AtomFlags::NONPOLAR
        );
    }

    #[test]
    fn test_charged() {
        assert!(ResidueFlags::ACIDIC.is_charged());
        assert!(ResidueFlags::BASIC.is_charged());
        assert!((ResidueFlags::PROTEIN | ResidueFlags::BASIC).is_charged());
        assert!(!ResidueFlags::POLAR.is_charged());
        assert!(!ResidueFlags::empty().is_charged());
    }
}
