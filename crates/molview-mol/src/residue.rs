//! Residue records and residue-type classification
//!
//! Residue information is stored once per residue and shared by its atoms,
//! so attribute reads during selection stay cheap. The classification
//! registry maps standard residue names to their flag sets; model loaders
//! use it to stamp flags when a structure is built.

use phf::phf_map;

use crate::flags::ResidueFlags;

/// Per-residue record shared by the atoms of one residue
///
/// Holds everything a selection predicate reads at residue or chain level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue type name (e.g. "ALA", "HOH")
    pub type_name: String,
    /// Classification flags for the residue type
    pub flags: ResidueFlags,
    /// Residue sequence number from the source structure
    pub sequence: i32,
    /// Insertion code (' ' when absent)
    pub inscode: char,
    /// Zero-based residue index in model order
    pub index: i32,
    /// Chain identifier (e.g. "A")
    pub chain: String,
}

impl Residue {
    /// Create a residue record, stamping flags from the classification
    /// registry.
    pub fn new(
        type_name: impl Into<String>,
        sequence: i32,
        inscode: char,
        index: i32,
        chain: impl Into<String>,
    ) -> Self {
        let type_name = type_name.into();
        let flags = ResidueFlags::for_residue(&type_name);
        Residue {
            type_name,
            flags,
            sequence,
            inscode,
            index,
            chain: chain.into(),
        }
    }

    /// Create a residue record with explicit flags, bypassing the registry.
    pub fn with_flags(
        type_name: impl Into<String>,
        flags: ResidueFlags,
        sequence: i32,
        inscode: char,
        index: i32,
        chain: impl Into<String>,
    ) -> Self {
        Residue {
            type_name: type_name.into(),
            flags,
            sequence,
            inscode,
            index,
            chain: chain.into(),
        }
    }
}

// ============================================================================
// Residue-type classification registry (compile-time perfect hash)
// ============================================================================

const PROTEIN: u32 = ResidueFlags::PROTEIN.bits();
const BASIC: u32 = ResidueFlags::BASIC.bits();
const ACIDIC: u32 = ResidueFlags::ACIDIC.bits();
const POLAR: u32 = ResidueFlags::POLAR.bits();
const NONPOLAR: u32 = ResidueFlags::NONPOLAR.bits();
const AROMATIC: u32 = ResidueFlags::AROMATIC.bits();
const NUCLEIC: u32 = ResidueFlags::NUCLEIC.bits();
const PURINE: u32 = ResidueFlags::PURINE.bits();
const PYRIMIDINE: u32 = ResidueFlags::PYRIMIDINE.bits();
const WATER: u32 = ResidueFlags::WATER.bits();

/// Standard residue names and their classification bits.
///
/// phf values must be const, so the table stores raw bits and
/// `for_residue` rebuilds the flag set on lookup.
static RESIDUE_CLASSES: phf::Map<&'static str, u32> = phf_map! {
    // Amino acids
    "ALA" => PROTEIN | NONPOLAR,
    "ARG" => PROTEIN | BASIC,
    "ASN" => PROTEIN | POLAR,
    "ASP" => PROTEIN | ACIDIC,
    "CYS" => PROTEIN | POLAR,
    "GLN" => PROTEIN | POLAR,
    "GLU" => PROTEIN | ACIDIC,
    "GLY" => PROTEIN | NONPOLAR,
    "HIS" => PROTEIN | BASIC | AROMATIC,
    "ILE" => PROTEIN | NONPOLAR,
    "LEU" => PROTEIN | NONPOLAR,
    "LYS" => PROTEIN | BASIC,
    "MET" => PROTEIN | NONPOLAR,
    "PHE" => PROTEIN | NONPOLAR | AROMATIC,
    "PRO" => PROTEIN | NONPOLAR,
    "SER" => PROTEIN | POLAR,
    "THR" => PROTEIN | POLAR,
    "TRP" => PROTEIN | NONPOLAR | AROMATIC,
    "TYR" => PROTEIN | POLAR | AROMATIC,
    "VAL" => PROTEIN | NONPOLAR,
    // Ribonucleotides
    "A" => NUCLEIC | PURINE,
    "G" => NUCLEIC | PURINE,
    "I" => NUCLEIC | PURINE,
    "C" => NUCLEIC | PYRIMIDINE,
    "U" => NUCLEIC | PYRIMIDINE,
    // Deoxyribonucleotides
    "DA" => NUCLEIC | PURINE,
    "DG" => NUCLEIC | PURINE,
    "DI" => NUCLEIC | PURINE,
    "DC" => NUCLEIC | PYRIMIDINE,
    "DT" => NUCLEIC | PYRIMIDINE,
    "DU" => NUCLEIC | PYRIMIDINE,
    // Waters
    "HOH" => WATER,
    "WAT" => WATER,
    "H2O" => WATER,
    "DOD" => WATER,
    "SOL" => WATER,
};

impl ResidueFlags {
    /// Look up the classification flags for a residue type name.
    ///
    /// Unknown names get an empty flag set. The lookup is case-sensitive;
    /// structure files carry these names upper-cased already.
    pub fn for_residue(type_name: &str) -> ResidueFlags {
        RESIDUE_CLASSES
            .get(type_name)
            .map(|bits| ResidueFlags::from_bits_truncate(*bits))
            .unwrap_or_default()
    }
}
