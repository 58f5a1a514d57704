//! Atom data structure
//!
//! An `Atom` holds the per-atom attributes plus a shared reference to its
//! residue record. Selection predicates only ever read these fields.

use std::sync::Arc;

use crate::flags::AtomFlags;
use crate::residue::Residue;

/// A single atom and its read-only attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source structure
    pub serial: i32,
    /// Atom name (e.g. "CA", "OXT")
    pub name: String,
    /// Element symbol (e.g. "C", "N", "FE")
    pub element: String,
    /// Alternate-location code (' ' when absent)
    pub alt_loc: char,
    /// Per-atom property flags
    pub flags: AtomFlags,
    /// Heteroatom marker (HETATM record)
    pub hetatm: bool,
    /// Residue record shared by all atoms of the residue
    pub residue: Arc<Residue>,
}

impl Atom {
    /// Create an atom with default attributes in the given residue.
    pub fn new(name: impl Into<String>, residue: Arc<Residue>) -> Self {
        Atom {
            serial: 0,
            name: name.into(),
            element: String::new(),
            alt_loc: ' ',
            flags: AtomFlags::empty(),
            hetatm: false,
            residue,
        }
    }

    /// Start building an atom field by field.
    pub fn builder(name: impl Into<String>) -> AtomBuilder {
        AtomBuilder::new(name)
    }
}

/// Builder for assembling atoms field by field
///
/// Mostly used by model loaders and test fixtures; defaults every field
/// and places the atom in a blank residue unless one is provided.
#[derive(Debug, Clone)]
pub struct AtomBuilder {
    serial: i32,
    name: String,
    element: String,
    alt_loc: char,
    flags: AtomFlags,
    hetatm: bool,
    residue: Option<Arc<Residue>>,
}

impl AtomBuilder {
    /// Create a builder for an atom with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        AtomBuilder {
            serial: 0,
            name: name.into(),
            element: String::new(),
            alt_loc: ' ',
            flags: AtomFlags::empty(),
            hetatm: false,
            residue: None,
        }
    }

    /// Set the serial number.
    pub fn serial(mut self, serial: i32) -> Self {
        self.serial = serial;
        self
    }

    /// Set the element symbol.
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    /// Set the alternate-location code.
    pub fn alt_loc(mut self, alt_loc: char) -> Self {
        self.alt_loc = alt_loc;
        self
    }

    /// Set the atom flags.
    pub fn flags(mut self, flags: AtomFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the atom as a heteroatom.
    pub fn hetatm(mut self, hetatm: bool) -> Self {
        self.hetatm = hetatm;
        self
    }

    /// Place the atom in a residue.
    pub fn residue(mut self, residue: Arc<Residue>) -> Self {
        self.residue = Some(residue);
        self
    }

    /// Build the atom.
    pub fn build(self) -> Atom {
        let residue = self
            .residue
            .unwrap_or_else(|| Arc::new(Residue::new("", 0, ' ', 0, "")));
        Atom {
            serial: self.serial,
            name: self.name,
            element: self.element,
            alt_loc: self.alt_loc,
            flags: self.flags,
            hetatm: self.hetatm,
            residue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_new_defaults() {
        let res = Arc::new(Residue::new("GLY", 1, ' ', 0, "A"));
        let atom = Atom::new("CA", res.clone());
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.serial, 0);
        assert_eq!(atom.alt_loc, ' ');
        assert!(!atom.hetatm);
        assert_eq!(atom.residue.type_name, "GLY");
    }

    #[test]
    fn test_builder() {
        let res = Arc::new(Residue::new("ALA", 4, 'A', 2, "B"));
        let atom = Atom::builder("CA")
            .serial(5)
            .element("C")
            .alt_loc('B')
            .hetatm(true)
            .residue(res)
            .build();
        assert_eq!(atom.serial, 5);
        assert_eq!(atom.element, "C");
        assert_eq!(atom.alt_loc, 'B');
        assert!(atom.hetatm);
        assert_eq!(atom.residue.chain, "B");
        assert_eq!(atom.residue.sequence, 4);
    }

    #[test]
    fn test_atoms_share_residue() {
        let res = Arc::new(Residue::new("SER", 7, ' ', 3, "A"));
        let a = Atom::new("N", res.clone());
        let b = Atom::new("CA", res.clone());
        assert!(Arc::ptr_eq(&a.residue, &b.residue));
    }
}
