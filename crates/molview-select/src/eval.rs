//! Per-atom predicate evaluation
//!
//! Evaluates a selector tree against a single atom. Evaluation is a pure
//! read: neither the tree nor the atom is mutated, so built trees can be
//! shared read-only across threads.

use molview_mol::{Atom, ResidueFlags};

use crate::ast::Selector;

impl Selector {
    /// Check whether this selector includes the given atom.
    pub fn includes_atom(&self, atom: &Atom) -> bool {
        match self {
            Selector::All => true,
            Selector::None => false,

            Selector::Serial(list) => list.includes(atom.serial),
            Selector::Sequence(list) => list.includes(atom.residue.sequence),
            Selector::ResIdx(list) => list.includes(atom.residue.index),

            Selector::Name(list) => list.includes(atom.name.as_str()),
            Selector::AltLoc(list) => list.includes(atom.alt_loc.to_string()),
            Selector::Elem(list) => list.includes(atom.element.as_str()),
            Selector::Residue(list) => list.includes(atom.residue.type_name.as_str()),
            Selector::ICode(list) => list.includes(atom.residue.inscode.to_string()),
            Selector::Chain(list) => list.includes(atom.residue.chain.as_str()),

            Selector::Hetatm => atom.hetatm,
            Selector::PolarH => atom.flags.is_polar_hydrogen(),
            Selector::NonPolarH => atom.flags.is_nonpolar_hydrogen(),

            Selector::Protein => atom.residue.flags.contains(ResidueFlags::PROTEIN),
            Selector::Basic => atom.residue.flags.contains(ResidueFlags::BASIC),
            Selector::Acidic => atom.residue.flags.contains(ResidueFlags::ACIDIC),
            Selector::Charged => atom.residue.flags.is_charged(),
            Selector::Polar => atom.residue.flags.contains(ResidueFlags::POLAR),
            Selector::NonPolar => atom.residue.flags.contains(ResidueFlags::NONPOLAR),
            Selector::Aromatic => atom.residue.flags.contains(ResidueFlags::AROMATIC),
            Selector::Nucleic => atom.residue.flags.contains(ResidueFlags::NUCLEIC),
            Selector::Purine => atom.residue.flags.contains(ResidueFlags::PURINE),
            Selector::Pyrimidine => atom.residue.flags.contains(ResidueFlags::PYRIMIDINE),
            Selector::Water => atom.residue.flags.contains(ResidueFlags::WATER),

            Selector::Prefix(op, operand) => (op.apply)(operand.includes_atom(atom)),
            Selector::Infix(op, left, right) => {
                (op.apply)(left.includes_atom(atom), right.includes_atom(atom))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use molview_mol::{Atom, AtomFlags, Residue, ResidueFlags};

    use crate::ast::*;
    use crate::pattern::Range;

    /// Fixture atom: serial 5, CA/N in residue ALA 4, icode 'A', index 2,
    /// chain "B".
    fn fixture_atom() -> Atom {
        let residue = Arc::new(Residue::with_flags(
            "ALA",
            ResidueFlags::empty(),
            4,
            'A',
            2,
            "B",
        ));
        Atom::builder("CA")
            .serial(5)
            .element("N")
            .alt_loc(' ')
            .residue(residue)
            .build()
    }

    fn atom_with_residue_flags(flags: ResidueFlags) -> Atom {
        let residue = Arc::new(Residue::with_flags("ALA", flags, 4, 'A', 2, "B"));
        Atom::builder("CA").residue(residue).build()
    }

    fn atom_with_flags(flags: AtomFlags) -> Atom {
        Atom::builder("H").flags(flags).build()
    }

    #[test]
    fn test_serial() {
        let atom = fixture_atom();
        assert!(serial(Range::new(1, 14)).includes_atom(&atom));
        assert!(!serial(Range::new(18, 20)).includes_atom(&atom));
    }

    #[test]
    fn test_name() {
        let atom = fixture_atom();
        assert!(name(["CA"]).includes_atom(&atom));
        assert!(!name(["N"]).includes_atom(&atom));
        // Atom names match case-insensitively.
        assert!(name(["cA"]).includes_atom(&atom));
    }

    #[test]
    fn test_altloc() {
        let atom = fixture_atom();
        assert!(altloc([" "]).includes_atom(&atom));
        assert!(!altloc(["A"]).includes_atom(&atom));
    }

    #[test]
    fn test_elem() {
        let atom = fixture_atom();
        assert!(elem(["N"]).includes_atom(&atom));
        assert!(!elem(["C"]).includes_atom(&atom));
        assert!(elem(["n"]).includes_atom(&atom));
    }

    #[test]
    fn test_residue() {
        let atom = fixture_atom();
        assert!(residue(["ALA"]).includes_atom(&atom));
        assert!(!residue(["CYS"]).includes_atom(&atom));
        assert!(residue(["AlA"]).includes_atom(&atom));
    }

    #[test]
    fn test_sequence() {
        let atom = fixture_atom();
        assert!(sequence(Range::new(1, 14)).includes_atom(&atom));
        assert!(!sequence(Range::new(18, 20)).includes_atom(&atom));
    }

    #[test]
    fn test_icode() {
        let atom = fixture_atom();
        assert!(icode(["A"]).includes_atom(&atom));
        assert!(!icode(["F"]).includes_atom(&atom));
        // Insertion codes match case-sensitively.
        assert!(!icode(["a"]).includes_atom(&atom));
    }

    #[test]
    fn test_residx() {
        let atom = fixture_atom();
        assert!(residx(Range::new(1, 14)).includes_atom(&atom));
        assert!(!residx(Range::new(18, 20)).includes_atom(&atom));
    }

    #[test]
    fn test_chain() {
        let atom = fixture_atom();
        assert!(chain(["B"]).includes_atom(&atom));
        assert!(!chain(["F"]).includes_atom(&atom));
        // Chain names match case-sensitively.
        assert!(!chain(["b"]).includes_atom(&atom));
    }

    #[test]
    fn test_hetatm() {
        let het = Atom::builder("O").hetatm(true).build();
        assert!(hetatm().includes_atom(&het));
        let plain = Atom::builder("O").hetatm(false).build();
        assert!(!hetatm().includes_atom(&plain));
    }

    #[test]
    fn test_polarh() {
        assert!(polarh().includes_atom(&atom_with_flags(AtomFlags::HYDROGEN)));
        assert!(!polarh().includes_atom(&atom_with_flags(AtomFlags::NONPOLAR_H)));
    }

    #[test]
    fn test_nonpolarh() {
        assert!(nonpolarh().includes_atom(&atom_with_flags(AtomFlags::NONPOLAR_H)));
        assert!(!nonpolarh().includes_atom(&atom_with_flags(AtomFlags::HYDROGEN)));
    }

    #[test]
    fn test_all_none() {
        let atom = fixture_atom();
        assert!(all().includes_atom(&atom));
        assert!(!none().includes_atom(&atom));
    }

    #[test]
    fn test_classification_leaves() {
        let cases = [
            (protein(), ResidueFlags::PROTEIN),
            (basic(), ResidueFlags::BASIC),
            (acidic(), ResidueFlags::ACIDIC),
            (polar(), ResidueFlags::POLAR),
            (nonpolar(), ResidueFlags::NONPOLAR),
            (aromatic(), ResidueFlags::AROMATIC),
            (nucleic(), ResidueFlags::NUCLEIC),
            (purine(), ResidueFlags::PURINE),
            (pyrimidine(), ResidueFlags::PYRIMIDINE),
            (water(), ResidueFlags::WATER),
        ];
        for (sel, flag) in cases {
            assert!(
                sel.includes_atom(&atom_with_residue_flags(flag)),
                "{sel} should match its flag"
            );
            assert!(
                !sel.includes_atom(&atom_with_residue_flags(ResidueFlags::empty())),
                "{sel} should not match an unclassified residue"
            );
        }
    }

    #[test]
    fn test_charged() {
        assert!(charged().includes_atom(&atom_with_residue_flags(ResidueFlags::ACIDIC)));
        assert!(charged().includes_atom(&atom_with_residue_flags(ResidueFlags::BASIC)));
        assert!(!charged().includes_atom(&atom_with_residue_flags(ResidueFlags::empty())));
        assert!(!charged().includes_atom(&atom_with_residue_flags(ResidueFlags::POLAR)));
    }

    #[test]
    fn test_not() {
        let atom = fixture_atom();
        assert!(not(none()).includes_atom(&atom));
        assert!(!not(all()).includes_atom(&atom));
    }

    #[test]
    fn test_and() {
        let atom = fixture_atom();
        assert!(and(all(), all()).includes_atom(&atom));
        assert!(!and(all(), none()).includes_atom(&atom));
        assert!(!and(none(), all()).includes_atom(&atom));
        assert!(!and(none(), none()).includes_atom(&atom));
    }

    #[test]
    fn test_or() {
        let atom = fixture_atom();
        assert!(or(all(), not(none())).includes_atom(&atom));
        assert!(or(all(), none()).includes_atom(&atom));
        assert!(or(none(), all()).includes_atom(&atom));
        assert!(!or(not(all()), none()).includes_atom(&atom));
    }

    #[test]
    fn test_composed_expression() {
        // serial 2:8 and chain B, against the fixture (serial 5, chain B).
        let atom = fixture_atom();
        let sel = and(serial(Range::new(2, 8)), chain(["B"]));
        assert!(sel.includes_atom(&atom));

        let sel = and(serial(Range::new(2, 8)), chain(["A"]));
        assert!(!sel.includes_atom(&atom));
    }

    #[test]
    fn test_empty_containers_match_nothing() {
        let atom = fixture_atom();
        assert!(!serial(crate::pattern::RangeList::new()).includes_atom(&atom));
        assert!(!name(Vec::<&str>::new()).includes_atom(&atom));
    }
}
