//! Molview Molecular Data Structures
//!
//! This crate provides the molecular attribute source consumed by the
//! selection engine:
//!
//! - [`Atom`] - per-atom attributes (serial, name, element, flags, ...)
//! - [`Residue`] - per-residue record shared by the residue's atoms
//! - [`AtomFlags`] / [`ResidueFlags`] - bitmask fields tested by
//!   classification predicates
//!
//! Residue/chain information lives in a [`Residue`] record referenced from
//! each atom through an `Arc`, so residue-level attribute reads need no
//! side lookup.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use molview_mol::{Atom, Residue, ResidueFlags};
//!
//! let res = Arc::new(Residue::new("ALA", 1, ' ', 0, "A"));
//! assert!(res.flags.contains(ResidueFlags::PROTEIN));
//!
//! let atom = Atom::builder("CA").serial(1).element("C").residue(res).build();
//! assert_eq!(atom.residue.chain, "A");
//! ```

// Module declarations
mod atom;
mod flags;
mod residue;

// Re-export main types
pub use atom::{Atom, AtomBuilder};
pub use flags::{AtomFlags, ResidueFlags};
pub use residue::Residue;
