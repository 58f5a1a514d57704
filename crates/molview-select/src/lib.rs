//! Molview Selection Expression Engine
//!
//! This crate implements the selector expression language used to pick
//! subsets of atoms in a molecular model by composing predicates over
//! atom, residue, and chain attributes.
//!
//! # Overview
//!
//! The engine supports:
//! - Attribute selectors: `serial`, `name`, `elem`, `residue`, `chain`, etc.
//! - Classification selectors: `protein`, `basic`, `water`, `polarh`, ...
//! - Identity selectors: `all`, `none`
//! - Logical operators: `and`, `or`, `not`, with precedence-correct
//!   re-serialization to canonical text and to a structured JSON form
//! - A named-selector registry ([`Context`]) and a static keyword table
//! - A façade over an external grammar front-end (the [`Parser`] seam)
//!   that recovers rejection into a plain value instead of an error
//!
//! Trees are built either through the factory functions or by the grammar
//! front-end, evaluated per atom with [`Selector::includes_atom`], and
//! rendered with `to_string` / [`Selector::to_json`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use molview_mol::{Atom, Residue};
//! use molview_select::{and, chain, serial, Range};
//!
//! let res = Arc::new(Residue::new("ALA", 1, ' ', 0, "A"));
//! let atom = Atom::builder("CA").serial(5).residue(res).build();
//!
//! let sel = and(serial(Range::new(2, 8)), chain(["A"]));
//! assert!(sel.includes_atom(&atom));
//! assert_eq!(sel.to_string(), "serial 2:8 and chain A");
//! assert_eq!(
//!     sel.to_json(),
//!     serde_json::json!(["And", ["Serial", [[2, 8]]], ["Chain", ["A"]]])
//! );
//! ```

// Module declarations
mod ast;
mod context;
mod error;
mod eval;
mod keywords;
mod parse;
mod pattern;

// Re-export main types
pub use ast::{
    acidic, all, altloc, and, aromatic, basic, chain, charged, elem, hetatm, icode, name, none,
    nonpolar, nonpolarh, not, nucleic, or, polar, polarh, protein, purine, pyrimidine, residue,
    residx, sequence, serial, water, InfixSpec, PrefixSpec, Selector, AND_OP, NOT_OP, OR_OP,
};
pub use context::Context;
pub use error::{ParseError, SelectError, SelectResult};
pub use keywords::{is_keyword, keyword, SelectorFactory};
pub use parse::{parse, Parsed, Parser};
pub use pattern::{CaseFold, Range, RangeList, Value, ValueList};

// Re-export the atom type for convenience
pub use molview_mol::Atom;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ast::{all, and, none, not, or, Selector};
    pub use crate::context::Context;
    pub use crate::error::{ParseError, SelectError, SelectResult};
    pub use crate::parse::{parse, Parsed, Parser};
    pub use crate::pattern::{Range, RangeList, Value, ValueList};
}
