//! Keyword table for the selection language
//!
//! Maps every built-in keyword to a zero-argument selector factory. The
//! grammar front-end resolves bare keywords here; unknown keywords degrade
//! to the `none` factory so one bad token cannot abort a larger
//! expression.

use phf::phf_map;

use crate::ast::{self, Selector};
use crate::pattern::{CaseFold, RangeList, ValueList};

/// A zero-argument selector factory
pub type SelectorFactory = fn() -> Selector;

// Argument-taking keywords start from an empty operand container, which
// includes nothing until the grammar front-end fills it in.

fn empty_serial() -> Selector {
    Selector::Serial(RangeList::new())
}

fn empty_sequence() -> Selector {
    Selector::Sequence(RangeList::new())
}

fn empty_residx() -> Selector {
    Selector::ResIdx(RangeList::new())
}

fn empty_name() -> Selector {
    Selector::Name(ValueList::new(CaseFold::Upper))
}

fn empty_altloc() -> Selector {
    Selector::AltLoc(ValueList::new(CaseFold::Exact))
}

fn empty_elem() -> Selector {
    Selector::Elem(ValueList::new(CaseFold::Upper))
}

fn empty_residue() -> Selector {
    Selector::Residue(ValueList::new(CaseFold::Upper))
}

fn empty_icode() -> Selector {
    Selector::ICode(ValueList::new(CaseFold::Exact))
}

fn empty_chain() -> Selector {
    Selector::Chain(ValueList::new(CaseFold::Exact))
}

/// Static map of lower-cased keyword strings to selector factories
static KEYWORDS: phf::Map<&'static str, SelectorFactory> = phf_map! {
    // Identity
    "all" => ast::all,
    "none" => ast::none,

    // Attribute keywords
    "serial" => empty_serial,
    "sequence" => empty_sequence,
    "residx" => empty_residx,
    "name" => empty_name,
    "altloc" => empty_altloc,
    "elem" => empty_elem,
    "residue" => empty_residue,
    "icode" => empty_icode,
    "chain" => empty_chain,

    // Atom classification
    "hetatm" => ast::hetatm,
    "polarh" => ast::polarh,
    "nonpolarh" => ast::nonpolarh,

    // Residue classification
    "protein" => ast::protein,
    "basic" => ast::basic,
    "acidic" => ast::acidic,
    "charged" => ast::charged,
    "polar" => ast::polar,
    "nonpolar" => ast::nonpolar,
    "aromatic" => ast::aromatic,
    "nucleic" => ast::nucleic,
    "purine" => ast::purine,
    "pyrimidine" => ast::pyrimidine,
    "water" => ast::water,
};

/// Look up a keyword's factory, case-insensitively.
///
/// Unknown keywords fall back to the `none` factory; the lookup never
/// fails.
pub fn keyword(key: &str) -> SelectorFactory {
    // Try exact match first
    if let Some(&factory) = KEYWORDS.get(key) {
        return factory;
    }
    // Try lowercase
    let lower = key.to_lowercase();
    KEYWORDS.get(lower.as_str()).copied().unwrap_or(ast::none)
}

/// Check if a name is a recognized keyword.
pub fn is_keyword(key: &str) -> bool {
    KEYWORDS.contains_key(key) || KEYWORDS.contains_key(key.to_lowercase().as_str())
}
