//! Selector expression tree
//!
//! Defines the closed selector node type, the operator descriptors that
//! carry keyword/name/priority and the combinator logic, the factory
//! functions for every built-in keyword, and the two renderings: canonical
//! text (`Display`) and the structured interchange form (`to_json`).

use serde_json::{json, Value as Json};

use crate::pattern::{CaseFold, RangeList, Value, ValueList};

/// Descriptor for a unary prefix combinator
///
/// `keyword` is the text token, `name` the structured-form tag, `priority`
/// the binding strength (smaller binds tighter), and `apply` the logic
/// applied to the operand's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixSpec {
    /// Text token used by `Display`
    pub keyword: &'static str,
    /// Tag used by `to_json`
    pub name: &'static str,
    /// Binding strength; smaller binds tighter
    pub priority: u8,
    /// Combinator logic over the operand's result
    pub apply: fn(bool) -> bool,
}

/// Descriptor for a binary infix combinator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfixSpec {
    /// Text token used by `Display`
    pub keyword: &'static str,
    /// Tag used by `to_json`
    pub name: &'static str,
    /// Binding strength; smaller binds tighter
    pub priority: u8,
    /// Combinator logic over both operands' results
    pub apply: fn(bool, bool) -> bool,
}

fn complement(operand: bool) -> bool {
    !operand
}

fn both(left: bool, right: bool) -> bool {
    left && right
}

fn either(left: bool, right: bool) -> bool {
    left || right
}

/// Descriptor for the `not` operator
pub const NOT_OP: PrefixSpec = PrefixSpec {
    keyword: "not",
    name: "Not",
    priority: 2,
    apply: complement,
};

/// Descriptor for the `and` operator
pub const AND_OP: InfixSpec = InfixSpec {
    keyword: "and",
    name: "And",
    priority: 3,
    apply: both,
};

/// Descriptor for the `or` operator
pub const OR_OP: InfixSpec = InfixSpec {
    keyword: "or",
    name: "Or",
    priority: 4,
    apply: either,
};

/// A selector expression tree node
///
/// Every node is a predicate over an atom. Leaves test one attribute or a
/// constant; combinators own their operand subtrees. Trees are value
/// trees: no sharing, no cycles, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    // =========================================================================
    // Identity leaves
    // =========================================================================
    /// Matches every atom
    All,

    /// Matches no atom
    None,

    // =========================================================================
    // Range-backed leaves
    // =========================================================================
    /// Atom serial number in one of the ranges
    Serial(RangeList),

    /// Residue sequence number in one of the ranges
    Sequence(RangeList),

    /// Residue index in one of the ranges
    ResIdx(RangeList),

    // =========================================================================
    // Value-backed leaves
    // =========================================================================
    /// Atom name in the list (case-insensitive)
    Name(ValueList),

    /// Alternate-location code in the list (case-sensitive)
    AltLoc(ValueList),

    /// Element symbol in the list (case-insensitive)
    Elem(ValueList),

    /// Residue type name in the list (case-insensitive)
    Residue(ValueList),

    /// Insertion code in the list (case-sensitive)
    ICode(ValueList),

    /// Chain name in the list (case-sensitive)
    Chain(ValueList),

    // =========================================================================
    // Flag leaves
    // =========================================================================
    /// Heteroatom marker set
    Hetatm,

    /// Polar hydrogen
    PolarH,

    /// Non-polar hydrogen
    NonPolarH,

    /// Amino acid residue
    Protein,

    /// Basic side chain
    Basic,

    /// Acidic side chain
    Acidic,

    /// Acidic or basic side chain
    Charged,

    /// Polar uncharged side chain
    Polar,

    /// Non-polar side chain
    NonPolar,

    /// Aromatic side chain
    Aromatic,

    /// Nucleotide residue
    Nucleic,

    /// Purine base
    Purine,

    /// Pyrimidine base
    Pyrimidine,

    /// Water molecule
    Water,

    // =========================================================================
    // Combinators
    // =========================================================================
    /// Unary prefix combinator (`not`, or a custom descriptor)
    Prefix(PrefixSpec, Box<Selector>),

    /// Binary infix combinator (`and`/`or`, or a custom descriptor)
    Infix(InfixSpec, Box<Selector>, Box<Selector>),
}

impl Selector {
    /// The text token for this node.
    pub fn keyword(&self) -> &'static str {
        match self {
            Selector::All => "all",
            Selector::None => "none",
            Selector::Serial(_) => "serial",
            Selector::Sequence(_) => "sequence",
            Selector::ResIdx(_) => "residx",
            Selector::Name(_) => "name",
            Selector::AltLoc(_) => "altloc",
            Selector::Elem(_) => "elem",
            Selector::Residue(_) => "residue",
            Selector::ICode(_) => "icode",
            Selector::Chain(_) => "chain",
            Selector::Hetatm => "hetatm",
            Selector::PolarH => "polarh",
            Selector::NonPolarH => "nonpolarh",
            Selector::Protein => "protein",
            Selector::Basic => "basic",
            Selector::Acidic => "acidic",
            Selector::Charged => "charged",
            Selector::Polar => "polar",
            Selector::NonPolar => "nonpolar",
            Selector::Aromatic => "aromatic",
            Selector::Nucleic => "nucleic",
            Selector::Purine => "purine",
            Selector::Pyrimidine => "pyrimidine",
            Selector::Water => "water",
            Selector::Prefix(op, _) => op.keyword,
            Selector::Infix(op, _, _) => op.keyword,
        }
    }

    /// The structured-form tag for this node.
    pub fn name(&self) -> &'static str {
        match self {
            Selector::All => "All",
            Selector::None => "None",
            Selector::Serial(_) => "Serial",
            Selector::Sequence(_) => "Sequence",
            Selector::ResIdx(_) => "ResIdx",
            Selector::Name(_) => "Name",
            Selector::AltLoc(_) => "AltLoc",
            Selector::Elem(_) => "Elem",
            Selector::Residue(_) => "Residue",
            Selector::ICode(_) => "ICode",
            Selector::Chain(_) => "Chain",
            Selector::Hetatm => "Hetatm",
            Selector::PolarH => "PolarH",
            Selector::NonPolarH => "NonPolarH",
            Selector::Protein => "Protein",
            Selector::Basic => "Basic",
            Selector::Acidic => "Acidic",
            Selector::Charged => "Charged",
            Selector::Polar => "Polar",
            Selector::NonPolar => "NonPolar",
            Selector::Aromatic => "Aromatic",
            Selector::Nucleic => "Nucleic",
            Selector::Purine => "Purine",
            Selector::Pyrimidine => "Pyrimidine",
            Selector::Water => "Water",
            Selector::Prefix(op, _) => op.name,
            Selector::Infix(op, _, _) => op.name,
        }
    }

    /// Binding priority: `Some` for combinators, `None` for leaves.
    pub fn priority(&self) -> Option<u8> {
        match self {
            Selector::Prefix(op, _) => Some(op.priority),
            Selector::Infix(op, _, _) => Some(op.priority),
            _ => Option::None,
        }
    }

    /// Check if this node has no child selectors.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Selector::Prefix(..) | Selector::Infix(..))
    }

    /// Structured form: `[name]` for plain leaves, `[name, operands...]`
    /// otherwise, operands in declaration order.
    pub fn to_json(&self) -> Json {
        match self {
            Selector::Serial(list) | Selector::Sequence(list) | Selector::ResIdx(list) => {
                json!([self.name(), list.to_json()])
            }
            Selector::Name(list)
            | Selector::AltLoc(list)
            | Selector::Elem(list)
            | Selector::Residue(list)
            | Selector::ICode(list)
            | Selector::Chain(list) => json!([self.name(), list.to_json()]),
            Selector::Prefix(op, operand) => json!([op.name, operand.to_json()]),
            Selector::Infix(op, left, right) => {
                json!([op.name, left.to_json(), right.to_json()])
            }
            _ => json!([self.name()]),
        }
    }
}

impl serde::Serialize for Selector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Write an operand, parenthesized iff it binds looser than its parent.
fn write_operand(
    f: &mut std::fmt::Formatter<'_>,
    operand: &Selector,
    parent_priority: u8,
) -> std::fmt::Result {
    match operand.priority() {
        Some(p) if p > parent_priority => write!(f, "({operand})"),
        _ => write!(f, "{operand}"),
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Serial(list) | Selector::Sequence(list) | Selector::ResIdx(list) => {
                write!(f, "{} {}", self.keyword(), list)
            }
            Selector::Name(list)
            | Selector::AltLoc(list)
            | Selector::Elem(list)
            | Selector::Residue(list)
            | Selector::ICode(list)
            | Selector::Chain(list) => write!(f, "{} {}", self.keyword(), list),
            Selector::Prefix(op, operand) => {
                write!(f, "{} ", op.keyword)?;
                write_operand(f, operand, op.priority)
            }
            Selector::Infix(op, left, right) => {
                write_operand(f, left, op.priority)?;
                write!(f, " {} ", op.keyword)?;
                write_operand(f, right, op.priority)
            }
            _ => write!(f, "{}", self.keyword()),
        }
    }
}

// ============================================================================
// Factory functions
// ============================================================================

/// Selector matching every atom.
pub fn all() -> Selector {
    Selector::All
}

/// Selector matching no atom.
pub fn none() -> Selector {
    Selector::None
}

/// Select by atom serial number.
pub fn serial(ranges: impl Into<RangeList>) -> Selector {
    Selector::Serial(ranges.into())
}

/// Select by residue sequence number.
pub fn sequence(ranges: impl Into<RangeList>) -> Selector {
    Selector::Sequence(ranges.into())
}

/// Select by residue index.
pub fn residx(ranges: impl Into<RangeList>) -> Selector {
    Selector::ResIdx(ranges.into())
}

/// Select by atom name, case-insensitive.
pub fn name<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::Name(ValueList::with_values(values, CaseFold::Upper))
}

/// Select by alternate-location code, case-sensitive.
pub fn altloc<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::AltLoc(ValueList::with_values(values, CaseFold::Exact))
}

/// Select by element symbol, case-insensitive.
pub fn elem<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::Elem(ValueList::with_values(values, CaseFold::Upper))
}

/// Select by residue type name, case-insensitive.
pub fn residue<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::Residue(ValueList::with_values(values, CaseFold::Upper))
}

/// Select by insertion code, case-sensitive.
pub fn icode<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::ICode(ValueList::with_values(values, CaseFold::Exact))
}

/// Select by chain name, case-sensitive.
pub fn chain<V, I>(values: I) -> Selector
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Selector::Chain(ValueList::with_values(values, CaseFold::Exact))
}

/// Select heteroatoms.
pub fn hetatm() -> Selector {
    Selector::Hetatm
}

/// Select polar hydrogens.
pub fn polarh() -> Selector {
    Selector::PolarH
}

/// Select non-polar hydrogens.
pub fn nonpolarh() -> Selector {
    Selector::NonPolarH
}

/// Select amino acid residues.
pub fn protein() -> Selector {
    Selector::Protein
}

/// Select residues with basic side chains.
pub fn basic() -> Selector {
    Selector::Basic
}

/// Select residues with acidic side chains.
pub fn acidic() -> Selector {
    Selector::Acidic
}

/// Select residues with charged (acidic or basic) side chains.
pub fn charged() -> Selector {
    Selector::Charged
}

/// Select residues with polar uncharged side chains.
pub fn polar() -> Selector {
    Selector::Polar
}

/// Select residues with non-polar side chains.
pub fn nonpolar() -> Selector {
    Selector::NonPolar
}

/// Select residues with aromatic side chains.
pub fn aromatic() -> Selector {
    Selector::Aromatic
}

/// Select nucleotide residues.
pub fn nucleic() -> Selector {
    Selector::Nucleic
}

/// Select purine bases.
pub fn purine() -> Selector {
    Selector::Purine
}

/// Select pyrimidine bases.
pub fn pyrimidine() -> Selector {
    Selector::Pyrimidine
}

/// Select water molecules.
pub fn water() -> Selector {
    Selector::Water
}

/// Negate a selector.
pub fn not(operand: Selector) -> Selector {
    Selector::Prefix(NOT_OP, Box::new(operand))
}

/// Conjunction of two selectors.
pub fn and(left: Selector, right: Selector) -> Selector {
    Selector::Infix(AND_OP, Box::new(left), Box::new(right))
}

/// Disjunction of two selectors.
pub fn or(left: Selector, right: Selector) -> Selector {
    Selector::Infix(OR_OP, Box::new(left), Box::new(right))
}
