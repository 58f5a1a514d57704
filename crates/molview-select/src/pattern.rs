//! Operand containers for selectors
//!
//! Provides the interval and value-list types that parameterize leaf
//! selectors: closed integer ranges, ordered range lists with OR
//! membership, and value multisets with an optional upper-case folding
//! policy.

use serde_json::{json, Value as Json};

/// A closed integer interval `[low, high]`
///
/// Callers are responsible for ordering the bounds; the constructor does
/// not reorder them. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    low: i32,
    high: i32,
}

impl Range {
    /// Create a range from ordered bounds.
    pub fn new(low: i32, high: i32) -> Self {
        debug_assert!(low <= high, "range bounds out of order");
        Range { low, high }
    }

    /// Create a single-point range covering exactly one value.
    pub fn point(value: i32) -> Self {
        Range {
            low: value,
            high: value,
        }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Check if a value lies within the interval, both bounds inclusive.
    #[inline]
    pub fn includes(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }

    /// Structured form: `[low, high]`, even for single-point ranges.
    pub fn to_json(&self) -> Json {
        json!([self.low, self.high])
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}:{}", self.low, self.high)
        }
    }
}

/// An ordered sequence of ranges with OR membership
///
/// Insertion order is preserved; ranges may overlap and the same range may
/// appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList {
    ranges: Vec<Range>,
}

impl RangeList {
    /// Create an empty range list.
    pub fn new() -> Self {
        RangeList::default()
    }

    /// Append a range at the end of the list.
    pub fn append(&mut self, range: Range) {
        self.ranges.push(range);
    }

    /// Remove every entry structurally equal to `range`.
    ///
    /// Values still covered by a different remaining range stay included;
    /// removing a range that was never appended is a no-op.
    pub fn remove(&mut self, range: Range) {
        self.ranges.retain(|r| *r != range);
    }

    /// Check if any contained range includes the value.
    pub fn includes(&self, value: i32) -> bool {
        self.ranges.iter().any(|r| r.includes(value))
    }

    /// Number of contained ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the list has no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the contained ranges in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Range> {
        self.ranges.iter()
    }

    /// Structured form: ordered array of `[low, high]` pairs.
    pub fn to_json(&self) -> Json {
        Json::Array(self.ranges.iter().map(Range::to_json).collect())
    }
}

impl From<Range> for RangeList {
    fn from(range: Range) -> Self {
        RangeList {
            ranges: vec![range],
        }
    }
}

impl FromIterator<Range> for RangeList {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        RangeList {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for RangeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for range in &self.ranges {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{range}")?;
            first = false;
        }
        Ok(())
    }
}

/// A scalar operand value: an integer or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer value
    Int(i32),
    /// String value
    Str(String),
}

impl Value {
    /// Structured form: integers stay numeric, strings stay strings.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Int(v) => json!(v),
            Value::Str(s) => json!(s),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Case-folding policy for a value list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFold {
    /// Exact equality, no folding
    #[default]
    Exact,
    /// Upper-case strings on insertion and query; integers pass through
    Upper,
}

impl CaseFold {
    fn apply(self, value: Value) -> Value {
        match (self, value) {
            (CaseFold::Upper, Value::Str(s)) => Value::Str(s.to_uppercase()),
            (_, value) => value,
        }
    }
}

/// An ordered multiset of scalar values with a fixed folding policy
///
/// Folding happens on insertion and on query, never anywhere else, so the
/// stored values are always already folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueList {
    values: Vec<Value>,
    fold: CaseFold,
}

impl ValueList {
    /// Create an empty list with the given folding policy.
    pub fn new(fold: CaseFold) -> Self {
        ValueList {
            values: Vec::new(),
            fold,
        }
    }

    /// Create a list from values, folding each per the policy.
    pub fn with_values<V, I>(values: I, fold: CaseFold) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        ValueList {
            values: values.into_iter().map(|v| fold.apply(v.into())).collect(),
            fold,
        }
    }

    /// The folding policy this list was built with.
    pub fn fold(&self) -> CaseFold {
        self.fold
    }

    /// Append a value (folded), keeping duplicates.
    pub fn append(&mut self, value: impl Into<Value>) {
        self.values.push(self.fold.apply(value.into()));
    }

    /// Remove one occurrence of the (folded) value if present.
    ///
    /// Duplicates need repeated removal; removing an absent value is a
    /// no-op.
    pub fn remove(&mut self, value: impl Into<Value>) {
        let folded = self.fold.apply(value.into());
        if let Some(pos) = self.values.iter().position(|v| *v == folded) {
            self.values.remove(pos);
        }
    }

    /// Check multiset membership of the (folded) value.
    pub fn includes(&self, value: impl Into<Value>) -> bool {
        let folded = self.fold.apply(value.into());
        self.values.contains(&folded)
    }

    /// Number of stored values, duplicates counted.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the stored (folded) values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Structured form: ordered array of folded scalars.
    pub fn to_json(&self) -> Json {
        Json::Array(self.values.iter().map(Value::to_json).collect())
    }
}

impl std::fmt::Display for ValueList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for value in &self.values {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}
