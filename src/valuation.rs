//! Propositions and valuations.
//!
//! A [`Valuation`] is an ordered, duplicate-free assignment of truth values
//! to proposition symbols. Formulas never store truth values themselves;
//! a valuation is supplied at evaluation time.

use crate::error::{Error, Result};

/// Characters that may never name a proposition.
const RESERVED: [char; 5] = ['+', '*', '~', '0', '1'];

/// A single proposition symbol with its assigned truth value.
///
/// # Invariants
///
/// - The symbol is never one of the reserved characters `+ * ~ 0 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Proposition {
    symbol: char,
    value: bool,
}

impl Proposition {
    /// Creates a proposition, rejecting reserved operator and constant
    /// characters with [`Error::ReservedSymbol`].
    pub fn new(symbol: char, value: bool) -> Result<Self> {
        if RESERVED.contains(&symbol) {
            return Err(Error::ReservedSymbol(symbol));
        }
        Ok(Proposition { symbol, value })
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.symbol, if self.value { 'T' } else { 'F' })
    }
}

/// An ordered sequence of propositions, one entry per distinct symbol.
///
/// Entry order is first-occurrence order when extracted from a formula
/// (left subtree before right subtree).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Valuation {
    entries: Vec<Proposition>,
}

impl Valuation {
    /// An empty valuation.
    pub fn new() -> Self {
        Valuation::default()
    }

    /// A valuation holding one fresh entry with the default value `false`.
    pub fn singleton(symbol: char) -> Result<Self> {
        Ok(Valuation {
            entries: vec![Proposition::new(symbol, false)?],
        })
    }

    /// Builds a valuation from `(symbol, value)` pairs.
    /// The first occurrence of a symbol wins; later duplicates are dropped.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, bool)>,
    {
        let mut valuation = Valuation::new();
        for (symbol, value) in pairs {
            let prop = Proposition::new(symbol, value)?;
            if !valuation.contains(symbol) {
                valuation.entries.push(prop);
            }
        }
        Ok(valuation)
    }

    /// The truth value assigned to `symbol`, or `None` if absent.
    pub fn value(&self, symbol: char) -> Option<bool> {
        self.entries
            .iter()
            .find(|p| p.symbol == symbol)
            .map(|p| p.value)
    }

    /// Whether `symbol` names a proposition in this valuation.
    pub fn contains(&self, symbol: char) -> bool {
        self.entries.iter().any(|p| p.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposition> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|p| p.symbol)
    }

    /// Merges `other` into `self` by symbol: `self`'s entries stay first,
    /// entries of `other` whose symbols are new are appended in order.
    /// Duplicate symbols in `other` are dropped, never overwritten.
    pub fn merge(&mut self, other: Valuation) {
        for prop in other.entries {
            if !self.contains(prop.symbol) {
                self.entries.push(prop);
            }
        }
    }

    /// Enumerates all `2^n` assignments over this valuation's `n` symbols.
    ///
    /// The lattice of the tail is built first, then duplicated with the head
    /// symbol forced `false` and forced `true`, so the first symbol varies
    /// slowest (most-significant-bit ordering), `false` before `true`.
    ///
    /// The empty valuation yields a single empty assignment.
    pub fn lattice(&self) -> Vec<Valuation> {
        Self::lattice_of(&self.entries)
    }

    fn lattice_of(entries: &[Proposition]) -> Vec<Valuation> {
        let (head, tail) = match entries.split_first() {
            None => return vec![Valuation::new()],
            Some(split) => split,
        };

        if tail.is_empty() {
            return [false, true]
                .into_iter()
                .map(|value| Valuation {
                    entries: vec![Proposition {
                        symbol: head.symbol,
                        value,
                    }],
                })
                .collect();
        }

        let rest = Self::lattice_of(tail);
        let mut out = Vec::with_capacity(rest.len() * 2);
        for value in [false, true] {
            for tail_valuation in &rest {
                let mut entries = Vec::with_capacity(tail_valuation.entries.len() + 1);
                entries.push(Proposition {
                    symbol: head.symbol,
                    value,
                });
                entries.extend(tail_valuation.entries.iter().copied());
                out.push(Valuation { entries });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_symbols_rejected() {
        for symbol in ['+', '*', '~', '0', '1'] {
            let result = Proposition::new(symbol, false);
            assert_eq!(result, Err(Error::ReservedSymbol(symbol)));
        }
    }

    #[test]
    fn test_lookup() {
        let v = Valuation::from_pairs([('a', true), ('b', false)]).unwrap();
        assert_eq!(v.value('a'), Some(true));
        assert_eq!(v.value('b'), Some(false));
        assert_eq!(v.value('c'), None);
        assert!(v.contains('a'));
        assert!(!v.contains('c'));
    }

    #[test]
    fn test_from_pairs_first_occurrence_wins() {
        let v = Valuation::from_pairs([('a', true), ('a', false), ('b', false)]).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.value('a'), Some(true));
    }

    #[test]
    fn test_merge_keeps_order_and_drops_duplicates() {
        let mut left = Valuation::from_pairs([('a', true), ('b', false)]).unwrap();
        let right = Valuation::from_pairs([('a', false), ('c', true)]).unwrap();
        left.merge(right);

        let symbols: Vec<char> = left.symbols().collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
        // the duplicate 'a' from the right side must not overwrite
        assert_eq!(v_value(&left, 'a'), true);
        assert_eq!(v_value(&left, 'c'), true);
    }

    fn v_value(v: &Valuation, symbol: char) -> bool {
        v.value(symbol).unwrap()
    }

    #[test]
    fn test_lattice_single_entry() {
        let v = Valuation::singleton('a').unwrap();
        let lattice = v.lattice();
        assert_eq!(lattice.len(), 2);
        assert_eq!(lattice[0].value('a'), Some(false));
        assert_eq!(lattice[1].value('a'), Some(true));
    }

    #[test]
    fn test_lattice_ordering() {
        let v = Valuation::from_pairs([('a', false), ('b', false)]).unwrap();
        let rows: Vec<(bool, bool)> = v
            .lattice()
            .iter()
            .map(|row| (v_value(row, 'a'), v_value(row, 'b')))
            .collect();
        // first symbol varies slowest, false before true
        assert_eq!(
            rows,
            vec![
                (false, false),
                (false, true),
                (true, false),
                (true, true),
            ]
        );
    }

    #[test]
    fn test_lattice_is_exhaustive() {
        let v = Valuation::from_pairs([('a', false), ('b', false), ('c', false)]).unwrap();
        let lattice = v.lattice();
        assert_eq!(lattice.len(), 8);

        let mut seen = std::collections::HashSet::new();
        for row in &lattice {
            assert_eq!(row.len(), 3);
            let key: Vec<bool> = row.iter().map(|p| p.value()).collect();
            assert!(seen.insert(key), "duplicate assignment in lattice");
        }
    }

    #[test]
    fn test_lattice_of_empty_valuation() {
        let lattice = Valuation::new().lattice();
        assert_eq!(lattice.len(), 1);
        assert!(lattice[0].is_empty());
    }
}
