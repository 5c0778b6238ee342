//! Truth tables: the full lattice of assignments for a formula, evaluated.

use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::error::Result;
use crate::expr::Expr;
use crate::valuation::Valuation;

/// A fully evaluated truth table for one formula.
///
/// Rows follow the lattice enumeration order: the first-extracted symbol
/// varies slowest, `false` before `true`.
#[derive(Debug, Clone)]
pub struct TruthTable {
    symbols: Vec<char>,
    rows: Vec<(Valuation, bool)>,
}

impl TruthTable {
    /// Extracts the formula's propositions, enumerates every assignment,
    /// and evaluates each one. A formula either produces a complete table
    /// or an error; there are no partial tables.
    pub fn build(expr: &Expr) -> Result<TruthTable> {
        let propositions = expr.propositions()?;
        let symbols: Vec<char> = propositions.symbols().collect();
        debug!("building table for {} over {:?}", expr, symbols);

        let mut rows = Vec::new();
        for valuation in propositions.lattice() {
            let result = expr.evaluate(&valuation)?;
            rows.push((valuation, result));
        }
        Ok(TruthTable { symbols, rows })
    }

    /// The column header: every symbol in extraction order, then `Eval`.
    pub fn header(&self) -> String {
        let mut out = String::new();
        for &symbol in &self.symbols {
            out.push(symbol);
            out.push_str(" | ");
        }
        out.push_str("Eval");
        out
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The rows in lattice order, each an assignment with its result.
    pub fn rows(&self) -> impl Iterator<Item = (&Valuation, bool)> {
        self.rows.iter().map(|(valuation, result)| (valuation, *result))
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of assignments under which the formula evaluates to true.
    pub fn count_satisfying(&self) -> BigUint {
        BigUint::from(self.rows.iter().filter(|(_, result)| *result).count())
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|(_, result)| *result)
    }

    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|(_, result)| !*result)
    }
}

fn truth_char(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        for (valuation, result) in &self.rows {
            writeln!(f)?;
            for prop in valuation.iter() {
                write!(f, "{} | ", truth_char(prop.value()))?;
            }
            write!(f, "{}", truth_char(*result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parse::parse;

    #[test]
    fn test_conjunction_table() {
        let table = TruthTable::build(&parse("a*b").unwrap()).unwrap();
        assert_eq!(table.symbols(), &['a', 'b']);
        assert_eq!(table.num_rows(), 4);

        let results: Vec<bool> = table.rows().map(|(_, result)| result).collect();
        assert_eq!(results, vec![false, false, false, true]);
    }

    #[test]
    fn test_row_assignments_follow_lattice_order() {
        let table = TruthTable::build(&parse("a*b").unwrap()).unwrap();
        let rows: Vec<(bool, bool)> = table
            .rows()
            .map(|(v, _)| (v.value('a').unwrap(), v.value('b').unwrap()))
            .collect();
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
    fn test_render() {
        let table = TruthTable::build(&parse("a*b").unwrap()).unwrap();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "a | b | Eval",
                "F | F | F",
                "F | T | F",
                "T | F | F",
                "T | T | T",
            ]
        );
    }

    #[test]
    fn test_header_of_constant_formula() {
        let table = TruthTable::build(&parse("1*0").unwrap()).unwrap();
        assert_eq!(table.header(), "Eval");
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.to_string(), "Eval\nF");
    }

    #[test]
    fn test_count_satisfying() {
        let table = TruthTable::build(&parse("a+b").unwrap()).unwrap();
        assert_eq!(table.count_satisfying(), BigUint::from(3u32));
    }

    #[test]
    fn test_tautology_and_contradiction() {
        let excluded_middle = TruthTable::build(&parse("a+~a").unwrap()).unwrap();
        assert!(excluded_middle.is_tautology());
        assert!(!excluded_middle.is_contradiction());

        let absurd = TruthTable::build(&parse("a*~a").unwrap()).unwrap();
        assert!(absurd.is_contradiction());
    }
}
