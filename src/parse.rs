//! Recursive-descent parser for formula strings.
//!
//! The input is scanned character by character with explicit
//! parenthesis-depth tracking; there is no tokenizer. `+` (OR) binds
//! loosest, then `*` (AND), then the `~` prefix; parentheses group and
//! whitespace is ignored.

use log::debug;

use crate::error::{Error, Result};
use crate::expr::Expr;

/// Parses a formula string into an expression tree.
///
/// A string that cannot be reduced to a well-formed formula fails with
/// [`Error::MalformedFormula`]; there is no recovery and no partial result.
pub fn parse(text: &str) -> Result<Expr> {
    let stripped = strip_whitespace(text);
    debug!("parse({:?}), stripped to {:?}", text, stripped);
    parse_formula(&stripped)
}

fn parse_formula(text: &str) -> Result<Expr> {
    let text = strip_parentheses(text);

    // a single remaining character is an atomic proposition or a constant
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return Err(malformed(text)),
        (Some(symbol), None) => return leaf(symbol),
        _ => {}
    }

    if let Some(pivot) = find_pivot(text) {
        let lhs = parse_formula(&text[..pivot])?;
        let rhs = parse_formula(&text[pivot + 1..])?;
        return Ok(match text.as_bytes()[pivot] {
            b'+' => Expr::or(lhs, rhs),
            _ => Expr::and(lhs, rhs),
        });
    }

    if let Some(rest) = text.strip_prefix('~') {
        return Ok(Expr::not(parse_formula(rest)?));
    }

    Err(malformed(text))
}

fn leaf(symbol: char) -> Result<Expr> {
    match symbol {
        '0' => Ok(Expr::constant(false)),
        '1' => Ok(Expr::constant(true)),
        '+' | '*' | '~' | '(' | ')' => Err(malformed(&symbol.to_string())),
        _ => Ok(Expr::atom(symbol)),
    }
}

fn malformed(text: &str) -> Error {
    Error::MalformedFormula(text.to_string())
}

/// Locates the top-level operator to split on, scanning left to right at
/// parenthesis depth 0. The first `+` wins immediately (lowest precedence);
/// otherwise the first `*` is remembered while the scan continues, since a
/// later `+` still takes priority.
fn find_pivot(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut fallback = None;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' if depth == 0 => return Some(i),
            '*' if depth == 0 => {
                if fallback.is_none() {
                    fallback = Some(i);
                }
            }
            _ => {}
        }
    }
    fallback
}

/// Removes every whitespace character, preserving the order of the rest.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strips enclosing parenthesis pairs until none is superfluous.
fn strip_parentheses(mut text: &str) -> &str {
    while has_superfluous_parentheses(text) {
        text = &text[1..text.len() - 1];
    }
    text
}

/// An enclosing pair is superfluous iff the opening parenthesis is the
/// first character, its match is the last character, and the depth never
/// returns to zero in between.
fn has_superfluous_parentheses(text: &str) -> bool {
    if !(text.starts_with('(') && text.ends_with(')')) || text.len() < 2 {
        return false;
    }
    let mut depth = 0i32;
    for c in text[..text.len() - 1].chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return false;
        }
    }
    true
}
