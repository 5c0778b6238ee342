//! # wff-rs: Propositional formulas and truth tables in Rust
//!
//! **`wff-rs`** parses textual propositional-logic formulas into expression
//! trees, evaluates them under arbitrary truth assignments, and enumerates
//! the full lattice of assignments to produce truth tables.
//!
//! ## The grammar
//!
//! Formulas are plain strings over a single-character alphabet:
//!
//! - `+` is OR (binds loosest), `*` is AND, `~` is prefix NOT (binds tightest)
//! - `(` and `)` group, `0` and `1` are the constants, whitespace is ignored
//! - any other printable character names an atomic proposition
//!
//! Parsing is character-level recursive descent with explicit
//! parenthesis-depth tracking; there is no tokenizer. Malformed input is
//! rejected outright: a formula either parses and evaluates completely, or
//! not at all.
//!
//! ## Key Features
//!
//! - **Owned expression trees**: every parent owns its children outright,
//!   so destruction cascades without any shared ownership or cycles.
//! - **Valuations, not tree state**: truth values live in a
//!   [`Valuation`][crate::valuation::Valuation] passed into evaluation,
//!   never in the tree itself.
//! - **Algebraic rewrites**: De Morgan dualization and distribution build
//!   new trees from existing subtrees without mutating any node.
//! - **Complete enumeration**: the lattice of a formula's `n` propositions
//!   is all `2^n` assignments, first-occurrence symbol varying slowest.
//!
//! ## Quick Start
//!
//! Add `wff-rs` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wff-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use wff_rs::parse::parse;
//! use wff_rs::table::TruthTable;
//! use wff_rs::valuation::Valuation;
//!
//! # fn main() -> wff_rs::error::Result<()> {
//! // 1. Parse a formula.
//! let expr = parse("~(a + b) * c")?;
//!
//! // 2. Evaluate it under one assignment.
//! let assignment = Valuation::from_pairs([('a', false), ('b', false), ('c', true)])?;
//! assert_eq!(expr.evaluate(&assignment)?, true);
//!
//! // 3. Or build the whole truth table.
//! let table = TruthTable::build(&expr)?;
//! assert_eq!(table.num_rows(), 8);
//! assert!(!table.is_tautology());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Components
//!
//! - **[`parse`]**: the formula-string parser.
//! - **[`expr`]**: expression trees, evaluation, and the rewrite operations.
//! - **[`valuation`]**: propositions, assignments, and lattice enumeration.
//! - **[`table`]**: fully evaluated truth tables and model counting.

pub mod error;
pub mod expr;
pub mod parse;
pub mod table;
pub mod valuation;
