//! Foundational data structures and error types for the Aurelia toolkit.
//!
//! `aurelia-core` provides the pieces the rest of the workspace builds on:
//!
//! - **Error types** — [`AureliaError`] and [`Result`] for structured error handling
//! - **Indexed sums** — [`FenwickTree`], point updates and range sums in O(log n)
//! - **Tries** — [`Trie`], a byte trie with membership and prefix counting
//! - **Number theory** — [`TotientSieve`], a linear-sieve Euler phi table

pub mod error;
pub mod fenwick;
pub mod totient;
pub mod trie;

pub use error::{AureliaError, Result};
pub use fenwick::FenwickTree;
pub use totient::TotientSieve;
pub use trie::Trie;
