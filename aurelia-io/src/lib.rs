//! Token I/O and the batch program surface for the Aurelia toolkit.
//!
//! - **Token I/O** — [`TokenScanner`] and [`IntWriter`] move whitespace-
//!   separated integers across byte streams with explicit flushing
//! - **Batch surface** — [`batch::run`] wires a token stream into the
//!   offline distinct-count engine and reports the answers
//!
//! The `aurelia-distinct` binary is a thin shell around [`batch::run`] over
//! locked stdin/stdout.

pub mod batch;
pub mod tokens;

pub use batch::run;
pub use tokens::{IntWriter, TokenScanner};
