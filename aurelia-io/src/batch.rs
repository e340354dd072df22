//! The batch program surface: sequence in, distinct counts out.
//!
//! Wire format (whitespace-separated decimal tokens): the sequence length
//! `n` followed by `n` values, then the query count `q` followed by `q`
//! pairs of **1-based** inclusive `(start, end)` indices. One answer per
//! line, in the order the queries were given.

use std::io::{BufRead, Write};

use aurelia_core::{AureliaError, Result};
use aurelia_query::{count_distinct, RangeQuery};

use crate::tokens::{IntWriter, TokenScanner};

/// Read one batch problem from `input`, answer it, and write the answers.
///
/// Queries are converted from the wire's 1-based inclusive pairs to the
/// engine's 0-based ranges. The output is flushed exactly once, after the
/// last answer.
///
/// # Errors
///
/// [`AureliaError::Parse`] for malformed or truncated token streams, and
/// [`AureliaError::InvalidInput`] for queries that are zero-indexed on the
/// wire or do not fit the sequence.
pub fn run(input: impl BufRead, output: impl Write) -> Result<()> {
    let mut scanner = TokenScanner::new(input);
    let mut writer = IntWriter::new(output);

    let n = scanner.next_usize()?;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(scanner.next_u64()?);
    }

    let q = scanner.next_usize()?;
    let mut queries = Vec::with_capacity(q);
    for slot in 0..q {
        let start = scanner.next_usize()?;
        let end = scanner.next_usize()?;
        if start == 0 || end == 0 {
            return Err(AureliaError::InvalidInput(format!(
                "query {slot}: indices on the wire are 1-based, got ({start}, {end})"
            )));
        }
        queries.push(RangeQuery::new(start - 1, end - 1));
    }

    for answer in count_distinct(&values, &queries)? {
        writer.write_u64(answer)?;
        writer.newline()?;
    }
    writer.flush()
}
