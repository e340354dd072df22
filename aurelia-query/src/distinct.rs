//! Offline distinct-count queries over a fixed sequence.
//!
//! Given a sequence and a batch of inclusive index ranges, answers "how many
//! distinct values does `values[start..=end]` contain" for every range in
//! O((N + Q) log N) total instead of recomputing each range from scratch.
//!
//! The whole batch is answered in one left-to-right sweep. A Fenwick tree
//! holds a 1-marker at every position that is currently the *latest*
//! occurrence of its value, so once the sweep has reached position `p`, the
//! marker count inside `[l, p]` equals the distinct count of
//! `values[l..=p]`: any value occurring in that range has its latest
//! occurrence up to `p` inside the range as well. Queries are sorted by
//! right endpoint and drained as the sweep reaches them — which is what
//! makes the single pass sufficient, and why the batch must be known up
//! front. Queries arriving after the sweep cannot be answered.

use std::collections::HashMap;
use std::hash::Hash;

use aurelia_core::{AureliaError, FenwickTree, Result};

/// An inclusive index range `[start, end]` into the queried sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    pub start: usize,
    pub end: usize,
}

impl RangeQuery {
    /// A query over `values[start..=end]`, both endpoints 0-based inclusive.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Count the distinct values inside every queried range of `values`.
///
/// Answers are returned in the order the queries were given, regardless of
/// the order they were answered in internally. The sweep stops as soon as
/// the last pending query has been answered.
///
/// # Errors
///
/// Returns [`AureliaError::InvalidInput`] if any query is inverted
/// (`start > end`) or reaches past the end of `values`. An empty batch is
/// answered as `Ok(vec![])` for any sequence, including an empty one.
///
/// # Example
///
/// ```
/// use aurelia_query::{count_distinct, RangeQuery};
///
/// let values = [1, 1, 2, 1, 3];
/// let queries = [RangeQuery::new(1, 4), RangeQuery::new(0, 0)];
/// assert_eq!(count_distinct(&values, &queries).unwrap(), vec![3, 1]);
/// ```
pub fn count_distinct<T>(values: &[T], queries: &[RangeQuery]) -> Result<Vec<u64>>
where
    T: Copy + Eq + Hash,
{
    for (slot, query) in queries.iter().enumerate() {
        if query.start > query.end || query.end >= values.len() {
            return Err(AureliaError::InvalidInput(format!(
                "query {slot}: range [{}, {}] does not fit a sequence of length {}",
                query.start,
                query.end,
                values.len()
            )));
        }
    }

    // Answer in ascending right-endpoint order; `order[cursor]` maps back to
    // the slot the answer belongs to. Ties need no particular order: every
    // answer at a phase reads the same structure state.
    let mut order: Vec<usize> = (0..queries.len()).collect();
    order.sort_unstable_by_key(|&slot| queries[slot].end);

    let mut markers: FenwickTree<i64> = FenwickTree::new(values.len());
    let mut latest: HashMap<T, usize> = HashMap::new();
    let mut answers = vec![0u64; queries.len()];
    let mut cursor = 0;

    for (phase_end, &value) in values.iter().enumerate() {
        if cursor == order.len() {
            break; // every query is answered; the rest of the sweep is wasted work
        }

        // This position becomes the latest occurrence of its value; the
        // previous occurrence, if any, stops being one.
        if let Some(&stale) = latest.get(&value) {
            markers.add(stale, -1);
        }
        markers.add(phase_end, 1);
        latest.insert(value, phase_end);

        while cursor < order.len() && queries[order[cursor]].end == phase_end {
            let slot = order[cursor];
            let start = queries[slot].start;
            answers[slot] = markers.range_sum(start..phase_end + 1) as u64;
            cursor += 1;
        }
    }

    Ok(answers)
}
