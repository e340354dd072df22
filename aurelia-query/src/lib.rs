//! Offline batch query engines for the Aurelia toolkit.
//!
//! The engines here trade generality for throughput: the full query batch
//! must be known up front, which lets it be reordered and answered in a
//! single pass over the data.
//!
//! - **Distinct counts** — [`count_distinct`] answers a batch of
//!   [`RangeQuery`] ranges in O((N + Q) log N) via one sweep and a Fenwick
//!   tree of latest-occurrence markers.
//!
//! # Example
//!
//! ```
//! use aurelia_query::{count_distinct, RangeQuery};
//!
//! let values = [10, 20, 10, 30];
//! let queries = [RangeQuery::new(0, 3), RangeQuery::new(1, 2)];
//! assert_eq!(count_distinct(&values, &queries).unwrap(), vec![3, 2]);
//! ```

pub mod distinct;

pub use distinct::{count_distinct, RangeQuery};
