//! Client-side sort and filter pipeline.
//!
//! The engines never mutate their input: every pass reads a slice and returns
//! a freshly allocated `Vec`. Filtering keeps source order; sorting is a
//! separate, stable pass applied by the caller after filtering.
//!
//! # Modules
//!
//! - [`keys`]: Closed sets of sortable keys per entity and their extractors
//! - [`sort`]: Sort directive, toggle semantics and the comparator
//! - [`filter`]: Search/discipline/gender filter over results

pub mod filter;
pub mod keys;
pub mod sort;

pub use filter::ResultFilter;
pub use keys::{AthleteSortKey, ItemSortKey, ResultSortKey, SortKey, SortValue};
pub use sort::{SortDirection, SortDirective, Sorter};
