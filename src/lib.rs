//! # ratingbeam
//!
//! Average movie ratings from a flat ratings file, computed with a small,
//! single-threaded batch pipeline in the style of Apache Beam.
//!
//! ## The job
//!
//! Each input line is `user,movie,rating[,anything...]`. Lines that do not
//! have a numeric movie id in field 1 and a numeric rating in field 2 are
//! dropped without comment. The output has one `movie<TAB>average` line per
//! movie, in ascending movie order.
//!
//! ```no_run
//! use ratingbeam::job::RatingsJob;
//!
//! # fn main() -> anyhow::Result<()> {
//! let summary = RatingsJob::new("ratings.csv", "output.txt").run()?;
//! assert!(summary.movies_written <= summary.records_parsed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline layer
//!
//! - [`Pipeline`] holds the graph; [`PCollection<T>`] is a lazy handle to one
//!   node in it.
//! - Stateless transforms: [`map`](PCollection::map),
//!   [`filter`](PCollection::filter), [`flat_map`](PCollection::flat_map).
//! - Keyed: [`group_by_key`](PCollection::group_by_key), backed by
//!   [`GroupTable`].
//! - Execution: [`collect_seq`](PCollection::collect_seq) and
//!   [`collect_seq_sorted_by_key`](PCollection::collect_seq_sorted_by_key)
//!   run the chain through the sequential [`Runner`].
//! - Combiners: [`AverageF64`] implements [`CombineFn`] and
//!   [`LiftableCombiner`].
//!
//! ```
//! use ratingbeam::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let p = Pipeline::default();
//! let grouped = from_vec(&p, vec![(2, 'b'), (1, 'a'), (2, 'c')])
//!     .group_by_key()
//!     .collect_seq_sorted_by_key()?;
//! assert_eq!(grouped, vec![(1, vec!['a']), (2, vec!['b', 'c'])]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`ratings`] - line parser and per-movie reducer
//! - [`job`] - the end-to-end average-rating run
//! - [`collection`], [`pipeline`], [`node`], [`runner`] - pipeline core
//! - [`grouping`] - key → values table
//! - [`combiners`] - built-in aggregation functions
//! - [`io`] - text lines in, TSV out, transparent gzip input
//! - [`logging`] - tracing subscriber setup

pub mod collection;
pub mod combiners;
pub mod grouping;
pub mod helpers;
pub mod io;
pub mod job;
pub mod logging;
pub mod node;
pub mod node_id;
pub mod pipeline;
pub mod ratings;
pub mod runner;

pub use collection::{CombineFn, LiftableCombiner, PCollection, RFBound};
pub use combiners::AverageF64;
pub use grouping::GroupTable;
pub use helpers::*;
pub use node_id::NodeId;
pub use pipeline::Pipeline;
pub use runner::Runner;
