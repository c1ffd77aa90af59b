pub(crate) mod collect_sorted;
pub(crate) mod keyed;
pub(crate) mod stdlib;
pub(crate) mod tsv;

// Only re-export files with top-level functions
pub use stdlib::*;
