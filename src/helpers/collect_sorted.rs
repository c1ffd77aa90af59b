//! Sorted collection helpers.
//!
//! Grouping does not promise any output order, so sinks that need
//! deterministic files collect through [`PCollection::collect_seq_sorted_by_key`].

use crate::{PCollection, RFBound};
use anyhow::Result;

impl<K: RFBound + Ord, V: RFBound> PCollection<(K, V)> {
    /// Collect `(K, V)` pairs sequentially, sorted by key only.
    ///
    /// Values are never compared, so `V` may be a float. The sort is stable.
    ///
    /// ```
    /// use ratingbeam::*;
    ///
    /// let p = Pipeline::default();
    /// let kvs = from_vec(&p, vec![(102, 3.0), (101, 2.5)]);
    /// assert_eq!(
    ///     kvs.collect_seq_sorted_by_key().unwrap(),
    ///     vec![(101, 2.5), (102, 3.0)]
    /// );
    /// ```
    pub fn collect_seq_sorted_by_key(self) -> Result<Vec<(K, V)>> {
        let mut v = self.collect_seq()?;
        v.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(v)
    }
}
