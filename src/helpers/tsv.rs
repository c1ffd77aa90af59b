use crate::io::text::{TsvCell, write_tsv_vec};
use crate::{PCollection, RFBound};
use std::path::Path;

// --------- Sinks: TSV ----------
impl<K, V> PCollection<(K, V)>
where
    K: RFBound + Ord + TsvCell,
    V: RFBound + TsvCell,
{
    /// Execute, sort by key and write `key\tvalue` lines. Returns the row count.
    pub fn write_tsv_sorted(self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let v = self.collect_seq_sorted_by_key()?;
        write_tsv_vec(path, &v)
    }
}
