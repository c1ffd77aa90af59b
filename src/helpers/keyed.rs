use crate::grouping::GroupTable;
use crate::node::{Node, Partition, downcast_vec};
use crate::{PCollection, RFBound};
use std::hash::Hash;
use std::rc::Rc;

impl<K: RFBound + Eq + Hash, V: RFBound> PCollection<(K, V)> {
    /// Group values by key: `(K, V)` → `(K, Vec<V>)`.
    ///
    /// Values keep their upstream order inside each group. Output groups are
    /// unordered; sort downstream when order matters.
    pub fn group_by_key(self) -> PCollection<(K, Vec<V>)> {
        let exec = Rc::new(|p: Partition| -> anyhow::Result<Partition> {
            let kv = downcast_vec::<(K, V)>(p, "group_by_key")?;
            let table: GroupTable<K, V> = kv.into_iter().collect();
            Ok(Box::new(table.into_iter().collect::<Vec<(K, Vec<V>)>>()))
        });
        self.chain(Node::GroupByKey { exec })
    }
}
