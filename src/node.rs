//! Graph vertices executed by the [`Runner`](crate::runner::Runner).
//!
//! Every payload travelling between nodes is a type-erased [`Partition`]. The
//! closures built by [`PCollection`](crate::PCollection) methods know the
//! element types and downcast it back to a concrete `Vec<T>`.

use anyhow::{Result, anyhow};
use std::any::{Any, type_name};
use std::rc::Rc;

/// Boxed buffer carried from one node to the next.
pub type Partition = Box<dyn Any>;

/// Element-wise operator. Adjacent stateless ops are fused into one stage.
pub trait DynOp {
    fn apply(&self, input: Partition) -> Result<Partition>;
}

/// Produces the source payload as a fresh partition.
pub type SourceFn = Rc<dyn Fn() -> Result<Partition>>;

/// Whole-partition barrier step.
pub type BarrierFn = Rc<dyn Fn(Partition) -> Result<Partition>>;

#[derive(Clone)]
pub enum Node {
    /// In-memory root of a chain. `len` is recorded for logging only.
    Source { read: SourceFn, len: usize },

    /// Fused run of element-wise operators.
    Stateless(Vec<Rc<dyn DynOp>>),

    /// `Vec<(K, V)>` → `Vec<(K, Vec<V>)>`
    GroupByKey { exec: BarrierFn },
}

impl Node {
    /// Short label used in debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Source { .. } => "source",
            Node::Stateless(_) => "stateless",
            Node::GroupByKey { .. } => "group_by_key",
        }
    }
}

/// Unbox a partition that must hold a `Vec<T>`.
pub(crate) fn downcast_vec<T: 'static>(p: Partition, stage: &str) -> Result<Vec<T>> {
    p.downcast::<Vec<T>>()
        .map(|b| *b)
        .map_err(|_| anyhow!("{stage}: expected Vec<{}>", type_name::<T>()))
}
