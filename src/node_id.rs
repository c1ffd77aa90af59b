//! Handles for nodes inside a [`Pipeline`](crate::pipeline::Pipeline).
//!
//! Ids are handed out sequentially as nodes are inserted, so a larger id was
//! always created later in the build of the graph.

/// Opaque identifier of one node in the pipeline graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(v: u64) -> Self {
        Self(v)
    }

    /// Raw sequence number, mostly for log output.
    pub fn raw(&self) -> u64 {
        self.0
    }
}
