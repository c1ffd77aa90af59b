//! Pipeline graph container.
//!
//! A [`Pipeline`] owns the nodes and edges created while a job is being
//! described. Cloning it is cheap and every clone refers to the same graph.
//! Everything runs on one thread, so the graph lives behind `Rc<RefCell<_>>`.

use crate::node::Node;
use crate::node_id::NodeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct Pipeline {
    pub(crate) inner: Rc<RefCell<PipelineInner>>,
}

#[derive(Default)]
pub struct PipelineInner {
    pub next_id: u64,
    pub nodes: HashMap<NodeId, Node>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Pipeline {
    pub(crate) fn insert_node(&self, node: Node) -> NodeId {
        let mut g = self.inner.borrow_mut();
        let id = NodeId::new(g.next_id);
        g.next_id += 1;
        g.nodes.insert(id, node);
        id
    }

    pub(crate) fn connect(&self, from: NodeId, to: NodeId) {
        self.inner.borrow_mut().edges.push((from, to));
    }

    /// Snapshot of `(nodes, edges)` for the runner.
    pub(crate) fn snapshot(&self) -> (HashMap<NodeId, Node>, Vec<(NodeId, NodeId)>) {
        let g = self.inner.borrow();
        (g.nodes.clone(), g.edges.clone())
    }
}
