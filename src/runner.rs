//! Sequential executor.
//!
//! The runner snapshots the pipeline graph, walks edges backwards from the
//! requested terminal to its source, then pushes one in-memory partition
//! through the resulting chain. Adjacent stateless nodes are fused into a
//! single pass.

use crate::node::{DynOp, Node, Partition, downcast_vec};
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use anyhow::{Result, anyhow, bail};
use std::rc::Rc;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default)]
pub struct Runner;

impl Runner {
    pub fn run_collect<T: 'static>(&self, p: &Pipeline, terminal: NodeId) -> Result<Vec<T>> {
        let chain = linear_chain(p, terminal)?;
        debug!(
            terminal = terminal.raw(),
            nodes = chain.len(),
            "executing sequential plan"
        );
        let out = exec_seq(chain)?;
        downcast_vec::<T>(out, "terminal")
    }
}

/// Source → … → terminal, following the single incoming edge of each node.
fn linear_chain(p: &Pipeline, terminal: NodeId) -> Result<Vec<(NodeId, Node)>> {
    let (mut nodes, edges) = p.snapshot();
    let mut chain: Vec<(NodeId, Node)> = Vec::new();
    let mut cur = terminal;
    loop {
        let n = nodes
            .remove(&cur)
            .ok_or_else(|| anyhow!("missing node {cur:?}"))?;
        chain.push((cur, n));
        match edges.iter().find(|(_, to)| *to == cur) {
            Some(&(from, _)) => cur = from,
            None => break,
        }
    }
    chain.reverse();
    Ok(chain)
}

fn fuse_stateless(ops: &[Rc<dyn DynOp>], input: Partition) -> Result<Partition> {
    ops.iter().try_fold(input, |acc, op| op.apply(acc))
}

fn exec_seq(plan: Vec<(NodeId, Node)>) -> Result<Partition> {
    let mut buf: Option<Partition> = None;
    let mut i = 0usize;

    while i < plan.len() {
        let (id, node) = &plan[i];
        debug!(node = id.raw(), kind = node.kind(), "run stage");
        let next = match node {
            Node::Source { read, len } => {
                if i != 0 {
                    bail!("unexpected additional source {id:?} in plan");
                }
                debug!(elements = *len, "source");
                i += 1;
                read()?
            }
            Node::Stateless(_) => {
                // Collect contiguous stateless nodes and fuse them
                let mut ops: Vec<Rc<dyn DynOp>> = Vec::new();
                while let Some((_, Node::Stateless(more))) = plan.get(i) {
                    ops.extend(more.iter().cloned());
                    i += 1;
                }
                fuse_stateless(&ops, take_input(&mut buf, *id)?)?
            }
            Node::GroupByKey { exec } => {
                i += 1;
                exec(take_input(&mut buf, *id)?)?
            }
        };
        buf = Some(next);
    }

    buf.ok_or_else(|| anyhow!("empty plan"))
}

fn take_input(buf: &mut Option<Partition>, id: NodeId) -> Result<Partition> {
    buf.take()
        .ok_or_else(|| anyhow!("node {id:?} has no upstream input"))
}
