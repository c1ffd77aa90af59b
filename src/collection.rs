//! The typed collection handle and the stateless transforms on it.
//!
//! A [`PCollection<T>`] does not hold data. It points at a node in its
//! [`Pipeline`]; calling a transform appends a new node and returns a handle to
//! it, and nothing is computed until a `collect_*` method hands the chain to
//! the [`Runner`].

use crate::node::{DynOp, Node, Partition, downcast_vec};
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use crate::runner::Runner;
use anyhow::Result;
use std::marker::PhantomData;
use std::rc::Rc;

/// Bound shared by every element type flowing through a pipeline.
pub trait RFBound: 'static + Clone {}
impl<T> RFBound for T where T: 'static + Clone {}

#[derive(Clone)]
pub struct PCollection<T> {
    pub(crate) pipeline: Pipeline,
    pub(crate) id: NodeId,
    pub(crate) _t: PhantomData<T>,
}

impl<T> PCollection<T> {
    /// Append `node` downstream of this collection.
    pub(crate) fn chain<O>(self, node: Node) -> PCollection<O> {
        let id = self.pipeline.insert_node(node);
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    /// Node this handle points at.
    pub fn node_id(&self) -> NodeId {
        self.id
    }
}

pub(crate) struct MapOp<I, O, F>(pub(crate) F, pub(crate) PhantomData<(I, O)>);

impl<I, O, F> DynOp for MapOp<I, O, F>
where
    I: RFBound,
    O: RFBound,
    F: Fn(&I) -> O + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let v = downcast_vec::<I>(input, "map")?;
        let out: Vec<O> = v.iter().map(|i| self.0(i)).collect();
        Ok(Box::new(out))
    }
}

pub(crate) struct FilterOp<T, P>(pub(crate) P, pub(crate) PhantomData<T>);

impl<T, P> DynOp for FilterOp<T, P>
where
    T: RFBound,
    P: Fn(&T) -> bool + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let v = downcast_vec::<T>(input, "filter")?;
        Ok(Box::new(v.into_iter().filter(|t| self.0(t)).collect::<Vec<T>>()))
    }
}

pub(crate) struct FlatMapOp<I, It, F>(pub(crate) F, pub(crate) PhantomData<(I, It)>);

impl<I, It, F> DynOp for FlatMapOp<I, It, F>
where
    I: RFBound,
    It: IntoIterator + 'static,
    It::Item: RFBound,
    F: Fn(&I) -> It + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let v = downcast_vec::<I>(input, "flat_map")?;
        let mut out: Vec<It::Item> = Vec::new();
        for i in &v {
            out.extend(self.0(i));
        }
        Ok(Box::new(out))
    }
}

impl<T: RFBound> PCollection<T> {
    pub fn map<O, F>(self, f: F) -> PCollection<O>
    where
        O: RFBound,
        F: 'static + Fn(&T) -> O,
    {
        let op: Rc<dyn DynOp> = Rc::new(MapOp::<T, O, F>(f, PhantomData));
        self.chain(Node::Stateless(vec![op]))
    }

    pub fn filter<F>(self, pred: F) -> PCollection<T>
    where
        F: 'static + Fn(&T) -> bool,
    {
        let op: Rc<dyn DynOp> = Rc::new(FilterOp::<T, F>(pred, PhantomData));
        self.chain(Node::Stateless(vec![op]))
    }

    /// Zero or more outputs per element. `Option<O>` works as well as `Vec<O>`.
    pub fn flat_map<O, It, F>(self, f: F) -> PCollection<O>
    where
        O: RFBound,
        It: IntoIterator<Item = O> + 'static,
        F: 'static + Fn(&T) -> It,
    {
        let op: Rc<dyn DynOp> = Rc::new(FlatMapOp::<T, It, F>(f, PhantomData));
        self.chain(Node::Stateless(vec![op]))
    }

    /// Execute the chain ending at this collection and materialize it.
    pub fn collect_seq(self) -> Result<Vec<T>> {
        Runner::default().run_collect::<T>(&self.pipeline, self.id)
    }
}

/// Per-key aggregation in accumulator form.
///
/// - `V`: input value
/// - `A`: accumulator
/// - `O`: output
pub trait CombineFn<V, A, O>: 'static {
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}

/// A combiner that can build its accumulator from an already grouped slice,
/// which lets it run straight after `group_by_key`.
pub trait LiftableCombiner<V, A, O>: CombineFn<V, A, O> {
    fn build_from_group(&self, values: &[V]) -> A;
}
