//! In-memory sources.
//!
//! [`from_vec`] and [`from_iter`] attach a `Vec<T>` to a [`Pipeline`] as the
//! root of a new chain. Every run clones the stored vector, so collecting the
//! same collection twice yields the same data, at the price of holding two
//! copies while a run is in flight. [`from_vec_once`] hands its vector to the
//! first run instead and fails any later one.
//!
//! ```
//! use ratingbeam::*;
//!
//! let p = Pipeline::default();
//! let doubled = from_iter(&p, 1..=3).map(|n: &i32| n * 2);
//! assert_eq!(doubled.collect_seq().unwrap(), vec![2, 4, 6]);
//! ```

use crate::node::{Node, Partition, SourceFn};
use crate::{PCollection, Pipeline, RFBound};
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

fn source<T: RFBound>(p: &Pipeline, read: SourceFn, len: usize) -> PCollection<T> {
    let id = p.insert_node(Node::Source { read, len });
    PCollection {
        pipeline: p.clone(),
        id,
        _t: PhantomData,
    }
}

/// Create a [`PCollection<T>`] from a vector.
pub fn from_vec<T>(p: &Pipeline, data: Vec<T>) -> PCollection<T>
where
    T: RFBound,
{
    let len = data.len();
    let data = Rc::new(data);
    source(
        p,
        Rc::new(move || -> Result<Partition> { Ok(Box::new(Vec::clone(&data))) }),
        len,
    )
}

/// Create a single-use [`PCollection<T>`] from a vector.
///
/// The first run takes the vector without copying it. Running any chain on
/// this source a second time is an error.
pub fn from_vec_once<T>(p: &Pipeline, data: Vec<T>) -> PCollection<T>
where
    T: RFBound,
{
    let len = data.len();
    let slot = RefCell::new(Some(data));
    source(
        p,
        Rc::new(move || -> Result<Partition> {
            let data = slot
                .borrow_mut()
                .take()
                .ok_or_else(|| anyhow!("single-use source of {len} elements already consumed"))?;
            Ok(Box::new(data))
        }),
        len,
    )
}

/// Create a [`PCollection<T>`] from anything iterable.
pub fn from_iter<T, I>(p: &Pipeline, iter: I) -> PCollection<T>
where
    T: RFBound,
    I: IntoIterator<Item = T>,
{
    from_vec(p, iter.into_iter().collect::<Vec<T>>())
}
