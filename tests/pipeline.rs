use anyhow::Result;
use ratingbeam::*;
use std::collections::HashMap;

#[test]
fn map_filter_flatmap_chain() -> Result<()> {
    let p = Pipeline::default();
    let lines = from_vec(
        &p,
        vec![
            "The quick brown fox".to_string(),
            "jumps over the lazy dog".to_string(),
        ],
    );

    let out = lines
        .flat_map(|s: &String| {
            s.split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .filter(|w: &String| w.len() >= 4)
        .map(|w: &String| w.len())
        .collect_seq()?;

    assert_eq!(out, vec![5, 5, 5, 4, 4]);
    Ok(())
}

#[test]
fn flat_map_with_option_drops_none() -> Result<()> {
    let p = Pipeline::default();
    let out = from_iter(&p, ["1", "x", "3"].map(String::from))
        .flat_map(|s: &String| s.parse::<u32>().ok())
        .collect_seq()?;
    assert_eq!(out, vec![1, 3]);
    Ok(())
}

#[test]
fn group_by_key_keeps_value_order() -> Result<()> {
    let p = Pipeline::default();
    let grouped = from_vec(
        &p,
        vec![(101, 4.0), (102, 3.0), (101, 2.0), (101, 5.0)],
    )
    .group_by_key()
    .collect_seq()?;

    let m: HashMap<i32, Vec<f64>> = grouped.into_iter().collect();
    assert_eq!(m.len(), 2);
    assert_eq!(m[&101], vec![4.0, 2.0, 5.0]);
    assert_eq!(m[&102], vec![3.0]);
    Ok(())
}

#[test]
fn grouped_average_sorted_by_key() -> Result<()> {
    let p = Pipeline::default();
    let out = from_vec(&p, vec![(3u32, 1.0f64), (1, 2.0), (3, 2.0), (2, 7.0)])
        .group_by_key()
        .map(|(k, vs): &(u32, Vec<f64>)| {
            let acc = AverageF64.build_from_group(vs.as_slice());
            (*k, CombineFn::<f64, _, _>::finish(&AverageF64, acc))
        })
        .collect_seq_sorted_by_key()?;

    assert_eq!(out, vec![(1, 2.0), (2, 7.0), (3, 1.5)]);
    Ok(())
}

#[test]
fn empty_source_flows_through() -> Result<()> {
    let p = Pipeline::default();
    let out = from_vec(&p, Vec::<(i32, f64)>::new())
        .group_by_key()
        .collect_seq_sorted_by_key()?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn collecting_twice_gives_same_result() -> Result<()> {
    let p = Pipeline::default();
    let keyed = from_vec(&p, vec![(2, 'b'), (1, 'a'), (2, 'c')]).group_by_key();

    let first = keyed.clone().collect_seq_sorted_by_key()?;
    let second = keyed.collect_seq_sorted_by_key()?;
    assert_eq!(first, second);
    assert_eq!(first, vec![(1, vec!['a']), (2, vec!['b', 'c'])]);
    Ok(())
}

#[test]
fn branches_share_one_source() -> Result<()> {
    let p = Pipeline::default();
    let base = from_vec(&p, vec![1, 2, 3, 4]);
    let evens = base.clone().filter(|x: &i32| x % 2 == 0).collect_seq()?;
    let squares = base.map(|x: &i32| x * x).collect_seq()?;

    assert_eq!(evens, vec![2, 4]);
    assert_eq!(squares, vec![1, 4, 9, 16]);
    Ok(())
}

#[test]
fn single_use_source_runs_once() -> Result<()> {
    let p = Pipeline::default();
    let doubled = from_vec_once(&p, vec![1, 2, 3]).map(|x: &i32| x * 2);

    assert_eq!(doubled.clone().collect_seq()?, vec![2, 4, 6]);
    let err = doubled.collect_seq().unwrap_err();
    assert!(format!("{err:#}").contains("already consumed"));
    Ok(())
}
