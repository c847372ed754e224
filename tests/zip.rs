use std::cell::Cell;

use itertools::izip;
use lockstep::prelude::*;

#[test]
fn traversal_is_bounded_by_the_shortest_lane() {
    let a = [1, 2, 3, 4];
    let b = ["a", "b", "c"];

    let pairs: Vec<_> = (&a, &b).zip().into_iter().collect();
    assert_eq!(pairs, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
}

#[test]
fn three_lanes_yield_triples_in_argument_order() {
    let a = [10, 20];
    let b = [1, 2];
    let c = [7, 8, 9];

    let triples: Vec<_> = (&a, &b, &c)
        .zip()
        .into_iter()
        .map(|(x, y, z)| (*x, *y, *z))
        .collect();
    assert_eq!(triples, [(10, 1, 7), (20, 2, 8)]);
}

#[test]
fn yielded_references_alias_the_source() {
    let a = [Cell::new(1), Cell::new(2)];
    let b = [10, 20, 30];
    let cursor = (&a, &b).zip().start();

    let (cell, _) = cursor.get();
    cell.set(99);

    // Re-dereferencing the same position observes the write, and so does the
    // source sequence: the cursor hands out references, not copies.
    let (cell, n) = cursor.get();
    assert_eq!(cell.get(), 99);
    assert_eq!(*n, 10);
    assert_eq!(a[0].get(), 99);
}

#[test]
fn cursor_loop_guards_every_step() {
    let a = [1, 2, 3];
    let b = [4, 5, 6, 7];
    let zip = (&a, &b).zip();

    let mut cursor = zip.start();
    let end = zip.end();
    let mut steps = 0;
    while cursor != end {
        let _ = cursor.get();
        cursor.advance();
        steps += 1;
    }
    assert_eq!(steps, 3);
}

#[test]
fn an_exhausted_lane_ends_the_traversal_immediately() {
    let a: [i32; 0] = [];
    let b = [1, 2, 3];
    let zip = (&a, &b).zip();

    assert!(zip.start() == zip.end());
    assert_eq!(zip.into_iter().count(), 0);
}

#[test]
fn iteration_is_fused() {
    let a = [1, 2];
    let b = [3, 4];
    let mut s = (&a, &b).zip().into_iter();

    while s.next().is_some() {}
    assert!(s.next().is_none());
    assert!(s.next().is_none());
}

#[test]
fn matches_itertools_izip() {
    let a: Vec<u32> = (0..97).collect();
    let b: Vec<u32> = (0..61).map(|n| n * 2).collect();
    let c: Vec<u32> = (0..75).map(|n| n + 5).collect();

    let ours: Vec<_> = (&a, &b, &c)
        .zip()
        .into_iter()
        .map(|(x, y, z)| (*x, *y, *z))
        .collect();
    let theirs: Vec<_> = izip!(&a, &b, &c).map(|(x, y, z)| (*x, *y, *z)).collect();
    assert_eq!(ours, theirs);
}

#[test]
fn array_form_yields_rows() {
    let a: Vec<u32> = (0..5).collect();
    let b: Vec<u32> = (10..14).collect();
    let c: Vec<u32> = (20..26).collect();

    let rows: Vec<[&u32; 3]> = [a.as_slice(), b.as_slice(), c.as_slice()]
        .zip()
        .into_iter()
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], [&0, &10, &20]);
    assert_eq!(rows[3], [&3, &13, &23]);
}

#[test]
fn vec_form_supports_dynamic_arity() {
    let a: Vec<u32> = (0..5).collect();
    let b: Vec<u32> = (10..14).collect();
    let c: Vec<u32> = (20..26).collect();
    let lanes: Vec<&[u32]> = vec![&a, &b, &c];

    let rows: Vec<Vec<&u32>> = lanes.zip().into_iter().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], [&0, &10, &20]);
}

#[test]
fn lanes_can_mix_container_types() {
    let a = vec![1, 2, 3];
    let b = ["x", "y"];
    let c: std::collections::VecDeque<char> = ['p', 'q', 'r'].into_iter().collect();

    let out: Vec<_> = (&a, &b, &c)
        .zip()
        .into_iter()
        .map(|(n, s, ch)| (*n, *s, *ch))
        .collect();
    assert_eq!(out, [(1, "x", 'p'), (2, "y", 'q')]);
}

#[test]
fn cursors_traverse_independently() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    let zip = (&a, &b).zip();

    let mut one = zip.start();
    let two = zip.start();
    one.advance();

    assert_eq!(one.get(), (&2, &5));
    assert_eq!(two.get(), (&1, &4));
}
