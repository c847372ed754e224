#![no_std]

use lockstep::prelude::*;

// These tests ensure that the traits provided by `lockstep` work in a no std environment.

#[test]
fn zip_tuple() {
    let a = [1, 2, 3];
    let b = [4, 5];
    let mut s = (&a, &b).zip().into_iter();

    assert_eq!(s.next(), Some((&1, &4)));
    assert_eq!(s.next(), Some((&2, &5)));
    assert_eq!(s.next(), None);
}

#[test]
fn zip_array() {
    let a = [1, 2];
    let b = [3, 4];
    let mut s = [&a[..], &b[..]].zip().into_iter();

    assert_eq!(s.next(), Some([&1, &3]));
    assert_eq!(s.next(), Some([&2, &4]));
    assert_eq!(s.next(), None);
}

#[test]
fn cursors() {
    let a = [1u8, 2];
    let b = [3u8, 4, 5];
    let zip = (&a, &b).zip();

    let mut cursor = zip.start();
    let end = zip.end();
    let mut steps = 0;
    while cursor != end {
        let _ = cursor.get();
        cursor.advance();
        steps += 1;
    }
    assert_eq!(steps, 2);
}
