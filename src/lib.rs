//! Synchronized lockstep traversal over multiple sequences.
//!
//! This library provides one verb: `zip`. Given two or more existing
//! sequences it produces an adapter that borrows all of them and traverses
//! them in lockstep, yielding one combined element per step — a tuple of
//! references, one per sequence. The adapter owns nothing: the sequences stay
//! where they are, and the references handed out alias their live elements.
//!
//! Traversal is bounded by a pair of [traversal cursors][tuple::Cursor2]
//! obtained from the adapter's `start` and `end` methods. A cursor holds one
//! position per lane and advances all of them in the same step; it compares
//! equal to the end cursor as soon as *any* lane runs out, so the shortest
//! sequence determines how many elements are yielded.
//!
//! # Operations
//!
//! The [`Zip`] trait is implemented on three input shapes:
//!
//! - tuples of `&S`, for up to twelve sequences of distinct types;
//! - arrays `[&S; N]`, for a fixed number of same-type sequences;
//! - `Vec<&S>`, for a dynamic number of same-type sequences (requires the
//!   `alloc` feature). This form trades per-lane element types for arbitrary
//!   arity: every lane must share one sequence type.
//!
//! # Examples
//!
//! Traverse heterogeneous sequences with a `for` loop:
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let a = [1, 2, 3, 4];
//! let b = ["one", "two", "three"];
//!
//! let mut steps = vec![];
//! for (n, name) in (&a, &b).zip() {
//!     steps.push((*n, *name));
//! }
//! assert_eq!(steps, [(1, "one"), (2, "two"), (3, "three")]);
//! ```
//!
//! Or drive the cursors by hand:
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = [10, 20, 30];
//! let zip = (&a, &b).zip();
//!
//! let mut cursor = zip.start();
//! let end = zip.end();
//! let mut sum = 0;
//! while cursor != end {
//!     let (x, y) = cursor.get();
//!     sum += x + y;
//!     cursor.advance();
//! }
//! assert_eq!(sum, 66);
//! ```
//!
//! # Limitations
//!
//! The adapter is a view, not a container: every input must outlive it, and
//! structurally modifying a sequence (insertion, removal) while a cursor
//! derived from it is live invalidates the traversal, exactly as it would
//! invalidate the sequence's own positions. Traversal is forward-only — no
//! random access, no reverse — and lanes of unequal length are handled by a
//! single policy: stop at the shortest.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style, unsafe_code)]
#![warn(missing_docs, unreachable_pub)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod sequence;
mod zip;

pub use sequence::Sequence;
pub use zip::Zip;

/// The lockstep prelude.
pub mod prelude {
    pub use super::Sequence as _;
    pub use super::Zip as _;
}

/// Helper types for tuples.
pub mod tuple {
    pub use crate::zip::tuple::{
        Cursor1, Cursor10, Cursor11, Cursor12, Cursor2, Cursor3, Cursor4, Cursor5, Cursor6,
        Cursor7, Cursor8, Cursor9, Iter1, Iter10, Iter11, Iter12, Iter2, Iter3, Iter4, Iter5,
        Iter6, Iter7, Iter8, Iter9, Zip1, Zip10, Zip11, Zip12, Zip2, Zip3, Zip4, Zip5, Zip6, Zip7,
        Zip8, Zip9,
    };
}

/// Helper types for fixed-length arrays.
pub mod array {
    pub use crate::zip::array::{Cursor, Iter, Zip};
}

/// Helper types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
#[cfg(feature = "alloc")]
pub mod vec {
    pub use crate::zip::vec::{Cursor, Iter, Zip};
}
