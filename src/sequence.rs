//! The collaborator contract zip adapters bind to.

#[cfg(feature = "alloc")]
use alloc::collections::VecDeque;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An ordered collection that can be traversed by position.
///
/// By implementing `Sequence` for a type, you define how a zip adapter walks
/// it: where a traversal starts, where it stops, and how one position becomes
/// the next. The adapter only ever reads through this trait — it never
/// mutates, resizes, or takes ownership of the collection.
///
/// Implementations are provided for slices, fixed-size arrays, [`Vec`], and
/// [`VecDeque`], all using plain indices as positions.
pub trait Sequence {
    /// The type of the elements being traversed.
    type Item;

    /// An opaque handle identifying a location within this sequence.
    type Position: Clone + PartialEq;

    /// Returns the position of the first element.
    fn start(&self) -> Self::Position;

    /// Returns the position one past the last element.
    ///
    /// Traversal is end-exclusive: this position must never be dereferenced.
    fn end(&self) -> Self::Position;

    /// Moves `pos` to the next position.
    ///
    /// `pos` must not already be the end position.
    fn advance(&self, pos: &mut Self::Position);

    /// Returns a reference to the element at `pos`.
    ///
    /// `pos` must not be the end position.
    fn get(&self, pos: &Self::Position) -> &Self::Item;
}

impl<T> Sequence for [T] {
    type Item = T;
    type Position = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        debug_assert!(*pos < self.len(), "position advanced past the end");
        *pos += 1;
    }

    #[inline]
    fn get(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Position = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        N
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        self.as_slice().advance(pos);
    }

    #[inline]
    fn get(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}

#[cfg(feature = "alloc")]
impl<T> Sequence for Vec<T> {
    type Item = T;
    type Position = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        self.as_slice().advance(pos);
    }

    #[inline]
    fn get(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}

#[cfg(feature = "alloc")]
impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Position = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        debug_assert!(*pos < self.len(), "position advanced past the end");
        *pos += 1;
    }

    #[inline]
    fn get(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}
