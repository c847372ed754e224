use core::array;
use core::fmt;
use core::iter::FusedIterator;

use super::Zip as ZipTrait;
use crate::Sequence;

/// A zip adapter binding a fixed number of same-type sequences into one
/// lockstep traversal.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See its
/// documentation for more.
///
/// [`zip`]: trait.Zip.html#method.zip
/// [`Zip`]: trait.Zip.html
pub struct Zip<'a, S: ?Sized, const N: usize>
where
    S: Sequence,
{
    lanes: [&'a S; N],
}

impl<'a, S: ?Sized, const N: usize> Zip<'a, S, N>
where
    S: Sequence,
{
    /// Returns a cursor holding the start position of every lane.
    pub fn start(&self) -> Cursor<'a, S, N> {
        Cursor {
            lanes: self.lanes,
            positions: array::from_fn(|idx| self.lanes[idx].start()),
        }
    }

    /// Returns a cursor holding the end position of every lane.
    ///
    /// This cursor is the traversal's sentinel: a start cursor that has been
    /// advanced `min(len)` times compares equal to it.
    pub fn end(&self) -> Cursor<'a, S, N> {
        Cursor {
            lanes: self.lanes,
            positions: array::from_fn(|idx| self.lanes[idx].end()),
        }
    }

    /// Returns an iterator that drives a cursor from [`start`][Self::start]
    /// until it compares equal to [`end`][Self::end].
    pub fn iter(&self) -> Iter<'a, S, N> {
        (*self).into_iter()
    }
}

impl<'a, S: ?Sized, const N: usize> Clone for Zip<'a, S, N>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized, const N: usize> Copy for Zip<'a, S, N> where S: Sequence {}

impl<'a, S: ?Sized, const N: usize> fmt::Debug for Zip<'a, S, N>
where
    S: Sequence + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<'a, S: ?Sized, const N: usize> IntoIterator for Zip<'a, S, N>
where
    S: Sequence,
{
    type Item = [&'a S::Item; N];
    type IntoIter = Iter<'a, S, N>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            cursor: self.start(),
            end: self.end(),
        }
    }
}

/// A traversal cursor holding one position per lane, advanced in unison.
///
/// # Equality
///
/// Cursors compare equal when **any** single lane's position matches the
/// corresponding position of the other cursor — the shortest lane determines
/// where the traversal stops. This is a narrow sentinel contract, not a
/// general-purpose equality; only compare cursors obtained from the same
/// adapter. A cursor with zero lanes always compares equal, so a laneless
/// traversal yields nothing.
pub struct Cursor<'a, S: ?Sized, const N: usize>
where
    S: Sequence,
{
    lanes: [&'a S; N],
    positions: [S::Position; N],
}

impl<'a, S: ?Sized, const N: usize> Cursor<'a, S, N>
where
    S: Sequence,
{
    /// Moves every lane's position to its next position, all in the same step.
    ///
    /// Must not be called once this cursor compares equal to the end cursor.
    pub fn advance(&mut self) {
        for (lane, pos) in self.lanes.iter().zip(self.positions.iter_mut()) {
            lane.advance(pos);
        }
    }

    /// Returns a reference to the current element of every lane, in the order
    /// the sequences were zipped.
    ///
    /// Must not be called once this cursor compares equal to the end cursor.
    pub fn get(&self) -> [&'a S::Item; N] {
        array::from_fn(|idx| self.lanes[idx].get(&self.positions[idx]))
    }
}

impl<'a, S: ?Sized, const N: usize> Clone for Cursor<'a, S, N>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes,
            positions: self.positions.clone(),
        }
    }
}

impl<'a, S: ?Sized, const N: usize> PartialEq for Cursor<'a, S, N>
where
    S: Sequence,
{
    fn eq(&self, other: &Self) -> bool {
        N == 0
            || self
                .positions
                .iter()
                .zip(other.positions.iter())
                .any(|(lhs, rhs)| lhs == rhs)
    }
}

impl<'a, S: ?Sized, const N: usize> fmt::Debug for Cursor<'a, S, N>
where
    S: Sequence,
    S::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.positions.iter()).finish()
    }
}

/// An iterator over the combined elements of a zip adapter.
///
/// Each step checks the cursor against the end sentinel before dereferencing
/// or advancing, so the iterator never touches a position past the end.
pub struct Iter<'a, S: ?Sized, const N: usize>
where
    S: Sequence,
{
    cursor: Cursor<'a, S, N>,
    end: Cursor<'a, S, N>,
}

impl<'a, S: ?Sized, const N: usize> Iterator for Iter<'a, S, N>
where
    S: Sequence,
{
    type Item = [&'a S::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

impl<'a, S: ?Sized, const N: usize> FusedIterator for Iter<'a, S, N> where S: Sequence {}

impl<'a, S: ?Sized, const N: usize> fmt::Debug for Iter<'a, S, N>
where
    S: Sequence,
    S::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, S: ?Sized, const N: usize> ZipTrait for [&'a S; N]
where
    S: Sequence,
{
    type Item = [&'a S::Item; N];
    type Adapter = Zip<'a, S, N>;

    fn zip(self) -> Self::Adapter {
        Zip { lanes: self }
    }
}
