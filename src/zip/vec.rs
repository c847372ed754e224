use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::Zip as ZipTrait;
use crate::Sequence;

/// A zip adapter binding a dynamic number of same-type sequences into one
/// lockstep traversal.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See its
/// documentation for more.
///
/// [`zip`]: trait.Zip.html#method.zip
/// [`Zip`]: trait.Zip.html
pub struct Zip<'a, S: ?Sized>
where
    S: Sequence,
{
    lanes: Vec<&'a S>,
}

impl<'a, S: ?Sized> Zip<'a, S>
where
    S: Sequence,
{
    /// Returns a cursor holding the start position of every lane.
    pub fn start(&self) -> Cursor<'a, S> {
        Cursor {
            lanes: self.lanes.iter().copied().collect(),
            positions: self.lanes.iter().map(|lane| lane.start()).collect(),
        }
    }

    /// Returns a cursor holding the end position of every lane.
    ///
    /// This cursor is the traversal's sentinel: a start cursor that has been
    /// advanced `min(len)` times compares equal to it.
    pub fn end(&self) -> Cursor<'a, S> {
        Cursor {
            lanes: self.lanes.iter().copied().collect(),
            positions: self.lanes.iter().map(|lane| lane.end()).collect(),
        }
    }

    /// Returns an iterator that drives a cursor from [`start`][Self::start]
    /// until it compares equal to [`end`][Self::end].
    pub fn iter(&self) -> Iter<'a, S> {
        Iter {
            cursor: self.start(),
            end: self.end(),
        }
    }
}

impl<'a, S: ?Sized> Clone for Zip<'a, S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes.clone(),
        }
    }
}

impl<'a, S: ?Sized> fmt::Debug for Zip<'a, S>
where
    S: Sequence + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<'a, S: ?Sized> IntoIterator for Zip<'a, S>
where
    S: Sequence,
{
    type Item = Vec<&'a S::Item>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A traversal cursor holding one position per lane, advanced in unison.
///
/// Lane and position storage is inline for up to four lanes; only wider
/// traversals allocate.
///
/// # Equality
///
/// Cursors compare equal when **any** single lane's position matches the
/// corresponding position of the other cursor — the shortest lane determines
/// where the traversal stops. This is a narrow sentinel contract, not a
/// general-purpose equality; only compare cursors obtained from the same
/// adapter. A cursor with zero lanes always compares equal, so a laneless
/// traversal yields nothing.
pub struct Cursor<'a, S: ?Sized>
where
    S: Sequence,
{
    lanes: SmallVec<[&'a S; 4]>,
    positions: SmallVec<[S::Position; 4]>,
}

impl<'a, S: ?Sized> Cursor<'a, S>
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
    pub fn get(&self) -> Vec<&'a S::Item> {
        self.lanes
            .iter()
            .zip(self.positions.iter())
            .map(|(lane, pos)| lane.get(pos))
            .collect()
    }
}

impl<'a, S: ?Sized> Clone for Cursor<'a, S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes.clone(),
            positions: self.positions.clone(),
        }
    }
}

impl<'a, S: ?Sized> PartialEq for Cursor<'a, S>
where
    S: Sequence,
{
    fn eq(&self, other: &Self) -> bool {
        self.lanes.is_empty()
            || self
                .positions
                .iter()
                .zip(other.positions.iter())
                .any(|(lhs, rhs)| lhs == rhs)
    }
}

impl<'a, S: ?Sized> fmt::Debug for Cursor<'a, S>
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
pub struct Iter<'a, S: ?Sized>
where
    S: Sequence,
{
    cursor: Cursor<'a, S>,
    end: Cursor<'a, S>,
}

impl<'a, S: ?Sized> Iterator for Iter<'a, S>
where
    S: Sequence,
{
    type Item = Vec<&'a S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

impl<'a, S: ?Sized> FusedIterator for Iter<'a, S> where S: Sequence {}

impl<'a, S: ?Sized> fmt::Debug for Iter<'a, S>
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

impl<'a, S: ?Sized> ZipTrait for Vec<&'a S>
where
    S: Sequence,
{
    type Item = Vec<&'a S::Item>;
    type Adapter = Zip<'a, S>;

    fn zip(self) -> Self::Adapter {
        Zip { lanes: self }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Zip;

    #[test]
    fn zip_vec_3() {
        let a = [1, 1];
        let b = [2, 2];
        let c = [3, 3];
        let lanes: Vec<&[i32]> = vec![&a, &b, &c];
        let mut s = lanes.zip().into_iter();

        assert_eq!(s.next(), Some(vec![&1, &2, &3]));
        assert_eq!(s.next(), Some(vec![&1, &2, &3]));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn shortest_lane_wins() {
        let a = [1, 2, 3];
        let b = [4];
        let lanes: Vec<&[i32]> = vec![&a, &b];

        assert_eq!(lanes.zip().iter().count(), 1);
    }

    #[test]
    fn no_lanes_yield_nothing() {
        let lanes: Vec<&[i32]> = vec![];
        let zip = lanes.zip();

        assert!(zip.start() == zip.end());
        assert_eq!(zip.iter().count(), 0);
    }

    #[test]
    fn wide_traversals_spill() {
        let lane = [1, 2];
        let lanes: Vec<&[i32]> = vec![&lane; 9];
        let mut s = lanes.zip().into_iter();

        assert_eq!(s.next(), Some(vec![&1; 9]));
        assert_eq!(s.next(), Some(vec![&2; 9]));
        assert_eq!(s.next(), None);
    }
}
