use core::fmt;
use core::iter::FusedIterator;

use super::Zip as ZipTrait;
use crate::Sequence;

macro_rules! impl_zip_tuple {
    ($StructName:ident $CursorName:ident $IterName:ident $($S:ident=$idx:tt)+) => {
        /// A zip adapter binding multiple sequences into one lockstep traversal.
        ///
        /// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See its
        /// documentation for more.
        ///
        /// [`zip`]: trait.Zip.html#method.zip
        /// [`Zip`]: trait.Zip.html
        pub struct $StructName<'a, $($S: ?Sized),+>
        where $(
            $S: Sequence,
        )+ {
            lanes: ($(&'a $S,)+),
        }

        impl<'a, $($S: ?Sized),+> $StructName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            /// Returns a cursor holding the start position of every lane.
            pub fn start(&self) -> $CursorName<'a, $($S),+> {
                $CursorName {
                    lanes: self.lanes,
                    positions: ($(self.lanes.$idx.start(),)+),
                }
            }

            /// Returns a cursor holding the end position of every lane.
            ///
            /// This cursor is the traversal's sentinel: a start cursor that has
            /// been advanced `min(len)` times compares equal to it.
            pub fn end(&self) -> $CursorName<'a, $($S),+> {
                $CursorName {
                    lanes: self.lanes,
                    positions: ($(self.lanes.$idx.end(),)+),
                }
            }

            /// Returns an iterator that drives a cursor from [`start`][Self::start]
            /// until it compares equal to [`end`][Self::end].
            pub fn iter(&self) -> $IterName<'a, $($S),+> {
                (*self).into_iter()
            }
        }

        impl<'a, $($S: ?Sized),+> Clone for $StructName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<'a, $($S: ?Sized),+> Copy for $StructName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
        }

        impl<'a, $($S: ?Sized),+> fmt::Debug for $StructName<'a, $($S),+>
        where $(
            $S: Sequence + fmt::Debug,
        )+ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("Zip")
                    $( .field(&self.lanes.$idx) )+
                    .finish()
            }
        }

        impl<'a, $($S: ?Sized),+> IntoIterator for $StructName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            type Item = ($(&'a $S::Item,)+);
            type IntoIter = $IterName<'a, $($S),+>;

            fn into_iter(self) -> Self::IntoIter {
                $IterName {
                    cursor: self.start(),
                    end: self.end(),
                }
            }
        }

        /// A traversal cursor holding one position per lane, advanced in unison.
        ///
        /// This `struct` is created by the [`start`] and [`end`] methods on the
        /// zip adapter; the adapter guarantees the positions it is built from
        /// are consistent (the same step count into every lane).
        ///
        /// # Equality
        ///
        /// Cursors compare equal when **any** single lane's position matches the
        /// corresponding position of the other cursor. That is exactly what the
        /// begin/end loop idiom needs — the shortest lane determines where the
        /// traversal stops — but it is *not* a general-purpose equality: two
        /// cursors that merely coincide on one lane mid-traversal also compare
        /// equal. Only compare cursors obtained from the same adapter, and only
        /// to detect the end of a traversal.
        ///
        /// [`start`]: struct.Zip2.html#method.start
        /// [`end`]: struct.Zip2.html#method.end
        pub struct $CursorName<'a, $($S: ?Sized),+>
        where $(
            $S: Sequence,
        )+ {
            lanes: ($(&'a $S,)+),
            positions: ($($S::Position,)+),
        }

        impl<'a, $($S: ?Sized),+> $CursorName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            /// Moves every lane's position to its next position, all in the
            /// same step.
            ///
            /// Must not be called once this cursor compares equal to the end
            /// cursor: at that point at least one lane has no next position,
            /// and advancing it violates the underlying [`Sequence`] contract.
            pub fn advance(&mut self) {
                $(
                    self.lanes.$idx.advance(&mut self.positions.$idx);
                )+
            }

            /// Returns a reference to the current element of every lane, in
            /// the order the sequences were zipped.
            ///
            /// The references alias the live elements of the underlying
            /// sequences; nothing is copied, and calling this repeatedly at
            /// the same position observes any interior mutation in between.
            ///
            /// Must not be called once this cursor compares equal to the end
            /// cursor.
            pub fn get(&self) -> ($(&'a $S::Item,)+) {
                ($(self.lanes.$idx.get(&self.positions.$idx),)+)
            }
        }

        impl<'a, $($S: ?Sized),+> Clone for $CursorName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            fn clone(&self) -> Self {
                Self {
                    lanes: self.lanes,
                    positions: self.positions.clone(),
                }
            }
        }

        impl<'a, $($S: ?Sized),+> PartialEq for $CursorName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            fn eq(&self, other: &Self) -> bool {
                false $(|| self.positions.$idx == other.positions.$idx)+
            }
        }

        impl<'a, $($S: ?Sized),+> fmt::Debug for $CursorName<'a, $($S),+>
        where $(
            $S: Sequence,
            $S::Position: fmt::Debug,
        )+ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("Cursor")
                    $( .field(&self.positions.$idx) )+
                    .finish()
            }
        }

        /// An iterator over the combined elements of a zip adapter.
        ///
        /// This `struct` is created by the [`iter`] method on the zip adapter,
        /// or by its `IntoIterator` implementation. Each step checks the
        /// cursor against the end sentinel before dereferencing or advancing,
        /// so the iterator never touches a position past the end.
        ///
        /// [`iter`]: struct.Zip2.html#method.iter
        pub struct $IterName<'a, $($S: ?Sized),+>
        where $(
            $S: Sequence,
        )+ {
            cursor: $CursorName<'a, $($S),+>,
            end: $CursorName<'a, $($S),+>,
        }

        impl<'a, $($S: ?Sized),+> Iterator for $IterName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
            type Item = ($(&'a $S::Item,)+);

            fn next(&mut self) -> Option<Self::Item> {
                if self.cursor == self.end {
                    return None;
                }
                let item = self.cursor.get();
                self.cursor.advance();
                Some(item)
            }
        }

        impl<'a, $($S: ?Sized),+> FusedIterator for $IterName<'a, $($S),+>
        where $(
            $S: Sequence,
        )+ {
        }

        impl<'a, $($S: ?Sized),+> fmt::Debug for $IterName<'a, $($S),+>
        where $(
            $S: Sequence,
            $S::Position: fmt::Debug,
        )+ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct("Iter")
                    .field("cursor", &self.cursor)
                    .field("end", &self.end)
                    .finish()
            }
        }

        impl<'a, $($S: ?Sized),+> ZipTrait for ($(&'a $S,)+)
        where $(
            $S: Sequence,
        )+ {
            type Item = ($(&'a $S::Item,)+);
            type Adapter = $StructName<'a, $($S),+>;

            fn zip(self) -> Self::Adapter {
                $StructName { lanes: self }
            }
        }
    };
}

impl_zip_tuple! { Zip1 Cursor1 Iter1 A=0 }
impl_zip_tuple! { Zip2 Cursor2 Iter2 A=0 B=1 }
impl_zip_tuple! { Zip3 Cursor3 Iter3 A=0 B=1 C=2 }
impl_zip_tuple! { Zip4 Cursor4 Iter4 A=0 B=1 C=2 D=3 }
impl_zip_tuple! { Zip5 Cursor5 Iter5 A=0 B=1 C=2 D=3 E=4 }
impl_zip_tuple! { Zip6 Cursor6 Iter6 A=0 B=1 C=2 D=3 E=4 F=5 }
impl_zip_tuple! { Zip7 Cursor7 Iter7 A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_zip_tuple! { Zip8 Cursor8 Iter8 A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_zip_tuple! { Zip9 Cursor9 Iter9 A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_zip_tuple! { Zip10 Cursor10 Iter10 A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_zip_tuple! { Zip11 Cursor11 Iter11 A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_zip_tuple! { Zip12 Cursor12 Iter12 A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }

#[cfg(test)]
mod tests {
    use crate::Zip;

    #[test]
    fn zip_tuple_2() {
        let a = [1, 2, 3, 4];
        let b = ["a", "b", "c"];
        let mut s = (&a, &b).zip().into_iter();

        assert_eq!(s.next(), Some((&1, &"a")));
        assert_eq!(s.next(), Some((&2, &"b")));
        assert_eq!(s.next(), Some((&3, &"c")));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_tuple_3() {
        let a = [10, 20];
        let b = [1, 2];
        let c = [7, 8, 9];
        let mut s = (&a, &b, &c).zip().into_iter();

        assert_eq!(s.next(), Some((&10, &1, &7)));
        assert_eq!(s.next(), Some((&20, &2, &8)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_tuple_5() {
        let a = [1];
        let b = [2];
        let c = [3];
        let d = [4];
        let e = [5, 6];
        let mut s = (&a, &b, &c, &d, &e).zip().into_iter();

        assert_eq!(s.next(), Some((&1, &2, &3, &4, &5)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn cursor_loop() {
        let a = [1, 2, 3];
        let b = [10, 20, 30, 40];
        let zip = (&a, &b).zip();

        let mut cursor = zip.start();
        let end = zip.end();
        let mut sum = 0;
        while cursor != end {
            let (x, y) = cursor.get();
            sum += x + y;
            cursor.advance();
        }
        assert_eq!(sum, 66);
    }

    #[test]
    fn empty_lane_makes_start_the_sentinel() {
        let a: [i32; 0] = [];
        let b = [1, 2, 3];
        let zip = (&a, &b).zip();

        assert!(zip.start() == zip.end());
        assert_eq!(zip.iter().count(), 0);
    }

    #[test]
    fn get_is_repeatable() {
        let a = [7];
        let b = ["x"];
        let cursor = (&a, &b).zip().start();

        assert_eq!(cursor.get(), (&7, &"x"));
        assert_eq!(cursor.get(), (&7, &"x"));
    }

    #[test]
    fn start_and_end_are_repeatable() {
        let a = [1, 2];
        let b = [3, 4];
        let zip = (&a, &b).zip();

        let mut one = zip.start();
        one.advance();
        // A fresh start cursor is unaffected by advancing another.
        assert_eq!(zip.start().get(), (&1, &3));
        assert_eq!(one.get(), (&2, &4));
    }
}
