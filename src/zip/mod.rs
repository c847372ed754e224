pub(crate) mod array;
pub(crate) mod tuple;
#[cfg(feature = "alloc")]
pub(crate) mod vec;

/// ‘Zips up’ multiple sequences into a single lockstep traversal.
pub trait Zip {
    /// What combined element does each step of the traversal yield?
    type Item;

    /// What adapter do we return?
    type Adapter: IntoIterator<Item = Self::Item>;

    /// Combine multiple sequences into a single lockstep traversal.
    ///
    /// The traversal stops as soon as the shortest sequence is exhausted;
    /// elements past that point in the longer sequences are never visited.
    fn zip(self) -> Self::Adapter;
}
