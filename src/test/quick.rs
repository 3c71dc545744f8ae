use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree with the iterative descent
    Insert(K),
    /// Insert the K into the tree with the recursive descent
    InsertRecursive(K),
    /// Remove the K from the tree
    Remove(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::InsertRecursive(K::arbitrary(g)),
            2 => Op::Remove(K::arbitrary(g)),
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
