use thiserror::Error;

pub mod array;
pub mod map;

pub use array::ArrayUnionFind;
pub use map::MapUnionFind;

/// Errors produced by union-find operations on unknown elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UfError {
    /// The element was never registered (keyed variant).
    #[error("element {0} is not registered in the union-find structure")]
    NotFound(String),
    /// The index lies outside the allocated universe (array variant).
    #[error("index {index} out of bounds [0, {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// A partition of elements into disjoint sets with near-constant-time
/// merge and find-representative operations.
///
/// Implementations maintain two invariants: `find` always returns the
/// current root of the element's set, and after `merge` exactly one of
/// the two roots survives carrying the combined size. Both
/// implementations use union by size and path compression, so any
/// sequence of operations costs amortized near-constant time per call.
///
/// Two storage variants implement this trait. [`MapUnionFind`] keys
/// arbitrary hashable elements through hash maps; [`ArrayUnionFind`]
/// packs parent-or-size into one integer per element of a dense
/// `0..n` universe, which is the form to use at large scale where map
/// overhead per operation is unacceptable.
pub trait UnionFind {
    /// Element identity type.
    type Elem;

    /// Returns the representative of the set containing `x`,
    /// repointing every node visited on the way directly at the root
    /// (path compression).
    ///
    /// Unregistered or out-of-range elements yield a [`UfError`], not a
    /// fabricated singleton.
    fn find(&mut self, x: &Self::Elem) -> Result<Self::Elem, UfError>;

    /// Same traversal as [`UnionFind::find`] without mutating parent
    /// links; for read-only introspection.
    fn find_non_compress(&self, x: &Self::Elem) -> Result<Self::Elem, UfError>;

    /// Unions the sets containing `x` and `y` and returns the size of
    /// the combined set.
    ///
    /// Merging two elements already in the same set reports the current
    /// size without mutating anything. Otherwise the smaller set's root
    /// is attached under the larger set's root (union by size) and the
    /// combined size is reported.
    fn merge(&mut self, x: &Self::Elem, y: &Self::Elem) -> Result<usize, UfError>;

    /// Sizes of all current sets, sorted descending; one entry per
    /// surviving root. The entries always sum to the number of
    /// registered elements.
    fn sizes(&self) -> Vec<usize>;
}
