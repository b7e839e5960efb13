use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::uf::{UfError, UnionFind};

/// Union-find keyed by arbitrary hashable elements.
///
/// Parent links and set sizes live in two hash maps, so elements need
/// not be dense integers: spatial points, strings, or any `Eq + Hash`
/// identity work directly. The algorithm is the same union-by-size with
/// path compression as [`ArrayUnionFind`]; what this variant buys is
/// caller convenience, at the price of a map lookup per step. Switch to
/// the array variant when the universe is large and naturally indexed.
///
/// Elements must render for diagnostics (`Display`), since failures
/// name the offending element.
///
/// ```
/// use puzzlekit::{MapUnionFind, UnionFind, Vec2};
///
/// let points = [Vec2::new(0, 0), Vec2::new(1, 0), Vec2::new(5, 5)];
/// let mut uf = MapUnionFind::new(points);
/// assert_eq!(uf.merge(&points[0], &points[1]).unwrap(), 2);
/// assert_eq!(uf.sizes(), vec![2, 1]);
/// ```
///
/// [`ArrayUnionFind`]: crate::uf::ArrayUnionFind
#[derive(Debug, Clone)]
pub struct MapUnionFind<T>
where
    T: Eq + Hash + Clone + fmt::Display,
{
    parent: FxHashMap<T, T>,
    size: FxHashMap<T, usize>,
}

impl<T> MapUnionFind<T>
where
    T: Eq + Hash + Clone + fmt::Display,
{
    /// Creates one singleton set per distinct element of `elements`.
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut uf = Self {
            parent: FxHashMap::default(),
            size: FxHashMap::default(),
        };
        for element in elements {
            uf.make_set(element);
        }
        uf
    }

    /// Registers `x` as a new singleton set; a no-op when `x` is
    /// already registered.
    pub fn make_set(&mut self, x: T) {
        if self.parent.contains_key(&x) {
            return;
        }
        self.size.insert(x.clone(), 1);
        self.parent.insert(x.clone(), x);
    }

    /// Number of registered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when no elements are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn root_of(&self, x: &T) -> T {
        let mut current = x.clone();
        while let Some(parent) = self.parent.get(&current) {
            if *parent == current {
                break;
            }
            current = parent.clone();
        }
        current
    }
}

impl<T> UnionFind for MapUnionFind<T>
where
    T: Eq + Hash + Clone + fmt::Display,
{
    type Elem = T;

    fn find(&mut self, x: &T) -> Result<T, UfError> {
        if !self.parent.contains_key(x) {
            return Err(UfError::NotFound(x.to_string()));
        }
        let root = self.root_of(x);
        // compress: repoint everything on the walked path at the root
        let mut current = x.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Ok(root)
    }

    fn find_non_compress(&self, x: &T) -> Result<T, UfError> {
        if !self.parent.contains_key(x) {
            return Err(UfError::NotFound(x.to_string()));
        }
        Ok(self.root_of(x))
    }

    fn merge(&mut self, x: &T, y: &T) -> Result<usize, UfError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return self
                .size
                .get(&root_x)
                .copied()
                .ok_or_else(|| UfError::NotFound(root_x.to_string()));
        }

        let size_x = self
            .size
            .get(&root_x)
            .copied()
            .ok_or_else(|| UfError::NotFound(root_x.to_string()))?;
        let size_y = self
            .size
            .get(&root_y)
            .copied()
            .ok_or_else(|| UfError::NotFound(root_y.to_string()))?;

        let (bigger, smaller) = if size_x < size_y {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        let combined = size_x + size_y;

        self.parent.insert(smaller.clone(), bigger.clone());
        self.size.insert(bigger, combined);
        self.size.remove(&smaller);

        Ok(combined)
    }

    fn sizes(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.size.values().copied().collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out
    }
}
