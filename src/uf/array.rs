use std::mem;

use crate::uf::{UfError, UnionFind};

/// Union-find over the dense integer universe `0..n`, with parent and
/// size packed into one `i32` per element.
///
/// A negative value `-k` at index `i` marks `i` as a root whose set has
/// size `k`; a non-negative value is the index of `i`'s parent. One
/// flat allocation and no per-element hashing makes this the variant
/// for large universes (grid cells, compressed coordinates), at the
/// cost of only supporting non-negative integer identities.
///
/// ```
/// use puzzlekit::{ArrayUnionFind, UnionFind};
///
/// let mut uf = ArrayUnionFind::new(4);
/// assert_eq!(uf.merge(&0, &1).unwrap(), 2);
/// assert_eq!(uf.sizes(), vec![2, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayUnionFind {
    parent: Box<[i32]>,
}

impl ArrayUnionFind {
    /// Creates `count` singleton sets.
    pub fn new(count: usize) -> Self {
        // parent links are stored as i32 indices
        debug_assert!(count <= i32::MAX as usize);
        Self {
            parent: vec![-1; count].into_boxed_slice(),
        }
    }

    /// Number of elements in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<(), UfError> {
        if x >= self.parent.len() {
            return Err(UfError::OutOfBounds {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}

impl UnionFind for ArrayUnionFind {
    type Elem = usize;

    fn find(&mut self, x: &usize) -> Result<usize, UfError> {
        let mut x = *x;
        self.check(x)?;
        let mut root = x;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }
        // compress the walked path onto the root
        while x != root {
            let parent = self.parent[x] as usize;
            self.parent[x] = root as i32;
            x = parent;
        }
        Ok(root)
    }

    fn find_non_compress(&self, x: &usize) -> Result<usize, UfError> {
        self.check(*x)?;
        let mut root = *x;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }
        Ok(root)
    }

    fn merge(&mut self, x: &usize, y: &usize) -> Result<usize, UfError> {
        let mut root_x = self.find(x)?;
        let mut root_y = self.find(y)?;

        if root_x == root_y {
            return Ok((-self.parent[root_x]) as usize);
        }

        // Parent values at roots are negated sizes, so the greater
        // value marks the smaller set; ties keep the first root.
        if self.parent[root_x] > self.parent[root_y] {
            mem::swap(&mut root_x, &mut root_y);
        }

        self.parent[root_x] += self.parent[root_y];
        self.parent[root_y] = root_x as i32;

        Ok((-self.parent[root_x]) as usize)
    }

    fn sizes(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .parent
            .iter()
            .filter(|&&p| p < 0)
            .map(|&p| (-p) as usize)
            .collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out
    }
}
