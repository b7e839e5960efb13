use thiserror::Error;

use crate::geometry::vec2::Vec2;

/// One step up (screen coordinates: y grows down).
pub const UP: Vec2 = Vec2::new(0, -1);
pub const RIGHT: Vec2 = Vec2::new(1, 0);
pub const DOWN: Vec2 = Vec2::new(0, 1);
pub const LEFT: Vec2 = Vec2::new(-1, 0);
pub const UPRIGHT: Vec2 = Vec2::new(1, -1);
pub const UPLEFT: Vec2 = Vec2::new(-1, -1);
pub const DOWNRIGHT: Vec2 = Vec2::new(1, 1);
pub const DOWNLEFT: Vec2 = Vec2::new(-1, 1);

pub const STRAIGHT_DIRECTIONS: [Vec2; 4] = [UP, RIGHT, DOWN, LEFT];
pub const DIAGONAL_DIRECTIONS: [Vec2; 4] = [UPRIGHT, UPLEFT, DOWNLEFT, DOWNRIGHT];
pub const ALL_DIRECTIONS: [Vec2; 8] = [
    UP, RIGHT, DOWN, LEFT, UPRIGHT, UPLEFT, DOWNLEFT, DOWNRIGHT,
];

/// Construction failures for [`Grid2`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The flat buffer does not match the declared dimensions.
    #[error("expected {width} x {height} = {expected} cells, found {found}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
    /// Nested rows of differing lengths cannot form a dense grid.
    #[error("rows must all have the same length")]
    RaggedRows,
}

/// Dense 2D grid over a flat buffer, with coordinate conversion and
/// neighbor iteration.
///
/// Cells are addressed three ways: by flat index, by `(x, y)`
/// coordinates, or by [`Vec2`] position. All accessors are
/// bounds-checked and return `Option`; out-of-range access is an
/// ordinary miss, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid2<T> {
    /// Creates a grid from a flat row-major buffer.
    pub fn make(data: Vec<T>, width: usize, height: usize) -> Result<Self, GridError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid from nested rows, which must all be equally long.
    pub fn from_nested(nested: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = nested.len();
        let width = nested.first().map_or(0, Vec::len);
        if nested.iter().any(|row| row.len() != width) {
            return Err(GridError::RaggedRows);
        }
        let data: Vec<T> = nested.into_iter().flatten().collect();
        Self::make(data, width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Converts coordinates to a flat index; `None` when out of bounds.
    pub fn coords_to_idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Converts a position vector to a flat index.
    pub fn vec_to_idx(&self, v: Vec2) -> Option<usize> {
        self.coords_to_idx(v.x, v.y)
    }

    /// Converts a flat index back to coordinates.
    pub fn idx_to_coords(&self, idx: usize) -> Option<(i64, i64)> {
        if idx >= self.data.len() {
            return None;
        }
        Some(((idx % self.width) as i64, (idx / self.width) as i64))
    }

    /// Converts a flat index back to a position vector.
    pub fn idx_to_vec(&self, idx: usize) -> Option<Vec2> {
        self.idx_to_coords(idx).map(|(x, y)| Vec2::new(x, y))
    }

    /// True when the position lies inside the grid.
    pub fn in_bounds(&self, v: Vec2) -> bool {
        self.vec_to_idx(v).is_some()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.data.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.data.get_mut(idx)
    }

    pub fn get_vec(&self, v: Vec2) -> Option<&T> {
        self.data.get(self.vec_to_idx(v)?)
    }

    pub fn get_vec_mut(&mut self, v: Vec2) -> Option<&mut T> {
        let idx = self.vec_to_idx(v)?;
        self.data.get_mut(idx)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Flat index of the first cell matching the predicate.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.data.iter().position(|value| predicate(value))
    }

    /// Flat indices of all cells matching the predicate.
    pub fn find_many(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, value)| predicate(value))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// In-bounds neighbors of `origin` along the given directions.
    ///
    /// Yields `(value, position, direction)` per neighbor, in direction
    /// order; out-of-bounds directions are skipped silently.
    pub fn neighbors<'a>(
        &'a self,
        origin: Vec2,
        directions: &'a [Vec2],
    ) -> impl Iterator<Item = (&'a T, Vec2, Vec2)> + 'a {
        directions.iter().filter_map(move |&dir| {
            let next = origin + dir;
            self.get_vec(next).map(|value| (value, next, dir))
        })
    }
}
