use thiserror::Error;

use crate::geometry::vec2::Vec2;

/// Failures when compressing coordinates that were never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressError {
    /// The coordinate is not part of the compressor's construction set.
    #[error("coordinate {0} not present in the compressor")]
    NotFound(i64),
}

/// Coordinate compression for sparse 2D point sets.
///
/// Maps each distinct x and y coordinate of the construction set to its
/// rank in sorted order, turning a handful of points spread over a huge
/// range into dense indices: a 1000000-wide layout with three distinct
/// x coordinates compresses to x in `0..3`. Compression is monotone per
/// axis, so relative order of coordinates survives.
///
/// ```
/// use puzzlekit::{Vec2, Vec2Compressor};
///
/// let points = [Vec2::new(0, 0), Vec2::new(1000, 2000), Vec2::new(5000, 10000)];
/// let compressor = Vec2Compressor::new(&points);
///
/// let small = compressor.compress(Vec2::new(1000, 2000)).unwrap();
/// assert_eq!(small, Vec2::new(1, 1));
/// assert_eq!(compressor.decompress(small), Some(Vec2::new(1000, 2000)));
/// ```
#[derive(Debug, Clone)]
pub struct Vec2Compressor {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

impl Vec2Compressor {
    /// Builds per-axis lookup tables from the distinct coordinates of
    /// `points`.
    pub fn new(points: &[Vec2]) -> Self {
        let mut xs: Vec<i64> = points.iter().map(|p| p.x).collect();
        let mut ys: Vec<i64> = points.iter().map(|p| p.y).collect();
        xs.sort_unstable();
        xs.dedup();
        ys.sort_unstable();
        ys.dedup();
        Self { xs, ys }
    }

    /// Compresses a point to per-axis ranks.
    ///
    /// Only coordinates present in the construction set compress;
    /// anything else is a [`CompressError::NotFound`].
    pub fn compress(&self, p: Vec2) -> Result<Vec2, CompressError> {
        let x = self
            .xs
            .binary_search(&p.x)
            .map_err(|_| CompressError::NotFound(p.x))?;
        let y = self
            .ys
            .binary_search(&p.y)
            .map_err(|_| CompressError::NotFound(p.y))?;
        Ok(Vec2::new(x as i64, y as i64))
    }

    /// Maps a compressed point back to its original coordinates;
    /// `None` when either component is out of table range.
    pub fn decompress(&self, p: Vec2) -> Option<Vec2> {
        let x = *self.xs.get(usize::try_from(p.x).ok()?)?;
        let y = *self.ys.get(usize::try_from(p.y).ok()?)?;
        Some(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_points() -> Vec<Vec2> {
        vec![
            Vec2::new(0, 0),
            Vec2::new(1000, 2000),
            Vec2::new(5000, 10000),
            Vec2::new(1000, 0),
        ]
    }

    #[test]
    fn compresses_to_sorted_ranks() {
        let compressor = Vec2Compressor::new(&sparse_points());

        assert_eq!(compressor.compress(Vec2::new(0, 0)), Ok(Vec2::new(0, 0)));
        assert_eq!(
            compressor.compress(Vec2::new(1000, 2000)),
            Ok(Vec2::new(1, 1))
        );
        assert_eq!(
            compressor.compress(Vec2::new(5000, 10000)),
            Ok(Vec2::new(2, 2))
        );
        // Axes compress independently; any registered x/y combination
        // works.
        assert_eq!(
            compressor.compress(Vec2::new(5000, 0)),
            Ok(Vec2::new(2, 0))
        );
    }

    #[test]
    fn unknown_coordinates_are_errors() {
        let compressor = Vec2Compressor::new(&sparse_points());

        assert_eq!(
            compressor.compress(Vec2::new(3, 0)),
            Err(CompressError::NotFound(3))
        );
        assert_eq!(
            compressor.compress(Vec2::new(0, 17)),
            Err(CompressError::NotFound(17))
        );
    }

    #[test]
    fn roundtrip_through_decompress() {
        let points = sparse_points();
        let compressor = Vec2Compressor::new(&points);

        for p in points {
            let compressed = compressor.compress(p).unwrap();
            assert_eq!(compressor.decompress(compressed), Some(p));
        }
    }

    #[test]
    fn decompress_out_of_range_is_none() {
        let compressor = Vec2Compressor::new(&sparse_points());

        assert_eq!(compressor.decompress(Vec2::new(99, 0)), None);
        assert_eq!(compressor.decompress(Vec2::new(0, -1)), None);
    }

    #[test]
    fn compression_preserves_order() {
        let compressor = Vec2Compressor::new(&sparse_points());

        let a = compressor.compress(Vec2::new(0, 0)).unwrap();
        let b = compressor.compress(Vec2::new(5000, 10000)).unwrap();
        assert!(a.x < b.x && a.y < b.y);
    }
}
