//! Data structures for grid-and-graph puzzle solving.
//!
//! The crate provides the pieces such puzzles keep reaching for:
//!
//! - [`graphs`]: a generic hash-indexed vertex graph with directed or
//!   undirected edges, typed per-edge properties, and breadth-first
//!   search that can lazily grow the graph through an expand callback.
//! - [`uf`]: union-find over arbitrary keyed elements or dense integer
//!   indices, with path compression and union by size.
//! - [`geometry`]: exact integer 2D primitives (orientation, segment
//!   tests) plus validated rectangle and polygon types with containment
//!   queries.
//! - [`grid`]: a dense 2D grid with coordinate conversion and neighbor
//!   iteration.
//! - [`compress`]: coordinate compression for sparse 2D point sets.
//!
//! All components are single-threaded and operate on in-memory data;
//! fallible operations return typed errors rather than panicking.

pub mod compress;
pub mod geometry;
pub mod graphs;
pub mod grid;
pub mod uf;

pub use compress::{CompressError, Vec2Compressor};
pub use geometry::polygon2::Polygon2;
pub use geometry::rect2::Rect2;
pub use geometry::vec2::Vec2;
pub use geometry::vec3::Vec3;
pub use geometry::{orient2, point_on_segment2, segments_intersect2, GeometryError};
pub use graphs::bfs::{bfs, bfs_expand, ExpandError, Expansion, SearchResult};
pub use graphs::graph::{GraphError, GraphMode, VertexGraph};
pub use graphs::vertex::{Edge, Vertex};
pub use grid::{Grid2, GridError};
pub use uf::{ArrayUnionFind, MapUnionFind, UfError, UnionFind};
