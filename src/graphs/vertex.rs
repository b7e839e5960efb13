use std::fmt;

/// A single outgoing edge of a [`Vertex`].
///
/// `next` is the hash key of the destination vertex in the owning
/// [`VertexGraph`]; `props` carries the caller-defined edge properties.
/// Graphs without custom edge properties use the instantiation `P = ()`.
///
/// [`VertexGraph`]: crate::graphs::graph::VertexGraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<K, P = ()> {
    /// Hash key of the destination vertex.
    pub next: K,
    /// Caller-defined edge properties, uniform per graph instance.
    pub props: P,
}

/// A graph node holding immutable user data plus an ordered list of
/// outgoing edges.
///
/// Vertices are created only through the owning graph and are never
/// deleted; the only mutation after creation is appending to the edge
/// list. The data type `D` must render for diagnostics, so graph
/// methods that print require `D: Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<D, K, P = ()> {
    data: D,
    edges: Vec<Edge<K, P>>,
}

impl<D, K, P> Vertex<D, K, P> {
    pub(crate) fn new(data: D) -> Self {
        Self {
            data,
            edges: Vec::new(),
        }
    }

    /// The user data this vertex was created from.
    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Outgoing edges in insertion order.
    ///
    /// Repeated edge insertions between the same pair of vertices are
    /// kept as distinct entries; the list is never deduplicated.
    #[inline]
    pub fn edges(&self) -> &[Edge<K, P>] {
        &self.edges
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn push_edge(&mut self, next: K, props: P) {
        self.edges.push(Edge { next, props });
    }
}

impl<D: fmt::Display, K: fmt::Display, P> fmt::Display for Vertex<D, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex: {}, edges:", self.data)?;
        for edge in &self.edges {
            write!(f, " {}", edge.next)?;
        }
        Ok(())
    }
}
