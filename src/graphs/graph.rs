use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::graphs::vertex::Vertex;

/// Whether edges are one-way or mirrored on insertion.
///
/// The mode is fixed at construction and cannot change afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    /// Edges go one way; `add_edge_from_vertices(a, b, _)` creates only
    /// the edge `a -> b`.
    Directed,
    /// Every edge insertion also creates the symmetric edge.
    #[default]
    Undirected,
}

/// Errors produced by [`VertexGraph`] operations and by searches that
/// mutate the graph through caller callbacks.
#[derive(Debug, Error)]
pub enum GraphError<K> {
    /// A vertex with the same hash key is already present and override
    /// semantics were not requested.
    #[error("vertex already exists for hash {0}")]
    DuplicateVertex(K),
    /// An edge endpoint was looked up by key or data and is not in the
    /// graph.
    #[error("no vertex for hash {0}")]
    VertexNotFound(K),
    /// A caller-supplied expand callback failed while the search was
    /// growing the graph. Mutations made before the failure are kept.
    #[error("expand callback failed at {hash}")]
    Expand {
        hash: K,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Generic hash-indexed graph of user-defined vertex data.
///
/// The graph owns every [`Vertex`] exclusively, keyed by the value a
/// caller-supplied hasher produces from the vertex data. Edges refer to
/// their destination by that same key, so a key is the stable vertex
/// reference throughout the API. Works for spatial graphs (positions,
/// grid cells) and for state-space graphs (configurations explored
/// lazily by a search).
///
/// The hasher must be a pure function of the data: the same data must
/// always produce the same key, since lookups and searches re-hash
/// freely instead of caching identities. Distinct vertex data must hash
/// to distinct keys; inserting a second vertex under an occupied key is
/// an error unless [`VertexGraph::add_vertex_override`] is used.
///
/// Edge properties are a fixed type `P` per graph instance; graphs
/// without custom properties use `P = ()`, so the presence or absence
/// of properties is resolved at compile time.
///
/// ```
/// use puzzlekit::{Vec2, VertexGraph};
///
/// let mut graph = VertexGraph::new(|p: &Vec2| (p.x, p.y));
/// let a = graph.add_vertex(Vec2::new(0, 0)).unwrap();
/// let b = graph.add_vertex(Vec2::new(1, 0)).unwrap();
/// graph.add_edge_from_vertices(&a, &b, ()).unwrap();
/// ```
#[derive(Clone)]
pub struct VertexGraph<D, K, H, P = ()>
where
    K: Eq + Hash + Clone,
    H: Fn(&D) -> K,
{
    vertices: FxHashMap<K, Vertex<D, K, P>>,
    hasher: H,
    mode: GraphMode,
}

impl<D, K, H, P> VertexGraph<D, K, H, P>
where
    K: Eq + Hash + Clone,
    H: Fn(&D) -> K,
{
    /// Creates an empty undirected graph with the given hasher.
    pub fn new(hasher: H) -> Self {
        Self::with_mode(hasher, GraphMode::Undirected)
    }

    /// Creates an empty directed graph with the given hasher.
    pub fn directed(hasher: H) -> Self {
        Self::with_mode(hasher, GraphMode::Directed)
    }

    /// Creates an empty graph with an explicit mode.
    pub fn with_mode(hasher: H, mode: GraphMode) -> Self {
        Self {
            vertices: FxHashMap::default(),
            hasher,
            mode,
        }
    }

    /// The mode this graph was constructed with.
    #[inline]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Applies the graph's hasher to `data`.
    #[inline]
    pub fn hash(&self, data: &D) -> K {
        (self.hasher)(data)
    }

    /// Iterator over the hash keys of all vertices, in no particular
    /// order.
    pub fn hashes(&self) -> impl Iterator<Item = &K> {
        self.vertices.keys()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true when the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Looks a vertex up by its data.
    ///
    /// A miss is an ordinary outcome and yields `None`, never an error.
    pub fn get_vertex(&self, data: &D) -> Option<&Vertex<D, K, P>> {
        self.vertices.get(&self.hash(data))
    }

    /// Looks a vertex up by an already-computed hash key.
    pub fn get_vertex_by_hash(&self, hash: &K) -> Option<&Vertex<D, K, P>> {
        self.vertices.get(hash)
    }

    /// Inserts a new vertex and returns its hash key.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] when the key is
    /// already occupied; nothing is overwritten implicitly.
    pub fn add_vertex(&mut self, data: D) -> Result<K, GraphError<K>> {
        let hash = self.hash(&data);
        if self.vertices.contains_key(&hash) {
            return Err(GraphError::DuplicateVertex(hash));
        }
        self.vertices.insert(hash.clone(), Vertex::new(data));
        Ok(hash)
    }

    /// Inserts a vertex, replacing any existing occupant of the same
    /// key, and returns the key together with the displaced vertex.
    ///
    /// The displaced vertex is handed back with its outgoing edges so
    /// the caller can decide what to do with them. Edges held by other
    /// vertices are NOT rewired or removed: they keep the key and from
    /// now on resolve to the replacement occupant.
    // TODO: decide whether override should drop or rewire edges in
    // other vertices that were aimed at the replaced occupant.
    pub fn add_vertex_override(&mut self, data: D) -> (K, Option<Vertex<D, K, P>>) {
        let hash = self.hash(&data);
        let old = self.vertices.insert(hash.clone(), Vertex::new(data));
        (hash, old)
    }

    /// Appends an edge `from -> to` carrying `props`; in undirected
    /// mode the mirrored edge is appended as well.
    ///
    /// Both endpoints must already exist. Repeated calls append
    /// duplicate edges; deduplication is the caller's responsibility.
    pub fn add_edge_from_vertices(
        &mut self,
        from: &K,
        to: &K,
        props: P,
    ) -> Result<(), GraphError<K>>
    where
        P: Clone,
    {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::VertexNotFound(to.clone()));
        }
        let mode = self.mode;
        let v0 = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::VertexNotFound(from.clone()))?;
        match mode {
            GraphMode::Directed => v0.push_edge(to.clone(), props),
            GraphMode::Undirected => {
                v0.push_edge(to.clone(), props.clone());
                if let Some(v1) = self.vertices.get_mut(to) {
                    v1.push_edge(from.clone(), props);
                }
            }
        }
        Ok(())
    }

    /// Resolves both endpoints from their data and delegates to
    /// [`VertexGraph::add_edge_from_vertices`].
    ///
    /// Fails with [`GraphError::VertexNotFound`] when either endpoint
    /// has not been inserted.
    pub fn add_edge_from_data(&mut self, d0: &D, d1: &D, props: P) -> Result<(), GraphError<K>>
    where
        P: Clone,
    {
        let k0 = self.hash(d0);
        let k1 = self.hash(d1);
        self.add_edge_from_vertices(&k0, &k1, props)
    }
}

impl<D, K, H, P> fmt::Display for VertexGraph<D, K, H, P>
where
    D: fmt::Display,
    K: Eq + Hash + Clone + fmt::Display,
    H: Fn(&D) -> K,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            writeln!(f, "Vertex {}", vertex.data())?;
            for edge in vertex.edges() {
                writeln!(f, "- {} {:?}", edge.next, edge.props)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &&str) -> String {
        s.to_string()
    }

    #[test]
    fn add_vertex_returns_key_and_rejects_duplicates() {
        let mut graph: VertexGraph<&str, String, _> = VertexGraph::new(key);

        let a = graph.add_vertex("a").expect("first insert succeeds");
        assert_eq!(a, "a");
        assert_eq!(graph.vertex_count(), 1);

        let err = graph.add_vertex("a").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex(k) if k == "a"));
        assert_eq!(graph.vertex_count(), 1, "failed insert must not mutate");
    }

    #[test]
    fn lookup_miss_is_none_not_an_error() {
        let mut graph: VertexGraph<&str, String, _> = VertexGraph::new(key);
        graph.add_vertex("a").unwrap();

        assert!(graph.get_vertex(&"missing").is_none());
        assert!(graph.get_vertex_by_hash(&"missing".to_string()).is_none());
        assert!(graph.get_vertex(&"a").is_some());
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut graph = VertexGraph::new(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();

        graph.add_edge_from_vertices(&a, &b, ()).unwrap();

        assert_eq!(graph.get_vertex_by_hash(&a).unwrap().degree(), 1);
        assert_eq!(graph.get_vertex_by_hash(&b).unwrap().degree(), 1);
        assert_eq!(graph.get_vertex_by_hash(&b).unwrap().edges()[0].next, a);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut graph = VertexGraph::directed(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();

        graph.add_edge_from_vertices(&a, &b, ()).unwrap();

        assert_eq!(graph.get_vertex_by_hash(&a).unwrap().degree(), 1);
        assert_eq!(graph.get_vertex_by_hash(&b).unwrap().degree(), 0);
    }

    #[test]
    fn repeated_edge_calls_create_duplicate_edges() {
        let mut graph = VertexGraph::directed(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();

        graph.add_edge_from_vertices(&a, &b, ()).unwrap();
        graph.add_edge_from_vertices(&a, &b, ()).unwrap();

        assert_eq!(graph.get_vertex_by_hash(&a).unwrap().degree(), 2);
    }

    #[test]
    fn edge_from_data_requires_both_endpoints() {
        let mut graph = VertexGraph::new(key);
        graph.add_vertex("a").unwrap();

        let err = graph.add_edge_from_data(&"a", &"b", ()).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(k) if k == "b"));

        let err = graph.add_edge_from_data(&"b", &"a", ()).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(k) if k == "b"));

        graph.add_vertex("b").unwrap();
        graph.add_edge_from_data(&"a", &"b", ()).unwrap();
        assert_eq!(graph.get_vertex(&"a").unwrap().degree(), 1);
    }

    #[test]
    fn failed_edge_insert_leaves_no_partial_edge() {
        let mut graph = VertexGraph::new(key);
        let a = graph.add_vertex("a").unwrap();

        let missing = "b".to_string();
        assert!(graph.add_edge_from_vertices(&a, &missing, ()).is_err());
        assert_eq!(
            graph.get_vertex_by_hash(&a).unwrap().degree(),
            0,
            "no half-inserted edge after a failed call"
        );
    }

    #[test]
    fn edge_properties_are_carried() {
        let mut graph: VertexGraph<&str, String, _, u32> = VertexGraph::directed(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();

        graph.add_edge_from_vertices(&a, &b, 5).unwrap();

        let edges = graph.get_vertex_by_hash(&a).unwrap().edges();
        assert_eq!(edges[0].props, 5);
    }

    #[test]
    fn override_returns_displaced_vertex_and_keeps_stale_edges() {
        let mut graph = VertexGraph::directed(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();
        graph.add_edge_from_vertices(&a, &b, ()).unwrap();
        graph.add_edge_from_vertices(&b, &a, ()).unwrap();

        let (key_b, old) = graph.add_vertex_override("b");
        assert_eq!(key_b, b);

        let old = old.expect("previous occupant is handed back");
        assert_eq!(old.degree(), 1, "displaced vertex keeps its outgoing edges");

        // The replacement starts with an empty edge list, while a's edge
        // to "b" still exists and now resolves to the replacement.
        assert_eq!(graph.get_vertex_by_hash(&key_b).unwrap().degree(), 0);
        assert_eq!(graph.get_vertex_by_hash(&a).unwrap().edges()[0].next, key_b);
    }

    #[test]
    fn override_without_occupant_is_a_plain_insert() {
        let mut graph: VertexGraph<&str, String, _> = VertexGraph::new(key);
        let (k, old) = graph.add_vertex_override("a");
        assert_eq!(k, "a");
        assert!(old.is_none());
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn cloned_graph_is_independent() {
        let mut graph = VertexGraph::new(key);
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();

        let snapshot = graph.clone();
        graph.add_edge_from_vertices(&a, &b, ()).unwrap();

        assert_eq!(snapshot.get_vertex_by_hash(&a).unwrap().degree(), 0);
        assert_eq!(graph.get_vertex_by_hash(&a).unwrap().degree(), 1);
    }
}
