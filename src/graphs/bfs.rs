use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graphs::graph::{GraphError, VertexGraph};
use crate::graphs::vertex::Vertex;

/// Error type for expand callbacks.
///
/// Whatever the callback fails with is boxed and surfaced through
/// [`GraphError::Expand`] together with the hash of the vertex being
/// expanded.
pub type ExpandError = Box<dyn std::error::Error + Send + Sync>;

/// One neighbor descriptor produced by an expand callback: the
/// neighbor's vertex data plus the properties for the connecting edge.
///
/// For graphs without custom edge properties use [`Expansion::new`];
/// otherwise [`Expansion::with_props`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<D, P = ()> {
    pub data: D,
    pub props: P,
}

impl<D> Expansion<D> {
    /// Descriptor carrying bare vertex data.
    pub fn new(data: D) -> Self {
        Self { data, props: () }
    }
}

impl<D, P> Expansion<D, P> {
    /// Descriptor carrying vertex data and edge properties.
    pub fn with_props(data: D, props: P) -> Self {
        Self { data, props }
    }
}

impl<D> From<D> for Expansion<D> {
    fn from(data: D) -> Self {
        Self::new(data)
    }
}

/// Outcome of a breadth-first search.
///
/// `parents` maps every reached hash to the hash it was first reached
/// from (`None` for the start). Distances and paths are derived from
/// this map on demand rather than stored.
#[derive(Debug, Clone)]
pub struct SearchResult<K> {
    start: K,
    end: K,
    found: bool,
    parents: FxHashMap<K, Option<K>>,
}

impl<K> SearchResult<K>
where
    K: Eq + Hash + Clone,
{
    /// Hash the search started from.
    pub fn start(&self) -> &K {
        &self.start
    }

    /// Hash the search was aiming for.
    pub fn end(&self) -> &K {
        &self.end
    }

    /// True when the end hash was reached.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Parent map recorded during the traversal.
    pub fn parents(&self) -> &FxHashMap<K, Option<K>> {
        &self.parents
    }

    /// Number of edges on the discovered path, or `None` when the end
    /// was not reached.
    ///
    /// A search whose start equals its end has distance zero.
    pub fn distance(&self) -> Option<usize> {
        if !self.found {
            return None;
        }
        let mut hops = 0;
        let mut current = &self.end;
        while let Some(Some(parent)) = self.parents.get(current) {
            hops += 1;
            current = parent;
        }
        Some(hops)
    }

    /// The discovered path from start to end, both inclusive; empty
    /// when the end was not reached.
    pub fn path(&self) -> Vec<K> {
        if !self.found {
            return Vec::new();
        }
        let mut path = vec![self.end.clone()];
        let mut current = &self.end;
        while let Some(Some(parent)) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Breadth-first search over a pre-built graph.
///
/// Starting from `start`, vertices are visited in breadth order until
/// `end` is dequeued or the reachable portion is exhausted. A start
/// equal to the end short-circuits with an empty, found path; a start
/// that is not in the graph yields a not-found result without
/// traversing.
pub fn bfs<D, K, H, P>(graph: &VertexGraph<D, K, H, P>, start: &K, end: &K) -> SearchResult<K>
where
    K: Eq + Hash + Clone,
    H: Fn(&D) -> K,
{
    let mut parents: FxHashMap<K, Option<K>> = FxHashMap::default();

    if start == end {
        parents.insert(start.clone(), None);
        return SearchResult {
            start: start.clone(),
            end: end.clone(),
            found: true,
            parents,
        };
    }
    if graph.get_vertex_by_hash(start).is_none() {
        return SearchResult {
            start: start.clone(),
            end: end.clone(),
            found: false,
            parents,
        };
    }

    let mut visited: FxHashSet<K> = FxHashSet::default();
    visited.insert(start.clone());
    parents.insert(start.clone(), None);

    // Append-only queue with a read cursor: dequeuing advances the
    // cursor instead of shifting the buffer.
    let mut queue = vec![start.clone()];
    let mut cursor = 0;
    let mut found = false;

    while cursor < queue.len() {
        let current = queue[cursor].clone();
        cursor += 1;

        if &current == end {
            found = true;
            break;
        }

        let Some(vertex) = graph.get_vertex_by_hash(&current) else {
            continue;
        };
        for edge in vertex.edges() {
            if visited.insert(edge.next.clone()) {
                parents.insert(edge.next.clone(), Some(current.clone()));
                queue.push(edge.next.clone());
            }
        }
    }

    SearchResult {
        start: start.clone(),
        end: end.clone(),
        found,
        parents,
    }
}

/// Breadth-first search that grows the graph as it explores.
///
/// Before a vertex's edges are walked, `expand` is invoked on it and
/// may return neighbor descriptors; descriptors whose data hashes to an
/// unknown key are inserted as new vertices, and an edge from the
/// current vertex to each descriptor's vertex is added carrying the
/// descriptor's properties. The walk over the vertex's (now possibly
/// longer) edge list then proceeds as in [`bfs`].
///
/// This deliberately mutates `graph` as a side effect: only the portion
/// of an implicit state space that the search actually reaches is ever
/// materialized. Callers that need the pre-search graph afterwards must
/// clone it first.
///
/// An error returned by `expand` aborts the whole search with
/// [`GraphError::Expand`]; mutations made up to that point are kept,
/// not rolled back.
pub fn bfs_expand<D, K, H, P, X>(
    graph: &mut VertexGraph<D, K, H, P>,
    start: &K,
    end: &K,
    mut expand: X,
) -> Result<SearchResult<K>, GraphError<K>>
where
    K: Eq + Hash + Clone,
    H: Fn(&D) -> K,
    P: Clone,
    X: FnMut(&Vertex<D, K, P>) -> Result<Vec<Expansion<D, P>>, ExpandError>,
{
    let mut parents: FxHashMap<K, Option<K>> = FxHashMap::default();

    if start == end {
        parents.insert(start.clone(), None);
        return Ok(SearchResult {
            start: start.clone(),
            end: end.clone(),
            found: true,
            parents,
        });
    }
    if graph.get_vertex_by_hash(start).is_none() {
        return Ok(SearchResult {
            start: start.clone(),
            end: end.clone(),
            found: false,
            parents,
        });
    }

    let mut visited: FxHashSet<K> = FxHashSet::default();
    visited.insert(start.clone());
    parents.insert(start.clone(), None);

    let mut queue = vec![start.clone()];
    let mut cursor = 0;
    let mut found = false;

    while cursor < queue.len() {
        let current = queue[cursor].clone();
        cursor += 1;

        if &current == end {
            found = true;
            break;
        }

        let expansions = match graph.get_vertex_by_hash(&current) {
            Some(vertex) => match expand(vertex) {
                Ok(expansions) => expansions,
                Err(source) => {
                    return Err(GraphError::Expand {
                        hash: current,
                        source,
                    })
                }
            },
            None => Vec::new(),
        };
        for Expansion { data, props } in expansions {
            let next = graph.hash(&data);
            if graph.get_vertex_by_hash(&next).is_none() {
                graph.add_vertex(data)?;
            }
            graph.add_edge_from_vertices(&current, &next, props)?;
        }

        let Some(vertex) = graph.get_vertex_by_hash(&current) else {
            continue;
        };
        for edge in vertex.edges() {
            if visited.insert(edge.next.clone()) {
                parents.insert(edge.next.clone(), Some(current.clone()));
                queue.push(edge.next.clone());
            }
        }
    }

    Ok(SearchResult {
        start: start.clone(),
        end: end.clone(),
        found,
        parents,
    })
}
