/// Zero-based vertex index used by every in-memory structure.
pub type Vertex = usize;

/// Edge weight. Absence of an edge is encoded as `f64::INFINITY`.
pub type Weight = f64;

/// Type alias for a single edge list entry: (from, to, weight)
pub type Edge = (Vertex, Vertex, Weight);

/// Converts a 1-indexed external vertex id into the internal 0-indexed form.
///
/// Returns `None` for `0`, which has no internal counterpart.
pub fn from_external(id: usize) -> Option<Vertex> {
    id.checked_sub(1)
}

/// Converts an internal vertex index to its 1-indexed external id.
pub fn to_external(vertex: Vertex) -> usize {
    vertex + 1
}
