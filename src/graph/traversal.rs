use crate::graph::bitset::BlockBitset;
use crate::graph::links::LinkGraph;
use crate::spatial::grid::BlockId;

/// Collect every block reachable from `start`, including `start` itself
///
/// Depth-first with an explicit stack. Neighbours come out of the graph in
/// ascending order, so the visiting order is deterministic; only the resulting
/// set matters to callers. `capacity` bounds the ids that can be recorded.
pub fn reachable_from(graph: &LinkGraph, start: BlockId, capacity: BlockId) -> BlockBitset {
    let mut visited = BlockBitset::new(capacity);
    if !visited.insert(start) {
        return visited;
    }

    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        for next in graph.neighbors(id) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    tracing::trace!(start, reached = visited.count(), "traversal finished");
    visited
}

/// Check that every id in `ids` is reachable from the first one
///
/// An empty id list counts as connected.
pub fn is_connected(graph: &LinkGraph, ids: &[BlockId], capacity: BlockId) -> bool {
    let Some(&first) = ids.first() else {
        return true;
    };
    let reached = reachable_from(graph, first, capacity);
    ids.iter().all(|&id| reached.contains(id))
}
