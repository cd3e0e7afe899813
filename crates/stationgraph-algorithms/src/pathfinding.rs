//! Pathfinding algorithms
//!
//! Hop-count shortest path via breadth-first search.

use super::common::{GraphView, StationIdx};
use std::collections::{HashMap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult {
    pub source: StationIdx,
    pub target: StationIdx,
    /// Stations from source to target inclusive
    pub path: Vec<StationIdx>,
}

impl PathResult {
    /// Number of links traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// The first station to discover a neighbour becomes its predecessor and is
/// never overwritten, so the predecessor chain is a shortest path by hop count.
/// The search stops as soon as `target` is dequeued.
pub fn bfs(view: &GraphView, source: StationIdx, target: StationIdx) -> Option<PathResult> {
    if source >= view.node_count || target >= view.node_count {
        return None;
    }

    let mut queue = VecDeque::new();
    let mut visited: HashMap<StationIdx, Option<StationIdx>> = HashMap::new(); // index -> predecessor

    queue.push_back(source);
    visited.insert(source, None);

    while let Some(current) = queue.pop_front() {
        if current == target {
            // Reconstruct path
            let mut path = Vec::new();
            let mut curr = Some(target);
            while let Some(idx) = curr {
                path.push(idx);
                curr = visited.get(&idx).copied().flatten();
            }
            path.reverse();
            tracing::trace!(source, target, hops = path.len() - 1, "bfs reached target");
            return Some(PathResult {
                source,
                target,
                path,
            });
        }

        for &next in view.neighbours(current) {
            if !visited.contains_key(&next) {
                visited.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    tracing::trace!(source, target, explored = visited.len(), "bfs frontier exhausted");
    None
}
