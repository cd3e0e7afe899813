//! Graph topology analysis algorithms
//!
//! Articulation points (cut vertices) via discovery order and low values.

use super::common::{GraphView, StationIdx};

/// Result of an articulation point search
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArticulationResult {
    /// Cut vertices in ascending index order
    pub points: Vec<StationIdx>,
    /// Discovery order per station (1-based), `None` if never reached
    pub discovery: Vec<Option<usize>>,
    /// Low value per station, `None` if never reached
    pub low: Vec<Option<usize>>,
}

impl ArticulationResult {
    /// Number of stations reached by the traversal
    pub fn visited_count(&self) -> usize {
        self.discovery.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_articulation_point(&self, idx: StationIdx) -> bool {
        self.points.binary_search(&idx).is_ok()
    }
}

/// Per-invocation DFS state. Index 0 in `discovery` means unvisited.
struct DfsState {
    discovery: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<StationIdx>>,
    cut: Vec<bool>,
    counter: usize,
}

impl DfsState {
    fn new(node_count: usize) -> Self {
        DfsState {
            discovery: vec![0; node_count],
            low: vec![0; node_count],
            parent: vec![None; node_count],
            cut: vec![false; node_count],
            counter: 0,
        }
    }

    fn is_visited(&self, idx: StationIdx) -> bool {
        self.discovery[idx] != 0
    }

    fn discover(&mut self, idx: StationIdx, parent: Option<StationIdx>) {
        self.counter += 1;
        self.discovery[idx] = self.counter;
        self.low[idx] = self.counter;
        self.parent[idx] = parent;
    }

    /// Iterative DFS from `root`. Each stack frame holds a station and the
    /// position of the next neighbour to examine, so low values propagate in
    /// post-order exactly as the recursive formulation would.
    fn run_from(&mut self, view: &GraphView, root: StationIdx) {
        self.discover(root, None);
        let mut root_children = 0usize;
        let mut stack: Vec<(StationIdx, usize)> = vec![(root, 0)];

        while let Some(&(v, pos)) = stack.last() {
            if let Some(&w) = view.neighbours(v).get(pos) {
                let top = stack.len() - 1;
                stack[top].1 += 1;

                if !self.is_visited(w) {
                    if v == root {
                        root_children += 1;
                    }
                    self.discover(w, Some(v));
                    stack.push((w, 0));
                } else if self.parent[v] != Some(w) {
                    // back edge
                    self.low[v] = self.low[v].min(self.discovery[w]);
                }
                continue;
            }

            stack.pop();
            if let Some(p) = self.parent[v] {
                self.low[p] = self.low[p].min(self.low[v]);
                // The root is judged by its child count instead.
                if p != root && self.low[v] >= self.discovery[p] {
                    self.cut[p] = true;
                }
            }
        }

        if root_children > 1 {
            self.cut[root] = true;
        }
        tracing::trace!(root, root_children, discovered = self.counter, "dfs tree complete");
    }

    fn into_result(self) -> ArticulationResult {
        let points = self
            .cut
            .iter()
            .enumerate()
            .filter_map(|(idx, &is_cut)| is_cut.then_some(idx))
            .collect();
        let low = only_reached(&self.low, &self.discovery);
        let discovery = only_reached(&self.discovery, &self.discovery);

        ArticulationResult {
            points,
            discovery,
            low,
        }
    }
}

fn only_reached(values: &[usize], discovery: &[usize]) -> Vec<Option<usize>> {
    values
        .iter()
        .zip(discovery)
        .map(|(&value, &d)| (d != 0).then_some(value))
        .collect()
}

/// Articulation points of the component containing `root`
///
/// Stations not reachable from `root` are never visited and never reported.
/// Returns `None` if `root` is not a valid station index.
pub fn articulation_points(view: &GraphView, root: StationIdx) -> Option<ArticulationResult> {
    if root >= view.node_count {
        return None;
    }

    let mut state = DfsState::new(view.node_count);
    state.run_from(view, root);
    Some(state.into_result())
}

/// Articulation points of every component
///
/// Restarts the traversal from each not-yet-visited station in index order.
pub fn articulation_points_all(view: &GraphView) -> ArticulationResult {
    let mut state = DfsState::new(view.node_count);
    for idx in 0..view.node_count {
        if !state.is_visited(idx) {
            state.run_from(view, idx);
        }
    }
    state.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        // 0-1-2-3
        let view = GraphView::from_links(4, &[(0, 1), (1, 2), (2, 3)]);

        for root in 0..4 {
            let result = articulation_points(&view, root).unwrap();
            assert_eq!(result.points, vec![1, 2], "root {}", root);
        }
    }

    #[test]
    fn test_cycle() {
        let view = GraphView::from_links(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);

        for root in 0..4 {
            let result = articulation_points(&view, root).unwrap();
            assert!(result.points.is_empty());
        }
    }

    #[test]
    fn test_root_with_two_children() {
        // Star centred on 0
        let view = GraphView::from_links(3, &[(0, 1), (0, 2)]);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.points, vec![0]);
    }

    #[test]
    fn test_root_with_one_child() {
        // Triangle 0-1-2 plus pendant 3 on 1. Root 0 has a single DFS child.
        let view = GraphView::from_links(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.points, vec![1]);
        assert!(!result.is_articulation_point(0));
    }

    #[test]
    fn test_discovery_numbering() {
        let view = GraphView::from_links(3, &[(0, 1), (1, 2)]);

        let result = articulation_points(&view, 1).unwrap();
        assert_eq!(result.discovery, vec![Some(2), Some(1), Some(3)]);
        assert_eq!(result.low, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn test_back_edge_lowers_low_value() {
        // Cycle 0-1-2-0 from root 0: 2 sees 0 through a back edge.
        let view = GraphView::from_links(3, &[(0, 1), (1, 2), (2, 0)]);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.low, vec![Some(1), Some(1), Some(1)]);
    }

    #[test]
    fn test_unreached_component_ignored() {
        // 0-1-2 and separate 3-4-5
        let view = GraphView::from_links(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.points, vec![1]);
        assert_eq!(result.visited_count(), 3);
        assert_eq!(result.discovery[4], None);

        let all = articulation_points_all(&view);
        assert_eq!(all.points, vec![1, 4]);
        assert_eq!(all.visited_count(), 6);
    }

    #[test]
    fn test_parallel_links_to_parent() {
        // Parallel links do not protect against removal of a station.
        let view = GraphView::from_links(3, &[(0, 1), (0, 1), (1, 2)]);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.points, vec![1]);
    }

    #[test]
    fn test_invalid_root() {
        let view = GraphView::from_links(2, &[(0, 1)]);
        assert!(articulation_points(&view, 2).is_none());
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let links: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let view = GraphView::from_links(n, &links);

        let result = articulation_points(&view, 0).unwrap();
        assert_eq!(result.points.len(), n - 2);
    }
}
