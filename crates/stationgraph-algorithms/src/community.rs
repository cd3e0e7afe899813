//! Connectivity algorithms
//!
//! Connected components of the (undirected) station network.

use super::common::{GraphView, StationIdx};
use std::collections::HashMap;

/// Result of a connected components search
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentsResult {
    /// Components as ascending station indices, ordered by their smallest member
    pub components: Vec<Vec<StationIdx>>,
    /// Component position (into `components`) for each station
    pub component_of: Vec<usize>,
}

impl ComponentsResult {
    pub fn same_component(&self, a: StationIdx, b: StationIdx) -> bool {
        self.component_of[a] == self.component_of[b]
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut curr = i;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Connected Components
///
/// Finds all disjoint sub-networks. Isolated stations form singleton components.
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u in 0..n {
        for &v in view.neighbours(u) {
            uf.union(u, v);
        }
    }

    // Walking indices in order assigns positions by smallest member.
    let mut position_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<StationIdx>> = Vec::new();
    let mut component_of = Vec::with_capacity(n);

    for i in 0..n {
        let root = uf.find(i);
        let position = *position_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[position].push(i);
        component_of.push(position);
    }

    ComponentsResult {
        components,
        component_of,
    }
}
