//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the network topology for algorithm execution.

/// Dense station index (0..N), assigned in insertion order by the store
pub type StationIdx = usize;

/// A dense, integer-indexed view of the network topology using Compressed Sparse Row (CSR) format.
///
/// Links are symmetric, so a single adjacency structure covers both directions.
/// Parallel links (same pair, different colours) appear once per link.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of stations
    pub node_count: usize,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of adjacent station indices, in adjacency insertion order
    pub targets: Vec<StationIdx>,
}

impl GraphView {
    /// Get the degree of a station (by index), counting parallel links
    pub fn degree(&self, idx: StationIdx) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get adjacent stations of a station
    pub fn neighbours(&self, idx: StationIdx) -> &[StationIdx] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Total number of adjacency entries (each undirected link counted twice)
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }

    /// Build a view from per-station adjacency lists
    pub fn from_adjacency_list(adjacency: Vec<Vec<StationIdx>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for neighbours in adjacency {
            targets.extend(neighbours);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
        }
    }

    /// Build a symmetric view from a list of undirected links
    pub fn from_links(node_count: usize, links: &[(StationIdx, StationIdx)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in links {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::from_adjacency_list(adjacency)
    }
}
