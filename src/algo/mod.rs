//! Network queries
//!
//! The traversal algorithms live in the `stationgraph-algorithms` crate and
//! work on a dense index view. This module builds that view from a
//! [`Network`] and maps results back to station names.

pub mod critical;
pub mod route;

use crate::network::{Network, StationName};
use stationgraph_algorithms::GraphView;

pub use critical::{all_critical_stations, connected_components, critical_stations};
pub use route::{shortest_route, ColourTransition, Route};

/// Build a GraphView from the network for algorithm execution
///
/// Station indices in the view are the store's insertion indices, and each
/// adjacency list keeps the store's link order (parallel links included).
pub fn build_view<N: StationName>(network: &Network<N>) -> GraphView {
    let adjacency: Vec<Vec<usize>> = (0..network.station_count())
        .map(|idx| {
            network
                .station_at(idx)
                .map(|station| station.links().iter().map(|link| link.target).collect())
                .unwrap_or_default()
        })
        .collect();

    GraphView::from_adjacency_list(adjacency)
}

/// Map station indices back to names, sorted by name
pub(crate) fn sorted_names<N: StationName>(network: &Network<N>, indices: &[usize]) -> Vec<N> {
    let mut names: Vec<N> = indices
        .iter()
        .filter_map(|&idx| network.name_at(idx).cloned())
        .collect();
    names.sort();
    names
}
