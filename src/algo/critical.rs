//! Critical stations (articulation points) and connectivity

use super::{build_view, sorted_names};
use crate::network::{Network, NetworkError, NetworkResult, StationName};
use stationgraph_algorithms::{articulation_points, articulation_points_all};
use tracing::debug;

/// Critical stations of the part of the network reachable from `root`
///
/// Removing any returned station disconnects some other stations of that
/// part from each other. Stations unreachable from `root` are not considered;
/// use [`all_critical_stations`] for the whole network.
pub fn critical_stations<N: StationName>(network: &Network<N>, root: &N) -> NetworkResult<Vec<N>> {
    let root_idx = network.require_station(root)?;
    let view = build_view(network);
    let result = articulation_points(&view, root_idx)
        .ok_or_else(|| NetworkError::StationNotFound(root.to_string()))?;

    debug!(
        "Critical stations from {}: {} of {} visited",
        root,
        result.points.len(),
        result.visited_count()
    );
    Ok(sorted_names(network, &result.points))
}

/// Critical stations across every connected part of the network
pub fn all_critical_stations<N: StationName>(network: &Network<N>) -> Vec<N> {
    let view = build_view(network);
    let result = articulation_points_all(&view);
    debug!("Critical stations across network: {}", result.points.len());
    sorted_names(network, &result.points)
}

/// Connected parts of the network
///
/// Each part is sorted by name; parts are ordered by their earliest-inserted
/// station. An isolated station is a part of its own.
pub fn connected_components<N: StationName>(network: &Network<N>) -> Vec<Vec<N>> {
    let view = build_view(network);
    stationgraph_algorithms::connected_components(&view)
        .components
        .iter()
        .map(|members| sorted_names(network, members))
        .collect()
}
