//! Shortest route between two stations
//!
//! Routes are chosen by hop count only. Colours are looked up afterwards to
//! describe where the traveller changes line.

use super::build_view;
use crate::network::{Colour, Network, StationName};
use serde::Serialize;
use stationgraph_algorithms::bfs;
use tracing::debug;

/// A change of line colour part-way along a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourTransition<N> {
    /// Station where the change happens
    pub at: N,
    pub from: Colour,
    pub to: Colour,
}

impl<N> ColourTransition<N> {
    /// "from colour X to colour Y" wording
    pub fn describe(&self) -> String {
        format!("from {} to {}", self.from, self.to)
    }
}

/// Result of a shortest route query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<N> {
    pub from: N,
    pub to: N,
    pub found: bool,
    /// Stations from `from` to `to` inclusive; empty when not found
    pub path: Vec<N>,
    /// Number of links travelled (`path.len() - 1`)
    pub steps: usize,
    /// Colour of each travelled link, in order
    pub colours: Vec<Colour>,
    pub transitions: Vec<ColourTransition<N>>,
}

impl<N> Route<N> {
    fn not_found(from: N, to: N) -> Self {
        Route {
            from,
            to,
            found: false,
            path: Vec::new(),
            steps: 0,
            colours: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

/// Fewest-hops route from `from` to `to`
///
/// An unknown endpoint or an unreachable target yields `found = false`.
pub fn shortest_route<N: StationName>(network: &Network<N>, from: &N, to: &N) -> Route<N> {
    let (Some(source), Some(target)) = (network.find_station(from), network.find_station(to)) else {
        debug!("Route {} -> {}: unknown station", from, to);
        return Route::not_found(from.clone(), to.clone());
    };

    let view = build_view(network);
    let Some(result) = bfs(&view, source, target) else {
        debug!("Route {} -> {}: unreachable", from, to);
        return Route::not_found(from.clone(), to.clone());
    };

    let path: Vec<N> = result
        .path
        .iter()
        .filter_map(|&idx| network.name_at(idx).cloned())
        .collect();
    let colours = leg_colours(network, &path);
    let transitions = colour_transitions(&path, &colours);
    debug!(
        "Route {} -> {}: {} steps, {} colour changes",
        from,
        to,
        result.hops(),
        transitions.len()
    );

    Route {
        from: from.clone(),
        to: to.clone(),
        found: true,
        steps: result.hops(),
        path,
        colours,
        transitions,
    }
}

/// Colour of the link between each consecutive pair, re-queried from the store
fn leg_colours<N: StationName>(network: &Network<N>, path: &[N]) -> Vec<Colour> {
    path.windows(2)
        .filter_map(|pair| network.link_colour(&pair[0], &pair[1]))
        .collect()
}

/// Walk the legs keeping a current colour, starting at the first leg's colour
fn colour_transitions<N: StationName>(path: &[N], colours: &[Colour]) -> Vec<ColourTransition<N>> {
    let mut transitions = Vec::new();
    let Some(&first) = colours.first() else {
        return transitions;
    };

    let mut current = first;
    for (station, &colour) in path.iter().zip(colours).skip(1) {
        if colour != current {
            transitions.push(ColourTransition {
                at: station.clone(),
                from: current,
                to: colour,
            });
            current = colour;
        }
    }
    transitions
}
