//! Stationgraph
//!
//! An undirected, colour-labelled network of stations with two queries:
//! the fewest-hops route between stations (with the line changes along the
//! way) and the critical stations whose removal splits the network.
//!
//! # Architecture
//!
//! - `network`: the graph store. Stations unique by name, coloured links kept
//!   as symmetric pairs, parallel links allowed when colours differ.
//! - `algo`: queries. Each query snapshots the store into a dense CSR view and
//!   runs the traversals from the `stationgraph-algorithms` crate.
//!
//! Queries borrow the network immutably, so it cannot change mid-traversal.
//!
//! ## Example Usage
//!
//! ```rust
//! use stationgraph::{Colour, Network};
//! use stationgraph::algo::{critical_stations, shortest_route};
//!
//! let mut network = Network::new();
//! for station in 1..=3u32 {
//!     network.insert_station(station);
//! }
//! network.insert_link(&1, &2, Colour::RED);
//! network.insert_link(&2, &3, Colour::BLUE);
//!
//! let route = shortest_route(&network, &1, &3);
//! assert_eq!(route.path, vec![1, 2, 3]);
//! assert_eq!(route.transitions[0].describe(), "from red to blue");
//!
//! assert_eq!(critical_stations(&network, &1).unwrap(), vec![2]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod network;

// Re-export main types for convenience
pub use algo::{ColourTransition, Route};
pub use network::{
    reference_network, Colour, Link, LinkInsert, Network, NetworkError, NetworkResult, Station,
    StationName,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
