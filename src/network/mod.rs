//! Station network model
//!
//! This module implements the graph store:
//! - Stations unique by name, kept in insertion order
//! - Coloured links, always stored as symmetric pairs
//! - Parallel links between the same pair when their colours differ

pub mod sample;
pub mod station;
pub mod store;
pub mod types;

// Re-export main types
pub use sample::reference_network;
pub use station::{Link, Station};
pub use store::{LinkInsert, Network, NetworkError, NetworkResult};
pub use types::{Colour, StationName};
