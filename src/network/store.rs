//! In-memory station network storage
//!
//! Stations live in an insertion-ordered map keyed by name, so lookup by name
//! is O(1) and the insertion index doubles as the dense index used by links
//! and by the algorithm views. Links are always inserted and removed in
//! symmetric pairs.

use super::station::{Link, Station};
use super::types::{Colour, StationName};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during network operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Station {0} not found")]
    StationNotFound(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Outcome of a link insertion
///
/// Only `Added` and `AddedParallel` change the network; the rest are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkInsert {
    /// First link between the pair
    Added,
    /// Another colour alongside existing links between the pair
    AddedParallel,
    /// A link of this colour already joins the pair
    DuplicateColour,
    /// One of the stations does not exist
    UnknownStation,
    /// Both ends name the same station
    SelfLink,
}

impl LinkInsert {
    pub fn is_inserted(&self) -> bool {
        matches!(self, LinkInsert::Added | LinkInsert::AddedParallel)
    }
}

/// Undirected, colour-labelled station network
///
/// - stations: name -> Station, insertion order preserved
/// - each Station holds its adjacency sequence; every link A->B of colour c
///   is mirrored by B->A of colour c
#[derive(Debug, Clone)]
pub struct Network<N: StationName> {
    stations: IndexMap<N, Station>,
}

impl<N: StationName> Default for Network<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: StationName> Network<N> {
    /// Create a new empty network
    pub fn new() -> Self {
        Network {
            stations: IndexMap::new(),
        }
    }

    /// Add a station. Returns `false` (and changes nothing) if the name exists.
    pub fn insert_station(&mut self, name: N) -> bool {
        if self.stations.contains_key(&name) {
            debug!("Station {} already exists, ignoring", name);
            return false;
        }
        debug!("Inserted station {}", name);
        self.stations.insert(name, Station::new());
        true
    }

    /// Index of a station by name
    pub fn find_station(&self, name: &N) -> Option<usize> {
        self.stations.get_index_of(name)
    }

    /// Like `find_station`, for callers that treat a missing station as an error
    pub fn require_station(&self, name: &N) -> NetworkResult<usize> {
        self.find_station(name)
            .ok_or_else(|| NetworkError::StationNotFound(name.to_string()))
    }

    /// Get a station by name
    pub fn station(&self, name: &N) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Name of the station at a given index
    pub fn name_at(&self, idx: usize) -> Option<&N> {
        self.stations.get_index(idx).map(|(name, _)| name)
    }

    /// Station at a given index
    pub fn station_at(&self, idx: usize) -> Option<&Station> {
        self.stations.get_index(idx).map(|(_, station)| station)
    }

    pub fn contains_station(&self, name: &N) -> bool {
        self.stations.contains_key(name)
    }

    /// Station names in insertion order
    pub fn stations(&self) -> impl Iterator<Item = &N> + '_ {
        self.stations.keys()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Join two stations with a link of the given colour, in both directions
    ///
    /// A pair may be joined by several links as long as their colours differ.
    pub fn insert_link(&mut self, from: &N, to: &N, colour: impl Into<Colour>) -> LinkInsert {
        let colour = colour.into();
        let (Some(i), Some(j)) = (self.find_station(from), self.find_station(to)) else {
            debug!("Link {}-{} ignored: unknown station", from, to);
            return LinkInsert::UnknownStation;
        };
        if i == j {
            debug!("Link {}-{} ignored: self link", from, to);
            return LinkInsert::SelfLink;
        }

        let (duplicate, parallel) = match self.station_at(i) {
            Some(station) => (
                station.find_link_with_colour(j, colour).is_some(),
                station.find_link(j).is_some(),
            ),
            None => return LinkInsert::UnknownStation,
        };
        if duplicate {
            debug!("Link {}-{} ({}) already exists", from, to, colour.as_u32());
            return LinkInsert::DuplicateColour;
        }

        for (at, other) in [(i, j), (j, i)] {
            if let Some((_, station)) = self.stations.get_index_mut(at) {
                station.push_link(Link::new(other, colour));
            }
        }
        debug!("Inserted link {}-{} ({})", from, to, colour.as_u32());

        if parallel {
            LinkInsert::AddedParallel
        } else {
            LinkInsert::Added
        }
    }

    /// Join two stations with an unset-colour link
    pub fn insert_default_link(&mut self, from: &N, to: &N) -> LinkInsert {
        self.insert_link(from, to, Colour::UNSET)
    }

    /// Remove the link of the given colour between two stations, both directions
    ///
    /// Returns `false` if no such link exists.
    pub fn delete_link(&mut self, from: &N, to: &N, colour: impl Into<Colour>) -> bool {
        let colour = colour.into();
        let (Some(i), Some(j)) = (self.find_station(from), self.find_station(to)) else {
            debug!("Delete {}-{} ignored: unknown station", from, to);
            return false;
        };
        if !self.has_link_between(i, j, colour) {
            debug!("Delete {}-{} ({}) ignored: no such link", from, to, colour.as_u32());
            return false;
        }

        for (at, other) in [(i, j), (j, i)] {
            if let Some((_, station)) = self.stations.get_index_mut(at) {
                station.remove_link(other, colour);
            }
        }
        debug!("Deleted link {}-{} ({})", from, to, colour.as_u32());
        true
    }

    fn has_link_between(&self, i: usize, j: usize, colour: Colour) -> bool {
        self.station_at(i)
            .and_then(|station| station.find_link_with_colour(j, colour))
            .is_some()
    }

    /// Check for a link of a specific colour from one station to another
    pub fn has_link(&self, from: &N, to: &N, colour: impl Into<Colour>) -> bool {
        match (self.find_station(from), self.find_station(to)) {
            (Some(i), Some(j)) => self.has_link_between(i, j, colour.into()),
            _ => false,
        }
    }

    /// Colour of the first link (in adjacency order) from `from` to `to`
    pub fn link_colour(&self, from: &N, to: &N) -> Option<Colour> {
        let j = self.find_station(to)?;
        let station = self.station(from)?;
        station.find_link(j).map(|pos| station.links()[pos].colour)
    }

    /// Outgoing links of a station
    pub fn links(&self, name: &N) -> Option<&[Link]> {
        self.station(name).map(Station::links)
    }

    /// Adjacent station names in adjacency order (parallel links repeat a name)
    pub fn neighbours(&self, name: &N) -> Option<Vec<&N>> {
        let station = self.station(name)?;
        Some(
            station
                .links()
                .iter()
                .filter_map(|link| self.name_at(link.target))
                .collect(),
        )
    }

    pub fn degree(&self, name: &N) -> Option<usize> {
        self.station(name).map(Station::degree)
    }

    /// Directed edge count: every link is counted once per direction
    pub fn count_edges(&self) -> usize {
        self.stations.values().map(Station::degree).sum()
    }

    /// Number of undirected links (parallel links counted separately)
    pub fn link_count(&self) -> usize {
        self.count_edges() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with(stations: &[u32]) -> Network<u32> {
        let mut network = Network::new();
        for &s in stations {
            network.insert_station(s);
        }
        network
    }

    #[test]
    fn test_insert_station_is_idempotent() {
        let mut network = Network::new();
        assert!(network.insert_station(1));
        assert!(!network.insert_station(1));

        assert_eq!(network.station_count(), 1);
        assert_eq!(network.count_edges(), 0);
        assert_eq!(network.find_station(&1), Some(0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let network = network_with(&[5, 1, 3]);
        let names: Vec<_> = network.stations().copied().collect();
        assert_eq!(names, vec![5, 1, 3]);
        assert_eq!(network.name_at(2), Some(&3));
        assert_eq!(network.find_station(&7), None);
    }

    #[test]
    fn test_link_is_symmetric() {
        let mut network = network_with(&[1, 2]);

        assert_eq!(network.insert_link(&1, &2, 3u32), LinkInsert::Added);
        assert!(network.has_link(&1, &2, 3u32));
        assert!(network.has_link(&2, &1, 3u32));
        assert!(!network.has_link(&2, &1, 1u32));
        assert_eq!(network.count_edges(), 2);
        assert_eq!(network.link_count(), 1);
    }

    #[test]
    fn test_parallel_colours_coexist() {
        let mut network = network_with(&[1, 2]);

        assert_eq!(network.insert_link(&1, &2, 1u32), LinkInsert::Added);
        assert_eq!(network.insert_link(&1, &2, 2u32), LinkInsert::AddedParallel);
        assert_eq!(network.count_edges(), 4);
        assert_eq!(network.neighbours(&1).unwrap(), vec![&2, &2]);
    }

    #[test]
    fn test_duplicate_colour_rejected() {
        let mut network = network_with(&[1, 2]);

        network.insert_link(&1, &2, 1u32);
        assert_eq!(network.insert_link(&1, &2, 1u32), LinkInsert::DuplicateColour);
        assert_eq!(network.insert_link(&2, &1, 1u32), LinkInsert::DuplicateColour);
        assert_eq!(network.count_edges(), 2);
    }

    #[test]
    fn test_duplicate_check_uses_colour_not_position() {
        // Stations inserted after the pair must not influence the check.
        let mut network = network_with(&[1, 2, 3, 4, 5, 6]);

        network.insert_link(&6, &1, 2u32);
        assert_eq!(network.insert_link(&6, &1, 5u32), LinkInsert::AddedParallel);
        assert_eq!(network.insert_link(&1, &6, 2u32), LinkInsert::DuplicateColour);
        assert_eq!(network.degree(&6), Some(2));
    }

    #[test]
    fn test_link_to_unknown_station_is_noop() {
        let mut network = network_with(&[1]);

        assert_eq!(network.insert_link(&1, &9, 1u32), LinkInsert::UnknownStation);
        assert_eq!(network.insert_link(&9, &1, 1u32), LinkInsert::UnknownStation);
        assert!(!network.insert_link(&1, &9, 1u32).is_inserted());
        assert_eq!(network.count_edges(), 0);
    }

    #[test]
    fn test_self_link_is_noop() {
        let mut network = network_with(&[1]);
        assert_eq!(network.insert_link(&1, &1, 1u32), LinkInsert::SelfLink);
        assert_eq!(network.count_edges(), 0);
    }

    #[test]
    fn test_default_colour() {
        let mut network = network_with(&[1, 2]);
        network.insert_default_link(&1, &2);
        assert_eq!(network.link_colour(&2, &1), Some(Colour::UNSET));
    }

    #[test]
    fn test_delete_link_removes_one_colour_both_sides() {
        let mut network = network_with(&[1, 2, 3]);
        network.insert_link(&1, &2, 1u32);
        network.insert_link(&1, &2, 2u32);
        network.insert_link(&1, &3, 2u32);

        assert!(network.delete_link(&2, &1, 2u32));

        assert!(network.has_link(&1, &2, 1u32));
        assert!(network.has_link(&2, &1, 1u32));
        assert!(!network.has_link(&1, &2, 2u32));
        assert!(!network.has_link(&2, &1, 2u32));
        // Same colour to another station is untouched
        assert!(network.has_link(&1, &3, 2u32));
        assert_eq!(network.count_edges(), 4);
    }

    #[test]
    fn test_delete_missing_link_is_noop() {
        let mut network = network_with(&[1, 2]);
        network.insert_link(&1, &2, 1u32);

        assert!(!network.delete_link(&1, &2, 4u32));
        assert!(!network.delete_link(&1, &7, 1u32));
        assert_eq!(network.count_edges(), 2);
    }

    #[test]
    fn test_link_colour_uses_first_link() {
        let mut network = network_with(&[1, 2]);
        network.insert_link(&1, &2, 5u32);
        network.insert_link(&1, &2, 3u32);

        assert_eq!(network.link_colour(&1, &2), Some(Colour::BROWN));
        network.delete_link(&1, &2, 5u32);
        assert_eq!(network.link_colour(&2, &1), Some(Colour::GREEN));
        assert_eq!(network.link_colour(&1, &9), None);
    }

    #[test]
    fn test_require_station() {
        let network = network_with(&[1]);
        assert_eq!(network.require_station(&1), Ok(0));
        assert_eq!(
            network.require_station(&4),
            Err(NetworkError::StationNotFound("4".to_string()))
        );
    }

    #[test]
    fn test_string_names() {
        let mut network: Network<String> = Network::new();
        network.insert_station("Central".to_string());
        network.insert_station("Harbour".to_string());

        let outcome = network.insert_link(&"Central".to_string(), &"Harbour".to_string(), Colour::RED);
        assert_eq!(outcome, LinkInsert::Added);
        assert_eq!(network.links(&"Harbour".to_string()).unwrap()[0], Link::new(0, Colour::RED));
    }
}
