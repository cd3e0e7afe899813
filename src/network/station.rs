//! Station and link implementation
//!
//! A station owns its outgoing links. A link refers to its adjacent station by
//! the index the store assigned at insertion; stations are never removed, so
//! the index stays valid for the lifetime of the network.

use super::types::Colour;
use serde::{Deserialize, Serialize};

/// One direction of a coloured link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Index of the adjacent station in the store
    pub target: usize,

    /// Line colour of this link
    pub colour: Colour,
}

impl Link {
    pub fn new(target: usize, colour: Colour) -> Self {
        Link { target, colour }
    }

    /// Check if this link reaches a specific station
    pub fn reaches(&self, target: usize) -> bool {
        self.target == target
    }
}

/// A station in the network
///
/// Holds its adjacency sequence in insertion order. The station's name is the
/// key it is stored under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Station {
    links: Vec<Link>,
}

impl Station {
    pub fn new() -> Self {
        Station { links: Vec::new() }
    }

    /// Outgoing links in insertion order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of outgoing links, parallel links included
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// Position of the first link to `target`, any colour
    pub fn find_link(&self, target: usize) -> Option<usize> {
        self.links.iter().position(|link| link.reaches(target))
    }

    /// Position of the link to `target` with the given colour
    pub fn find_link_with_colour(&self, target: usize, colour: Colour) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.reaches(target) && link.colour == colour)
    }

    pub(crate) fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Remove the first link to `target` with the given colour
    pub(crate) fn remove_link(&mut self, target: usize, colour: Colour) -> Option<Link> {
        let pos = self.find_link_with_colour(target, colour)?;
        Some(self.links.remove(pos))
    }
}
