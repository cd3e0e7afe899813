//! Core type definitions for the station network

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Anything usable as a station identity: totally ordered, hashable, printable.
pub trait StationName: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> StationName for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Colour tag carried by a link
///
/// 0 means unset; 1 to 6 are the named line colours. Other values are kept
/// as-is and shown as "unrecognized colour".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Default)]
pub struct Colour(pub u32);

impl Colour {
    pub const UNSET: Colour = Colour(0);
    pub const RED: Colour = Colour(1);
    pub const BLUE: Colour = Colour(2);
    pub const GREEN: Colour = Colour(3);
    pub const ORANGE: Colour = Colour(4);
    pub const BROWN: Colour = Colour(5);
    pub const PURPLE: Colour = Colour(6);

    pub fn new(tag: u32) -> Self {
        Colour(tag)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Human-readable name used in route narratives
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "red",
            2 => "blue",
            3 => "green",
            4 => "orange",
            5 => "brown",
            6 => "purple",
            _ => "unrecognized colour",
        }
    }

    pub fn is_named(&self) -> bool {
        (1..=6).contains(&self.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<u32> for Colour {
    fn from(tag: u32) -> Self {
        Colour(tag)
    }
}
