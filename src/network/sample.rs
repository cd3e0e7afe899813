//! Reference network used by the demo binary, the CLI, tests and benchmarks
//!
//! Twenty stations on six coloured lines. Station 9 has no links, and the
//! blue link between 12 and 13 is added then removed again, leaving the red
//! one in place.

use super::store::Network;
use super::types::Colour;

/// (from, to, colour) for every link of the reference network
pub const REFERENCE_LINKS: &[(u32, u32, u32)] = &[
    (1, 3, 3),
    (1, 14, 3),
    (2, 11, 5),
    (2, 12, 5),
    (2, 17, 5),
    (2, 17, 3),
    (4, 6, 2),
    (5, 6, 4),
    (6, 7, 2),
    (6, 14, 4),
    (7, 12, 2),
    (7, 15, 2),
    (8, 10, 1),
    (8, 12, 1),
    (12, 13, 1),
    (12, 13, 2),
    (13, 14, 1),
    (14, 16, 1),
    (14, 17, 3),
    (14, 19, 6),
    (17, 18, 3),
    (19, 20, 6),
];

pub const REFERENCE_STATION_COUNT: u32 = 20;

/// Build the reference network
pub fn reference_network() -> Network<u32> {
    let mut network = Network::new();
    for name in 1..=REFERENCE_STATION_COUNT {
        network.insert_station(name);
    }
    for &(from, to, colour) in REFERENCE_LINKS {
        network.insert_link(&from, &to, colour);
    }
    network.delete_link(&12, &13, Colour::BLUE);
    network
}
