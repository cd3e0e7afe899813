//! End-to-end checks on the public API
//!
//! Exercises the graph store, the route finder and the critical station
//! detector together, on small hand-built networks and on the reference
//! network.

use stationgraph::algo::*;
use stationgraph::*;

fn stations(names: &[u32]) -> Network<u32> {
    let mut network = Network::new();
    for &name in names {
        network.insert_station(name);
    }
    network
}

#[test]
fn test_link_lifecycle() {
    let mut network = stations(&[1, 2, 3]);

    // Every successful insertion adds exactly two directed edges
    let mut expected = 0;
    for (a, b, colour) in [(1, 2, 1u32), (2, 3, 1), (1, 2, 2), (1, 2, 1), (3, 1, 4)] {
        let before = network.count_edges();
        let outcome = network.insert_link(&a, &b, colour);
        if outcome.is_inserted() {
            expected += 2;
            assert!(network.has_link(&b, &a, colour));
        }
        assert_eq!(network.count_edges(), expected, "after {:?}", (a, b, colour));
        assert!(network.count_edges() >= before);
    }
    assert_eq!(network.count_edges(), 8);

    // Deletion removes exactly that colour in both directions
    assert!(network.delete_link(&2, &1, 2u32));
    assert!(network.has_link(&1, &2, 1u32));
    assert!(!network.has_link(&2, &1, 2u32));
    assert_eq!(network.count_edges(), 6);

    assert!(!network.delete_link(&2, &1, 2u32));
    assert_eq!(network.count_edges(), 6);
}

#[test]
fn test_isolating_a_station_makes_it_unreachable() {
    let mut network = stations(&[1, 2, 3, 4]);
    network.insert_link(&1, &2, Colour::RED);
    network.insert_link(&2, &3, Colour::RED);
    network.insert_link(&2, &3, Colour::GREEN);
    network.insert_link(&3, &4, Colour::RED);

    assert!(shortest_route(&network, &1, &3).found);

    // Remove every link touching 3
    let incident: Vec<(u32, Colour)> = network
        .links(&3)
        .unwrap()
        .iter()
        .map(|link| (*network.name_at(link.target).unwrap(), link.colour))
        .collect();
    for (other, colour) in incident {
        assert!(network.delete_link(&3, &other, colour));
    }

    assert_eq!(network.degree(&3), Some(0));
    assert!(!shortest_route(&network, &1, &3).found);
    assert!(!shortest_route(&network, &3, &4).found);
    assert!(shortest_route(&network, &3, &3).found);
}

#[test]
fn test_reference_route() {
    let network = reference_network();

    let route = shortest_route(&network, &1, &2);
    assert!(route.found);
    assert_eq!(route.path, vec![1, 14, 17, 2]);
    assert_eq!(route.steps, 3);
    assert_eq!(route.colours, vec![Colour::GREEN, Colour::GREEN, Colour::BROWN]);
    assert_eq!(route.transitions.len(), 1);
    assert_eq!(route.transitions[0].at, 17);
    assert_eq!(route.transitions[0].describe(), "from green to brown");
}

#[test]
fn test_reference_route_to_isolated_station() {
    let network = reference_network();
    let route = shortest_route(&network, &1, &9);
    assert!(!route.found);
    assert_eq!(route.steps, 0);
}

#[test]
fn test_reference_critical_stations() {
    let network = reference_network();
    let expected = vec![1, 2, 6, 7, 8, 12, 14, 17, 19];

    assert_eq!(critical_stations(&network, &14).unwrap(), expected);
    assert_eq!(critical_stations(&network, &1).unwrap(), expected);
    assert_eq!(critical_stations(&network, &20).unwrap(), expected);
    assert!(critical_stations(&network, &9).unwrap().is_empty());
    assert_eq!(all_critical_stations(&network), expected);
    assert!(critical_stations(&network, &21).is_err());
}

#[test]
fn test_reference_components() {
    let network = reference_network();
    let components = connected_components(&network);

    assert_eq!(components.len(), 2);
    assert_eq!(components[0].len(), 19);
    assert_eq!(components[1], vec![9]);
}

#[test]
fn test_deleting_bridge_changes_critical_stations() {
    let mut network = reference_network();

    // 19-20 hangs off 14; dropping it leaves 19 as a leaf
    assert!(network.delete_link(&19, &20, Colour::PURPLE));
    let critical = critical_stations(&network, &14).unwrap();
    assert!(!critical.contains(&19));
    assert!(critical.contains(&14));
}
