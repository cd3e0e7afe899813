use stationgraph::algo::{critical_stations, shortest_route};
use stationgraph::reference_network;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Station the critical-station search starts from in the demo
const DEMO_ROOT: u32 = 14;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Stationgraph v{}", stationgraph::version());
    println!("==========================================");

    let network = reference_network();
    info!(
        "Loaded reference network: {} stations, {} links",
        network.station_count(),
        network.link_count()
    );

    println!("\n=== Fastest Route ===");
    let route = shortest_route(&network, &1, &2);
    if route.found {
        println!("Shortest distance from {} to {}:", route.from, route.to);
        for (i, station) in route.path.iter().enumerate() {
            print!("{}", station);
            if let Some(change) = route.transitions.iter().find(|t| &t.at == station) {
                print!("  (changed {})", change.describe());
            }
            println!("{}", if i + 1 < route.path.len() { " ->" } else { "" });
        }
        println!("{} steps total.", route.steps);
    } else {
        println!("No route from {} to {}", route.from, route.to);
    }

    println!("\n=== Critical Stations ===");
    let critical = critical_stations(&network, &DEMO_ROOT)?;
    let listed: Vec<String> = critical.iter().map(|s| s.to_string()).collect();
    println!("{}", listed.join(", "));

    println!("\nThere are {} edges total.", network.count_edges());
    Ok(())
}
