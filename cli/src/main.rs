//! Stationgraph CLI: command-line interface for the station network
//!
//! Builds a network in memory (the reference network unless `--empty`),
//! applies any `--station` / `--link` arguments, then runs one query or an
//! interactive shell.

mod shell;

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use shell::{LinkSpec, ShellCommand};
use stationgraph::algo::{all_critical_stations, connected_components, critical_stations, shortest_route};
use stationgraph::{reference_network, LinkInsert, Network, Route};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "stationgraph", version, about = "Stationgraph route planner CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log filter, e.g. "debug" or "stationgraph=trace"
    #[arg(long, default_value = "warn", global = true, env = "STATIONGRAPH_LOG")]
    log_level: String,

    /// Start from an empty network instead of the reference network
    #[arg(long, global = true)]
    empty: bool,

    /// Add a station (repeatable)
    #[arg(long = "station", global = true)]
    stations: Vec<u32>,

    /// Add a link as FROM:TO[:COLOUR] (repeatable)
    #[arg(long = "link", global = true)]
    links: Vec<LinkSpec>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fewest-hops route between two stations
    Route {
        from: u32,
        to: u32,
    },
    /// Critical stations (articulation points)
    Critical {
        /// Only consider stations reachable from this one
        #[arg(long)]
        root: Option<u32>,
    },
    /// Count directed edges
    Edges,
    /// List connected parts of the network
    Components,
    /// Start an interactive shell
    Shell,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut network = build_network(&cli);

    let result = match cli.command {
        Commands::Route { from, to } => run_route(&network, from, to, &cli.format),
        Commands::Critical { root } => run_critical(&network, root, &cli.format),
        Commands::Edges => run_edges(&network, &cli.format),
        Commands::Components => run_components(&network, &cli.format),
        Commands::Shell => run_shell(&mut network, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_network(cli: &Cli) -> Network<u32> {
    let mut network = if cli.empty {
        Network::new()
    } else {
        reference_network()
    };

    for &station in &cli.stations {
        network.insert_station(station);
    }
    for link in &cli.links {
        report_insert(link, network.insert_link(&link.from, &link.to, link.colour));
    }

    debug!(
        "Network ready: {} stations, {} edges",
        network.station_count(),
        network.count_edges()
    );
    network
}

fn report_insert(link: &LinkSpec, outcome: LinkInsert) {
    if !outcome.is_inserted() {
        warn!("Link {}-{} ({}) not added: {:?}", link.from, link.to, link.colour, outcome);
    }
}

fn run_route(network: &Network<u32>, from: u32, to: u32, format: &OutputFormat) -> CliResult {
    let route = shortest_route(network, &from, &to);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        OutputFormat::Table => {
            if !route.found {
                println!("No route from {} to {}", from, to);
                return Ok(());
            }

            println!("Shortest distance from {} to {}:", from, to);
            println!("{}", route_table(&route));
            println!("{} steps total.", route.steps);
        }
    }

    Ok(())
}

fn route_table(route: &Route<u32>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Station", "Next line", "Change"]);

    for (i, station) in route.path.iter().enumerate() {
        let line = route
            .colours
            .get(i)
            .map(|colour| colour.to_string())
            .unwrap_or_default();
        let change = route
            .transitions
            .iter()
            .find(|t| t.at == *station)
            .map(|t| format!("changed {}", t.describe()))
            .unwrap_or_default();
        table.add_row(vec![station.to_string(), line, change]);
    }
    table
}

fn run_critical(network: &Network<u32>, root: Option<u32>, format: &OutputFormat) -> CliResult {
    let critical = match root {
        Some(root) => critical_stations(network, &root)?,
        None => all_critical_stations(network),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&critical)?);
        }
        OutputFormat::Table => {
            println!("Critical Stations/Articulation Points");
            if critical.is_empty() {
                println!("(none)");
            } else {
                let listed: Vec<String> = critical.iter().map(|s| s.to_string()).collect();
                println!("{}", listed.join(", "));
            }
        }
    }

    Ok(())
}

fn run_edges(network: &Network<u32>, format: &OutputFormat) -> CliResult {
    let edges = network.count_edges();

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "stations": network.station_count(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("There are {} edges total.", edges);
        }
    }

    Ok(())
}

fn run_components(network: &Network<u32>, format: &OutputFormat) -> CliResult {
    let components = connected_components(network);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Size", "Stations"]);

            for (i, members) in components.iter().enumerate() {
                let listed: Vec<String> = members.iter().map(|s| s.to_string()).collect();
                table.add_row(vec![(i + 1).to_string(), members.len().to_string(), listed.join(", ")]);
            }

            println!("{}", table);
            println!("{} component(s)", components.len());
        }
    }

    Ok(())
}

fn run_shell(network: &mut Network<u32>, format: &OutputFormat) -> CliResult {
    println!("Stationgraph Interactive Shell");
    println!("Type a command, :help for the list, :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("stationgraph> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                print_help();
                Ok(())
            }
            ShellCommand::Route { from, to } => run_route(network, from, to, format),
            ShellCommand::Critical { root } => run_critical(network, root, format),
            ShellCommand::Edges => run_edges(network, format),
            ShellCommand::Components => run_components(network, format),
            ShellCommand::InsertStation(name) => {
                if !network.insert_station(name) {
                    println!("Station {} already exists", name);
                }
                Ok(())
            }
            ShellCommand::InsertLink(link) => {
                let outcome = network.insert_link(&link.from, &link.to, link.colour);
                report_insert(&link, outcome);
                run_edges(network, format)
            }
            ShellCommand::DeleteLink(link) => {
                if !network.delete_link(&link.from, &link.to, link.colour) {
                    println!("No link {}-{} with colour {}", link.from, link.to, link.colour);
                }
                run_edges(network, format)
            }
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    println!("Bye!");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  route FROM TO            (1) Fastest route");
    println!("  critical [ROOT]          (2) Critical stations");
    println!("  delete FROM TO COLOUR    (3) Delete link");
    println!("  insert FROM TO [COLOUR]  (4) Insert link");
    println!("  station NAME             Insert station");
    println!("  edges                    Count edges");
    println!("  components               Connected parts");
    println!("  :quit                    (0) Exit shell");
}
