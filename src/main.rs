//! Builds a canonical tree and prints its node and edge counts.
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use treegraph::{count_edges, count_nodes, make_binary_tree, make_chain, make_star, Node};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Chain,
    Star,
    Binary,
}

impl Shape {
    fn build(self, size: usize) -> Vec<Node> {
        match self {
            Shape::Chain => make_chain(size),
            Shape::Star => make_star(size),
            Shape::Binary => make_binary_tree(size),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shape of the generated tree
    #[arg(long, value_enum, default_value_t = Shape::Chain)]
    shape: Shape,

    /// Number of nodes
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Increase log verbosity (-v, -vv, -vvv); `RUST_LOG` takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!(shape = ?cli.shape, size = cli.size, "building tree");
    let nodes = cli.shape.build(cli.size);

    println!("nodes={} edges={}", count_nodes(&nodes), count_edges(&nodes));
}
