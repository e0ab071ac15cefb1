use std::env;
use std::process::ExitCode;

use kami_solver::{Graph, Search};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_BUDGET: usize = 6;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive("kami_solver=info".parse().unwrap())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let budget = match env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_BUDGET,
        Some(Ok(budget)) => budget,
        Some(Err(err)) => {
            error!(%err, "usage: solver [budget]");
            return ExitCode::FAILURE;
        }
    };

    // ten regions in a ring; six moves suffice, but not when repainting a single region every time
    let graph = Graph::builder()
        .with_node(1, "purple")
        .with_node(2, "yellow")
        .with_node(3, "red")
        .with_node(4, "yellow")
        .with_node(5, "green")
        .with_node(6, "purple")
        .with_node(7, "green")
        .with_node(8, "purple")
        .with_node(9, "red")
        .with_node(10, "maroon")
        .with_edges(1, [2, 10])
        .with_edge(2, 3)
        .with_edge(3, 4)
        .with_edge(4, 5)
        .with_edge(5, 6)
        .with_edge(6, 7)
        .with_edge(7, 8)
        .with_edge(8, 9)
        .with_edge(9, 10)
        .build()
        .unwrap();

    print!("{}\n\n", graph);

    match Search::new(&graph).go(budget) {
        Some(solution) => {
            info!(moves = solution.len(), "solved");
            for m in solution {
                println!("{}", m);
            }

            ExitCode::SUCCESS
        }
        None => {
            println!("no solution in {} moves", budget);
            ExitCode::FAILURE
        }
    }
}
