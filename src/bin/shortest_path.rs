use std::env;
use std::process;
use std::time::Instant;

use hybrid_sssp::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use hybrid_sssp::graph::Graph;
use hybrid_sssp::io::read_gr_file;
use hybrid_sssp::{Dijkstra, HybridConfig, HybridDijkstra, Result};

const SOURCE: usize = 1;
const DEFAULT_WORKERS: usize = 10;

fn report_path(result: &ShortestPathResult<i64>, target: usize) {
    match result.path_to(target) {
        Some(path) => {
            // distance() is Some whenever path_to() is
            println!("Distance: {}", result.distance(target).unwrap_or_default());
            let hops: Vec<String> = path.iter().map(usize::to_string).collect();
            println!("Path: {}", hops.join(" "));
        }
        None => println!("Node {} is unreachable from {}", target, SOURCE),
    }
}

fn run(filename: &str, target: usize, workers: usize) -> Result<()> {
    println!("Reading graph from {}...", filename);
    let graph = read_gr_file(filename)?;
    println!(
        "Loaded {} nodes, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let sequential = Dijkstra::new();
    let hybrid = HybridDijkstra::new(HybridConfig {
        workers,
        ..HybridConfig::default()
    })?;

    let start = Instant::now();
    let _seq_result = sequential.compute_shortest_paths(&graph, SOURCE)?;
    let seq_time = start.elapsed();

    let start = Instant::now();
    let hybrid_result = hybrid.compute_shortest_paths(&graph, SOURCE)?;
    let hybrid_time = start.elapsed();

    println!("\nPerformance Results:");
    println!("Sequential time: {} ms", seq_time.as_millis());
    println!(
        "Parallel ({} workers) time: {} ms",
        workers,
        hybrid_time.as_millis()
    );

    let speedup = if hybrid_time.as_secs_f64() > 0.0 {
        seq_time.as_secs_f64() / hybrid_time.as_secs_f64()
    } else {
        0.0
    };
    println!("Speedup: {:.2}x", speedup);
    println!("Efficiency: {:.2}", speedup / workers.max(1) as f64);

    println!("\nShortest Path from {} to {}:", SOURCE, target);
    report_path(&hybrid_result, target);

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <graph.gr> <target_node> [workers]", args[0]);
        process::exit(1);
    }

    let filename = &args[1];
    let target: usize = match args[2].parse() {
        Ok(t) => t,
        Err(_) => {
            eprintln!("Invalid target node: {}", args[2]);
            process::exit(1);
        }
    };
    let workers = match args.get(3).map(|w| w.parse()) {
        None => DEFAULT_WORKERS,
        Some(Ok(w)) => w,
        Some(Err(_)) => {
            eprintln!("Invalid worker count: {}", args[3]);
            process::exit(1);
        }
    };

    if let Err(err) = run(filename, target, workers) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
