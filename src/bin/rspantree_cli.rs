//! rspantree CLI: minimum spanning tree and tie report for a weight matrix
//!
//! Usage: rspantree_cli <matrix_file> [--json]
//! Input:  one matrix row per line, weights separated by spaces or commas, 0 = no edge
//! Stdout: the chosen edges, total cost, number of trees and tied alternatives

use env_logger::Env;
use rspantree::SpanningTreeSolver;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let paths: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    if paths.len() != 1 || args.len() != paths.len() + usize::from(json) {
        eprintln!("Usage: rspantree_cli <matrix_file> [--json]");
        std::process::exit(1);
    }

    let text = std::fs::read_to_string(paths[0])
        .unwrap_or_else(|e| { eprintln!("Failed to read matrix file: {e}"); std::process::exit(1); });

    let solution = SpanningTreeSolver::from_text(&text)
        .and_then(|solver| solver.solve())
        .unwrap_or_else(|e| { eprintln!("Failed to solve: {e}"); std::process::exit(1); });

    if json {
        print_json(&solution);
    } else {
        println!("{solution}");
    }
}

#[cfg(feature = "json")]
fn print_json(solution: &rspantree::Solution) {
    match serde_json::to_string_pretty(solution) {
        Ok(s) => println!("{s}"),
        Err(e) => { eprintln!("Failed to encode JSON: {e}"); std::process::exit(1); }
    }
}

#[cfg(not(feature = "json"))]
fn print_json(_solution: &rspantree::Solution) {
    eprintln!("--json requires building with the `json` feature");
    std::process::exit(1);
}
