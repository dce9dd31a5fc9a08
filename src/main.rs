use clap::Parser;
use dotwalk::{
    error::GraphError,
    fs::{parse_dot_file, write_dot_file, write_summary_file},
    graph::DotGraph,
    render::render_image,
    search::{Path as SearchPath, StrategyKind, search_with},
};
use serde::Serialize;
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Directed-graph traversal over DOT-style edge lists
#[derive(Parser, Debug)]
#[command(name = "dotwalk")]
#[command(about = "Search a directed graph with BFS, DFS, or random walks", long_about = None)]
struct Args {
    /// Path to a DOT-style edge list; omit to use a small built-in demo graph
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Source node label
    #[arg(short, long, default_value = "a")]
    source: String,

    /// Destination node label
    #[arg(short, long, default_value = "d")]
    dest: String,

    /// Traversal strategy: bfs, dfs, fully-random, random-unvisited, history-backtrack
    #[arg(long, default_value = "bfs")]
    strategy: String,

    /// Seed for the random-walk strategies; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the search result as JSON instead of the compact text form
    #[arg(long)]
    json: bool,

    /// Write the graph back out as a DOT file
    #[arg(long)]
    dot_out: Option<PathBuf>,

    /// Write a plain-text node/edge summary file
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Render the graph to an image via the external `dot` tool
    #[arg(long)]
    image_out: Option<PathBuf>,

    /// Image format handed to `dot -T` (png, svg, ...)
    #[arg(long, default_value = "png")]
    image_format: String,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    strategy: &'a str,
    source: &'a str,
    dest: &'a str,
    destination_reached: bool,
    path: Vec<String>,
}

fn demo_graph() -> DotGraph {
    let mut graph = DotGraph::new();
    graph.add_nodes(&["a", "b", "c", "d"]);
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "a");
    graph.add_edge("b", "d");
    graph
}

fn report(args: &Args, path: &SearchPath) -> Result<(), GraphError> {
    if args.json {
        let report = SearchReport {
            strategy: &args.strategy,
            source: &args.source,
            dest: &args.dest,
            destination_reached: path.destination_reached(),
            path: path.names(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        println!("{path}");
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), GraphError> {
    let graph = match &args.input {
        Some(path) => {
            println!("Parsing DOT file: {}", path.display());
            parse_dot_file(path)?
        }
        None => demo_graph(),
    };
    println!("{graph}");

    let kind: StrategyKind = args.strategy.parse()?;
    let path = search_with(&graph, &args.source, &args.dest, kind, args.seed)?;
    report(args, &path)?;

    if let Some(out) = &args.dot_out {
        write_dot_file(&graph, out)?;
        println!("Wrote DOT file: {}", out.display());
    }
    if let Some(out) = &args.summary_out {
        write_summary_file(&graph, out)?;
        println!("Wrote summary file: {}", out.display());
    }
    if let Some(out) = &args.image_out {
        render_image(&graph, out, &args.image_format)?;
        println!("Wrote image: {}", out.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
