use std::path::PathBuf;

use algoscope::{
    Node, NumNodes,
    algo::{Algorithm, Category, SearchOutcome},
    bench::{Report, SortKey},
    config::Config,
    io::EdgeListRead,
    prelude::*,
    session::{RunOutcome, Session},
};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "algoscope", version, about = "Step through and benchmark classic algorithms")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all algorithms with category and complexity.
    List(ListArgs),
    /// Run one algorithm step by step.
    Run(RunArgs),
    /// Benchmark a category (sorting, searching, graph) or `all`.
    Bench(BenchArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Algorithm id or name, e.g. `bubble` or `dijkstra`.
    algorithm: Algorithm,

    /// Delay between steps in milliseconds (0..=2000).
    #[arg(long)]
    speed_ms: Option<u64>,

    /// Custom array as comma separated numbers, e.g. "5, 3, 8, 1".
    #[arg(long)]
    array: Option<String>,

    /// Value to search for.
    #[arg(long)]
    target: Option<f64>,

    /// Number of nodes of the ring demo graph.
    #[arg(long)]
    nodes: Option<NumNodes>,

    /// Start node of graph traversals.
    #[arg(long)]
    start: Option<Node>,

    /// Weighted edge list to use instead of the ring demo graph.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Seed for the random edge weights.
    #[arg(long)]
    seed: Option<u64>,

    /// Cancel the run after this many steps.
    #[arg(long)]
    max_steps: Option<usize>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every step as a JSON line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct BenchArgs {
    /// `sorting`, `searching`, `graph` or `all`.
    #[arg(default_value = "all")]
    category: String,

    /// Input size.
    #[arg(long)]
    size: Option<usize>,

    /// Value to search for.
    #[arg(long)]
    target: Option<i64>,

    /// Seed for the generated inputs.
    #[arg(long)]
    seed: Option<u64>,

    /// Order results by `time`, `comparisons` or `theoretical`.
    #[arg(long)]
    sort_by: Option<SortKey>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Run(args) => cmd_run(args),
        Command::Bench(args) => cmd_bench(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(Config::default()),
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    if args.json {
        let entries = Algorithm::ALL
            .iter()
            .map(|algo| {
                serde_json::json!({
                    "id": algo.id(),
                    "name": algo.name(),
                    "category": algo.category(),
                    "complexity": algo.complexity().label(),
                    "description": algo.description(),
                })
            })
            .collect_vec();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for algo in Algorithm::ALL {
        println!(
            "{:<10} {:<22} {:<10} {}",
            algo.id(),
            algo.name(),
            algo.category(),
            algo.complexity()
        );
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;

    let mut visualizer = config.visualizer;
    if let Some(speed_ms) = args.speed_ms {
        visualizer.speed_ms = speed_ms;
    }
    if let Some(nodes) = args.nodes {
        visualizer.ring_nodes = nodes;
        visualizer.start = visualizer.start.min(nodes.saturating_sub(1));
    }
    if args.seed.is_some() {
        visualizer.seed = args.seed;
    }

    let mut session = Session::new(visualizer).context("invalid viewer settings")?;
    session.select(args.algorithm);

    if let Some(text) = &args.array {
        session.apply_custom_input(text)?;
    }
    if let Some(target) = args.target {
        session.set_target(target)?;
    }
    if let Some(path) = &args.graph {
        let graph = AdjArray::try_read_edge_list_file(path)
            .with_context(|| format!("read edge list '{}'", path.display()))?;
        session.set_graph(graph)?;
    }
    if let Some(start) = args.start {
        session.set_start(start)?;
    }

    let runner = session.runner();
    let cancel = runner.cancel_flag();
    let max_steps = args.max_steps;
    let json = args.json;

    let mut printed = 0;
    let mut write_error = None;
    let run = session.run(&runner, |record| {
        if json {
            match serde_json::to_string(record) {
                Ok(line) => println!("{line}"),
                Err(e) => write_error = Some(e),
            }
        } else {
            println!(
                "{:>4}  {} | {}  (comparisons: {}, swaps: {})",
                record.index, record.description, record.detail, record.comparisons, record.swaps
            );
        }

        printed += 1;
        if max_steps.is_some_and(|max| printed >= max) {
            cancel.cancel();
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("serialize step");
    }

    if json {
        return Ok(());
    }

    let summary = &run.summary;
    println!(
        "{} after {} steps in {:.1} ms: {} comparisons, {} swaps",
        if summary.is_completed() {
            "Completed"
        } else {
            "Cancelled"
        },
        summary.steps,
        summary.elapsed.as_secs_f64() * 1000.0,
        summary.metrics.comparisons,
        summary.metrics.swaps
    );

    match run.outcome {
        RunOutcome::Array(values) => println!("Array: [{}]", values.iter().join(", ")),
        RunOutcome::Search(Some(SearchOutcome::Found(index))) => {
            println!("Found {} at index {index}", session.target())
        }
        RunOutcome::Search(Some(SearchOutcome::NotFound)) => {
            println!("{} not found", session.target())
        }
        RunOutcome::Search(None) => {}
        RunOutcome::Traversal {
            completed,
            distances,
        } => {
            println!("Order: {}", completed.iter().join(" -> "));
            if let Some(distances) = distances {
                let rendered = distances
                    .iter()
                    .enumerate()
                    .map(|(u, d)| match d {
                        Some(d) => format!("{u}:{d}"),
                        None => format!("{u}:inf"),
                    })
                    .join(" ");
                println!("Distances: {rendered}");
            }
        }
    }

    Ok(())
}

fn cmd_bench(args: BenchArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;

    let mut bench = config.benchmark;
    if let Some(size) = args.size {
        bench.size = size;
    }
    if let Some(target) = args.target {
        bench.target = target;
    }
    if args.seed.is_some() {
        bench.seed = args.seed;
    }
    if let Some(sort_by) = args.sort_by {
        bench.sort_by = sort_by;
    }
    bench.validate().context("invalid benchmark settings")?;

    let harness = bench.harness();
    let reports = if args.category.eq_ignore_ascii_case("all") {
        harness.run_all()?
    } else {
        let category: Category = args.category.parse()?;
        vec![harness.run(category)?]
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "== {} (n = {}, sorted by {}) ==",
        report.category, report.input_size, report.sort_key
    );
    println!(
        "{:>2}  {:<22} {:>10} {:>12} {:>10} {:<17} {:>14} {:>10}  ok",
        "#", "algorithm", "time (ms)", "comparisons", "swaps", "complexity", "theoretical", "ratio"
    );
    for (rank, result) in report.results.iter().enumerate() {
        let ratio = result
            .ratio
            .map_or_else(|| "-".to_string(), |r| format!("{r:.3e}"));
        println!(
            "{:>2}  {:<22} {:>10.3} {:>12} {:>10} {:<17} {:>14.1} {:>10}  {}",
            rank + 1,
            result.name,
            result.elapsed_ms,
            result.comparisons,
            result.swaps,
            result.complexity,
            result.theoretical,
            ratio,
            if result.correct { "yes" } else { "NO" }
        );
    }
    if let Some(leader) = report.leader() {
        println!("Leader: {}", leader.name);
    }
    println!();
}
