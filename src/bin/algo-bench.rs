use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use algo_bench::benchmark::{
    AlgorithmKind, BenchmarkConfig, BenchmarkRunner, CsvResultSink, DEFAULT_CSV_PATH,
    print_benchmark_summary, print_growth_analysis,
};
use algo_bench::rand::bench_rng;
use algo_bench::{BenchError, Graph, Result, ShortestPaths, bellman_ford, dijkstra};

#[derive(Parser)]
#[command(
    name = "algo-bench",
    version,
    about = "Times classic algorithms over fixed input sizes and appends the means to a CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run benchmarks and append one CSV row per input size
    Run(RunArgs),
    /// List the available benchmarks with their default sizes and repeat counts
    List,
    /// Single-source shortest paths over an edge-list file
    Graph(GraphArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Algorithm to benchmark; repeat to select several (default: all)
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<AlgorithmKind>,

    /// Comma-separated input sizes, replacing each algorithm's defaults
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Trials averaged per input size, replacing each algorithm's default
    #[arg(short, long)]
    runs: Option<usize>,

    /// CSV file results are appended to
    #[arg(short, long, default_value = DEFAULT_CSV_PATH)]
    output: PathBuf,

    /// Seed for input generation (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Check the output of the first trial of every size
    #[arg(short, long)]
    verify: bool,

    /// Print a summary table and growth factors at the end
    #[arg(long)]
    summary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphAlgorithm {
    Dijkstra,
    BellmanFord,
}

#[derive(Args)]
struct GraphArgs {
    /// Edge-list file: "m" or "n m" on the first line, then "from to weight" lines
    #[arg(short, long)]
    file: PathBuf,

    #[arg(short, long, value_enum, default_value = "dijkstra")]
    algorithm: GraphAlgorithm,

    /// Source node label
    #[arg(long)]
    from: String,

    /// Target node label; without it every node is reported
    #[arg(long)]
    to: Option<String>,

    /// Treat each line as a one-way edge instead of adding both directions
    #[arg(long)]
    directed: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Run(args) => run_benchmarks(args),
        Command::List => {
            list_benchmarks();
            Ok(())
        }
        Command::Graph(args) => run_graph(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_benchmarks(args: RunArgs) -> Result<()> {
    let kinds = if args.algorithms.is_empty() {
        AlgorithmKind::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    // Validate every configuration before anything is timed or written.
    let configs = kinds
        .iter()
        .map(|&kind| -> Result<(AlgorithmKind, BenchmarkConfig)> {
            let config = build_config(kind, &args);
            config.validate()?;
            Ok((kind, config))
        })
        .collect::<Result<Vec<_>>>()?;

    let sink = CsvResultSink::open(&args.output)?;
    log::info!("appending results to {:?}", sink.path());

    let mut runner = BenchmarkRunner::new(bench_rng(args.seed), sink, io::stdout());
    let mut all_results = Vec::new();
    for (kind, config) in &configs {
        let results = kind.run(&mut runner, config)?;
        println!("\nResults appended to {}\n", args.output.display());
        all_results.extend(results);
    }

    if args.summary {
        print_benchmark_summary(&all_results);
        print_growth_analysis(&all_results);
    }
    Ok(())
}

fn build_config(kind: AlgorithmKind, args: &RunArgs) -> BenchmarkConfig {
    let mut config = kind.default_config().with_verify(args.verify);
    if let Some(sizes) = &args.sizes {
        config.sizes = sizes.clone();
    }
    if let Some(runs) = args.runs {
        config.repeat_count = runs;
    }
    config
}

fn list_benchmarks() {
    println!(
        "{:<20} {:<20} {:<32} {:>5}  {}",
        "Name", "CSV label", "Display name", "Runs", "Sizes"
    );
    println!("{}", "-".repeat(110));
    for kind in AlgorithmKind::ALL {
        let name = kind
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        let sizes = kind
            .default_sizes()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<20} {:<20} {:<32} {:>5}  {}",
            name,
            kind.label(),
            kind.display_name(),
            kind.default_repeat_count(),
            sizes
        );
    }
}

fn run_graph(args: GraphArgs) -> Result<()> {
    let graph = Graph::from_file(&args.file, args.directed)?;
    let from = graph.node_index(&args.from)?;
    let to = args.to.as_deref().map(|t| graph.node_index(t)).transpose()?;

    let paths = match args.algorithm {
        GraphAlgorithm::Dijkstra => dijkstra(&graph, from)?,
        GraphAlgorithm::BellmanFord => match bellman_ford(&graph, from) {
            Ok(paths) => {
                println!("Doesn't contain a negative cycle");
                paths
            }
            Err(BenchError::NegativeCycle(_)) => {
                println!("Contains a negative cycle");
                return Ok(());
            }
            Err(e) => return Err(e),
        },
    };

    match to {
        Some(to) => print_path(&graph, &paths, to),
        None => {
            for node in 0..graph.node_count() {
                print_path(&graph, &paths, node);
            }
        }
    }
    Ok(())
}

fn print_path(graph: &Graph, paths: &ShortestPaths, to: usize) {
    let source = graph.label(paths.source);
    let target = graph.label(to);
    match (paths.distance(to), paths.path_to(to)) {
        (Some(cost), Some(path)) => {
            println!("Minimum cost from {} to {} = {}", source, target, cost);
            println!("Path: {}", graph.format_path(&path));
        }
        _ => println!("No path found from {} to {}", source, target),
    }
}
