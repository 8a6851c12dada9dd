//! Surfrank CLI — ranks the nodes of a graph file with the random surfer
//! and/or PageRank engines.

use anyhow::Context;
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use surfrank::{load_graph, run_ranking, Engine, PageRankReport, RankConfig, RankingReport, SurferReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "surfrank", version, about = "Rank graph nodes by random surfing and PageRank")]
struct Cli {
    /// Graph file: node count on the first line, then `from to` pairs
    graph: PathBuf,

    /// Engines to run
    #[arg(long, default_value = "both")]
    engine: EngineArg,

    /// YAML config file
    #[arg(long, env = "SURFRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Rows printed per engine
    #[arg(long)]
    top_k: Option<usize>,

    /// Random surfer walk length
    #[arg(long)]
    surfer_iterations: Option<usize>,

    /// PageRank power iterations
    #[arg(long)]
    pagerank_iterations: Option<usize>,

    /// Probability of jumping to a random node
    #[arg(long)]
    jump_probability: Option<f64>,

    /// Seed for a reproducible random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EngineArg {
    Surfer,
    Pagerank,
    Both,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Surfer => Engine::RandomSurfer,
            EngineArg::Pagerank => Engine::PageRank,
            EngineArg::Both => Engine::Both,
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = build_config(cli)?;
    let graph = load_graph(&cli.graph)
        .with_context(|| format!("failed to load graph from {}", cli.graph.display()))?;

    let report = run_ranking(&graph, &config, cli.engine.into())?;
    print_report(&report, &cli.format)
}

fn build_config(cli: &Cli) -> anyhow::Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RankConfig::default(),
    };

    if let Some(top_k) = cli.top_k {
        config.top_k = top_k;
    }
    if let Some(iterations) = cli.surfer_iterations {
        config.surfer.iterations = iterations;
    }
    if let Some(iterations) = cli.pagerank_iterations {
        config.pagerank.iterations = iterations;
    }
    if let Some(m) = cli.jump_probability {
        config.jump_probability = m;
    }
    if cli.seed.is_some() {
        config.surfer.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn print_report(report: &RankingReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Csv => {
            println!("engine,rank,node,visits,score");
            if let Some(surfer) = &report.random_surfer {
                for row in &surfer.rankings {
                    println!("random_surfer,{},{},{},", row.rank, row.node, row.visits);
                }
            }
            if let Some(pagerank) = &report.pagerank {
                for row in &pagerank.rankings {
                    println!("pagerank,{},{},,{}", row.rank, row.node, row.score);
                }
            }
        }
        OutputFormat::Table => {
            println!("Graph: {} nodes, {} edges", report.nodes, report.edges);
            if let Some(surfer) = &report.random_surfer {
                print_surfer_table(surfer);
            }
            if let Some(pagerank) = &report.pagerank {
                print_pagerank_table(pagerank);
            }
        }
    }

    Ok(())
}

fn print_surfer_table(report: &SurferReport) {
    println!(
        "\nRandomSurfer top {} rankings after {} iterations ({} ms)",
        report.rankings.len(),
        report.iterations,
        report.elapsed_ms
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Node", "Visited times"]);
    for row in &report.rankings {
        table.add_row(vec![row.rank.to_string(), row.node.to_string(), row.visits.to_string()]);
    }
    println!("{}", table);
}

fn print_pagerank_table(report: &PageRankReport) {
    println!(
        "\nPageRank top {} rankings after {} iterations ({} ms)",
        report.rankings.len(),
        report.iterations,
        report.elapsed_ms
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Node", "Score"]);
    for row in &report.rankings {
        table.add_row(vec![row.rank.to_string(), row.node.to_string(), format!("{:.6}", row.score)]);
    }
    println!("{}", table);
}
