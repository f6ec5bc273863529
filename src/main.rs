use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tree_perf_charts::chart::{self, ChartSpec};
use tree_perf_charts::units;

#[derive(Parser)]
#[command(name = "tree-perf-charts")]
#[command(about = "Render BST vs Treap benchmark comparison charts")]
struct Cli {
    /// Output directory for rendered charts
    #[arg(short, long, default_value = "graphs")]
    output: PathBuf,

    /// Save the chart without opening the image viewer
    #[arg(long, default_value = "false")]
    no_show: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insertion time chart: 4 sizes, 4 BST times (ms), 4 Treap times (ms)
    Insertion { values: Vec<String> },

    /// Deletion chart: 2 sizes, 2 BST times, 2 Treap times, 2 BST heights,
    /// 2 Treap heights, 2 rotation counts
    Deletion { values: Vec<String> },

    /// Like-update chart: BST/Treap single and multiple like times (μs),
    /// then total and bubble rotation counts
    Likes { values: Vec<String> },

    /// Query chart: 4 single-query times (μs), 4 k values, 4 BST and
    /// 4 Treap getMostRecent(k) times
    Queries { values: Vec<String> },

    /// Search chart: 2 BST times then 2 Treap times (μs)
    Search { values: Vec<String> },

    /// Single-source loading chart: source label, BST/Treap load times (s),
    /// BST/Treap tree heights
    Loading { values: Vec<String> },

    /// Multi-source loading chart: 4 post counts then 4 tree heights,
    /// ordered BST-CSV, Treap-CSV, BST-TGZ, Treap-TGZ
    FileLoading { values: Vec<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Decode and assemble first; a bad argument list must fail before any
    // filesystem write. All units share one failure path and exit status.
    let spec = build_spec(&cli.command)?;

    let path = chart::render(&spec, &cli.output)?;

    if !cli.no_show {
        show(&path)?;
    }

    Ok(())
}

fn build_spec(command: &Commands) -> Result<ChartSpec> {
    let spec = match command {
        Commands::Insertion { values } => units::insertion::build(values)?,
        Commands::Deletion { values } => units::deletion::build(values)?,
        Commands::Likes { values } => units::likes::build(values)?,
        Commands::Queries { values } => units::queries::build(values)?,
        Commands::Search { values } => units::search::build(values)?,
        Commands::Loading { values } => units::loading::build(values)?,
        Commands::FileLoading { values } => units::file_loading::build(values)?,
    };
    Ok(spec)
}

/// Open the rendered chart in the platform image viewer. Blocks while the
/// platform launcher runs.
fn show(path: &Path) -> Result<()> {
    println!("Opening {}...", path.display());
    open::that(path).with_context(|| format!("Failed to open {} in a viewer", path.display()))
}
