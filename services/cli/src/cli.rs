use crate::demo::{run_demo, DemoArgs};
use crate::infra::{bootstrap, load_suppliers, parse_weights, warn_on_unbalanced_weights};
use crate::report::{self, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use supplier_radar::error::AppError;
use supplier_radar::workflows::comparison::{ColorAssigner, RadarChartView, WeightSet};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Radar",
    about = "Compare fabric suppliers within material categories and recommend the best fit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one radar chart per material category
    Charts(ChartsArgs),
    /// Rank suppliers per category against weighted priorities
    Compare(CompareArgs),
    /// Show the best supplier of a single category
    Recommend(RecommendArgs),
    /// Compare a built-in sample cohort (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ChartsArgs {
    /// Supplier file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Supplier file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Restrict the ranking to one category, by label (`cotton`) or chart title
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Weights as impact,traceability,price,lead_time,moq
    #[arg(long, value_parser = parse_weights, default_value = "20,20,20,20,20")]
    pub(crate) weights: WeightSet,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Supplier file (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Category to recommend within, by label or chart title
    #[arg(long)]
    pub(crate) category: String,
    /// Weights as impact,traceability,price,lead_time,moq
    #[arg(long, value_parser = parse_weights, default_value = "20,20,20,20,20")]
    pub(crate) weights: WeightSet,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Charts(args) => run_charts(args),
        Command::Compare(args) => run_compare(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_charts(args: ChartsArgs) -> Result<(), AppError> {
    let service = bootstrap()?;
    let suppliers = load_suppliers(&args.input)?;

    let scores = service.score_all(&suppliers);
    let mut colors = ColorAssigner::new();
    let charts: Vec<RadarChartView> = scores
        .iter()
        .filter_map(|category| RadarChartView::build(category, &mut colors))
        .collect();
    info!(charts = charts.len(), "built radar charts");

    let mut out = std::io::stdout().lock();
    match args.format {
        OutputFormat::Csv => report::write_scores(&mut out, &scores)?,
        format => report::render_charts(&mut out, &charts, format)?,
    }
    out.flush()?;
    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let service = bootstrap()?;
    let suppliers = load_suppliers(&args.input)?;
    warn_on_unbalanced_weights(&args.weights);

    let recommendations = match args.category.as_deref() {
        Some(requested) => service
            .compare_category(&suppliers, requested, &args.weights)
            .into_iter()
            .collect(),
        None => service.compare_all(&suppliers, &args.weights),
    };

    let mut out = std::io::stdout().lock();
    if recommendations.is_empty() && args.format == OutputFormat::Text {
        report::render_no_suppliers(&mut out, args.category.as_deref())?;
    } else {
        report::render_recommendations(&mut out, &recommendations, args.format)?;
    }
    out.flush()?;
    Ok(())
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = bootstrap()?;
    let suppliers = load_suppliers(&args.input)?;
    warn_on_unbalanced_weights(&args.weights);

    let mut out = std::io::stdout().lock();
    match service.compare_category(&suppliers, &args.category, &args.weights) {
        Some(recommendation) => report::render_top(&mut out, &recommendation)?,
        None => report::render_no_suppliers(&mut out, Some(&args.category))?,
    }
    out.flush()?;
    Ok(())
}
