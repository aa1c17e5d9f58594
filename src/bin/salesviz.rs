use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use salesviz::{figure, loader, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "salesviz",
    version,
    about = "Load, aggregate & visualize auto-sales data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the interactive chart (and optionally save aggregates / print stats).
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input file (delimited, header row with COUNTRY, ORDERDATE, SALES,
    /// PRICEEACH, QUANTITYORDERED).
    #[arg(default_value = "Auto_Sales_data.csv")]
    input: PathBuf,
    /// Write the interactive chart to this HTML file.
    #[arg(long, default_value = "sales_chart.html")]
    out: PathBuf,
    /// Save aggregated rows to file (format inferred by --format or extension).
    #[arg(long)]
    data: Option<PathBuf>,
    /// Output format for --data (csv or json). If omitted, inferred from extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print the aggregated table to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let records = loader::load_records(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let rows = stats::aggregate(&records);

    if let Some(path) = args.data.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&rows, path)?,
            "json" => storage::save_json(&rows, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} aggregated rows to {}", rows.len(), path.display());
    }

    if args.stats {
        for r in &rows {
            println!(
                "{} {}  sales={:.2} avg_price={:.2} quantity={}",
                r.key.country,
                r.key.month.format("%Y-%m"),
                r.total_sales,
                r.avg_price,
                r.total_quantity
            );
        }
    }

    let fig = figure::compose(&rows);
    figure::html::render_html(&fig, &args.out)?;
    eprintln!(
        "Wrote chart with {} traces ({} countries) to {}",
        fig.traces.len(),
        fig.countries.len(),
        args.out.display()
    );
    Ok(())
}
