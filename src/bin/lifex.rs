use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lifex_rs::models::OBSERVATION_YEARS;
use lifex_rs::{Analyzer, stats, storage};
use log::info;
use num_format::{Locale, ToFormattedString};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "lifex",
    version,
    about = "Load, query & summarize country life-expectancy data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full report (and optionally regional stats and an export).
    Report(ReportArgs),
    /// Print all country names in file order.
    List(ListArgs),
    /// Print the countries in a region.
    Region(RegionArgs),
    /// Count the countries in an income group.
    Count(CountArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to the countries CSV file.
    #[arg(short, long)]
    input: PathBuf,
    /// Print per-region summary statistics as well.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Save the loaded records to a file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Path to the countries CSV file.
    #[arg(short, long)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct RegionArgs {
    /// Path to the countries CSV file.
    #[arg(short, long)]
    input: PathBuf,
    /// Region name (exact, case-sensitive).
    region: String,
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Path to the countries CSV file.
    #[arg(short, long)]
    input: PathBuf,
    /// Income group label (exact match).
    group: String,
}

fn fmt_years(x: f64) -> String {
    // Format up to 2 decimals, then trim trailing zeros and trailing dot.
    let s = format!("{:.2}", x);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn load(input: &Path) -> Result<Analyzer> {
    let mut analyzer = Analyzer::new();
    let n = analyzer.load_from_path(input)?;
    info!("loaded {} countries from {}", n, input.display());
    Ok(analyzer)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::List(args) => cmd_list(args),
        Command::Region(args) => cmd_region(args),
        Command::Count(args) => cmd_count(args),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let analyzer = load(&args.input)?;

    println!("Countries ({}):", analyzer.len());
    for name in analyzer.list_all() {
        println!("  {name}");
    }

    let highest = analyzer.highest_life_expectancy()?;
    let lowest = analyzer.lowest_life_expectancy()?;
    let improved = analyzer.most_improved()?;
    println!(
        "Highest life expectancy: {} ({} years)",
        highest.name,
        fmt_years(highest.average_life_expectancy())
    );
    println!(
        "Lowest life expectancy: {} ({} years)",
        lowest.name,
        fmt_years(lowest.average_life_expectancy())
    );
    println!(
        "Average life expectancy: {} years",
        fmt_years(analyzer.average_life_expectancy()?)
    );
    println!(
        "Most improved: {} ({:+.1} years from {} to {})",
        improved.name,
        improved.change_first_to_last(),
        OBSERVATION_YEARS[0],
        OBSERVATION_YEARS[2]
    );

    if args.stats {
        for s in stats::regional_summary(analyzer.countries()) {
            println!(
                "{}  count={} population={}  min={} max={} mean={} median={}",
                s.region,
                s.count,
                s.population.to_formatted_string(&Locale::en),
                fmt_years(s.min),
                fmt_years(s.max),
                fmt_years(s.mean),
                fmt_years(s.median)
            );
        }
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(analyzer.countries(), path)?,
            "json" => storage::save_json(analyzer.countries(), path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", analyzer.len(), path.display());
    }

    Ok(())
}

fn cmd_list(args: ListArgs) -> Result<()> {
    let analyzer = load(&args.input)?;
    for name in analyzer.list_all() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_region(args: RegionArgs) -> Result<()> {
    let analyzer = load(&args.input)?;
    for c in analyzer.by_region(&args.region) {
        println!(
            "{}  population={}  avg life expectancy={}",
            c.name,
            c.population.to_formatted_string(&Locale::en),
            fmt_years(c.average_life_expectancy())
        );
    }
    Ok(())
}

fn cmd_count(args: CountArgs) -> Result<()> {
    let analyzer = load(&args.input)?;
    println!("{}", analyzer.count_by_income_group(&args.group));
    Ok(())
}
