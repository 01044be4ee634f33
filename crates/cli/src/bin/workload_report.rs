use anyhow::{anyhow, Result};
use clap::Parser;
use models::{Language, Period};

#[derive(Parser, Debug)]
#[command(
    name = "workload-report",
    about = "Print the period-scaled workload figures for a hospital scope."
)]
struct Args {
    /// Display language (zh or en)
    #[arg(long, default_value = "zh")]
    lang: String,

    /// Optional hospital id to scope the figures to
    #[arg(long)]
    hospital: Option<u32>,

    /// Emit JSON instead of the plain table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_language(raw: &str) -> Result<Language> {
    match raw {
        "zh" => Ok(Language::Zh),
        "en" => Ok(Language::En),
        other => Err(anyhow!("unsupported language: {other}")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let language = parse_language(&args.lang)?;

    for period in [Period::Week, Period::Month, Period::Cycle] {
        let stats = dashboard_engine::workload_stats(period, language, args.hospital);
        if args.json {
            println!("{}", serde_json::to_string(&stats)?);
            continue;
        }
        println!("{:<6} rate {:>3}%", period.as_str(), stats.rate);
        for entry in &stats.breakdown {
            println!("    {:<12} {:>6.1} {}", entry.role, entry.time, entry.unit);
        }
    }
    Ok(())
}
