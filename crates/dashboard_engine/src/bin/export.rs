use anyhow::{Context, Result};
use dashboard_engine::{synthesize_overview, write_snapshot_json};
use models::Language;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let lang = env::args()
        .position(|a| a == "--lang")
        .and_then(|i| env::args().nth(i + 1))
        .unwrap_or("zh".to_string());
    let hospital = env::args()
        .position(|a| a == "--hospital")
        .and_then(|i| env::args().nth(i + 1));
    let out = env::args()
        .position(|a| a == "--out")
        .and_then(|i| env::args().nth(i + 1))
        .unwrap_or("snapshot/overview.json".to_string());

    let language = match lang.as_str() {
        "en" => Language::En,
        _ => Language::Zh,
    };
    let hospital_id = match hospital {
        Some(raw) => Some(raw.parse::<u32>().context("parsing --hospital id")?),
        None => None,
    };
    let out_path = PathBuf::from(&out);

    println!(
        "Exporting snapshot...\n  lang    : {}\n  hospital: {}\n  output  : {}",
        language.as_str(),
        hospital_id.map_or("all".to_string(), |id| id.to_string()),
        out_path.display()
    );

    let metrics = synthesize_overview(language, hospital_id);
    write_snapshot_json(&metrics, &out_path).context("write snapshot json")?;

    println!(
        "Done. {} patients, {} map locations, rate {}.",
        metrics.patients.len(),
        metrics.map_locations.len(),
        metrics.workload_rate
    );
    Ok(())
}
