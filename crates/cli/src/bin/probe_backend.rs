use anyhow::Result;
use api_client::{ApiGateway, GatewayConfig};
use clap::Parser;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
    name = "probe-backend",
    about = "Call each dashboard endpoint once and report live vs fallback."
)]
struct Args {
    /// Base URL of the backend API
    #[arg(long, default_value = "http://localhost:8080/api")]
    base_url: String,

    /// Display language passed to every endpoint
    #[arg(long, default_value = "zh")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let gateway = ApiGateway::new(GatewayConfig {
        base_url: args.base_url.clone(),
    })?;

    let lang = args.lang.clone();
    let probes: Vec<(&str, Vec<(&str, String)>)> = vec![
        ("/dashboard/overview", vec![("lang", lang.clone())]),
        (
            "/workload/stats",
            vec![("period", "week".to_string()), ("lang", lang.clone())],
        ),
        ("/workload/details", vec![("lang", lang.clone())]),
        ("/hospitals", vec![("lang", lang.clone())]),
        (
            "/search",
            vec![("query", "probe".to_string()), ("lang", lang.clone())],
        ),
    ];

    println!("Probing {} ...", args.base_url);
    let mut live = 0usize;
    for (endpoint, params) in &probes {
        match gateway.fetch::<Value>(endpoint, params).await {
            Ok(_) => {
                live += 1;
                println!("  {endpoint:<24} live");
            }
            Err(err) => {
                println!("  {endpoint:<24} fallback would be used ({err:#})");
            }
        }
    }

    println!();
    println!("{live}/{} endpoints answered live.", probes.len());
    Ok(())
}
