use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use api_client::{ApiGateway, DashboardStore, GatewayConfig, GatewaySource, StoreUpdate};
use clap::Parser;
use models::Language;

#[derive(Parser, Debug)]
#[command(
    name = "watch-dashboard",
    about = "Follow the dashboard store and print a line per update."
)]
struct Args {
    /// Base URL of the backend API
    #[arg(long, default_value = "http://localhost:8080/api")]
    base_url: String,

    /// Display language (zh or en)
    #[arg(long, default_value = "zh")]
    lang: String,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 120)]
    interval: u64,

    /// Optional hospital id to scope the snapshot to
    #[arg(long)]
    hospital: Option<u32>,

    /// Number of loaded snapshots to observe before exiting
    #[arg(long, default_value_t = 3)]
    cycles: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let language = match args.lang.as_str() {
        "en" => Language::En,
        _ => Language::Zh,
    };

    let gateway = ApiGateway::new(GatewayConfig {
        base_url: args.base_url,
    })?;
    let source = Arc::new(GatewaySource::new(gateway));
    let (store, mut updates) = DashboardStore::new(source, language);
    store.set_hospital_scope(args.hospital).await;

    let poller = Arc::clone(&store).spawn_polling(Duration::from_secs(args.interval));

    let mut loaded = 0u32;
    while let Some(update) = updates.recv().await {
        match update {
            StoreUpdate::LoadingStarted => println!("loading..."),
            StoreUpdate::DataLoaded => {
                loaded += 1;
                let state = store.state().await;
                if let Some(data) = state.data {
                    println!(
                        "orders {} | rate {}% | patients {} | locations {}",
                        data.total_orders,
                        data.workload_rate,
                        data.patients.len(),
                        data.map_locations.len()
                    );
                }
                if loaded >= args.cycles {
                    break;
                }
            }
            StoreUpdate::LoadFailed(message) => println!("error: {message}"),
            StoreUpdate::StaleResponseDiscarded => println!("stale response discarded"),
        }
    }

    poller.abort();
    Ok(())
}
