use backend_api::{run_server, DemoMetricsRepository};
use std::sync::Arc;
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Settings file is optional; env vars win over it, defaults close the gaps.
    let settings_path = env::var("SETTINGS_PATH").ok().map(PathBuf::from);
    let settings = settings_loader::load_settings_with_fallback(settings_path.as_ref())?
        .unwrap_or_default();

    let host = env::var("HOST").unwrap_or(settings.server_host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(settings.server_port);

    println!("Ops Dashboard API Server");
    println!("========================");
    println!("Listening on: {}:{}", host, port);
    println!("Demo synthesizer active; all endpoints serve generated data.");
    println!();

    let repo = Arc::new(DemoMetricsRepository);

    run_server(repo, &host, port).await?;

    Ok(())
}
