mod http;
mod simulate;
mod store;

use logwatch_proto::config::Config;
use std::sync::Arc;
use store::LogStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = logwatch_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("daemon.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,logwatch_daemon=debug")),
        )
        .init();

    eprintln!("logwatch-daemon log: {}", log_path.display());

    let config = Config::load()?;
    info!("Config loaded from: {:?}", Config::config_path());

    let store = Arc::new(LogStore::new());

    if config.simulate.enabled {
        simulate::start(store.clone(), config.simulate.interval_secs);
    }

    let server = http::start_server(config.http.bind_address.clone(), config.http.port, store);
    server.await?;

    Ok(())
}
