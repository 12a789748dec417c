mod action;
mod app;
mod app_state;
mod component;
mod components;
mod filters;
mod groups;
mod poll;
mod session;
mod theme;
mod widgets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = logwatch_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("tui.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress
    // connection-level DEBUG from the HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("logwatch log: {}", log_path.display());

    tracing::info!("logwatch starting…");

    let config = logwatch_proto::config::Config::load().unwrap_or_default();

    let app = app::App::new(config.feed.base_url.clone());
    app.run().await?;

    Ok(())
}
