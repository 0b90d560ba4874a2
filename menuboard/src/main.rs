use clap::Parser;
use menuboard::{
    Application, Config,
    config::{Args, Command},
    connect_store, telemetry,
    types::{MAX_LABEL_LENGTH, label_within_limit},
};

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

/// Insert one item directly into the configured store.
async fn add_item(config: &Config, label: &str, value: i64) -> anyhow::Result<()> {
    if !label_within_limit(label) {
        anyhow::bail!("label must be at most {MAX_LABEL_LENGTH} characters");
    }
    if !config.database.is_persistent() {
        tracing::warn!("The in-memory store is not persistent: this item will not be visible to a running server");
    }

    let (store, pool) = connect_store(&config.database).await?;
    let item = store.insert(label, value).await?;
    println!("Added menu item {}: {}: {}", item.id, item.label, item.value);

    if let Some(pool) = pool {
        pool.close().await;
    }
    Ok(())
}

/// Print every stored item in menu order.
async fn list_items(config: &Config) -> anyhow::Result<()> {
    let (store, pool) = connect_store(&config.database).await?;
    let items = store.list_all().await?;

    if items.is_empty() {
        println!("No items to display");
    }
    for item in items {
        println!("{}\t{}: {}", item.id, item.label, item.value);
    }

    if let Some(pool) = pool {
        pool.close().await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry(config.enable_otel_export)?;
    tracing::debug!("{:?}", args);

    let result = match args.command.unwrap_or(Command::Serve) {
        // Flushes telemetry itself once the server has drained
        Command::Serve => return Application::new(config).await?.serve(shutdown_signal()).await,
        Command::Add { label, value } => add_item(&config, &label, value).await,
        Command::List => list_items(&config).await,
    };

    telemetry::shutdown_telemetry();
    result
}
