use anyhow::Result;
use festival_site::{
    config::{AppConfig, RunMode},
    db,
    services::metadata_service::MetadataService,
    submission::client::run_submit,
};
use std::{io::ErrorKind, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config + run mode ---
    let (cfg, mode) = AppConfig::from_env_and_args()?;

    let migrate_only = match mode {
        RunMode::Submit(args) => return run_submit(args).await,
        RunMode::Migrate => true,
        RunMode::Serve => false,
    };

    tracing::info!("Starting festival-site with config: {:?}", cfg);

    // --- Initialize SQLite connection + schema ---
    let pool = db::connect(&cfg.database_url).await?;
    db::bootstrap(&pool).await?;

    if migrate_only {
        tracing::info!("Database bootstrap complete.");
        return Ok(()); // exit after bootstrap
    }

    let service = MetadataService::new(Arc::new(pool));
    let app = festival_site::app(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
