use anyhow::Context;
use clap::Parser;
use review_exporter::core::ConfigProvider;
use review_exporter::utils::{logger, validation::Validate};
use review_exporter::{
    build_router, AppState, CliConfig, ExportSettings, HttpReviewSource, ReviewExporter,
    TomlConfig, XlsxReportWriter,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting review-exporter v{}", env!("CARGO_PKG_VERSION"));

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            serve(config).await
        }
        None => serve(cli).await,
    }
}

async fn serve<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = HttpReviewSource::new(
        config.source_endpoint(),
        Duration::from_secs(config.request_timeout_seconds()),
    )?
    .with_locale(
        config.lang().map(str::to_string),
        config.country().map(str::to_string),
    );

    let settings = ExportSettings::from_provider(&config);
    let exporter = ReviewExporter::new(
        Arc::new(source),
        Arc::new(XlsxReportWriter::new()),
        settings.output_dir.clone(),
    );

    tracing::info!("Review source: {}", config.source_endpoint());
    tracing::info!(
        "Reports written to {} (default limit {}, max {})",
        settings.output_dir.display(),
        settings.default_limit,
        settings.max_limit
    );

    let static_dir = config.static_dir().map(PathBuf::from);
    let app = build_router(AppState::new(exporter, settings), static_dir);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
