use anyhow::{Context, Result};
use inkpot_core::{
    application::{
        commands::authors::DEFAULT_AUTHOR_NAME, ports::time::Clock,
        services::ApplicationServices,
    },
    config::AppConfig,
    infrastructure::{database::DatabasePool, logging::init_tracing, time::SystemClock},
    presentation::http::{middleware::AccessLogConfig, routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.is_development());

    let database = config.database();
    tracing::info!(driver = %database.driver, "connecting to database");
    let pool = DatabasePool::connect(database)
        .await
        .with_context(|| format!("failed to open {} database", database.driver))?;
    pool.run_migrations()
        .await
        .context("failed to run migrations")?;
    tracing::info!(driver = %pool.driver(), "migrations applied");

    let repos = pool.repositories();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&repos.article_write),
        Arc::clone(&repos.article_read),
        Arc::clone(&repos.author),
        Arc::clone(&clock),
    ));

    services
        .author_commands
        .seed_default_author(DEFAULT_AUTHOR_NAME)
        .await
        .context("failed to seed default author")?;

    let state = HttpState {
        services: Arc::clone(&services),
        access_log: Arc::new(AccessLogConfig::new(
            config.log_fields(),
            config.proxy_header(),
        )),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
