use anyhow::Result;
use quillpress_core::{
    application::{
        ports::{sanitizer::HtmlSanitizer, time::Clock, util::SlugGenerator},
        services::{ApplicationServices, Repositories},
    },
    config::AppConfig,
    domain::sanitation::{SanitationProfiles, SanitizationProfile},
    infrastructure::{
        database,
        repositories::{
            PostgresBlogRepository, PostgresCategoryRepository, PostgresCommentRepository,
            PostgresPostReadRepository, PostgresPostWriteRepository, PostgresUserRepository,
        },
        sanitizer::AmmoniaHtmlSanitizer,
        time::SystemClock,
        util::RegexSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        post_writes: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_reads: Arc::new(PostgresPostReadRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        blogs: Arc::new(PostgresBlogRepository::new(pool)),
    };

    let profiles =
        SanitationProfiles::new(SanitizationProfile::authoring(), SanitizationProfile::display())?;
    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaHtmlSanitizer::new(&profiles));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator);

    let services = Arc::new(ApplicationServices::new(repos, sanitizer, clock, slugger));
    let state = HttpState { services };

    let app = build_router(state, &config.router_settings());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(rate_limited = config.rate_limit().is_some(), "listening on {address}");

    // Client addresses feed the per-IP rate limiter.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
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
