use anyhow::Result;
use mokkan_content::application::{
    ports::{html::HtmlSanitizer, storage::ImageStore, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ContentRepositories},
};
use mokkan_content::config::AppConfig;
use mokkan_content::infrastructure::{
    database,
    html::AmmoniaSanitizer,
    repositories::{PostgresCategoryRepository, PostgresPageRepository, PostgresPostRepository},
    storage::LocalImageStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use mokkan_content::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let pages = Arc::new(PostgresPageRepository::new(pool.clone()));
    let repositories = ContentRepositories {
        category_write: categories.clone(),
        category_read: categories.clone(),
        category_slugs: categories,
        page_write: pages.clone(),
        page_read: pages.clone(),
        page_slugs: pages,
        posts: Arc::new(PostgresPostRepository::new(pool)),
    };

    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer::default());
    let image_store: Arc<dyn ImageStore> = Arc::new(LocalImageStore::new(
        config.uploads_dir().clone(),
        config.public_base_url(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let state = HttpState::new(ApplicationServices::new(
        repositories,
        sanitizer,
        image_store,
        clock,
        slugger,
        config.site_settings(),
        config.upload_policy(),
    ));
    let options = RouterOptions {
        uploads_dir: config.uploads_dir().clone(),
        upload_max_bytes: config.upload_policy().max_bytes,
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };

    let app = build_router(state, options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
