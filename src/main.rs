use shop_directory::application::{
    ports::{
        FileStorePort,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, PortSet, RepositorySet},
};
use shop_directory::config::AppConfig;
use shop_directory::infrastructure::{
    database,
    repositories::{
        PostgresAdminRepository, PostgresCategoryRepository, PostgresCustomerRepository,
        PostgresEnquiryRepository, PostgresJoinRequestRepository, PostgresLocationRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::LocalFileStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use shop_directory::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let file_store = LocalFileStore::new(config.upload_dir().clone());
    file_store
        .ensure_root()
        .await
        .with_context(|| format!("creating upload dir {}", config.upload_dir().display()))?;
    let file_store: Arc<FileStorePort> = Arc::new(file_store);

    let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let locations = Arc::new(PostgresLocationRepository::new(pool.clone()));
    let customers = Arc::new(PostgresCustomerRepository::new(pool.clone()));

    let repos = RepositorySet {
        admins: Arc::new(PostgresAdminRepository::new(pool.clone())),
        categories: categories.clone(),
        category_slugs: categories,
        locations: locations.clone(),
        location_slugs: locations,
        customers: customers.clone(),
        customer_slugs: customers,
        enquiries: Arc::new(PostgresEnquiryRepository::new(pool.clone())),
        join_requests: Arc::new(PostgresJoinRequestRepository::new(pool)),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        PortSet {
            password_hasher,
            token_manager,
            clock,
            slugger,
            file_store,
        },
    ));

    if let Some(seed) = config.seed_admin() {
        let created = services
            .auth_commands
            .ensure_admin(&seed.username, &seed.password)
            .await?;
        if created {
            tracing::info!(username = %seed.username, "seed admin created");
        }
    }

    if config.backfill_slugs_on_startup() {
        for report in services.slug_backfill.backfill_slugs().await {
            if !report.is_clean() {
                tracing::warn!(
                    collection = report.scope.collection(),
                    failed = report.failures.len(),
                    "startup slug backfill left records without slugs"
                );
            }
        }
    }

    let state = HttpState {
        services,
        settings: Arc::new(HttpSettings {
            uploads_dir: config.upload_dir().clone(),
            allowed_origins: config.allowed_origins().to_vec(),
            max_upload_bytes: config.max_upload_bytes(),
            rate_limit_login: config.rate_limit_login(),
        }),
    };

    let app = build_router(state).context("building the router")?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
