use quill_blog::application::{
    ports::{
        captcha::CaptchaVerifier,
        security::{CsrfTokenManager, PasswordHasher, TokenManager},
        storage::PhotoStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Repositories, ServiceSettings},
};
use quill_blog::config::{AppConfig, StoreBackend};
use quill_blog::infrastructure::{
    database,
    repositories::{
        InMemoryContentStore, PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCommentRepository, PostgresUserRepository,
    },
    security::{
        captcha::NoCaptchaVerifier, csrf::HmacCsrfTokenManager, password::Argon2PasswordHasher,
        token::BiscuitTokenManager,
    },
    storage::LocalPhotoStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use quill_blog::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
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

async fn connect_store(config: &AppConfig) -> Result<Repositories> {
    match config.store_backend() {
        StoreBackend::InMemory => {
            tracing::warn!("using the in-memory store; content is lost on shutdown");
            let store = Arc::new(InMemoryContentStore::new());
            Ok(Repositories {
                users: store.clone(),
                article_writes: store.clone(),
                article_reads: store.clone(),
                comments: store,
            })
        }
        StoreBackend::Postgres(url) => {
            let pool = database::init_pool(url).await?;
            database::run_migrations(&pool).await?;
            Ok(Repositories {
                users: Arc::new(PostgresUserRepository::new(pool.clone())),
                article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
                article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                comments: Arc::new(PostgresCommentRepository::new(pool)),
            })
        }
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repositories = connect_store(&config).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let csrf: Arc<dyn CsrfTokenManager> = Arc::new(HmacCsrfTokenManager::new(config.csrf_secret())?);
    let captcha: Arc<dyn CaptchaVerifier> = Arc::new(NoCaptchaVerifier);

    let local_storage = LocalPhotoStorage::new(config.photo_directory());
    local_storage.ensure_root().await?;
    let photo_storage: Arc<dyn PhotoStorage> = Arc::new(local_storage);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repositories,
        password_hasher,
        token_manager,
        csrf,
        captcha,
        photo_storage,
        clock,
        slugger,
        ServiceSettings {
            home_article_count: config.home_article_count(),
            photo_max_bytes: config.photo_max_bytes(),
        },
    ));

    let state = HttpState {
        services,
        photo_directory: config.photo_directory().to_path_buf(),
        photo_max_bytes: config.photo_max_bytes(),
        allowed_origins: config.allowed_origins().to_vec(),
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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
