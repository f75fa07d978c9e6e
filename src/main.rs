use std::sync::Arc;

use mediakeep::{
    adapters::{
        repositories::{PgFileRepository, PgUserRepository},
        router::build_router,
        state::AppState,
    },
    application::{
        repositories::{file_repository::FileRepository, user_repository::UserRepository},
        services::PaymentGateway,
    },
    domain::config::AppConfig,
    services::{HttpPaymentGateway, OriginClient, PaymentVerifier, SessionSigner},
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("ERROR: invalid environment configuration");

    tracing::info!("Starting mediakeep on port {}", config.port);

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("ERROR: Failed to run database migrations");
    tracing::info!("Database connection established");

    let app_state = AppState {
        user_repository: Arc::new(PgUserRepository::new(pool.clone())) as Arc<dyn UserRepository>,
        file_repository: Arc::new(PgFileRepository::new(pool)) as Arc<dyn FileRepository>,
        payment_gateway: Arc::new(HttpPaymentGateway::new(
            &config.payment_api_url,
            &config.payment_key_id,
            &config.payment_key_secret,
        )) as Arc<dyn PaymentGateway>,
        payment_verifier: Arc::new(PaymentVerifier::new(config.payment_key_secret.clone())),
        session_signer: Arc::new(SessionSigner::new(&config.session_secret)),
        origin_client: OriginClient::new(),
        config: Arc::new(config),
    };

    let port = app_state.config.port;
    let router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
