use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{DatabaseConfig, health_check, init_pool};
use tokio::net::TcpListener;
use tracker::{
    config::ServerConfig,
    repositories::{UserRepository, exercise::ExerciseRepository},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting tracker service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    info!("Tracker service initialized successfully");

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let exercise_repository = ExerciseRepository::new(pool);

    let app_state = AppState {
        user_repository,
        exercise_repository,
    };

    // Start the web server
    let server_config = ServerConfig::from_env()?;
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(server_config.bind_addr()).await?;
    info!("Tracker service listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
