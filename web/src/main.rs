use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::flights::handlers::get_flight_state,
        features::flights::handlers::generate_flights,
        features::flights::handlers::validate_flights,
        features::flights::handlers::update_configuration,
        features::flights::handlers::move_athlete,
        features::flights::handlers::unassign_athlete,
        features::flights::handlers::clear_flights,
    ),
    components(
        schemas(
            storage::dto::flights::UpdateFlightConfigurationRequest,
            storage::dto::flights::MoveAthleteRequest,
            storage::dto::flights::UnassignAthleteRequest,
            storage::dto::flights::FlightConfigurationResponse,
            storage::dto::flights::FlightResponse,
            storage::dto::flights::FlightAssignmentResponse,
            storage::dto::flights::ValidationIssueResponse,
            storage::dto::flights::FlightStateResponse,
            storage::models::IssueKind,
            storage::models::IssueSeverity,
        )
    ),
    tags(
        (name = "flights", description = "Meet flight organization endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting meet flights API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api/meets/:meet_id/flights",
            features::flights::routes::routes(),
        )
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
