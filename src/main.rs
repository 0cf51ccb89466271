use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_console::config::{Config, LogFormat};
use api_console::handlers::{
    ApiListResponse, ApiResponse, ApiRowResponse, BreadcrumbResponse, CreateApiRequest,
    MenuItemResponse, MenuResponse, NotificationListResponse, NotificationResponse,
    SectionResponse, UpdateApiRequest,
};
use api_console::models::{ApiStatus, HttpMethod, NotificationLevel};
use api_console::services::{RowActions, SortOrder};
use api_console::state::AppState;
use api_console::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::api::create_api,
        handlers::api::list_apis,
        handlers::api::view_api,
        handlers::api::update_api,
        handlers::api::publish_api,
        handlers::console::get_menu,
        handlers::console::get_breadcrumb,
        handlers::console::get_section,
        handlers::notification::list_notifications,
    ),
    components(schemas(
        CreateApiRequest,
        UpdateApiRequest,
        ApiResponse,
        ApiRowResponse,
        ApiListResponse,
        RowActions,
        SortOrder,
        HttpMethod,
        ApiStatus,
        MenuItemResponse,
        MenuResponse,
        BreadcrumbResponse,
        SectionResponse,
        NotificationLevel,
        NotificationResponse,
        NotificationListResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "APIs", description = "API definition management endpoints"),
        (name = "Console", description = "Console navigation endpoints"),
        (name = "Notifications", description = "Recent store notifications")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);

    let addr = config.server_addr();
    let state = AppState::new(config);

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
