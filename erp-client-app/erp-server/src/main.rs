use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use erp_api::handlers::{auth, customers, health, ledger_entries, products, sales_orders, tenants};
use erp_api::middleware::require_session;
use erp_api::state::AppState;
use erp_core::services::{AuthService, TenantService};
use erp_infrastructure::database::{connection, migrations};
use erp_infrastructure::{
    bootstrap, PgCustomerRepository, PgLedgerRepository, PgProductRepository,
    PgSalesOrderRepository, PgTenantRepository, PgUserRepository,
};
use erp_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    erp_shared::telemetry::init_telemetry();

    info!("ERP Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
        config.database.acquire_timeout_secs,
    )
    .await?;
    info!("Database connection established.");

    // Run migrations
    migrations::run_migrations(&pool).await?;

    // Repositories
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let tenants_repo = Arc::new(PgTenantRepository::new(pool.clone()));

    // Seed the super-admin account before the first request can log in
    bootstrap::seed_superadmin(
        users.as_ref(),
        &config.superadmin.email,
        &config.superadmin.password,
    )
    .await?;

    // Services
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        tenants_repo.clone(),
        config.jwt.secret.clone(),
        config.jwt.token_expiry_hours,
    ));
    let tenant_service = Arc::new(TenantService::new(tenants_repo.clone()));

    // Create App State
    let state = AppState {
        auth: auth_service,
        tenants: tenant_service,
        customers: Arc::new(PgCustomerRepository::new(pool.clone())),
        products: Arc::new(PgProductRepository::new(pool.clone())),
        sales_orders: Arc::new(PgSalesOrderRepository::new(pool.clone())),
        ledger_entries: Arc::new(PgLedgerRepository::new(pool.clone())),
        config: config.clone(),
    };

    // Protected routes: every one of these passes the session middleware
    let protected = Router::new()
        // Tenants
        .route("/api/tenants", get(tenants::list_tenants))
        .route("/api/tenants/{id}", get(tenants::get_tenant))
        .route("/api/tenants/{id}/activate", put(tenants::activate_tenant))
        .route("/api/tenants/{id}/suspend", put(tenants::suspend_tenant))
        .route("/api/tenants/{id}/plan", put(tenants::upgrade_plan))
        // Customers
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/{id}",
            put(customers::update_customer).delete(customers::delete_customer),
        )
        // Products
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        // Sales Orders
        .route(
            "/api/sales-orders",
            get(sales_orders::list_sales_orders).post(sales_orders::create_sales_order),
        )
        .route(
            "/api/sales-orders/{id}",
            put(sales_orders::update_sales_order).delete(sales_orders::delete_sales_order),
        )
        // Ledger Entries
        .route(
            "/api/ledger-entries",
            get(ledger_entries::list_ledger_entries).post(ledger_entries::create_ledger_entry),
        )
        .route(
            "/api/ledger-entries/{id}",
            put(ledger_entries::update_ledger_entry).delete(ledger_entries::delete_ledger_entry),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        // Add State
        .with_state(state)
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown signal received, draining database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
