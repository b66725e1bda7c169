//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{EmployeeService, EmployeeServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryEmployeeRepository, PgEmployeeRepository};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging, security};

/// `database.url` value that selects the in-memory store
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeService>, settings: Settings) -> Self {
        Self {
            employees,
            settings: Arc::new(settings),
        }
    }
}

/// Router with all routes and the security/tracing/CORS layers applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors, &state.settings.jwt.admin_token_name);
    let security_headers = security::create_security_headers_layer(&state.settings.environment);

    routes::create_router(state)
        .layer(security_headers)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let employees = create_employee_service(&settings).await?;
        health::init_server_start();

        let addr = settings.server_addr();
        let router = build_router(AppState::new(employees, settings));

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn create_employee_service(settings: &Settings) -> Result<Arc<dyn EmployeeService>> {
    if settings.database.url == MEMORY_DATABASE_URL {
        tracing::warn!("Using in-memory employee store; data is lost on exit");
        let repo = Arc::new(InMemoryEmployeeRepository::with_admin());
        return Ok(Arc::new(EmployeeServiceImpl::new(repo)));
    }

    let pool = database::create_pool(&settings.database).await?;
    tracing::info!("Database connection pool created");

    if settings.database.run_migrations {
        database::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repo = Arc::new(PgEmployeeRepository::new(pool));
    Ok(Arc::new(EmployeeServiceImpl::new(repo)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
