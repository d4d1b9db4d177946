//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{CourseService, CourseServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgCourseRepository, PgEnrollmentRepository, PgUserRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub course_service: Arc<dyn CourseService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the Postgres repositories into the course service
    pub fn from_pool(db: PgPool, settings: Settings) -> Self {
        let course_service = CourseServiceImpl::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgCourseRepository::new(db.clone())),
            Arc::new(PgEnrollmentRepository::new(db.clone())),
        );

        Self {
            db,
            course_service: Arc::new(course_service),
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with the outer tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
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
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to create database pool")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server.socket_addr()?;

        let state = AppState::from_pool(db, settings);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
