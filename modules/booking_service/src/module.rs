//! Module declaration and lifecycle
//!
//! Owns the store handle and the domain service built on top of it. The
//! handle is passed explicitly to each repository; nothing is global.

use crate::api::rest::{error, routes};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmArtistRepository, SeaOrmShowRepository, SeaOrmVenueRepository,
};
use anyhow::{Context, Result};
use axum::Router;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Booking service module
pub struct BookingServiceModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl BookingServiceModule {
    /// Connect to the configured store, migrate it if enabled and build the service
    pub async fn init(config: Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.max_connections)
            .connect_timeout(config.connect_timeout)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .context("failed to connect to the booking database")?;
        tracing::info!(backend = ?conn.get_database_backend(), "Booking database connected");

        let module = Self::from_connection(config, conn);
        if module.config.run_migrations {
            module.migrate().await?;
        }
        Ok(module)
    }

    /// Build the module around an already open connection
    pub fn from_connection(config: Config, conn: DatabaseConnection) -> Self {
        let db = Arc::new(conn);

        // Build repositories
        let venue_repo = Arc::new(SeaOrmVenueRepository::new(db.clone()));
        let artist_repo = Arc::new(SeaOrmArtistRepository::new(db.clone()));
        let show_repo = Arc::new(SeaOrmShowRepository::new(db.clone()));

        // Build domain service
        let service = Arc::new(Service::new(venue_repo, artist_repo, show_repo));

        Self {
            config,
            db,
            service,
        }
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None)
            .await
            .context("booking migrations failed")?;
        tracing::info!("Booking service migrations completed");
        Ok(())
    }

    /// Domain service shared by all handlers
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Register the REST routes on `router`
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering booking service REST routes");
        routes::register_routes(router, self.service())
    }

    /// Complete HTTP application: routes, 404 fallback, panic guard, request tracing
    pub fn router(&self) -> Router {
        self.register_rest(Router::new())
            .fallback(error::not_found)
            .layer(CatchPanicLayer::custom(error::panic_response))
            .layer(TraceLayer::new_for_http())
    }
}
