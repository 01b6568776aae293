//! # eventhub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventhub_db::{create_pool, run_migrations, PgEventRepository};
//!
//! async fn example(config: &eventhub_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let events = PgEventRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolOptions};
pub use repositories::{
    PgEventRepository, PgHealthCheck, PgRegistrationRepository, PgTokenRepository,
    PgUserRepository,
};
