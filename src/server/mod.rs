//! Experience backend: Discord bot, experience engine and read-only HTTP API.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Gateway event handlers and slash commands feeding the engine
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Experience engine, level-up announcements, voice presence
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state for HTTP handlers
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (voice ticks)
//!
//! # Award Flow
//!
//! 1. **Bot** receives an activity event (message, command, role, voice tick)
//! 2. **Service** checks guild settings and cooldown, then commits the award
//! 3. **Data** increments the experience record inside a transaction
//! 4. **Service** emits a level-up fact when the level increased
//! 5. The level-up notifier posts the announcement to Discord

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
