//! Levelboard Test Utils
//!
//! Provides shared testing utilities for building tests for the levelboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases (or file-backed ones for concurrency tests) and customizable table schemas.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts experience records and guild configs with defaults
//! - **fixture**: In-memory entity models that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn awards_experience() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_experience_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
