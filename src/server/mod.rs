//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations through SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, unit schema validation, parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token verification and permission extractors
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a handler
//! 2. **Middleware** extractors authorize the caller before the body is read
//! 3. **Controller** parses the body and calls the service
//! 4. **Service** validates, opens a transaction where writes span tables, calls repositories
//! 5. **Data** queries the database and returns entity models
//! 6. **Controller** converts the domain model to a DTO and responds
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
