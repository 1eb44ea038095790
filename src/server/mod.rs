//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and stores courses through the
//! `CourseStore` trait, backed by SeaORM or, with the `mongo` feature, MongoDB.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Store implementations and record-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the course store)
//! - **Startup** (`startup`) - Tracing, store connection, and shutdown signal handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the course controller
//! 2. **Controller** parses the path ID and body, converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls the store
//! 4. **Data** queries the database, converts records to domain models
//! 5. **Controller** converts the domain model to a DTO, or the error to a status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
