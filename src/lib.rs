//! # Forum API Library
//!
//! This crate provides a forum-style discussion backend with:
//! - RESTful HTTP API endpoints for threads, comments, replies, and likes
//! - JWT-based authentication with refresh-token rotation in PostgreSQL
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Use-case services, security capabilities, DTOs
//! - **Infrastructure Layer**: Database and security implementations
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Use-case services, security contracts, DTOs
//! +-- infrastructure/ Database and security implementations
//! +-- presentation/  HTTP routes, handlers, middleware
//! +-- shared/        Common utilities (errors, resource ids)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
