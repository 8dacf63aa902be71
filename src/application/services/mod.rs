//! Business logic services for the application layer.

pub mod resolver_service;

pub use resolver_service::RedirectResolver;
