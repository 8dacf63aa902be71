//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;

pub use health::health_handler;
pub use redirect::{
    fallback_handler, method_not_allowed_handler, missing_slug_handler, redirect_handler,
};
