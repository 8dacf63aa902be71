//! HTTP middleware.
//!
//! Provides request tracing and the panic guard that keeps unexpected
//! failures on the default redirect path.

pub mod panic_guard;
pub mod tracing;
