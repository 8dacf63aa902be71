//! Helper functions shared across layers.
//!
//! - [`url_validator`] - Destination URL validation
//! - [`mask`] - Credential masking for log output

pub mod mask;
pub mod url_validator;
