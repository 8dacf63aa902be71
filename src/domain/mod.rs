//! Domain layer containing business entities and policy.
//!
//! Nothing in here knows about HTTP or SQL.
//!
//! - [`entities`] - Stored link records
//! - [`repositories`] - Data access trait definitions
//! - [`slug`] - Slug validation (reject on any disallowed character)
//! - [`destination`] - Primary / fallback / default destination selection
//! - [`resolution`] - Resolution outcomes and their cache policy

pub mod destination;
pub mod entities;
pub mod repositories;
pub mod resolution;
pub mod slug;
