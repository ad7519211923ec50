//! Domain model for the comercial persistence gateway.
//!
//! # Responsibility
//! - Define the canonical entity shape mapped to the `comercial` table.
//!
//! # Invariants
//! - Every persisted entity is identified by a store-generated `ComercialId`.
//! - A transient entity carries no identifier until `create` assigns one.

pub mod comercial;
