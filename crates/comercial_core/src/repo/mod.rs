//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for the comercial entity.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Zero matches on `find` is a soft condition surfaced as `None`, never an
//!   error.
//! - Repository APIs return semantic errors (`DuplicateId`, `MissingId`) in
//!   addition to DB transport errors.

pub mod comercial_repo;
