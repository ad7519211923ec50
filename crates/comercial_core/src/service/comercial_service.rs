//! Comercial use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::comercial::{Comercial, ComercialId};
use crate::repo::comercial_repo::{ComercialRepository, RepoResult};

/// Use-case service wrapper for comercial CRUD operations.
pub struct ComercialService<R: ComercialRepository> {
    repo: R,
}

impl<R: ComercialRepository> ComercialService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a transient entity; its `id` carries the generated key on
    /// return.
    pub fn create(&self, comercial: &mut Comercial) -> RepoResult<()> {
        self.repo.create(comercial)
    }

    /// Lists every persisted entity.
    pub fn get_all(&self) -> RepoResult<Vec<Comercial>> {
        self.repo.get_all()
    }

    /// Looks up one entity by id.
    pub fn find(&self, id: ComercialId) -> RepoResult<Option<Comercial>> {
        self.repo.find(id)
    }

    /// Rewrites an existing entity's fields, matched by its id.
    pub fn update(&self, comercial: &Comercial) -> RepoResult<()> {
        self.repo.update(comercial)
    }

    /// Removes one entity by id. Missing rows are tolerated.
    pub fn delete(&self, id: ComercialId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
