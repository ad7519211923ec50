//! Persistence gateway for the comercial (sales agent) entity.
//! This crate is the single source of truth for the `comercial` table's
//! access contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::comercial::{Comercial, ComercialId};
pub use repo::comercial_repo::{
    ComercialRepository, RepoError, RepoResult, SqliteComercialStore,
};
pub use service::comercial_service::ComercialService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
