//! Comercial repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `comercial` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `create` assigns the store-generated key onto the entity before
//!   returning; the insert and the generated-key read form one critical
//!   section serialized across all callers of the same store.
//! - Reads, updates and deletes are never serialized by the create lock.
//! - Column names match the external schema verbatim, including `comisión`.

use crate::db::DbError;
use crate::model::comercial::{Comercial, ComercialId};
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

const INSERT_SQL: &str =
    "INSERT INTO comercial (nombre, apellido1, apellido2, comisión) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ALL_SQL: &str = "SELECT * FROM comercial";
const SELECT_BY_ID_SQL: &str = "SELECT * FROM comercial WHERE id = ?1";
const UPDATE_SQL: &str =
    "UPDATE comercial SET nombre = ?1, apellido1 = ?2, apellido2 = ?3, comisión = ?4 WHERE id = ?5";
const DELETE_SQL: &str = "DELETE FROM comercial WHERE id = ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for comercial persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The insert reported success but no generated key was available.
    MissingGeneratedKey,
    /// `update` was called with a transient entity (`id == None`).
    MissingId,
    /// More than one row matched a presumed-unique id. Indicates a schema
    /// invariant violation, not a normal "not found" case.
    DuplicateId(ComercialId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingGeneratedKey => {
                write!(f, "insert succeeded but no generated key was returned")
            }
            Self::MissingId => write!(f, "entity has no id; persist it with create first"),
            Self::DuplicateId(id) => {
                write!(f, "multiple comercial rows share presumed-unique id {id}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingGeneratedKey | Self::MissingId | Self::DuplicateId(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for comercial CRUD operations.
pub trait ComercialRepository {
    /// Persists a transient entity and assigns the generated key to its `id`.
    fn create(&self, comercial: &mut Comercial) -> RepoResult<()>;
    /// Returns every persisted entity in store-defined order.
    fn get_all(&self) -> RepoResult<Vec<Comercial>>;
    /// Returns the entity with the given id, or `None` when no row matches.
    fn find(&self, id: ComercialId) -> RepoResult<Option<Comercial>>;
    /// Rewrites all four data fields of the row matching the entity's id.
    /// A missing row is not an error; zero rows are updated.
    fn update(&self, comercial: &Comercial) -> RepoResult<()>;
    /// Deletes the row with the given id. Idempotent; a missing row is not an
    /// error.
    fn delete(&self, id: ComercialId) -> RepoResult<()>;
}

/// SQLite-backed comercial store.
///
/// The connection is owned behind a mutex so one store instance can be shared
/// across threads; each operation holds the connection guard only for its own
/// statements. `create_lock` additionally serializes the create path so the
/// generated-key read is always paired with this caller's insert.
pub struct SqliteComercialStore {
    conn: Mutex<Connection>,
    create_lock: Mutex<()>,
}

impl SqliteComercialStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            create_lock: Mutex::new(()),
        }
    }

    /// Consumes the store and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned guard still wraps a consistent connection; SQLite state
        // is never left half-written by a panicking reader.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComercialRepository for SqliteComercialStore {
    fn create(&self, comercial: &mut Comercial) -> RepoResult<()> {
        // Serializes create against create only; other operations contend
        // solely on the per-statement connection guard.
        let _create_guard = self
            .create_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let conn = self.conn();
        let rows = conn.execute(
            INSERT_SQL,
            params![
                comercial.nombre,
                comercial.apellido1,
                comercial.apellido2,
                comercial.comision,
            ],
        )?;

        let key = conn.last_insert_rowid();
        if key == 0 {
            return Err(RepoError::MissingGeneratedKey);
        }
        comercial.id = Some(key);

        info!("event=comercial_create module=repo status=ok rows={rows} id={key}");
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Comercial>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(SELECT_ALL_SQL)?;
        let mut rows = stmt.query([])?;

        let mut comerciales = Vec::new();
        while let Some(row) = rows.next()? {
            comerciales.push(parse_comercial_row(row)?);
        }

        info!(
            "event=comercial_get_all module=repo status=ok count={}",
            comerciales.len()
        );
        Ok(comerciales)
    }

    fn find(&self, id: ComercialId) -> RepoResult<Option<Comercial>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(SELECT_BY_ID_SQL)?;
        let mut rows = stmt.query(params![id])?;

        let Some(row) = rows.next()? else {
            info!("event=comercial_find module=repo status=not_found id={id}");
            return Ok(None);
        };
        let comercial = parse_comercial_row(row)?;

        if rows.next()?.is_some() {
            return Err(RepoError::DuplicateId(id));
        }

        info!("event=comercial_find module=repo status=ok id={id}");
        Ok(Some(comercial))
    }

    fn update(&self, comercial: &Comercial) -> RepoResult<()> {
        let id = comercial.id.ok_or(RepoError::MissingId)?;

        let rows = self.conn().execute(
            UPDATE_SQL,
            params![
                comercial.nombre,
                comercial.apellido1,
                comercial.apellido2,
                comercial.comision,
                id,
            ],
        )?;

        info!("event=comercial_update module=repo status=ok rows={rows} id={id}");
        Ok(())
    }

    fn delete(&self, id: ComercialId) -> RepoResult<()> {
        let rows = self.conn().execute(DELETE_SQL, params![id])?;

        info!("event=comercial_delete module=repo status=ok rows={rows} id={id}");
        Ok(())
    }
}

/// Maps one result row to an entity.
///
/// Shared by the all-rows and single-row read paths. A NULL or missing column
/// is a mapping error that propagates; partial records are never constructed.
fn parse_comercial_row(row: &Row<'_>) -> RepoResult<Comercial> {
    Ok(Comercial {
        id: Some(row.get("id")?),
        nombre: row.get("nombre")?,
        apellido1: row.get("apellido1")?,
        apellido2: row.get("apellido2")?,
        comision: row.get("comisión")?,
    })
}
